//! Draws the dashboard from an [`AppViewModel`].
//!
//! Rendering is a pure projection of the view model; nothing here touches
//! the application state.

use byline_core::{AppViewModel, ArticleRowView, ArticlesView, PageLabel, ProfileView, Tab};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::style;

const SIDEBAR_WIDTH: u16 = 22;
const SIDEBAR_COLLAPSED_WIDTH: u16 = 5;

pub fn render(frame: &mut Frame, view: &AppViewModel) {
    let sidebar_width = if view.sidebar_collapsed {
        SIDEBAR_COLLAPSED_WIDTH
    } else {
        SIDEBAR_WIDTH
    };
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
        .split(frame.size());

    render_sidebar(frame, panes[0], view);
    match view.tab {
        Tab::Profile => render_profile(frame, panes[1], &view.profile),
        Tab::Articles => render_articles(frame, panes[1], &view.articles),
    }
}

fn render_sidebar(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let entry = |label: &'static str, tab: Tab| {
        let styled = if view.tab == tab {
            Span::styled(label, style::active_item())
        } else {
            Span::styled(label, style::inactive_item())
        };
        Line::from(styled)
    };

    let lines = if view.sidebar_collapsed {
        vec![
            entry(" P", Tab::Profile),
            entry(" A", Tab::Articles),
            Line::default(),
            Line::from(Span::styled(" c", style::muted())),
        ]
    } else {
        vec![
            entry(" [p] Profile", Tab::Profile),
            entry(" [a] My Articles", Tab::Articles),
            Line::default(),
            Line::from(Span::styled(" [c] collapse", style::muted())),
            Line::from(Span::styled(" [q] quit", style::muted())),
        ]
    };

    let block = if view.sidebar_collapsed {
        Block::default()
            .borders(Borders::ALL)
            .border_style(style::pane_border())
    } else {
        Block::default()
            .borders(Borders::ALL)
            .title("Dashboard")
            .border_style(style::pane_border())
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_profile(frame: &mut Frame, area: Rect, profile: &ProfileView) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(area);

    let status = if profile.verified {
        Span::styled("Verified Author", style::badge(byline_core::BadgeVariant::Success))
    } else {
        Span::styled("Unverified", style::muted())
    };
    let card = vec![
        Line::from(vec![
            Span::styled("Full Name      ", style::muted()),
            Span::styled(profile.name.clone(), style::heading()),
        ]),
        Line::from(vec![
            Span::styled("Email          ", style::muted()),
            Span::raw(profile.email.clone()),
        ]),
        Line::from(vec![
            Span::styled("Date Joined    ", style::muted()),
            Span::raw(profile.joined.format("%B %e, %Y").to_string()),
        ]),
        Line::from(vec![Span::styled("Member Status  ", style::muted()), status]),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Profile")
        .border_style(style::pane_border());
    frame.render_widget(Paragraph::new(card).block(block), rows[0]);

    render_stat_cells(frame, rows[1], profile);
}

fn render_stat_cells(frame: &mut Frame, area: Rect, profile: &ProfileView) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let stats = [
        (profile.stats.total, "Total Articles"),
        (profile.stats.published, "Published"),
        (profile.stats.drafts, "Drafts"),
    ];
    for (cell, (value, label)) in cells.iter().zip(stats) {
        let lines = vec![
            Line::from(Span::styled(value.to_string(), style::heading())),
            Line::from(Span::styled(label, style::muted())),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(style::pane_border());
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center).block(block),
            *cell,
        );
    }
}

fn render_articles(frame: &mut Frame, area: Rect, articles: &ArticlesView) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(4)])
        .split(area);

    let mut lines = Vec::new();
    if articles.rows.is_empty() {
        lines.push(Line::from(Span::styled("No articles yet.", style::muted())));
    }
    for row in &articles.rows {
        lines.push(article_title_line(row));
        lines.push(article_meta_line(row));
        lines.push(Line::default());
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .title("My Articles")
        .border_style(style::pane_border());
    frame.render_widget(Paragraph::new(lines).block(block), rows[0]);

    render_pagination(frame, rows[1], articles);
}

fn article_title_line(row: &ArticleRowView) -> Line<'static> {
    Line::from(Span::styled(row.title.clone(), style::heading()))
}

fn article_meta_line(row: &ArticleRowView) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  Published: {}", row.published.format("%b %e, %Y")),
            style::muted(),
        ),
        Span::styled(
            format!("   Views: {}", format_with_commas(row.views)),
            style::muted(),
        ),
        Span::raw("   "),
        Span::styled(format!("[{}]", row.status.label()), style::badge(row.status.badge())),
    ])
}

fn render_pagination(frame: &mut Frame, area: Rect, articles: &ArticlesView) {
    let lines = vec![shown_range_line(articles), controls_line(articles)];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style::pane_border());
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn shown_range_line(articles: &ArticlesView) -> Line<'static> {
    let showing = articles.showing;
    let text = if showing.total == 0 {
        "No articles to show".to_string()
    } else {
        format!(
            "Showing {} to {} of {} articles",
            showing.first, showing.last, showing.total
        )
    };
    Line::from(Span::styled(text, style::muted()))
}

fn controls_line(articles: &ArticlesView) -> Line<'static> {
    let boundary = |label: &'static str, enabled: bool| {
        if enabled {
            Span::styled(label, style::control())
        } else {
            Span::styled(label, style::disabled())
        }
    };

    let mut spans = vec![boundary("< Previous", articles.prev_enabled)];
    for label in &articles.labels {
        spans.push(Span::raw("  "));
        spans.push(match *label {
            PageLabel::Page(page) if page == articles.current_page => {
                Span::styled(format!(" {page} "), style::current_page())
            }
            PageLabel::Page(page) => Span::styled(format!(" {page} "), style::control()),
            PageLabel::Ellipsis => Span::styled("…", style::disabled()),
        });
    }
    spans.push(Span::raw("  "));
    spans.push(boundary("Next >", articles.next_enabled));
    Line::from(spans)
}

fn format_with_commas(value: u64) -> String {
    let mut out = String::new();
    for (i, ch) in value.to_string().chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}
