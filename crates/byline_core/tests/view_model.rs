use byline_core::{
    catalog_stats, update, AppState, Article, ArticleStatus, AuthorProfile, BadgeVariant, Msg,
    PageLabel, ShownRange, Tab,
};
use chrono::NaiveDate;

fn sample_profile() -> AuthorProfile {
    AuthorProfile {
        name: "Avery Quinn".to_string(),
        email: "avery.quinn@example.com".to_string(),
        joined: NaiveDate::from_ymd_opt(2025, 8, 17).unwrap(),
        verified: true,
    }
}

fn sample_article(id: u64) -> Article {
    let status = match (id - 1) % 4 {
        0 => ArticleStatus::Published,
        1 => ArticleStatus::Draft,
        2 => ArticleStatus::UnderReview,
        _ => ArticleStatus::Rejected,
    };
    Article {
        id,
        title: format!("Field Notes, Part {id}"),
        status,
        published: NaiveDate::from_ymd_opt(2024, 1, ((id - 1) % 28 + 1) as u32).unwrap(),
        views: id * 10,
    }
}

fn sample_state(count: u64) -> AppState {
    let articles = (1..=count).map(sample_article).collect();
    AppState::new(sample_profile(), articles)
}

#[test]
fn badge_lookup_covers_every_status() {
    assert_eq!(ArticleStatus::Published.badge(), BadgeVariant::Success);
    assert_eq!(ArticleStatus::Draft.badge(), BadgeVariant::Warning);
    assert_eq!(ArticleStatus::UnderReview.badge(), BadgeVariant::Primary);
    assert_eq!(ArticleStatus::Rejected.badge(), BadgeVariant::Danger);
}

#[test]
fn status_labels_match_the_pill_text() {
    assert_eq!(ArticleStatus::Published.label(), "Published");
    assert_eq!(ArticleStatus::Draft.label(), "Draft");
    assert_eq!(ArticleStatus::UnderReview.label(), "Under Review");
    assert_eq!(ArticleStatus::Rejected.label(), "Rejected");
}

#[test]
fn stats_count_published_and_drafts_only() {
    let articles: Vec<Article> = (1..=23).map(sample_article).collect();
    let stats = catalog_stats(&articles);

    // 23 articles cycling Published/Draft/UnderReview/Rejected.
    assert_eq!(stats.total, 23);
    assert_eq!(stats.published, 6);
    assert_eq!(stats.drafts, 6);
}

#[test]
fn profile_view_carries_author_and_stats() {
    let state = sample_state(23);
    let view = state.view();

    assert_eq!(view.tab, Tab::Profile);
    assert_eq!(view.profile.name, "Avery Quinn");
    assert_eq!(view.profile.email, "avery.quinn@example.com");
    assert!(view.profile.verified);
    assert_eq!(view.profile.stats.total, 23);
}

#[test]
fn first_page_shows_the_first_window() {
    let state = sample_state(23);
    let articles = state.view().articles;

    assert_eq!(articles.current_page, 1);
    assert_eq!(articles.total_pages, 5);
    assert_eq!(articles.rows.len(), 5);
    assert_eq!(articles.rows[0].title, "Field Notes, Part 1");
    assert_eq!(
        articles.showing,
        ShownRange {
            first: 1,
            last: 5,
            total: 23
        }
    );
    assert!(!articles.prev_enabled);
    assert!(articles.next_enabled);
}

#[test]
fn last_page_shows_the_remainder() {
    let state = update(sample_state(23), Msg::PageRequested(5));
    let articles = state.view().articles;

    assert_eq!(articles.rows.len(), 3);
    assert_eq!(
        articles.showing,
        ShownRange {
            first: 21,
            last: 23,
            total: 23
        }
    );
    assert!(articles.prev_enabled);
    assert!(!articles.next_enabled);
}

#[test]
fn five_pages_are_labelled_flat() {
    let state = sample_state(23);
    let labels = state.view().articles.labels;

    let expected: Vec<PageLabel> = (1..=5).map(PageLabel::Page).collect();
    assert_eq!(labels, expected);
}

#[test]
fn many_pages_collapse_into_ellipses() {
    // 47 articles at 5 per page is 10 pages.
    let state = update(sample_state(47), Msg::PageRequested(5));
    let labels = state.view().articles.labels;

    assert_eq!(
        labels,
        vec![
            PageLabel::Page(1),
            PageLabel::Ellipsis,
            PageLabel::Page(4),
            PageLabel::Page(5),
            PageLabel::Page(6),
            PageLabel::Ellipsis,
            PageLabel::Page(10),
        ]
    );
}

#[test]
fn empty_catalog_view_is_well_formed() {
    let state = AppState::new(sample_profile(), Vec::new());
    let articles = state.view().articles;

    assert!(articles.rows.is_empty());
    assert_eq!(articles.total_pages, 1);
    assert_eq!(articles.labels, vec![PageLabel::Page(1)]);
    assert_eq!(
        articles.showing,
        ShownRange {
            first: 0,
            last: 0,
            total: 0
        }
    );
    assert!(!articles.prev_enabled);
    assert!(!articles.next_enabled);
}
