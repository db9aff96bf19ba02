//! Event loop and message dispatch for the dashboard shell.
//!
//! The shell owns the terminal and the redraw cycle; all behavior lives in
//! [`byline_core::update`], which processes one message at a time. Input is
//! read synchronously, so a page-change request always completes before the
//! next key is seen.

use std::io::{self, Stdout};

use anyhow::Result;
use byline_core::{update, AppState, Msg, Tab};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use ui_logging::{ui_debug, ui_info};

use crate::fixtures;
use crate::ui;

type Tui = Terminal<CrosstermBackend<Stdout>>;

pub fn run() -> Result<()> {
    let state = AppState::new(fixtures::author_profile(), fixtures::sample_catalog());
    ui_info!(
        "byline dashboard starting with {} articles over {} pages",
        state.article_count(),
        state.total_pages()
    );

    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, state);

    // Restore the terminal even when the loop errored.
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

fn event_loop(terminal: &mut Tui, mut state: AppState) -> Result<()> {
    // The first frame is drawn unconditionally; afterwards only dirty
    // states trigger a redraw.
    draw(terminal, &state)?;

    loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    ui_info!("quit requested");
                    return Ok(());
                }
                code => {
                    if let Some(msg) = map_key(code, state.tab()) {
                        state = dispatch(terminal, state, msg)?;
                    }
                }
            },
            Event::Resize(_, _) => draw(terminal, &state)?,
            _ => {}
        }
    }
}

fn dispatch(terminal: &mut Tui, state: AppState, msg: Msg) -> Result<AppState> {
    ui_debug!("dispatch {msg:?}");
    let mut state = update(state, msg);
    if state.consume_dirty() {
        draw(terminal, &state)?;
    }
    Ok(state)
}

fn draw(terminal: &mut Tui, state: &AppState) -> Result<()> {
    let view = state.view();
    terminal.draw(|frame| ui::render(frame, &view))?;
    Ok(())
}

/// Maps a key press to a semantic message.
///
/// Digit keys address page numbers directly (`0` stands for page 10); the
/// core rejects anything out of range, so the mapping stays unconditional.
fn map_key(code: KeyCode, active_tab: Tab) -> Option<Msg> {
    match code {
        KeyCode::Char('p') => Some(Msg::TabSelected(Tab::Profile)),
        KeyCode::Char('a') => Some(Msg::TabSelected(Tab::Articles)),
        KeyCode::Tab => Some(Msg::TabSelected(match active_tab {
            Tab::Profile => Tab::Articles,
            Tab::Articles => Tab::Profile,
        })),
        KeyCode::Char('c') => Some(Msg::SidebarToggled),
        KeyCode::Left => Some(Msg::PrevPageClicked),
        KeyCode::Right => Some(Msg::NextPageClicked),
        KeyCode::Char('0') => Some(Msg::PageRequested(10)),
        KeyCode::Char(ch @ '1'..='9') => Some(Msg::PageRequested(ch as usize - '0' as usize)),
        _ => None,
    }
}
