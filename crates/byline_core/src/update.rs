use crate::{AppState, Msg};

/// Pure update function: applies a message to state and returns the next
/// state.
///
/// Rejected requests (out-of-range pages, re-selecting the active tab)
/// leave the state untouched and clean, so the shell skips the redraw.
pub fn update(mut state: AppState, msg: Msg) -> AppState {
    match msg {
        Msg::TabSelected(tab) => state.select_tab(tab),
        Msg::SidebarToggled => state.toggle_sidebar(),
        Msg::PageRequested(page) => state.go_to_page(page),
        Msg::PrevPageClicked => {
            // Page 1 asks for page 0, which change_page rejects.
            let requested = state.current_page().saturating_sub(1);
            state.go_to_page(requested);
        }
        Msg::NextPageClicked => {
            let requested = state.current_page() + 1;
            state.go_to_page(requested);
        }
        Msg::NoOp => {}
    }
    state
}
