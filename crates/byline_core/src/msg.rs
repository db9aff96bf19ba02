use crate::Tab;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    /// User picked a sidebar entry.
    TabSelected(Tab),
    /// User clicked the sidebar collapse toggle.
    SidebarToggled,
    /// User clicked a page number in the selection strip.
    PageRequested(usize),
    /// User clicked Previous. Rejected silently on the first page.
    PrevPageClicked,
    /// User clicked Next. Rejected silently on the last page.
    NextPageClicked,
    /// Fallback for placeholder wiring.
    NoOp,
}
