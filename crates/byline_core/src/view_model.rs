use chrono::NaiveDate;

use crate::article::{ArticleId, ArticleStatus, CatalogStats};
use crate::pagination::PageLabel;
use crate::state::Tab;

/// Render-ready snapshot of the dashboard. Plain data only; the shell maps
/// it to whatever widget toolkit it drives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub tab: Tab,
    pub sidebar_collapsed: bool,
    pub profile: ProfileView,
    pub articles: ArticlesView,
}

/// Profile card plus the stat cells underneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub name: String,
    pub email: String,
    pub joined: NaiveDate,
    pub verified: bool,
    pub stats: CatalogStats,
}

/// The articles tab: current page of rows plus the pagination controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticlesView {
    pub rows: Vec<ArticleRowView>,
    pub current_page: usize,
    pub total_pages: usize,
    pub labels: Vec<PageLabel>,
    pub showing: ShownRange,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRowView {
    pub id: ArticleId,
    pub title: String,
    pub status: ArticleStatus,
    pub published: NaiveDate,
    pub views: u64,
}

/// The "Showing X to Y of Z articles" summary. 1-based and inclusive;
/// `first` and `last` are both 0 when the current page is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShownRange {
    pub first: usize,
    pub last: usize,
    pub total: usize,
}
