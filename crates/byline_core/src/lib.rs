//! Byline core: pure dashboard state machine and view-model helpers.
mod article;
mod msg;
mod pagination;
mod state;
mod update;
mod view_model;

pub use article::{
    catalog_stats, Article, ArticleId, ArticleStatus, AuthorProfile, BadgeVariant, CatalogStats,
};
pub use msg::Msg;
pub use pagination::{change_page, page_bounds, page_labels, total_pages, visible_slice, PageLabel};
pub use state::{AppState, Tab, PAGE_SIZE};
pub use update::update;
pub use view_model::{AppViewModel, ArticleRowView, ArticlesView, ProfileView, ShownRange};
