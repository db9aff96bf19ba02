use crate::article::{catalog_stats, Article, AuthorProfile};
use crate::pagination;
use crate::view_model::{AppViewModel, ArticleRowView, ArticlesView, ProfileView, ShownRange};

/// Articles shown per page on the articles tab.
pub const PAGE_SIZE: usize = 5;

/// Which main-content view is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Profile,
    Articles,
}

/// Full UI session state.
///
/// Mutated only through [`update`](crate::update); the shell reads it via
/// [`AppState::view`] and redraws when [`AppState::consume_dirty`] reports
/// a change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    profile: AuthorProfile,
    articles: Vec<Article>,
    tab: Tab,
    sidebar_collapsed: bool,
    current_page: usize,
    dirty: bool,
}

impl AppState {
    /// Builds the initial state around an injected profile and catalog.
    pub fn new(profile: AuthorProfile, articles: Vec<Article>) -> Self {
        Self {
            profile,
            articles,
            tab: Tab::default(),
            sidebar_collapsed: false,
            current_page: 1,
            dirty: false,
        }
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    /// 1-indexed page the articles tab is showing.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.articles.len(), PAGE_SIZE)
    }

    /// Reports whether the state changed since the last call, clearing the
    /// flag. The shell skips the redraw when this returns false.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn select_tab(&mut self, tab: Tab) {
        if self.tab != tab {
            self.tab = tab;
            self.dirty = true;
        }
    }

    pub(crate) fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
        self.dirty = true;
    }

    /// Applies a page-change request, ignoring anything out of range or a
    /// request for the page already shown.
    pub(crate) fn go_to_page(&mut self, requested: usize) {
        match pagination::change_page(requested, self.total_pages()) {
            Some(page) if page != self.current_page => {
                self.current_page = page;
                self.dirty = true;
            }
            _ => {}
        }
    }

    /// Render-ready snapshot of the whole dashboard.
    pub fn view(&self) -> AppViewModel {
        let total = self.articles.len();
        let total_pages = self.total_pages();
        let bounds = pagination::page_bounds(total, self.current_page, PAGE_SIZE);
        let showing = if bounds.is_empty() {
            ShownRange {
                first: 0,
                last: 0,
                total,
            }
        } else {
            ShownRange {
                first: bounds.start + 1,
                last: bounds.end,
                total,
            }
        };
        let rows = self.articles[bounds]
            .iter()
            .map(|article| ArticleRowView {
                id: article.id,
                title: article.title.clone(),
                status: article.status,
                published: article.published,
                views: article.views,
            })
            .collect();

        AppViewModel {
            tab: self.tab,
            sidebar_collapsed: self.sidebar_collapsed,
            profile: ProfileView {
                name: self.profile.name.clone(),
                email: self.profile.email.clone(),
                joined: self.profile.joined,
                verified: self.profile.verified,
                stats: catalog_stats(&self.articles),
            },
            articles: ArticlesView {
                rows,
                current_page: self.current_page,
                total_pages,
                labels: pagination::page_labels(self.current_page, total_pages),
                showing,
                prev_enabled: self.current_page > 1,
                next_enabled: self.current_page < total_pages,
            },
        }
    }
}
