use chrono::NaiveDate;

/// Unique article identifier.
pub type ArticleId = u64;

/// Publication lifecycle of an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleStatus {
    Published,
    Draft,
    UnderReview,
    Rejected,
}

impl ArticleStatus {
    /// Human-readable label, as shown on the status pill.
    pub fn label(self) -> &'static str {
        match self {
            Self::Published => "Published",
            Self::Draft => "Draft",
            Self::UnderReview => "Under Review",
            Self::Rejected => "Rejected",
        }
    }

    /// Visual category for the status pill.
    pub fn badge(self) -> BadgeVariant {
        match self {
            Self::Published => BadgeVariant::Success,
            Self::Draft => BadgeVariant::Warning,
            Self::UnderReview => BadgeVariant::Primary,
            Self::Rejected => BadgeVariant::Danger,
        }
    }
}

/// Visual category a renderer maps to its own color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Success,
    Warning,
    Primary,
    Danger,
}

/// One article in the author's catalog.
///
/// Owned by whoever built the catalog; the state machine and the pagination
/// helpers only read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub status: ArticleStatus,
    pub published: NaiveDate,
    pub views: u64,
}

/// Aggregated display counts for the profile stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogStats {
    pub total: usize,
    pub published: usize,
    pub drafts: usize,
}

/// Counts statuses across the whole catalog.
pub fn catalog_stats(articles: &[Article]) -> CatalogStats {
    let mut stats = CatalogStats {
        total: articles.len(),
        ..CatalogStats::default()
    };
    for article in articles {
        match article.status {
            ArticleStatus::Published => stats.published += 1,
            ArticleStatus::Draft => stats.drafts += 1,
            ArticleStatus::UnderReview | ArticleStatus::Rejected => {}
        }
    }
    stats
}

/// The author shown on the profile tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorProfile {
    pub name: String,
    pub email: String,
    pub joined: NaiveDate,
    pub verified: bool,
}
