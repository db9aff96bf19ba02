//! Deterministic sample data for the dashboard.
//!
//! The demo shell fabricates a fixed catalog so every run renders
//! identically; dates and view counts are derived from the article id
//! instead of being randomized.

use byline_core::{Article, ArticleId, ArticleStatus, AuthorProfile};
use chrono::NaiveDate;

/// Number of articles in the sample catalog.
pub const SAMPLE_ARTICLE_COUNT: ArticleId = 23;

const STATUS_CYCLE: [ArticleStatus; 4] = [
    ArticleStatus::Published,
    ArticleStatus::Draft,
    ArticleStatus::UnderReview,
    ArticleStatus::Rejected,
];

/// The author shown on the profile tab.
pub fn author_profile() -> AuthorProfile {
    AuthorProfile {
        name: "Avery Quinn".to_string(),
        email: "avery.quinn@example.com".to_string(),
        joined: date(2025, 8, 17),
        verified: true,
    }
}

/// Builds the full sample catalog, oldest id first.
pub fn sample_catalog() -> Vec<Article> {
    (1..=SAMPLE_ARTICLE_COUNT).map(sample_article).collect()
}

fn sample_article(id: ArticleId) -> Article {
    Article {
        id,
        title: format!("How to Build Modern Web Applications - Part {id}"),
        status: STATUS_CYCLE[((id - 1) % 4) as usize],
        published: publish_date(id),
        views: 100 + (id * 997) % 9900,
    }
}

fn publish_date(id: ArticleId) -> NaiveDate {
    let month = ((id - 1) % 12) as u32 + 1;
    let day = ((id * 7) % 28) as u32 + 1;
    date(2024, month, day)
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture date in range")
}
