use cn_core::Article;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Category picker values shown on the dashboards. "All" is the sentinel
/// that disables category filtering.
pub const CATEGORIES: [&str; 6] = [
    "All",
    "Politics",
    "Technology",
    "Science",
    "Environment",
    "Health",
];

/// Sort picker labels, in display order.
pub const SORT_OPTIONS: [&str; 4] = ["Latest", "Trending", "Most Liked", "Most Viewed"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    Latest,
    Trending,
    MostLiked,
    MostViewed,
}

impl Default for SortKey {
    fn default() -> Self {
        Self::Latest
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace([' ', '-', '_'], "").as_str() {
            "latest" => Ok(Self::Latest),
            "trending" => Ok(Self::Trending),
            "mostliked" => Ok(Self::MostLiked),
            "mostviewed" => Ok(Self::MostViewed),
            _ => Err(format!("Unknown sort option: {}", s)),
        }
    }
}

/// One dashboard query: free-text term, category filter, and sort mode.
/// Built fresh per invocation; never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuerySpec {
    pub search_term: Option<String>,
    pub category: Option<String>,
    pub sort: SortKey,
}

impl QuerySpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: String) -> Self {
        self.search_term = Some(term);
        self
    }

    pub fn with_category(mut self, category: String) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }
}

/// Applies a query spec to an article collection.
///
/// Steps run in a fixed order: category filter, then free-text filter, then
/// exactly one sort. Category matching is exact and case-sensitive; the
/// text filter is a case-insensitive substring match against title or
/// excerpt, and a term that trims to empty filters nothing. Sorting is
/// stable, so equal keys keep their incoming relative order. The input
/// slice is never mutated.
pub fn evaluate(articles: &[Article], spec: &QuerySpec) -> Vec<Article> {
    let mut result: Vec<Article> = articles.to_vec();

    if let Some(category) = spec.category.as_deref() {
        if category != "All" {
            result.retain(|a| a.category == category);
        }
    }

    if let Some(term) = spec.search_term.as_deref() {
        let term = term.trim().to_lowercase();
        if !term.is_empty() {
            result.retain(|a| {
                a.title.to_lowercase().contains(&term) || a.excerpt.to_lowercase().contains(&term)
            });
        }
    }

    match spec.sort {
        SortKey::Latest => result.sort_by(|a, b| b.date.cmp(&a.date)),
        // Trending and Most Viewed share the views ordering; both labels are
        // exposed by the sort picker.
        SortKey::Trending | SortKey::MostViewed => result.sort_by(|a, b| b.views.cmp(&a.views)),
        SortKey::MostLiked => result.sort_by(|a, b| b.likes.cmp(&a.likes)),
    }

    result
}
