use chrono::NaiveDate;
use cn_core::Article;
use serde::{Deserialize, Serialize};

/// Display-ready projection of one article card. Counters and the date are
/// pre-formatted strings; title and excerpt pass through untruncated (line
/// clamping is the renderer's job).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleView {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub date: String,
    pub views: String,
    pub likes: String,
}

impl From<&Article> for ArticleView {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id.clone(),
            title: article.title.clone(),
            excerpt: article.excerpt.clone(),
            category: article.category.clone(),
            date: format_date(article.date),
            views: format_count(article.views),
            likes: format_count(article.likes),
        }
    }
}

/// Abbreviates an engagement counter the way the cards render it: divide by
/// 1000, one decimal place, "k" suffix. Counts under 1000 come out as
/// "0.Xk"; that matches the live cards and stays as-is.
pub fn format_count(count: u64) -> String {
    format!("{:.1}k", count as f64 / 1000.0)
}

/// Short en-US numeric date, e.g. `11/24/2025`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}
