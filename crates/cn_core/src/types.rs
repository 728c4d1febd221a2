use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Publication state of a curated article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    Published,
    Draft,
}

impl Default for ArticleStatus {
    fn default() -> Self {
        Self::Published
    }
}

/// One curated news item with its engagement counters.
///
/// Categories are free strings by convention drawn from the known picker
/// set; the catalog does not enforce membership. `views` and `likes` are
/// unsigned, so the non-negative invariant holds by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub date: NaiveDate,
    pub views: u64,
    pub likes: u64,
    #[serde(default)]
    pub status: ArticleStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_defaults_to_published_when_absent() {
        let json = r#"{
            "id": "1",
            "title": "Zohran Momdani Recent Election Win",
            "excerpt": "Socialist candidate secures historic victory",
            "category": "Politics",
            "date": "2025-11-24",
            "views": 15420,
            "likes": 3200
        }"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.status, ArticleStatus::Published);
        assert_eq!(article.date.to_string(), "2025-11-24");
    }

    #[test]
    fn malformed_date_is_rejected_at_the_boundary() {
        let json = r#"{
            "id": "1",
            "title": "t",
            "excerpt": "",
            "category": "Politics",
            "date": "not-a-date",
            "views": 0,
            "likes": 0
        }"#;
        assert!(serde_json::from_str::<Article>(json).is_err());
    }
}
