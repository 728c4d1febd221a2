use cn_core::{Article, ArticleStatus};
use serde::{Deserialize, Serialize};

/// Roll-up figures for the admin dashboard header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedStats {
    pub total: usize,
    pub published: usize,
    pub drafts: usize,
    pub total_views: u64,
    pub total_likes: u64,
}

impl FeedStats {
    pub fn collect(articles: &[Article]) -> Self {
        Self {
            total: articles.len(),
            published: articles
                .iter()
                .filter(|a| a.status == ArticleStatus::Published)
                .count(),
            drafts: articles
                .iter()
                .filter(|a| a.status == ArticleStatus::Draft)
                .count(),
            total_views: articles.iter().map(|a| a.views).sum(),
            total_likes: articles.iter().map(|a| a.likes).sum(),
        }
    }
}
