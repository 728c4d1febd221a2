use async_trait::async_trait;
use cn_core::{Article, ArticleCatalog, Result};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

struct MemoryStore {
    articles: Vec<Article>,
}

impl MemoryStore {
    fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }

    fn insert(&mut self, article: &Article) {
        if let Some(existing) = self.articles.iter_mut().find(|a| a.id == article.id) {
            *existing = article.clone();
        } else {
            // New articles go to the front, the way the admin dashboard
            // prepends freshly created ones.
            self.articles.insert(0, article.clone());
        }
    }

    fn delete(&mut self, id: &str) {
        self.articles.retain(|a| a.id != id);
    }
}

/// In-memory article catalog. Stands in for the real data store while the
/// platform has none; every read hands back cloned records, so callers can
/// filter and sort without touching the shared collection.
pub struct MemoryCatalog {
    store: Arc<RwLock<MemoryStore>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::with_articles(Vec::new())
    }

    pub fn with_articles(articles: Vec<Article>) -> Self {
        Self {
            store: Arc::new(RwLock::new(MemoryStore::new(articles))),
        }
    }

    /// Catalog pre-seeded with the demo article set.
    pub fn with_demo_articles() -> Self {
        Self::with_articles(crate::demo::demo_articles())
    }
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArticleCatalog for MemoryCatalog {
    async fn all(&self) -> Result<Vec<Article>> {
        let store = self.store.read().await;
        Ok(store.articles.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<Article>> {
        let store = self.store.read().await;
        Ok(store.articles.iter().find(|a| a.id == id).cloned())
    }

    async fn insert(&self, article: &Article) -> Result<()> {
        let mut store = self.store.write().await;
        store.insert(article);
        debug!("stored article {}", article.id);
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut store = self.store.write().await;
        store.delete(id);
        debug!("deleted article {}", id);
        Ok(())
    }

    async fn by_category(&self, category: &str) -> Result<Vec<Article>> {
        let store = self.store.read().await;
        Ok(store
            .articles
            .iter()
            .filter(|a| a.category == category)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cn_core::ArticleStatus;

    fn test_article(id: &str, category: &str) -> Article {
        Article {
            id: id.to_string(),
            title: format!("Article {}", id),
            excerpt: "This is a test article about politics.".to_string(),
            category: category.to_string(),
            date: "2025-11-24".parse().unwrap(),
            views: 100,
            likes: 10,
            status: ArticleStatus::Published,
        }
    }

    #[tokio::test]
    async fn insert_then_get_round_trips() {
        let catalog = MemoryCatalog::new();
        let article = test_article("1", "Politics");
        catalog.insert(&article).await.unwrap();
        let fetched = catalog.get("1").await.unwrap();
        assert_eq!(fetched.map(|a| a.title), Some(article.title));
    }

    #[tokio::test]
    async fn insert_with_same_id_replaces() {
        let catalog = MemoryCatalog::new();
        catalog.insert(&test_article("1", "Politics")).await.unwrap();

        let mut updated = test_article("1", "Politics");
        updated.title = "Updated".to_string();
        catalog.insert(&updated).await.unwrap();

        let all = catalog.all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "Updated");
    }

    #[tokio::test]
    async fn new_articles_are_prepended() {
        let catalog = MemoryCatalog::new();
        catalog.insert(&test_article("1", "Politics")).await.unwrap();
        catalog.insert(&test_article("2", "Science")).await.unwrap();
        let all = catalog.all().await.unwrap();
        assert_eq!(all[0].id, "2");
        assert_eq!(all[1].id, "1");
    }

    #[tokio::test]
    async fn delete_removes_and_unknown_id_is_noop() {
        let catalog = MemoryCatalog::new();
        catalog.insert(&test_article("1", "Politics")).await.unwrap();
        catalog.delete("missing").await.unwrap();
        assert_eq!(catalog.all().await.unwrap().len(), 1);
        catalog.delete("1").await.unwrap();
        assert!(catalog.all().await.unwrap().is_empty());
        assert!(catalog.get("1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn by_category_filters_exactly() {
        let catalog = MemoryCatalog::with_demo_articles();
        let tech = catalog.by_category("Technology").await.unwrap();
        assert_eq!(tech.len(), 2);
        assert!(tech.iter().all(|a| a.category == "Technology"));
        assert!(catalog.by_category("technology").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn demo_seed_has_six_articles() {
        let catalog = MemoryCatalog::with_demo_articles();
        assert_eq!(catalog.all().await.unwrap().len(), 6);
    }
}
