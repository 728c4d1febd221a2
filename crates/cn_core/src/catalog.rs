use crate::types::Article;
use crate::Result;
use async_trait::async_trait;

/// The article collection collaborator the dashboards read from.
///
/// Today the only backing is an in-memory catalog; a real data store slots
/// in behind the same trait.
#[async_trait]
pub trait ArticleCatalog: Send + Sync {
    /// Every article in the catalog, newest insertions first
    async fn all(&self) -> Result<Vec<Article>>;

    /// Look up a single article by id
    async fn get(&self, id: &str) -> Result<Option<Article>>;

    /// Insert an article, replacing any existing article with the same id
    async fn insert(&self, article: &Article) -> Result<()>;

    /// Remove an article by id; unknown ids are a no-op
    async fn delete(&self, id: &str) -> Result<()>;

    /// All articles in a specific category
    async fn by_category(&self, category: &str) -> Result<Vec<Article>>;
}
