pub mod catalog;
pub mod error;
pub mod types;

pub use catalog::ArticleCatalog;
pub use error::Error;
pub use types::{Article, ArticleStatus};

pub type Result<T> = std::result::Result<T, Error>;

pub mod prelude {
    pub use crate::catalog::ArticleCatalog;
    pub use crate::types::{Article, ArticleStatus};
    pub use crate::{Error, Result};
}
