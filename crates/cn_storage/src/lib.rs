pub mod backends;
pub mod demo;

pub use backends::memory::MemoryCatalog;

pub mod prelude {
    pub use crate::MemoryCatalog;
    pub use cn_core::{Article, ArticleCatalog, Error, Result};
}
