pub mod engine;
pub mod stats;
pub mod view;

pub use engine::{evaluate, QuerySpec, SortKey, CATEGORIES, SORT_OPTIONS};
pub use stats::FeedStats;
pub use view::ArticleView;

pub mod prelude {
    pub use crate::engine::{evaluate, QuerySpec, SortKey};
    pub use crate::stats::FeedStats;
    pub use crate::view::ArticleView;
    pub use cn_core::{Article, Error, Result};
}
