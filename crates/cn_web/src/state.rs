use cn_core::ArticleCatalog;
use std::sync::Arc;

pub struct AppState {
    pub catalog: Arc<dyn ArticleCatalog>,
}
