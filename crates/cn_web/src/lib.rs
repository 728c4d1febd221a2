use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Builds the article API router.
///
/// Every handler is still a stub that answers with hardcoded or empty
/// payloads; the real catalog, auth, and search index are separate systems
/// that plug in behind these routes later.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/articles", get(handlers::list_articles))
        .route("/api/articles", post(handlers::create_article))
        .route("/api/articles/:id", get(handlers::get_article))
        .route("/api/search", get(handlers::search_articles))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use crate::AppState;
    pub use cn_core::{Article, Error, Result};
}
