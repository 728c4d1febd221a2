use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use cn_core::Article;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    pub title: String,
    pub content: String,
    pub category: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: String,
}

pub async fn list_articles(State(_state): State<Arc<AppState>>) -> impl IntoResponse {
    // TODO: replace the mock payload with a real catalog query
    Json(json!([
        {
            "id": "1",
            "title": "Zohran Momdani Recent Election Win",
            "excerpt": "Socialist candidate secures historic victory",
            "category": "Politics",
            "views": 15420,
            "likes": 3200
        }
    ]))
}

pub async fn get_article(
    State(_state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    // TODO: replace the mock payload with a real catalog query
    Json(json!({
        "id": id,
        "title": "Article Title",
        "content": "Article content here"
    }))
}

pub async fn create_article(
    State(_state): State<Arc<AppState>>,
    Json(_request): Json<CreateArticleRequest>,
) -> impl IntoResponse {
    // TODO: implement article creation
    Json(json!({ "success": true, "id": "1" }))
}

pub async fn search_articles(
    State(_state): State<Arc<AppState>>,
    Query(_params): Query<SearchParams>,
) -> impl IntoResponse {
    // TODO: implement vector search
    Json::<Vec<Article>>(vec![])
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use cn_storage::MemoryCatalog;
    use serde_json::Value;

    fn state() -> Arc<AppState> {
        Arc::new(AppState {
            catalog: Arc::new(MemoryCatalog::with_demo_articles()),
        })
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn list_returns_the_mock_payload() {
        let response = list_articles(State(state())).await.into_response();
        let body = body_json(response).await;
        assert_eq!(body[0]["id"], "1");
        assert_eq!(body[0]["views"], 15420);
    }

    #[tokio::test]
    async fn get_echoes_the_requested_id() {
        let response = get_article(State(state()), Path("42".to_string()))
            .await
            .into_response();
        let body = body_json(response).await;
        assert_eq!(body["id"], "42");
        assert_eq!(body["title"], "Article Title");
    }

    #[tokio::test]
    async fn create_acknowledges_without_storing() {
        let request = CreateArticleRequest {
            title: "t".to_string(),
            content: "c".to_string(),
            category: "Politics".to_string(),
        };
        let response = create_article(State(state()), Json(request))
            .await
            .into_response();
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
    }

    #[tokio::test]
    async fn search_is_an_empty_stub() {
        let params = SearchParams {
            query: "climate".to_string(),
        };
        let response = search_articles(State(state()), Query(params))
            .await
            .into_response();
        let body = body_json(response).await;
        assert_eq!(body, json!([]));
    }
}
