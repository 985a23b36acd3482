pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::characteristics::handlers as characteristics;
use crate::chat::handlers as chat;
use crate::documents::handlers as documents;
use crate::matching::handlers as matching;
use crate::state::AppState;
use crate::vision::handlers as vision;

pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Image Analyzer
        .route("/api/v1/images/analyze", post(vision::handle_analyze_image))
        .route(
            "/api/v1/users/:user_id/photo",
            post(vision::handle_upload_photo),
        )
        // Characteristics Store
        .route(
            "/api/v1/users/:user_id/characteristics",
            get(characteristics::handle_get_characteristics)
                .put(characteristics::handle_save_characteristics),
        )
        // Matcher
        .route("/api/v1/matches", post(matching::handle_match))
        // Document Assistant
        .route("/api/v1/documents", get(documents::handle_list_documents))
        .route("/api/v1/documents/assist", post(documents::handle_assist))
        .route("/api/v1/documents/:key", get(documents::handle_get_document))
        // Conversational Responder
        .route("/api/v1/chat", post(chat::handle_chat))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::characteristics::store::memory::InMemoryCharacteristicsStore;
    use crate::characteristics::store::CharacteristicsStore;
    use crate::config::Config;
    use crate::llm_client::testing::ScriptedChatModel;

    fn test_config() -> Config {
        Config {
            database_url: "postgres://unused".to_string(),
            xai_api_key: "test-key".to_string(),
            documents_base_url: "https://example.com/forms".to_string(),
            max_upload_bytes: 1024 * 1024,
            port: 0,
            rust_log: "info".to_string(),
        }
    }

    fn app(llm: Arc<ScriptedChatModel>, store: Arc<InMemoryCharacteristicsStore>) -> Router {
        build_router(AppState {
            llm,
            store,
            config: test_config(),
        })
    }

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = app(Arc::default(), Arc::default());
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_put_characteristics_upserts() {
        let store = Arc::new(InMemoryCharacteristicsStore::default());
        let app = app(Arc::default(), store.clone());

        for shape in ["oval", "round"] {
            let response = app
                .clone()
                .oneshot(json_request(
                    Method::PUT,
                    "/api/v1/users/alice/characteristics",
                    json!({"face_shape": shape}),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        assert_eq!(store.record_count(), 1);
        assert_eq!(
            store.get("alice").await.unwrap()["face_shape"],
            json!("round")
        );
    }

    #[tokio::test]
    async fn test_get_unknown_user_is_ok() {
        let app = app(Arc::default(), Arc::default());
        let response = app
            .oneshot(
                Request::get("/api/v1/users/ghost/characteristics")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_match_without_characteristics_is_404() {
        let llm = Arc::new(ScriptedChatModel::default());
        let app = app(llm.clone(), Arc::default());
        let response = app
            .oneshot(json_request(
                Method::POST,
                "/api/v1/matches",
                json!({
                    "user1_id": "alice",
                    "user2_id": "bob",
                    "user1_intentions": {},
                    "user2_intentions": {}
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(llm.calls().is_empty());
    }

    #[tokio::test]
    async fn test_match_with_non_json_reply_is_500() {
        let store = Arc::new(InMemoryCharacteristicsStore::default());
        for user in ["alice", "bob"] {
            let chars = json!({"skin_tone": "tan"}).as_object().cloned().unwrap();
            store.save(user, &chars).await.unwrap();
        }
        let llm = Arc::new(ScriptedChatModel::with_replies(["not json"]));
        let app = app(llm, store);

        let response = app
            .oneshot(json_request(
                Method::POST,
                "/api/v1/matches",
                json!({"user1_id": "alice", "user2_id": "bob"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_empty_question_is_rejected() {
        let llm = Arc::new(ScriptedChatModel::default());
        let app = app(llm.clone(), Arc::default());
        let response = app
            .oneshot(json_request(
                Method::POST,
                "/api/v1/chat",
                json!({"question": "   "}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(llm.calls().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_base64_is_rejected() {
        let app = app(Arc::default(), Arc::default());
        let response = app
            .oneshot(json_request(
                Method::POST,
                "/api/v1/images/analyze",
                json!({"image_base64": "***not base64***"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_document_is_404() {
        let app = app(Arc::default(), Arc::default());
        let response = app
            .oneshot(
                Request::get("/api/v1/documents/passport")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
