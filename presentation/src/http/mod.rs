//! HTTP/JSON API over [`QaService`].

pub mod error;
pub mod handlers;
pub mod server;

use axum::{Router, routing::get, routing::post};
use qa_application::QaService;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub service: QaService,
}

impl AppState {
    pub fn new(service: QaService) -> SharedState {
        Arc::new(Self { service })
    }
}

/// Build the API router.
pub fn app(state: SharedState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/new_session", get(handlers::new_session))
        .route("/qa", get(handlers::get_questions))
        .route("/submit_answers", post(handlers::submit_answers))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use qa_application::{AnswerTransformer, TransformError};
    use qa_infrastructure::{InMemorySessionStore, PlaceholderTransformer};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn test_app() -> Router {
        test_app_with(Arc::new(PlaceholderTransformer::default()))
    }

    fn test_app_with(transformer: Arc<dyn AnswerTransformer>) -> Router {
        let store = Arc::new(InMemorySessionStore::default());
        app(AppState::new(QaService::new(store, transformer)))
    }

    async fn body_json(resp: Response) -> Value {
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    async fn get_json(router: &Router, uri: &str) -> (StatusCode, Value) {
        let resp = router
            .clone()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        (status, body_json(resp).await)
    }

    async fn post_json(router: &Router, uri: &str, payload: Value) -> (StatusCode, Value) {
        let resp = router
            .clone()
            .oneshot(
                Request::post(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = resp.status();
        (status, body_json(resp).await)
    }

    #[tokio::test]
    async fn root_returns_welcome() {
        let (status, json) = get_json(&test_app(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({"message": "Welcome to the QA Session API!"}));
    }

    #[tokio::test]
    async fn new_session_has_default_questions_with_empty_answers() {
        let (status, json) = get_json(&test_app(), "/new_session").await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["session_id"].is_string());

        let qa_set = json["qa_set"].as_object().unwrap();
        assert_eq!(qa_set.len(), 3);
        for question in qa_domain::DEFAULT_QUESTIONS {
            assert_eq!(qa_set[question], json!({"primary": "", "transformed": ""}));
        }
    }

    #[tokio::test]
    async fn fetch_known_session_returns_it() {
        let router = test_app();
        let (_, created) = get_json(&router, "/new_session").await;
        let id = created["session_id"].as_str().unwrap();

        let (status, fetched) = get_json(&router, &format!("/qa?session_id={id}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn fetch_unknown_session_creates_new_id() {
        let router = test_app();
        let (status, json) = get_json(&router, "/qa?session_id=nonexistent").await;
        assert_eq!(status, StatusCode::OK);
        assert_ne!(json["session_id"], "nonexistent");
        assert_eq!(json["qa_set"].as_object().unwrap().len(), 3);

        let (_, health) = get_json(&router, "/health").await;
        assert_eq!(health, json!({"status": "ok", "sessions": 1}));
    }

    #[tokio::test]
    async fn fetch_without_session_id_is_rejected() {
        let resp = test_app()
            .oneshot(Request::get("/qa").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn submit_unknown_session_returns_404() {
        let router = test_app();
        let (status, json) = post_json(
            &router,
            "/submit_answers",
            json!({
                "session_id": "missing",
                "qa_set": {"Q": {"primary": "X", "transformed": ""}}
            }),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json, json!({"detail": "Session not found"}));

        let (_, health) = get_json(&router, "/health").await;
        assert_eq!(health["sessions"], 0);
    }

    #[tokio::test]
    async fn submit_transforms_answers_and_persists() {
        let router = test_app();
        let (_, created) = get_json(&router, "/new_session").await;
        let id = created["session_id"].as_str().unwrap().to_string();

        let (status, updated) = post_json(
            &router,
            "/submit_answers",
            json!({
                "session_id": id,
                "qa_set": {
                    "What is your name?": {"primary": "Ada", "transformed": ""},
                    "What is your favorite color?": {"primary": "", "transformed": ""},
                    "What is the capital of France?": {"primary": "", "transformed": ""}
                }
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["session_id"], id.as_str());
        assert_eq!(
            updated["qa_set"]["What is your name?"],
            json!({
                "primary": "Ada",
                "transformed": "result from llm transform call with data Ada"
            })
        );
        assert_eq!(
            updated["qa_set"]["What is your favorite color?"]["transformed"],
            "result from llm transform call with data "
        );

        let (_, fetched) = get_json(&router, &format!("/qa?session_id={id}")).await;
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn submit_ignores_client_transformed_value() {
        let router = test_app();
        let (_, created) = get_json(&router, "/new_session").await;
        let id = created["session_id"].as_str().unwrap().to_string();

        let (_, updated) = post_json(
            &router,
            "/submit_answers",
            json!({
                "session_id": id,
                "qa_set": {"Q": {"primary": "X", "transformed": "forged"}}
            }),
        )
        .await;
        assert_eq!(
            updated["qa_set"],
            json!({"Q": {"primary": "X", "transformed": "result from llm transform call with data X"}})
        );
    }

    #[tokio::test]
    async fn submit_accepts_legacy_nested_qa_set() {
        let router = test_app();
        let (_, created) = get_json(&router, "/new_session").await;
        let id = created["session_id"].as_str().unwrap().to_string();

        let (status, updated) = post_json(
            &router,
            "/submit_answers",
            json!({
                "session_id": id,
                "qa_set": {"qa_set": {"Q": {"primary": "X", "transformed": ""}}}
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["qa_set"]["Q"]["primary"], "X");
    }

    #[tokio::test]
    async fn submit_malformed_body_is_client_error() {
        let resp = test_app()
            .oneshot(
                Request::post("/submit_answers")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"qa_set": {}}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(resp.status().is_client_error());
    }

    struct BrokenTransformer;

    #[async_trait::async_trait]
    impl AnswerTransformer for BrokenTransformer {
        fn name(&self) -> &str {
            "broken"
        }

        async fn transform(&self, _primary: &str) -> Result<String, TransformError> {
            Err(TransformError::Failed("model offline".to_string()))
        }
    }

    #[tokio::test]
    async fn transform_failure_returns_502_and_keeps_session() {
        let router = test_app_with(Arc::new(BrokenTransformer));
        let (_, created) = get_json(&router, "/new_session").await;
        let id = created["session_id"].as_str().unwrap().to_string();

        let (status, json) = post_json(
            &router,
            "/submit_answers",
            json!({"session_id": id, "qa_set": {"Q": {"primary": "X"}}}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(json["detail"].as_str().unwrap().contains("model offline"));

        let (_, fetched) = get_json(&router, &format!("/qa?session_id={id}")).await;
        assert_eq!(fetched, created);
    }
}
