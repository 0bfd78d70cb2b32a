pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::content::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::handle_index))
        .route("/health", get(health::health_handler))
        .route("/api/v1/content/generate", post(handlers::handle_generate))
        .route("/api/v1/content/download", post(handlers::handle_download))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::content::service::ContentService;
    use crate::llm_client::{GenerationError, TextGenerator};

    struct FixedGenerator(Option<&'static str>);

    #[async_trait]
    impl TextGenerator for FixedGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
            self.0
                .map(str::to_string)
                .ok_or(GenerationError::EmptyGeneration)
        }
    }

    fn router(output: Option<&'static str>) -> Router {
        build_router(AppState {
            content: ContentService::new(Arc::new(FixedGenerator(output))),
        })
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let response = router(None)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "tubekit-api");
    }

    #[tokio::test]
    async fn test_index_serves_form() {
        let response = router(None)
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("<form"));
        assert!(html.contains("id=\"theme-toggle\""));
        assert!(html.contains("<option value=\"10\" selected>"));
        assert!(html.contains("<footer>"));
    }

    #[tokio::test]
    async fn test_generate_returns_parsed_result() {
        let response = router(Some("VIDEO TITLE: Hi\nDESCRIPTION: there\nTAGS: a, b"))
            .oneshot(post_json(
                "/api/v1/content/generate",
                json!({"topic": "t", "video_length": "5", "description": "d"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["result"]["title"], "Hi");
        assert_eq!(body["result"]["tags"], "a, b");
        assert_eq!(body["result"]["description"], "there\n\n\n\n\n\n\n\n");
        assert!(body["request_id"].is_string());
        assert!(body["generated_at"].is_string());
    }

    #[tokio::test]
    async fn test_generate_rejects_blank_fields() {
        let response = router(Some("VIDEO TITLE: Hi"))
            .oneshot(post_json(
                "/api/v1/content/generate",
                json!({"topic": "  ", "video_length": "5", "description": "d"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "topic cannot be empty");
    }

    #[tokio::test]
    async fn test_generate_missing_field_is_validation_error() {
        let response = router(Some("VIDEO TITLE: Hi"))
            .oneshot(post_json(
                "/api/v1/content/generate",
                json!({"topic": "t", "video_length": "5"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "description cannot be empty");
    }

    #[tokio::test]
    async fn test_generate_failure_is_generic_bad_gateway() {
        let response = router(None)
            .oneshot(post_json(
                "/api/v1/content/generate",
                json!({"topic": "t", "video_length": "5", "description": "d"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"]["code"], "GENERATION_ERROR");
        assert_eq!(
            body["error"]["message"],
            "Failed to generate content. Please try again."
        );
    }

    #[tokio::test]
    async fn test_download_returns_text_attachment() {
        let response = router(None)
            .oneshot(post_json(
                "/api/v1/content/download",
                json!({"title": "T", "description": "D", "tags": "g"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"youtube_content.txt\""
        );
        assert_eq!(
            body_string(response).await,
            "TITLE:\nT\n\nDESCRIPTION:\nD\n\nTAGS:\ng"
        );
    }
}
