//! Axum route handlers for the Content API.

use anyhow::Context;
use axum::{
    body::Body,
    extract::State,
    http::header,
    response::{Html, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::content::export::{attachment_disposition, serialize_for_download, DOWNLOAD_CONTENT_TYPE};
use crate::content::formatter::ContentResult;
use crate::content::service::GenerationRequest;
use crate::errors::AppError;
use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../../static/index.html");

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub request_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub result: ContentResult,
}

/// GET /
///
/// The single-page form. All generation goes through the API below, so the
/// page never sees the upstream key.
pub async fn handle_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// POST /api/v1/content/generate
///
/// Builds the prompt, calls the generative API once and returns the parsed
/// title / description / tags.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    for (field, value) in [
        ("topic", &request.topic),
        ("video_length", &request.video_length),
        ("description", &request.description),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{field} cannot be empty")));
        }
    }

    let request_id = Uuid::new_v4();
    let result = state.content.generate_content(request_id, &request).await?;

    Ok(Json(GenerateResponse {
        request_id,
        generated_at: Utc::now(),
        result,
    }))
}

/// POST /api/v1/content/download
///
/// Returns a previously generated result as a plain-text attachment.
pub async fn handle_download(Json(result): Json<ContentResult>) -> Result<Response, AppError> {
    let response = Response::builder()
        .header(header::CONTENT_TYPE, DOWNLOAD_CONTENT_TYPE)
        .header(header::CONTENT_DISPOSITION, attachment_disposition())
        .body(Body::from(serialize_for_download(&result)))
        .context("Failed to build download response")?;

    Ok(response)
}
