use crate::content::service::ContentService;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data; each generation is independent.
#[derive(Clone)]
pub struct AppState {
    pub content: ContentService,
}
