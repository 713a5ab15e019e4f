//! Services module - HTTP service handlers
//!
//! The generic CRUD handlers live in `crud`; each entity gets a thin module
//! of routed handlers on top of them.

pub mod crud;
pub mod language;
pub mod openapi;

// Re-exports to simplify imports
pub use language::{
    LANGUAGES_PATH, create_language, delete_language, get_language, list_languages,
    update_language,
};
pub use openapi::openapi_document;

use crate::core::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

/// Root endpoint - health check
pub async fn root(State(_state): State<Arc<AppState>>) -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}
