//! Library crate - exposes the modules and the router for the binary and
//! the integration tests.

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-exports of the main types to simplify imports
pub use crate::core::{AppError, AppState, Config};
pub use crate::services::root;

use axum::{Router, routing::get};
use std::sync::Arc;

/// Builds the main application router.
pub fn create_router(state: Arc<AppState>) -> Router {
    use crate::services::{LANGUAGES_PATH, openapi_document};

    Router::new()
        .route("/", get(root))
        .nest(LANGUAGES_PATH, configure_language_routes())
        .route("/api-docs/openapi.json", get(openapi_document))
        .with_state(state)
}

/// Routes for the Languages classifier resource.
fn configure_language_routes() -> Router<Arc<AppState>> {
    use crate::services::{
        create_language, delete_language, get_language, list_languages, update_language,
    };

    Router::new()
        .route("/", get(list_languages).post(create_language))
        .route(
            "/{id}",
            get(get_language).put(update_language).delete(delete_language),
        )
}
