//! Language services - HTTP handlers for the Languages classifier
//!
//! Thin per-entity glue: each handler validates where needed and delegates
//! to the generic CRUD handlers with the Language repository.

use super::crud::{self, Created};
use crate::core::{AppError, AppState, validate_dto};
use crate::dtos::LanguageDTO;
use crate::entities::Language;
use crate::repositories::FieldValue;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum_macros::debug_handler;
use std::sync::Arc;
use tracing::instrument;

/// Route prefix of the resource; also the base of the Location header
/// answered on create.
pub const LANGUAGES_PATH: &str = "/api/Languages";

// GET: api/Languages
#[instrument(skip(state))]
pub async fn list_languages(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<LanguageDTO>>, AppError> {
    crud::get_items::<Language, LanguageDTO>(&state.languages).await
}

// GET: api/Languages/5
#[instrument(skip(state))]
pub async fn get_language(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i16>,
) -> Result<Json<LanguageDTO>, AppError> {
    crud::get_item::<Language, LanguageDTO>(&state.languages, id).await
}

// POST: api/Languages
#[debug_handler]
#[instrument(skip(state, body), fields(name = %body.name))]
pub async fn create_language(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LanguageDTO>,
) -> Result<Created<LanguageDTO>, AppError> {
    validate_dto(
        &body,
        FieldValue::from(body.id),
        LanguageDTO::UNIQUE_RULES,
        &state.languages,
    )
    .await?;

    crud::create_item::<Language, LanguageDTO>(&state.languages, LANGUAGES_PATH, body).await
}

// PUT: api/Languages/5
#[debug_handler]
#[instrument(skip(state, body), fields(id = %id))]
pub async fn update_language(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i16>,
    Json(body): Json<LanguageDTO>,
) -> Result<StatusCode, AppError> {
    // the body ID is the exclusion key, so a record resubmitting its own
    // values never collides with itself
    validate_dto(
        &body,
        FieldValue::from(body.id),
        LanguageDTO::UNIQUE_RULES,
        &state.languages,
    )
    .await?;

    crud::put_item::<Language, LanguageDTO>(&state.languages, id, body).await
}

// DELETE: api/Languages/5
#[instrument(skip(state))]
pub async fn delete_language(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i16>,
) -> Result<StatusCode, AppError> {
    crud::delete_item::<Language>(&state.languages, id).await
}
