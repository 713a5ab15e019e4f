//! Generic CRUD handlers
//!
//! Translate HTTP list/get/create/replace/delete semantics into repository
//! calls for any entity and view model pair. The per-entity services stay
//! thin: they validate input, then delegate here.

use crate::core::AppError;
use crate::entities::Entity;
use crate::repositories::GenericRepository;
use axum::Json;
use axum::http::{HeaderName, StatusCode, header};
use serde::Serialize;

/// Response shape of a successful create: 201 plus a Location header
/// pointing at the new row's get-by-id URL.
pub type Created<VM> = (StatusCode, [(HeaderName, String); 1], Json<VM>);

/// Reads the full collection. An empty table is an empty array, never an
/// error.
pub async fn get_items<E, VM>(repo: &GenericRepository<E>) -> Result<Json<Vec<VM>>, AppError>
where
    E: Entity,
    VM: From<E>,
{
    let items = repo.get_all().await?;

    Ok(Json(items.into_iter().map(VM::from).collect()))
}

/// Reads one row: 200 with the record, or 404 if none found.
pub async fn get_item<E, VM>(
    repo: &GenericRepository<E>,
    id: E::Id,
) -> Result<Json<VM>, AppError>
where
    E: Entity,
    VM: From<E>,
{
    match repo.get_by_id(id).await? {
        Some(item) => Ok(Json(VM::from(item))),
        None => Err(AppError::not_found("Resource not found")),
    }
}

/// Persists a new row and answers 201 with its location and the created
/// representation, translated back to the view model.
pub async fn create_item<E, VM>(
    repo: &GenericRepository<E>,
    base_path: &str,
    view: VM,
) -> Result<Created<VM>, AppError>
where
    E: Entity + From<VM>,
    VM: From<E> + Serialize,
{
    let created = repo.create(&E::from(view)).await?;
    let location = format!("{}/{}", base_path, created.id());

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(VM::from(created)),
    ))
}

/// Whole-record replace. The path and body IDs must agree before storage
/// is touched. A replace that affects no rows lost a race: 404 when the
/// row is gone, otherwise the conflict is surfaced as-is, never retried.
pub async fn put_item<E, VM>(
    repo: &GenericRepository<E>,
    id: E::Id,
    view: VM,
) -> Result<StatusCode, AppError>
where
    E: Entity + From<VM>,
{
    let entity = E::from(view);

    if entity.id() != id {
        return Err(AppError::bad_request("ID mismatch between path and body"));
    }

    if repo.update(&entity).await? == 0 {
        if !repo.exists(id).await? {
            return Err(AppError::not_found("Resource not found"));
        }

        return Err(AppError::conflict("The row was changed by another request"));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Removes one row: 404 for an unknown ID, 204 once it is gone.
pub async fn delete_item<E>(repo: &GenericRepository<E>, id: E::Id) -> Result<StatusCode, AppError>
where
    E: Entity,
{
    if repo.delete(id).await? == 0 {
        return Err(AppError::not_found("Resource not found"));
    }

    Ok(StatusCode::NO_CONTENT)
}
