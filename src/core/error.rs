use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use validator::ValidationErrors;

use crate::repositories::UniqueCheckError;

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<ValidationErrors>,
}

pub struct AppError {
    status: StatusCode,
    message: &'static str,
    details: Option<String>,
    fields: Option<ValidationErrors>,
}

impl AppError {
    pub fn new(status: StatusCode, message: &'static str) -> Self {
        Self {
            status,
            message,
            details: None,
            fields: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    // Common error constructors
    pub fn not_found(message: &'static str) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: &'static str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn conflict(message: &'static str) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    pub fn internal_server_error(message: &'static str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn service_unavailable(message: &'static str) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }

    /// 400 carrying the per-field messages collected by the validation
    /// layer, serialized field by field so clients can map them back onto
    /// their form.
    pub fn validation(errors: ValidationErrors) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: "Validation error",
            details: None,
            fields: Some(errors),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::not_found("Resource not found"),

            sqlx::Error::Database(db) if db.is_unique_violation() => {
                Self::bad_request("Unique constraint violation")
            }

            sqlx::Error::Database(_) => Self::bad_request("Database error"),

            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                Self::service_unavailable("Database unavailable")
            }

            _ => Self::internal_server_error("Internal server error"),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::validation(err)
    }
}

impl From<UniqueCheckError> for AppError {
    fn from(err: UniqueCheckError) -> Self {
        match err {
            // deployment misconfiguration, not a validation outcome
            UniqueCheckError::UnknownColumn(column) => {
                Self::internal_server_error("Uniqueness rule misconfigured")
                    .with_details(format!("column '{column}' is not declared by the entity"))
            }
            UniqueCheckError::Db(err) => Self::from(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = Json(ErrorResponse {
            error: self.message,
            details: self.details,
            fields: self.fields,
        });
        (self.status, body).into_response()
    }
}
