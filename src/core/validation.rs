//! Uniqueness validation
//!
//! Runs a view model's declarative rules together with its uniqueness
//! rules. Each rule closes over nothing: it names a column and reads the
//! candidate value off the DTO, and the repository to query is passed in
//! explicitly by the handler that owns it.

use crate::core::AppError;
use crate::entities::Entity;
use crate::repositories::{FieldValue, GenericRepository};
use validator::{Validate, ValidationError, ValidationErrors};

/// One uniqueness rule for a view model: the column it guards and how to
/// read the submitted value.
pub struct UniqueRule<D> {
    pub field: &'static str,
    pub value: fn(&D) -> FieldValue,
}

fn unique_violation(field: &'static str) -> ValidationError {
    let mut error = ValidationError::new("unique");
    error.message = Some(format!("The {field} value must be unique.").into());
    error
}

/// Validates a view model before any persistence call.
///
/// Runs the `validator` derive rules first, then one uniqueness query per
/// rule, excluding `exclude_id` so an edit never collides with its own
/// row. Every failure is collected before reporting; the caller gets one
/// 400 with the full per-field picture. Repository and wiring errors do
/// not masquerade as validation failures.
pub async fn validate_dto<D, E>(
    dto: &D,
    exclude_id: FieldValue,
    rules: &[UniqueRule<D>],
    repo: &GenericRepository<E>,
) -> Result<(), AppError>
where
    D: Validate,
    E: Entity,
{
    let mut errors = match dto.validate() {
        Ok(()) => ValidationErrors::new(),
        Err(errors) => errors,
    };

    for rule in rules {
        let value = (rule.value)(dto);

        if !repo.is_unique(rule.field, &value, &exclude_id).await? {
            errors.add(rule.field, unique_violation(rule.field));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::validation(errors))
    }
}
