//! Repositories module - the data access layer
//!
//! A single generic implementation covers the CRUD surface for every
//! entity; per-entity modules only pin the generic repository to their
//! entity type. The uniqueness check lives here too, next to the reads it
//! must stay consistent with.

pub mod generic;
pub mod language;
pub mod query;

// Re-exports to simplify imports
pub use generic::GenericRepository;
pub use language::LanguageRepository;
pub use query::{FieldValue, UniqueCheckError, compose_unique_check};
