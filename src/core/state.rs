//! Application state - shared state of the application
//!
//! Holds one repository instance per entity, all wired to the same
//! connection pool. This is the whole service registration: an entity is
//! exposed by adding its repository here and its routes to the router.

use crate::repositories::LanguageRepository;
use sqlx::SqlitePool;

/// Global application state shared between all routes.
pub struct AppState {
    /// Repository handling the Languages classifier.
    pub languages: LanguageRepository,
}

impl AppState {
    /// Creates a new AppState, wiring every repository to the given
    /// connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            languages: LanguageRepository::new(pool),
        }
    }
}
