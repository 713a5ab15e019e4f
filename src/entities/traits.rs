//! Entity contract
//!
//! This module defines the capability every persisted type must expose so the
//! generic repository can manage it: a readable unique ID plus the static
//! table metadata used to compose SQL at runtime.

use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{FromRow, Sqlite};
use std::fmt::Display;

/// Alias for a runtime-built sqlite statement, used when binding entity
/// fields without knowing the entity type at compile time.
pub type SqliteQuery<'q> = sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>;

/// The domain type a repository manages.
///
/// Identity is by value-equality of the ID. The associated metadata drives
/// the generic repository and the uniqueness query composer; each entity
/// declares its table once and every query is derived from it.
pub trait Entity:
    for<'r> FromRow<'r, SqliteRow> + Clone + Send + Sync + Unpin + 'static
{
    /// The data type of the ID of the entity.
    type Id: Copy
        + Default
        + PartialEq
        + Display
        + Send
        + Sync
        + sqlx::Type<Sqlite>
        + for<'q> sqlx::Encode<'q, Sqlite>
        + 'static;

    /// Backing table name.
    const TABLE: &'static str;

    /// Name of the ID column.
    const ID_COLUMN: &'static str;

    /// Data column names, in the order `bind_data` binds them.
    /// The ID column is excluded; the store allocates it.
    const DATA_COLUMNS: &'static [&'static str];

    /// Gets the ID of the entity.
    fn id(&self) -> Self::Id;

    /// Overwrites the ID with the row id allocated by the store on insert.
    fn assign_id(&mut self, raw: i64);

    /// Binds the data columns onto a statement, in `DATA_COLUMNS` order.
    fn bind_data<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q>;
}
