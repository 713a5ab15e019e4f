//! Generic repository
//!
//! One reusable implementation of the CRUD surface over any [`Entity`],
//! backed by the shared connection pool. Every statement is derived from the
//! entity's table metadata, so a new entity only declares its columns and
//! gets list/get/create/update/delete plus the uniqueness check for free.

use super::query::{FieldValue, UniqueCheckError, compose_unique_check};
use crate::entities::Entity;
use sqlx::{Error, SqlitePool};
use std::marker::PhantomData;

/// CRUD operations over a single entity type and its ID type.
///
/// Returned entities are plain detached values: mutating one has no effect
/// until it is passed back through [`update`](Self::update).
pub struct GenericRepository<E: Entity> {
    pool: SqlitePool,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> GenericRepository<E> {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    /// ID column followed by the data columns, for SELECT lists.
    fn select_columns() -> String {
        let mut columns = vec![E::ID_COLUMN];
        columns.extend_from_slice(E::DATA_COLUMNS);

        columns.join(", ")
    }

    /// Reads every row of the backing table. Repeated reads are
    /// side-effect-free; nothing is cached.
    pub async fn get_all(&self) -> Result<Vec<E>, Error> {
        let sql = format!("SELECT {} FROM {}", Self::select_columns(), E::TABLE);

        sqlx::query_as::<_, E>(&sql).fetch_all(&self.pool).await
    }

    /// Looks up a row by ID. An absent ID is `None`, never an error.
    pub async fn get_by_id(&self, id: E::Id) -> Result<Option<E>, Error> {
        let sql = format!(
            "SELECT {} FROM {} WHERE {} = ?",
            Self::select_columns(),
            E::TABLE,
            E::ID_COLUMN
        );

        sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Inserts the entity and returns it with the ID allocated by the store.
    ///
    /// UNIQUE and NOT NULL violations surface as database errors here; the
    /// validation layer is expected to have filtered them out already.
    pub async fn create(&self, entity: &E) -> Result<E, Error> {
        let placeholders = vec!["?"; E::DATA_COLUMNS.len()].join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            E::TABLE,
            E::DATA_COLUMNS.join(", "),
            placeholders
        );

        let result = entity.bind_data(sqlx::query(&sql)).execute(&self.pool).await?;

        let mut created = entity.clone();
        created.assign_id(result.last_insert_rowid());

        Ok(created)
    }

    /// Replaces every data column of the row with the entity's ID and
    /// returns the number of rows affected.
    ///
    /// Zero rows means the row was deleted underneath us; the caller decides
    /// whether that is a not-found or a conflict.
    pub async fn update(&self, entity: &E) -> Result<u64, Error> {
        let assignments = E::DATA_COLUMNS
            .iter()
            .map(|column| format!("{column} = ?"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "UPDATE {} SET {} WHERE {} = ?",
            E::TABLE,
            assignments,
            E::ID_COLUMN
        );

        let result = entity
            .bind_data(sqlx::query(&sql))
            .bind(entity.id())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Removes the row with the given ID. An absent ID is a no-op
    /// returning 0.
    pub async fn delete(&self, id: E::Id) -> Result<u64, Error> {
        if self.get_by_id(id).await?.is_none() {
            return Ok(0);
        }

        let sql = format!("DELETE FROM {} WHERE {} = ?", E::TABLE, E::ID_COLUMN);
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;

        Ok(result.rows_affected())
    }

    /// True iff a row with the given ID is present. Used to tell
    /// "not found" apart from a lost update after a zero-row replace.
    pub async fn exists(&self, id: E::Id) -> Result<bool, Error> {
        let sql = format!(
            "SELECT COUNT(1) FROM {} WHERE {} = ?",
            E::TABLE,
            E::ID_COLUMN
        );

        let count: i64 = sqlx::query_scalar(&sql).bind(id).fetch_one(&self.pool).await?;

        Ok(count > 0)
    }

    /// True iff no *other* row shares `value` in `column`.
    ///
    /// Runs against the same table the CRUD calls write, so the answer and
    /// the stored data cannot drift apart. A `Null` candidate is exempt,
    /// matching the storage engine's own treatment of NULL under UNIQUE.
    pub async fn is_unique(
        &self,
        column: &str,
        value: &FieldValue,
        exclude_id: &FieldValue,
    ) -> Result<bool, UniqueCheckError> {
        if matches!(value, FieldValue::Null) {
            return Ok(true);
        }

        let sql = compose_unique_check::<E>(column, exclude_id)?;

        let mut query = sqlx::query_scalar(&sql);
        query = match value {
            FieldValue::Integer(value) => query.bind(*value),
            FieldValue::Text(value) => query.bind(value.clone()),
            FieldValue::Null => query.bind(Option::<String>::None),
        };
        if !exclude_id.is_zero() {
            query = match exclude_id {
                FieldValue::Integer(id) => query.bind(*id),
                FieldValue::Text(id) => query.bind(id.clone()),
                FieldValue::Null => query.bind(Option::<String>::None),
            };
        }

        let count: i64 = query.fetch_one(&self.pool).await?;

        Ok(count == 0)
    }
}
