//! Uniqueness query composition
//!
//! Builds the existence check behind every uniqueness rule from a column
//! name, a candidate value and the ID of the row to leave out. Column names
//! are late-bound: they are resolved against the entity's declared columns
//! here, not at compile time.

use crate::entities::Entity;
use std::fmt;

/// A value captured off a view model for a uniqueness check.
///
/// Covers the column types the classifier tables use; `Null` marks an
/// absent optional value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Integer(i64),
    Text(String),
    Null,
}

impl FieldValue {
    /// True for the type's default/zero value.
    ///
    /// Create flows carry an unset ID, which must not exclude any row from
    /// the check. An ID that legitimately equals zero would therefore fail
    /// to exclude its own row; classifier IDs start at 1, which keeps the
    /// sentinel unambiguous.
    pub fn is_zero(&self) -> bool {
        match self {
            FieldValue::Integer(value) => *value == 0,
            FieldValue::Text(value) => value.is_empty(),
            FieldValue::Null => true,
        }
    }
}

impl From<i16> for FieldValue {
    fn from(value: i16) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<Option<String>> for FieldValue {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(text) => FieldValue::Text(text),
            None => FieldValue::Null,
        }
    }
}

/// Error raised by a uniqueness check.
#[derive(Debug)]
pub enum UniqueCheckError {
    /// The rule names a column the entity does not declare. This is broken
    /// wiring, not a user input problem, and is never recovered.
    UnknownColumn(String),
    /// The underlying query failed.
    Db(sqlx::Error),
}

impl fmt::Display for UniqueCheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UniqueCheckError::UnknownColumn(column) => {
                write!(f, "column '{column}' is not declared by the entity")
            }
            UniqueCheckError::Db(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for UniqueCheckError {}

impl From<sqlx::Error> for UniqueCheckError {
    fn from(err: sqlx::Error) -> Self {
        UniqueCheckError::Db(err)
    }
}

/// Composes the uniqueness check for one column of `E`:
/// `SELECT COUNT(1) FROM {table} WHERE {column} = ? AND {id} <> ?`.
///
/// The exclusion clause is dropped entirely when `exclude_id` is the zero
/// value: on create there is no row of its own to leave out, so the check
/// runs against the whole table. Edit flows must pass the real assigned ID
/// or a record would collide with its own stored values.
pub fn compose_unique_check<E: Entity>(
    column: &str,
    exclude_id: &FieldValue,
) -> Result<String, UniqueCheckError> {
    if !E::DATA_COLUMNS.contains(&column) {
        return Err(UniqueCheckError::UnknownColumn(column.to_string()));
    }

    let mut sql = format!("SELECT COUNT(1) FROM {} WHERE {} = ?", E::TABLE, column);

    if !exclude_id.is_zero() {
        sql.push_str(&format!(" AND {} <> ?", E::ID_COLUMN));
    }

    Ok(sql)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Language;

    #[test]
    fn zero_id_checks_the_whole_table() {
        let sql = compose_unique_check::<Language>("alpha2", &FieldValue::Integer(0)).unwrap();

        assert_eq!(sql, "SELECT COUNT(1) FROM languages WHERE alpha2 = ?");
    }

    #[test]
    fn assigned_id_excludes_its_own_row() {
        let sql = compose_unique_check::<Language>("alpha2", &FieldValue::Integer(5)).unwrap();

        assert_eq!(
            sql,
            "SELECT COUNT(1) FROM languages WHERE alpha2 = ? AND id <> ?"
        );
    }

    #[test]
    fn absent_id_behaves_like_zero() {
        let sql = compose_unique_check::<Language>("name", &FieldValue::Null).unwrap();

        assert_eq!(sql, "SELECT COUNT(1) FROM languages WHERE name = ?");
    }

    #[test]
    fn unknown_column_is_rejected() {
        let err = compose_unique_check::<Language>("password", &FieldValue::Integer(0))
            .expect_err("undeclared column must not reach SQL");

        assert!(matches!(err, UniqueCheckError::UnknownColumn(column) if column == "password"));
    }

    #[test]
    fn id_column_is_not_a_data_column() {
        // the check target must be a data column, never the ID itself
        assert!(compose_unique_check::<Language>("id", &FieldValue::Integer(0)).is_err());
    }

    #[test]
    fn zero_values_are_detected_per_type() {
        assert!(FieldValue::Integer(0).is_zero());
        assert!(FieldValue::Text(String::new()).is_zero());
        assert!(FieldValue::Null.is_zero());
        assert!(!FieldValue::Integer(7).is_zero());
        assert!(!FieldValue::Text("eo".to_string()).is_zero());
    }
}
