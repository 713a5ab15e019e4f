//! Language entity - classifier row for ISO languages

use super::traits::{Entity, SqliteQuery};
use serde::{Deserialize, Serialize};

/// One row of the Languages classifier.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Language {
    /// ID, allocated by the database on insert.
    pub id: i16,
    /// ISO language name.
    pub name: String,
    /// ISO 639-1 alpha-2 code.
    pub alpha2: String,
    /// Language notes.
    pub notes: Option<String>,
    /// The digital code consisting of 3 Arabic numerals, assigned to
    /// languages arranged in the order of Russian names.
    pub digital_code: Option<String>,
}

impl Entity for Language {
    type Id = i16;

    const TABLE: &'static str = "languages";
    const ID_COLUMN: &'static str = "id";
    const DATA_COLUMNS: &'static [&'static str] = &["name", "alpha2", "notes", "digital_code"];

    fn id(&self) -> i16 {
        self.id
    }

    fn assign_id(&mut self, raw: i64) {
        self.id = raw as i16;
    }

    fn bind_data<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.name.clone())
            .bind(self.alpha2.clone())
            .bind(self.notes.clone())
            .bind(self.digital_code.clone())
    }
}
