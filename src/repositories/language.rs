//! LanguageRepository - the Languages instantiation of the generic repository

use super::GenericRepository;
use crate::entities::Language;

/// Repository handling the Languages classifier table. All behavior comes
/// from [`GenericRepository`]; this alias is the whole per-entity wiring on
/// the data side.
pub type LanguageRepository = GenericRepository<Language>;

#[cfg(test)]
mod tests {
    use crate::entities::Language;
    use crate::repositories::{FieldValue, LanguageRepository};
    use sqlx::SqlitePool;

    fn esperanto() -> Language {
        Language {
            id: 0,
            name: "Esperanto".to_string(),
            alpha2: "eo".to_string(),
            notes: None,
            digital_code: None,
        }
    }

    #[sqlx::test]
    async fn create_assigns_id_and_roundtrips(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = LanguageRepository::new(pool);

        let created = repo.create(&esperanto()).await?;
        assert!(created.id > 0);

        let found = repo
            .get_by_id(created.id)
            .await?
            .expect("created row must be readable");

        assert_eq!(found, created);

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("languages")))]
    async fn get_all_returns_every_row(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = LanguageRepository::new(pool);

        let all = repo.get_all().await?;

        assert_eq!(all.len(), 3);
        assert!(all.iter().any(|l| l.alpha2 == "en"));

        Ok(())
    }

    #[sqlx::test]
    async fn get_by_id_on_empty_table_is_none(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = LanguageRepository::new(pool);

        assert!(repo.get_by_id(42).await?.is_none());

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("languages")))]
    async fn update_replaces_the_whole_row(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = LanguageRepository::new(pool);

        let mut english = repo.get_by_id(1).await?.expect("fixture row");
        english.name = "English (updated)".to_string();
        english.notes = Some("Germanic language".to_string());

        let affected = repo.update(&english).await?;
        assert_eq!(affected, 1);

        let stored = repo.get_by_id(1).await?.expect("fixture row");
        assert_eq!(stored, english);

        Ok(())
    }

    #[sqlx::test]
    async fn update_of_a_vanished_row_affects_nothing(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = LanguageRepository::new(pool);

        let mut ghost = esperanto();
        ghost.id = 99;

        assert_eq!(repo.update(&ghost).await?, 0);

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("languages")))]
    async fn delete_removes_the_row(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = LanguageRepository::new(pool);

        assert_eq!(repo.delete(2).await?, 1);
        assert!(repo.get_by_id(2).await?.is_none());

        Ok(())
    }

    #[sqlx::test]
    async fn delete_of_an_absent_id_is_a_noop(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = LanguageRepository::new(pool);

        assert_eq!(repo.delete(7).await?, 0);

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("languages")))]
    async fn exists_tracks_presence(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = LanguageRepository::new(pool);

        assert!(repo.exists(1).await?);
        assert!(!repo.exists(9).await?);

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("languages")))]
    async fn is_unique_sees_taken_values(pool: SqlitePool) {
        let repo = LanguageRepository::new(pool);

        let taken = repo
            .is_unique("alpha2", &FieldValue::from("en"), &FieldValue::Integer(0))
            .await
            .unwrap();
        let free = repo
            .is_unique("alpha2", &FieldValue::from("eo"), &FieldValue::Integer(0))
            .await
            .unwrap();

        assert!(!taken);
        assert!(free);
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("languages")))]
    async fn is_unique_never_compares_a_row_against_itself(pool: SqlitePool) {
        let repo = LanguageRepository::new(pool);

        // row 1 resubmitting its own alpha2 with its own ID excluded
        let unique = repo
            .is_unique("alpha2", &FieldValue::from("en"), &FieldValue::Integer(1))
            .await
            .unwrap();

        assert!(unique);
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("languages")))]
    async fn is_unique_exempts_absent_values(pool: SqlitePool) {
        let repo = LanguageRepository::new(pool);

        // two fixture rows already carry NULL notes
        let unique = repo
            .is_unique("notes", &FieldValue::Null, &FieldValue::Integer(0))
            .await
            .unwrap();

        assert!(unique);
    }

    #[sqlx::test]
    async fn is_unique_rejects_undeclared_columns(pool: SqlitePool) {
        let repo = LanguageRepository::new(pool);

        let err = repo
            .is_unique("password", &FieldValue::from("x"), &FieldValue::Integer(0))
            .await
            .expect_err("undeclared column must fail fast");

        assert!(err.to_string().contains("password"));
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("languages")))]
    async fn storage_rejects_duplicates_below_validation(pool: SqlitePool) {
        let repo = LanguageRepository::new(pool);

        let mut duplicate = esperanto();
        duplicate.alpha2 = "en".to_string();

        // bypasses the validation layer on purpose; the UNIQUE constraint
        // in the schema is the second line of defense
        let err = repo.create(&duplicate).await.expect_err("must violate UNIQUE");

        assert!(matches!(err, sqlx::Error::Database(_)));
    }
}
