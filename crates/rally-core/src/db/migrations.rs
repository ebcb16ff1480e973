//! Database schema initialization and migrations.

use crate::error::{CoordinatorError, DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Apply migrations for databases created before newer columns existed.
    fn apply_migrations(&self) -> Result<()> {
        // trip_kind arrived after the first schema revision.
        let has_trip_kind: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('participants') WHERE name = 'trip_kind'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        if !has_trip_kind {
            self.connection
                .execute("ALTER TABLE participants ADD COLUMN trip_kind TEXT", [])
                .map_err(|e| {
                    CoordinatorError::database(
                        "Failed to add trip_kind column to participants table",
                        e,
                    )
                })?;
        }

        Ok(())
    }
}
