//! Database handle — pool construction and schema migrations.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;

use crate::error::StorageError;

/// Owns the `SQLite` connection pool backing the value store.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open the database at `url`, creating the file if missing, and bring
    /// the schema up to date.
    ///
    /// Accepts any `sqlx` `SQLite` URL, e.g. `sqlite:hearth.db?mode=rwc`
    /// or `sqlite::memory:`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the pool cannot be opened or a
    /// migration fails.
    pub async fn connect(url: &str) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self { pool })
    }

    /// The underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_migrate_schema_on_connect() {
        let db = Database::connect("sqlite::memory:").await.unwrap();

        let exists: (i64,) = sqlx::query_as(
            "SELECT count(*) FROM sqlite_master WHERE type = 'table' AND name = 'param_values'",
        )
        .fetch_one(db.pool())
        .await
        .unwrap();

        assert_eq!(exists.0, 1);
    }
}
