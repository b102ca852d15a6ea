//! Storage-layer errors.

use hearth_domain::error::HearthError;

/// Failure inside the `SQLite` value store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The pool or a query failed.
    #[error("sqlite failure")]
    Database(#[from] sqlx::Error),

    /// A stored value was not valid JSON for [`ParamValue`].
    ///
    /// [`ParamValue`]: hearth_domain::value::ParamValue
    #[error("stored value is not valid JSON")]
    Json(#[from] serde_json::Error),

    /// Bringing the schema up to date failed.
    #[error("schema migration failed")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for HearthError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
