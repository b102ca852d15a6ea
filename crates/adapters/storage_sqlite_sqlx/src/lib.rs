//! # hearth-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence for accepted parameter values. A restarted node
//! loads the values it committed before shutdown and seeds its devices
//! with them instead of the declared defaults.

mod error;
mod pool;
mod value_store;

pub use error::StorageError;
pub use pool::Database;
pub use value_store::SqliteValueStore;
