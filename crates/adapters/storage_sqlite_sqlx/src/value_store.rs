//! `SQLite` implementation of the [`ValueStore`] port.

use sqlx::SqlitePool;

use hearth_app::ports::ValueStore;
use hearth_domain::error::HearthError;
use hearth_domain::time::now;
use hearth_domain::value::ParamValue;

use crate::error::StorageError;

const UPSERT: &str = r"
    INSERT INTO param_values (device_name, param_name, value, updated_at)
    VALUES (?, ?, ?, ?)
    ON CONFLICT (device_name, param_name)
    DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
";

const SELECT_BY_DEVICE: &str = r"
    SELECT param_name, value FROM param_values WHERE device_name = ?
";

/// `SQLite`-backed store of last accepted parameter values.
pub struct SqliteValueStore {
    pool: SqlitePool,
}

impl SqliteValueStore {
    /// Create a new store using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ValueStore for SqliteValueStore {
    async fn load(&self, device: &str) -> Result<Vec<(String, ParamValue)>, HearthError> {
        let rows: Vec<(String, String)> = sqlx::query_as(SELECT_BY_DEVICE)
            .bind(device)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        let mut values = Vec::with_capacity(rows.len());
        for (name, json) in rows {
            let value: ParamValue = serde_json::from_str(&json).map_err(StorageError::from)?;
            values.push((name, value));
        }
        Ok(values)
    }

    async fn save(&self, device: &str, param: &str, value: &ParamValue) -> Result<(), HearthError> {
        let json = serde_json::to_string(value).map_err(StorageError::from)?;

        sqlx::query(UPSERT)
            .bind(device)
            .bind(param)
            .bind(&json)
            .bind(now().to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Database;

    async fn store() -> SqliteValueStore {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        SqliteValueStore::new(db.pool().clone())
    }

    #[tokio::test]
    async fn should_return_empty_list_for_unknown_device() {
        let store = store().await;
        let values = store.load("Light").await.unwrap();
        assert!(values.is_empty());
    }

    #[tokio::test]
    async fn should_roundtrip_saved_values() {
        let store = store().await;

        store
            .save("Light", "Power", &ParamValue::Bool(true))
            .await
            .unwrap();
        store
            .save("Light", "Brightness", &ParamValue::Int(80))
            .await
            .unwrap();

        let mut values = store.load("Light").await.unwrap();
        values.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(
            values,
            vec![
                ("Brightness".to_string(), ParamValue::Int(80)),
                ("Power".to_string(), ParamValue::Bool(true)),
            ]
        );
    }

    #[tokio::test]
    async fn should_replace_value_on_repeated_save() {
        let store = store().await;

        store
            .save("Light", "Brightness", &ParamValue::Int(40))
            .await
            .unwrap();
        store
            .save("Light", "Brightness", &ParamValue::Int(80))
            .await
            .unwrap();

        let values = store.load("Light").await.unwrap();
        assert_eq!(values, vec![("Brightness".to_string(), ParamValue::Int(80))]);
    }

    #[tokio::test]
    async fn should_scope_values_by_device_name() {
        let store = store().await;

        store
            .save("Light", "Power", &ParamValue::Bool(true))
            .await
            .unwrap();
        store
            .save("Switch", "Power", &ParamValue::Bool(false))
            .await
            .unwrap();

        let light = store.load("Light").await.unwrap();
        assert_eq!(light, vec![("Power".to_string(), ParamValue::Bool(true))]);

        let switch = store.load("Switch").await.unwrap();
        assert_eq!(switch, vec![("Power".to_string(), ParamValue::Bool(false))]);
    }

    #[tokio::test]
    async fn should_roundtrip_string_values() {
        let store = store().await;

        store
            .save("Light", "Name", &ParamValue::String("Desk Lamp".to_string()))
            .await
            .unwrap();

        let values = store.load("Light").await.unwrap();
        assert_eq!(
            values,
            vec![(
                "Name".to_string(),
                ParamValue::String("Desk Lamp".to_string())
            )]
        );
    }
}
