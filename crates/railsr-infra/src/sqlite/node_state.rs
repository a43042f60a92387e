//! SQLite node-state store implementation.
//!
//! Implements `NodeStateStore` from `railsr-core` using sqlx with split
//! read/write pools.

use chrono::Utc;
use sqlx::Row;

use railsr_core::storage::node_state::NodeStateStore;
use railsr_types::error::RepositoryError;
use railsr_types::webhook::TriggerNodeId;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `NodeStateStore`.
pub struct SqliteNodeStateStore {
    pool: DatabasePool,
}

impl SqliteNodeStateStore {
    /// Create a new store backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

impl NodeStateStore for SqliteNodeStateStore {
    async fn get(
        &self,
        node: &TriggerNodeId,
        key: &str,
    ) -> Result<Option<String>, RepositoryError> {
        let row = sqlx::query("SELECT value FROM node_state WHERE node_id = ? AND key = ?")
            .bind(node.as_str())
            .bind(key)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        row.map(|row| row.try_get::<String, _>("value"))
            .transpose()
            .map_err(|e| RepositoryError::Query(e.to_string()))
    }

    async fn set(
        &self,
        node: &TriggerNodeId,
        key: &str,
        value: &str,
    ) -> Result<(), RepositoryError> {
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            r#"INSERT INTO node_state (node_id, key, value, created_at, updated_at)
               VALUES (?, ?, ?, ?, ?)
               ON CONFLICT (node_id, key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at"#,
        )
        .bind(node.as_str())
        .bind(key)
        .bind(value)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }

    async fn delete(&self, node: &TriggerNodeId, key: &str) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM node_state WHERE node_id = ? AND key = ?")
            .bind(node.as_str())
            .bind(key)
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_store() -> (SqliteNodeStateStore, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("state.db").display());
        let pool = DatabasePool::new(&url).await.unwrap();
        (SqliteNodeStateStore::new(pool), dir)
    }

    #[tokio::test]
    async fn test_set_and_get() {
        let (store, _dir) = test_store().await;
        let node = TriggerNodeId::new("default");

        store.set(&node, "webhookId", "wh_1").await.unwrap();
        assert_eq!(
            store.get(&node, "webhookId").await.unwrap().as_deref(),
            Some("wh_1")
        );
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let (store, _dir) = test_store().await;
        let node = TriggerNodeId::new("default");
        assert!(store.get(&node, "webhookId").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_upserts() {
        let (store, _dir) = test_store().await;
        let node = TriggerNodeId::new("default");

        store.set(&node, "webhookId", "wh_1").await.unwrap();
        store.set(&node, "webhookId", "wh_2").await.unwrap();
        assert_eq!(
            store.get(&node, "webhookId").await.unwrap().as_deref(),
            Some("wh_2")
        );
    }

    #[tokio::test]
    async fn test_delete_and_isolation() {
        let (store, _dir) = test_store().await;
        let a = TriggerNodeId::new("a");
        let b = TriggerNodeId::new("b");

        store.set(&a, "webhookId", "wh_a").await.unwrap();
        store.set(&b, "webhookId", "wh_b").await.unwrap();
        store.delete(&a, "webhookId").await.unwrap();

        assert!(store.get(&a, "webhookId").await.unwrap().is_none());
        assert_eq!(
            store.get(&b, "webhookId").await.unwrap().as_deref(),
            Some("wh_b")
        );
        // deleting a missing key is a no-op
        store.delete(&a, "webhookId").await.unwrap();
    }

    #[tokio::test]
    async fn test_state_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("state.db").display());
        let node = TriggerNodeId::new("default");

        {
            let store = SqliteNodeStateStore::new(DatabasePool::new(&url).await.unwrap());
            store.set(&node, "webhookId", "wh_9").await.unwrap();
        }

        let store = SqliteNodeStateStore::new(DatabasePool::new(&url).await.unwrap());
        assert_eq!(
            store.get(&node, "webhookId").await.unwrap().as_deref(),
            Some("wh_9")
        );
    }
}
