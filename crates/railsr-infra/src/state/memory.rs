//! In-memory node-state store.
//!
//! Used when no persistent state is needed (one-shot commands, tests).
//! State is lost when the process exits.

use dashmap::DashMap;

use railsr_core::storage::node_state::NodeStateStore;
use railsr_types::error::RepositoryError;
use railsr_types::webhook::TriggerNodeId;

/// DashMap-backed implementation of [`NodeStateStore`].
#[derive(Default)]
pub struct InMemoryNodeStateStore {
    entries: DashMap<(TriggerNodeId, String), String>,
}

impl InMemoryNodeStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries across all nodes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl NodeStateStore for InMemoryNodeStateStore {
    async fn get(
        &self,
        node: &TriggerNodeId,
        key: &str,
    ) -> Result<Option<String>, RepositoryError> {
        Ok(self
            .entries
            .get(&(node.clone(), key.to_string()))
            .map(|entry| entry.value().clone()))
    }

    async fn set(
        &self,
        node: &TriggerNodeId,
        key: &str,
        value: &str,
    ) -> Result<(), RepositoryError> {
        self.entries
            .insert((node.clone(), key.to_string()), value.to_string());
        Ok(())
    }

    async fn delete(&self, node: &TriggerNodeId, key: &str) -> Result<(), RepositoryError> {
        self.entries.remove(&(node.clone(), key.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_delete() {
        let store = InMemoryNodeStateStore::new();
        let node = TriggerNodeId::new("n1");

        assert!(store.get(&node, "webhookId").await.unwrap().is_none());
        store.set(&node, "webhookId", "wh_1").await.unwrap();
        assert_eq!(
            store.get(&node, "webhookId").await.unwrap().as_deref(),
            Some("wh_1")
        );

        store.delete(&node, "webhookId").await.unwrap();
        assert!(store.is_empty());
        // deleting again is a no-op
        store.delete(&node, "webhookId").await.unwrap();
    }

    #[tokio::test]
    async fn test_nodes_are_isolated() {
        let store = InMemoryNodeStateStore::new();
        let a = TriggerNodeId::new("a");
        let b = TriggerNodeId::new("b");

        store.set(&a, "webhookId", "wh_a").await.unwrap();
        assert!(store.get(&b, "webhookId").await.unwrap().is_none());
        assert_eq!(store.len(), 1);
    }
}
