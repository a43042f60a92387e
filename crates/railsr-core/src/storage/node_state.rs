//! Node-state store trait.
//!
//! Persistent key-value state scoped to one trigger-node instance. The
//! webhook lifecycle keeps the remote subscription id here.
//! Implementations live in railsr-infra.

use railsr_types::error::RepositoryError;
use railsr_types::webhook::TriggerNodeId;

/// Trait for trigger-node scoped string storage.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
pub trait NodeStateStore: Send + Sync {
    /// Get a value by key. Returns None if the key does not exist.
    fn get(
        &self,
        node: &TriggerNodeId,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>, RepositoryError>> + Send;

    /// Set a value for a key (upsert).
    fn set(
        &self,
        node: &TriggerNodeId,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Delete a key. No-op if the key does not exist.
    fn delete(
        &self,
        node: &TriggerNodeId,
        key: &str,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
