//! Application state wiring the connector together.
//!
//! AppState holds the configuration and the concrete infra implementations
//! used by the CLI commands. Core services are generic over the
//! `ApiClient`/`NodeStateStore` traits; the aliases below pin them.

use std::sync::Arc;

use anyhow::Context;
use tokio::sync::mpsc;

use railsr_core::executor::ItemExecutor;
use railsr_core::webhook::WebhookLifecycle;
use railsr_infra::config::load_adapter_config;
use railsr_infra::credential::resolve_credential;
use railsr_infra::http::RailsrHttpClient;
use railsr_infra::paths::{database_url, resolve_data_dir};
use railsr_infra::sqlite::{DatabasePool, SqliteNodeStateStore};
use railsr_types::config::AdapterConfig;
use railsr_types::webhook::{EventSelection, NormalizedEvent, TriggerNodeId};

/// Concrete type aliases for the core generics pinned to infra implementations.
pub type ConcreteExecutor = ItemExecutor<RailsrHttpClient>;
pub type ConcreteLifecycle = WebhookLifecycle<RailsrHttpClient, SqliteNodeStateStore>;

/// Shared application state for CLI commands that touch Railsr or node state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AdapterConfig>,
    pub node_state: Arc<SqliteNodeStateStore>,
}

impl AppState {
    /// Initialize the application state: load config, open the state DB.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();

        // Ensure data directory exists
        tokio::fs::create_dir_all(&data_dir)
            .await
            .with_context(|| format!("failed to create data directory {}", data_dir.display()))?;

        let config = load_adapter_config(&data_dir).await;

        let db_pool = DatabasePool::new(&database_url(&data_dir))
            .await
            .context("failed to open node-state database")?;

        Ok(Self {
            config: Arc::new(config),
            node_state: Arc::new(SqliteNodeStateStore::new(db_pool)),
        })
    }

    /// Build an API client from the resolved credential.
    ///
    /// Resolved lazily so that commands not talking to Railsr work without
    /// credentials.
    pub fn client(&self) -> anyhow::Result<Arc<RailsrHttpClient>> {
        let credential = resolve_credential(&self.config.credentials)
            .context("Railsr credentials are incomplete (set RAILSR_API_KEY, RAILSR_API_SECRET, RAILSR_PROGRAM_ID or [credentials] in config.toml)")?;
        let client = RailsrHttpClient::new(&credential)?;
        tracing::debug!(environment = %credential.environment, "Railsr client ready");
        Ok(Arc::new(client))
    }

    /// Item executor honoring `continue_on_fail` from config or the flag.
    pub fn executor(&self, continue_on_fail: bool) -> anyhow::Result<ConcreteExecutor> {
        Ok(ItemExecutor::new(self.client()?)
            .continue_on_fail(continue_on_fail || self.config.continue_on_fail))
    }

    /// Trigger-node id, with an optional override.
    pub fn node_id(&self, node: Option<String>) -> TriggerNodeId {
        TriggerNodeId::new(node.unwrap_or_else(|| self.config.trigger.node_id.clone()))
    }

    /// Event selection, with an optional override.
    pub fn selection(&self, events: Option<Vec<String>>) -> EventSelection {
        match events {
            Some(events) => EventSelection::new(events),
            None => self.config.trigger.events.clone(),
        }
    }

    /// Webhook lifecycle for a trigger node.
    pub fn lifecycle(
        &self,
        node: TriggerNodeId,
        callback_url: Option<String>,
        events: EventSelection,
    ) -> anyhow::Result<ConcreteLifecycle> {
        let callback_url = callback_url
            .or_else(|| self.config.receiver.callback_url.clone())
            .context("no callback URL (pass --callback-url or set receiver.callback_url)")?;
        Ok(WebhookLifecycle::new(
            self.client()?,
            Arc::clone(&self.node_state),
            node,
            callback_url,
            events,
        ))
    }
}

/// State shared by the webhook receiver handlers.
#[derive(Clone)]
pub struct ReceiverState {
    pub selection: Arc<EventSelection>,
    pub sink: mpsc::UnboundedSender<NormalizedEvent>,
}
