//! Remote webhook subscription lifecycle for one trigger node.
//!
//! The remote id is persisted in the node's state store under
//! [`WEBHOOK_ID_KEY`]. Lifecycle calls are the only writers of that key.

use std::sync::Arc;

use serde_json::{Map, Value};

use railsr_types::error::{AdapterError, ConfigurationError};
use railsr_types::request::ApiRequest;
use railsr_types::webhook::{
    EventSelection, RegistrationState, TriggerNodeId, WEBHOOK_ID_KEY, WebhookSubscription,
};

use crate::client::ApiClient;
use crate::storage::node_state::NodeStateStore;

/// Manages the remote subscription backing one trigger node.
pub struct WebhookLifecycle<C, S> {
    client: Arc<C>,
    store: Arc<S>,
    node: TriggerNodeId,
    callback_url: String,
    events: EventSelection,
}

impl<C: ApiClient, S: NodeStateStore> WebhookLifecycle<C, S> {
    pub fn new(
        client: Arc<C>,
        store: Arc<S>,
        node: TriggerNodeId,
        callback_url: impl Into<String>,
        events: EventSelection,
    ) -> Self {
        Self {
            client,
            store,
            node,
            callback_url: callback_url.into(),
            events,
        }
    }

    pub fn node(&self) -> &TriggerNodeId {
        &self.node
    }

    pub fn callback_url(&self) -> &str {
        &self.callback_url
    }

    pub fn events(&self) -> &EventSelection {
        &self.events
    }

    /// Current persisted registration state.
    pub async fn state(&self) -> Result<RegistrationState, AdapterError> {
        Ok(match self.store.get(&self.node, WEBHOOK_ID_KEY).await? {
            Some(remote_id) => RegistrationState::Registered { remote_id },
            None => RegistrationState::Unregistered,
        })
    }

    /// Check whether a remote subscription for this node exists.
    ///
    /// With a persisted id, the subscription is fetched directly and any
    /// failure clears the id. Without one, the remote list is searched for an
    /// entry pointing at our callback URL and its id is adopted. Listing
    /// failures are treated as "not found".
    pub async fn ensure_exists(&self) -> Result<bool, AdapterError> {
        if let Some(remote_id) = self.store.get(&self.node, WEBHOOK_ID_KEY).await? {
            let request = ApiRequest::get(format!("/webhooks/{remote_id}"));
            return match self.client.send(&request).await {
                Ok(_) => Ok(true),
                Err(e) => {
                    tracing::debug!(
                        node = %self.node,
                        remote_id = %remote_id,
                        error = %e,
                        "stored webhook no longer reachable, clearing"
                    );
                    self.store.delete(&self.node, WEBHOOK_ID_KEY).await?;
                    Ok(false)
                }
            };
        }

        let listing = match self.client.send(&ApiRequest::get("/webhooks")).await {
            Ok(listing) => listing,
            Err(e) => {
                tracing::debug!(node = %self.node, error = %e, "webhook listing failed");
                return Ok(false);
            }
        };

        let Some(remote_id) = find_subscription(&listing, &self.callback_url) else {
            return Ok(false);
        };

        tracing::info!(node = %self.node, remote_id = %remote_id, "adopted existing webhook");
        self.store
            .set(&self.node, WEBHOOK_ID_KEY, &remote_id)
            .await?;
        Ok(true)
    }

    /// Make sure a subscription exists, creating one if needed.
    ///
    /// Returns the remote id. Idempotent: an existing subscription is
    /// reused, never duplicated.
    pub async fn activate(&self) -> Result<String, AdapterError> {
        if self.events.is_empty() {
            return Err(ConfigurationError::MissingParameter("events".to_string()).into());
        }
        for unknown in self.events.unknown_events() {
            tracing::warn!(event = unknown, "event is not in the known catalog");
        }

        if self.ensure_exists().await? {
            if let RegistrationState::Registered { remote_id } = self.state().await? {
                return Ok(remote_id);
            }
        }

        let subscription = WebhookSubscription {
            id: None,
            url: self.callback_url.clone(),
            events: self.events.registration_events(),
            active: true,
        };
        let body = match serde_json::to_value(&subscription) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };

        let response = self
            .client
            .send(&ApiRequest::post("/webhooks").with_body(body))
            .await
            .map_err(|e| AdapterError::WebhookRegistration(e.to_string()))?;

        let remote_id = id_string(response.get("id")).ok_or_else(|| {
            AdapterError::WebhookRegistration("response did not include a webhook id".to_string())
        })?;

        self.store
            .set(&self.node, WEBHOOK_ID_KEY, &remote_id)
            .await?;
        tracing::info!(
            node = %self.node,
            remote_id = %remote_id,
            url = %self.callback_url,
            "created webhook"
        );
        Ok(remote_id)
    }

    /// Remove the remote subscription and forget it locally.
    ///
    /// Remote failures are logged and ignored; the persisted id is cleared
    /// either way.
    pub async fn deactivate(&self) -> Result<(), AdapterError> {
        let Some(remote_id) = self.store.get(&self.node, WEBHOOK_ID_KEY).await? else {
            return Ok(());
        };

        let request = ApiRequest::delete(format!("/webhooks/{remote_id}"));
        if let Err(e) = self.client.send(&request).await {
            tracing::warn!(
                node = %self.node,
                remote_id = %remote_id,
                error = %e,
                "failed to delete webhook"
            );
        }

        self.store.delete(&self.node, WEBHOOK_ID_KEY).await?;
        Ok(())
    }
}

/// Find the id of the listed subscription targeting `url`.
///
/// Accepts either a bare array or an object wrapping it in `data`.
fn find_subscription(listing: &Value, url: &str) -> Option<String> {
    let entries = match listing.get("data") {
        Some(data) if !data.is_null() => data,
        _ => listing,
    };
    entries
        .as_array()?
        .iter()
        .find(|entry| entry.get("url").and_then(Value::as_str) == Some(url))
        .and_then(|entry| id_string(entry.get("id")))
}

fn id_string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
