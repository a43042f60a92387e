//! Webhook trigger types: node identity, event selection, subscription
//! records and the normalized event emitted per accepted delivery.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Event name that subscribes to every event.
pub const WILDCARD_EVENT: &str = "*";

/// Node-state key holding the remote subscription id.
pub const WEBHOOK_ID_KEY: &str = "webhookId";

/// Events the trigger can subscribe to.
pub const EVENT_CATALOG: &[&str] = &[
    // Card
    "card.activated",
    "card.blocked",
    "card.created",
    "card.expired",
    "card.pin_changed",
    "card.unblocked",
    // Card transaction
    "card.transaction.authorized",
    "card.transaction.cleared",
    "card.transaction.declined",
    "card.transaction.reversed",
    // End user
    "enduser.activated",
    "enduser.created",
    "enduser.deactivated",
    "enduser.suspended",
    "enduser.updated",
    // Compliance
    "kyc.approved",
    "kyc.failed",
    "kyc.pending",
    "kyc.referred",
    "kyb.approved",
    "kyb.failed",
    "kyb.pending",
    // Ledger and accounts
    "ledger.balance.changed",
    "ledger.created",
    "account.closed",
    "account.created",
    "account.frozen",
    "account.unfrozen",
    // Money movement
    "payin.completed",
    "payin.failed",
    "payin.received",
    "payout.approved",
    "payout.cancelled",
    "payout.completed",
    "payout.created",
    "payout.failed",
    "payout.pending",
    "sepa.payment.completed",
    "sepa.payment.failed",
    "sepa.payment.pending",
    "fps.completed",
    "fps.failed",
    "bacs.completed",
    "bacs.failed",
    "swift.payment.completed",
    "swift.payment.failed",
    "swift.payment.processing",
    "transfer.completed",
    "transfer.failed",
    "transfer.reversed",
    // FX
    "fx.conversion.completed",
    "fx.quote.accepted",
    "fx.quote.expired",
    // Documents, holders, beneficiaries, reports
    "document.uploaded",
    "document.verified",
    "document.rejected",
    "company_holder.created",
    "company_holder.updated",
    "beneficiary.created",
    "beneficiary.deleted",
    "report.ready",
];

/// Identifies one trigger-node instance; scopes its persisted state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TriggerNodeId(pub String);

impl TriggerNodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TriggerNodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The trigger's configured event list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventSelection(Vec<String>);

impl EventSelection {
    pub fn new<I, S>(events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(events.into_iter().map(Into::into).collect())
    }

    /// Selection matching every event.
    pub fn all() -> Self {
        Self(vec![WILDCARD_EVENT.to_string()])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_wildcard(&self) -> bool {
        self.0.iter().any(|e| e == WILDCARD_EVENT)
    }

    pub fn contains(&self, event: &str) -> bool {
        self.0.iter().any(|e| e == event)
    }

    pub fn events(&self) -> &[String] {
        &self.0
    }

    /// The `events` list sent when registering: a lone wildcard when "all
    /// events" is selected, the configured list otherwise.
    pub fn registration_events(&self) -> Vec<String> {
        if self.is_wildcard() {
            vec![WILDCARD_EVENT.to_string()]
        } else {
            self.0.clone()
        }
    }

    /// Selected names that are neither the wildcard nor in the catalog.
    pub fn unknown_events(&self) -> Vec<&str> {
        self.0
            .iter()
            .map(String::as_str)
            .filter(|e| *e != WILDCARD_EVENT && !EVENT_CATALOG.contains(e))
            .collect()
    }
}

/// Body of a subscription create call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookSubscription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub url: String,
    pub events: Vec<String>,
    pub active: bool,
}

/// Registration state of one trigger-node instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationState {
    Unregistered,
    Registered { remote_id: String },
}

impl RegistrationState {
    pub fn remote_id(&self) -> Option<&str> {
        match self {
            RegistrationState::Registered { remote_id } => Some(remote_id),
            RegistrationState::Unregistered => None,
        }
    }
}

impl fmt::Display for RegistrationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrationState::Unregistered => write!(f, "unregistered"),
            RegistrationState::Registered { remote_id } => write!(f, "registered ({remote_id})"),
        }
    }
}

/// Record emitted for an accepted inbound delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedEvent {
    pub event: Option<String>,
    pub data: Value,
    pub timestamp: Value,
    pub webhook_id: Option<Value>,
    pub headers: BTreeMap<String, String>,
}
