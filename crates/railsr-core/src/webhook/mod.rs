//! Webhook trigger logic: remote subscription lifecycle and inbound
//! delivery filtering.

pub mod filter;
pub mod lifecycle;

pub use filter::filter_event;
pub use lifecycle::WebhookLifecycle;
