//! `trigger` subcommands: manage the remote webhook subscription.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use railsr_core::storage::node_state::NodeStateStore;
use railsr_types::webhook::{RegistrationState, WEBHOOK_ID_KEY};

use crate::state::{AppState, ConcreteLifecycle};

/// Which trigger node to act on, and how it subscribes.
#[derive(Args, Debug, Clone, Default)]
pub struct TriggerTarget {
    /// Trigger node id (defaults to trigger.node_id).
    #[arg(long)]
    pub node: Option<String>,

    /// Public URL Railsr delivers to (defaults to receiver.callback_url).
    #[arg(long)]
    pub callback_url: Option<String>,

    /// Event types to subscribe to, comma separated; `*` for all.
    #[arg(long, value_delimiter = ',')]
    pub events: Option<Vec<String>>,
}

/// Trigger subcommands.
#[derive(Subcommand)]
pub enum TriggerCommand {
    /// Create the remote subscription unless one already exists.
    Enable {
        #[command(flatten)]
        target: TriggerTarget,
    },

    /// Delete the remote subscription and forget it.
    Disable {
        #[command(flatten)]
        target: TriggerTarget,
    },

    /// Verify the remote subscription still exists (adopting a matching one).
    Check {
        #[command(flatten)]
        target: TriggerTarget,
    },

    /// Show the locally persisted registration state.
    Status {
        /// Trigger node id (defaults to trigger.node_id).
        #[arg(long)]
        node: Option<String>,
    },
}

/// Handle a trigger subcommand.
pub async fn handle_trigger_command(cmd: TriggerCommand, state: &AppState, json: bool) -> Result<()> {
    match cmd {
        TriggerCommand::Enable { target } => {
            let lifecycle = build_lifecycle(state, target)?;
            let remote_id = lifecycle.activate().await?;
            report(&lifecycle, "enabled", &RegistrationState::Registered { remote_id }, json)
        }
        TriggerCommand::Disable { target } => {
            let lifecycle = build_lifecycle(state, target)?;
            lifecycle.deactivate().await?;
            report(&lifecycle, "disabled", &RegistrationState::Unregistered, json)
        }
        TriggerCommand::Check { target } => {
            let lifecycle = build_lifecycle(state, target)?;
            let exists = lifecycle.ensure_exists().await?;
            let current = lifecycle.state().await?;
            report(
                &lifecycle,
                if exists { "exists" } else { "missing" },
                &current,
                json,
            )
        }
        TriggerCommand::Status { node } => {
            // Local read only; no credentials needed.
            let node = state.node_id(node);
            let current = match state.node_state.get(&node, WEBHOOK_ID_KEY).await? {
                Some(remote_id) => RegistrationState::Registered { remote_id },
                None => RegistrationState::Unregistered,
            };
            if json {
                let result = serde_json::json!({
                    "node": node.as_str(),
                    "registered": current.remote_id().is_some(),
                    "webhook_id": current.remote_id(),
                });
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!();
                println!(
                    "  Trigger '{}': {}",
                    style(node.as_str()).cyan(),
                    style(current.to_string()).bold()
                );
                println!();
            }
            Ok(())
        }
    }
}

pub(crate) fn build_lifecycle(state: &AppState, target: TriggerTarget) -> Result<ConcreteLifecycle> {
    let node = state.node_id(target.node);
    let events = state.selection(target.events);
    state.lifecycle(node, target.callback_url, events)
}

fn report(
    lifecycle: &ConcreteLifecycle,
    outcome: &str,
    current: &RegistrationState,
    json: bool,
) -> Result<()> {
    if json {
        let result = serde_json::json!({
            "node": lifecycle.node().as_str(),
            "outcome": outcome,
            "callback_url": lifecycle.callback_url(),
            "events": lifecycle.events().events(),
            "webhook_id": current.remote_id(),
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!();
        println!(
            "  {} Trigger '{}' {}",
            style("ok").green(),
            style(lifecycle.node().as_str()).cyan(),
            outcome,
        );
        println!("  {} {}", style("state:").dim(), current);
        println!("  {} {}", style("url:").dim(), lifecycle.callback_url());
        println!();
    }
    Ok(())
}
