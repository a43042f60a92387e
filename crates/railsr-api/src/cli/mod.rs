//! CLI command definitions for the `railsr` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod call;
pub mod operations;
pub mod serve;
pub mod trigger;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Drive the Railsr embedded-finance API and receive its webhooks.
#[derive(Parser)]
#[command(name = "railsr", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true, env = "RAILSR_OTEL")]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one operation against the Railsr API.
    Call {
        /// Resource tag (e.g. enduser, ledger, sepaPayment).
        resource: String,

        /// Operation tag (e.g. create, get, list).
        operation: String,

        /// Parameter as NAME=VALUE; VALUE is parsed as JSON, else taken as a string.
        #[arg(short = 'p', long = "param", value_parser = call::parse_param)]
        params: Vec<(String, serde_json::Value)>,

        /// All parameters as one JSON object (merged before --param).
        #[arg(long)]
        params_json: Option<String>,

        /// Report a failure as an `{"error": ...}` record instead of exiting non-zero.
        #[arg(long)]
        continue_on_fail: bool,
    },

    /// Run a JSON array of work items in order.
    Batch {
        /// File containing `[{"resource", "operation", "params"}]`, or `-` for stdin.
        file: PathBuf,

        /// Capture per-item failures and keep going.
        #[arg(long)]
        continue_on_fail: bool,
    },

    /// List supported resources and operations.
    #[command(alias = "ops")]
    Operations {
        /// Only show this resource.
        resource: Option<String>,
    },

    /// Manage the remote webhook subscription of a trigger node.
    Trigger {
        #[command(subcommand)]
        action: trigger::TriggerCommand,
    },

    /// Start the webhook receiver.
    Serve {
        /// Bind address (defaults to receiver.host).
        #[arg(long)]
        host: Option<String>,

        /// Port (defaults to receiver.port).
        #[arg(long)]
        port: Option<u16>,

        /// Create the remote subscription on startup and remove it on shutdown.
        #[arg(long)]
        register: bool,

        #[command(flatten)]
        target: trigger::TriggerTarget,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
