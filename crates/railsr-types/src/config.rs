//! Configuration types for the Railsr connector.
//!
//! `AdapterConfig` represents `config.toml` in the data directory. Every
//! section is optional and falls back to defaults.

use serde::{Deserialize, Serialize};

use crate::webhook::EventSelection;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdapterConfig {
    /// Credential fields; environment variables take precedence.
    #[serde(default)]
    pub credentials: CredentialConfig,

    #[serde(default)]
    pub receiver: ReceiverConfig,

    #[serde(default)]
    pub trigger: TriggerConfig,

    /// Capture per-item failures as output records instead of aborting.
    #[serde(default)]
    pub continue_on_fail: bool,
}

/// Credential fields as written in the config file. All optional here;
/// completeness is checked when the credential is resolved.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialConfig {
    pub environment: Option<String>,
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    pub program_id: Option<String>,
}

impl std::fmt::Debug for CredentialConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialConfig")
            .field("environment", &self.environment)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("api_secret", &self.api_secret.as_ref().map(|_| "***"))
            .field("program_id", &self.program_id)
            .finish()
    }
}

/// Webhook receiver settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiverConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Route the delivery endpoint is mounted on.
    #[serde(default = "default_path")]
    pub path: String,

    /// Public URL the platform should deliver to. Required for registration.
    pub callback_url: Option<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5678
}

fn default_path() -> String {
    "/webhook".to_string()
}

impl Default for ReceiverConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            path: default_path(),
            callback_url: None,
        }
    }
}

/// Trigger-node settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerConfig {
    #[serde(default = "default_node_id")]
    pub node_id: String,

    #[serde(default = "EventSelection::all")]
    pub events: EventSelection,
}

fn default_node_id() -> String {
    "default".to_string()
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            node_id: default_node_id(),
            events: EventSelection::all(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapter_config_default_values() {
        let config = AdapterConfig::default();
        assert_eq!(config.receiver.port, 5678);
        assert_eq!(config.receiver.path, "/webhook");
        assert_eq!(config.trigger.node_id, "default");
        assert!(config.trigger.events.is_wildcard());
        assert!(!config.continue_on_fail);
    }

    #[test]
    fn test_adapter_config_deserialize_empty() {
        let config: AdapterConfig = toml::from_str("").unwrap();
        assert_eq!(config.receiver.host, "127.0.0.1");
        assert!(config.credentials.api_key.is_none());
    }

    #[test]
    fn test_adapter_config_deserialize_with_values() {
        let toml_str = r#"
continue_on_fail = true

[credentials]
environment = "production"
api_key = "key"
api_secret = "secret"
program_id = "prog"

[receiver]
port = 9000
callback_url = "https://hooks.example.com/webhook"

[trigger]
node_id = "payments-trigger"
events = ["payin.received", "payout.completed"]
"#;
        let config: AdapterConfig = toml::from_str(toml_str).unwrap();
        assert!(config.continue_on_fail);
        assert_eq!(config.credentials.environment.as_deref(), Some("production"));
        assert_eq!(config.receiver.port, 9000);
        assert_eq!(config.receiver.host, "127.0.0.1");
        assert_eq!(
            config.receiver.callback_url.as_deref(),
            Some("https://hooks.example.com/webhook")
        );
        assert_eq!(config.trigger.node_id, "payments-trigger");
        assert!(config.trigger.events.contains("payout.completed"));
    }

    #[test]
    fn test_credential_config_debug_hides_secrets() {
        let creds = CredentialConfig {
            environment: None,
            api_key: Some("very-secret-key".to_string()),
            api_secret: Some("very-secret-secret".to_string()),
            program_id: Some("prog".to_string()),
        };
        let debug = format!("{creds:?}");
        assert!(!debug.contains("very-secret"));
    }
}
