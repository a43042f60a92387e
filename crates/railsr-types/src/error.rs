use thiserror::Error;

/// Errors caused by an invalid selection or missing input.
///
/// The host's parameter schema normally prevents these; they surface when a
/// batch file or CLI call bypasses it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("unknown resource '{0}'")]
    UnknownResource(String),

    #[error("operation '{operation}' is not defined for resource '{resource}'")]
    UnknownOperation { resource: String, operation: String },

    #[error("missing required parameter '{0}'")]
    MissingParameter(String),

    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("missing credential field '{0}'")]
    MissingCredential(String),
}

/// Errors from node-state storage (used by trait definitions in railsr-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("query error: {0}")]
    Query(String),
}

/// Top-level error for connector operations.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Non-success status or transport failure from the Railsr API.
    #[error("{}", upstream_message(.status, .message))]
    Upstream { status: Option<u16>, message: String },

    /// Subscription creation failed while activating a trigger.
    #[error("failed to create Railsr webhook: {0}")]
    WebhookRegistration(String),

    #[error("node state error: {0}")]
    State(#[from] RepositoryError),
}

impl AdapterError {
    pub fn upstream(status: Option<u16>, message: impl Into<String>) -> Self {
        AdapterError::Upstream {
            status,
            message: message.into(),
        }
    }

    /// HTTP status carried by an upstream failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            AdapterError::Upstream { status, .. } => *status,
            _ => None,
        }
    }
}

fn upstream_message(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(code) => format!("Railsr API error (HTTP {code}): {message}"),
        None => format!("Railsr API unreachable: {message}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        let err = ConfigurationError::UnknownOperation {
            resource: "card".to_string(),
            operation: "replace".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "operation 'replace' is not defined for resource 'card'"
        );
    }

    #[test]
    fn test_upstream_error_display_with_status() {
        let err = AdapterError::upstream(Some(404), "enduser not found");
        assert_eq!(err.to_string(), "Railsr API error (HTTP 404): enduser not found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_upstream_error_display_without_status() {
        let err = AdapterError::upstream(None, "connection refused");
        assert!(err.to_string().contains("unreachable"));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_webhook_registration_error_display() {
        let err = AdapterError::WebhookRegistration("HTTP 500".to_string());
        assert_eq!(err.to_string(), "failed to create Railsr webhook: HTTP 500");
    }

    #[test]
    fn test_repository_error_converts() {
        let err: AdapterError = RepositoryError::Query("locked".to_string()).into();
        assert_eq!(err.to_string(), "node state error: query error: locked");
    }
}
