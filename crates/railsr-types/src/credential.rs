use serde::{Deserialize, Serialize};

use std::fmt;

/// Production API root.
pub const PRODUCTION_BASE_URL: &str = "https://api.railsr.com/v1";

/// Sandbox API root.
pub const SANDBOX_BASE_URL: &str = "https://api.sandbox.railsr.com/v1";

/// Railsr environment selected by the credential.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Sandbox,
    Production,
}

impl Environment {
    /// Resolve an environment from a raw setting.
    ///
    /// Total: only the exact value `production` selects production; anything
    /// else, including an absent value, selects the sandbox.
    pub fn from_setting(value: Option<&str>) -> Self {
        match value {
            Some("production") => Environment::Production,
            _ => Environment::Sandbox,
        }
    }

    /// API root including the `/v1` prefix.
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_BASE_URL,
            Environment::Sandbox => SANDBOX_BASE_URL,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Sandbox => write!(f, "sandbox"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// A wrapper that redacts secret values in Debug and Display output.
///
/// The actual value is accessible via `.expose()`.
#[derive(Clone, PartialEq, Eq)]
pub struct Redacted(String);

impl Redacted {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Access the underlying secret value.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Redacted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Redacted(\"***\")")
    }
}

impl fmt::Display for Redacted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***")
    }
}

/// Credentials for one Railsr program.
///
/// Immutable once resolved; every outbound call carries the key, secret and
/// program id as headers.
#[derive(Debug, Clone)]
pub struct Credential {
    pub environment: Environment,
    pub api_key: Redacted,
    pub api_secret: Redacted,
    pub program_id: String,
}

impl Credential {
    pub fn new(
        environment: Environment,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        program_id: impl Into<String>,
    ) -> Self {
        Self {
            environment,
            api_key: Redacted::new(api_key),
            api_secret: Redacted::new(api_secret),
            program_id: program_id.into(),
        }
    }

    pub fn base_url(&self) -> &'static str {
        self.environment.base_url()
    }
}
