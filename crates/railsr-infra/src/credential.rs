//! Credential resolution.
//!
//! Environment variables take precedence over `[credentials]` in
//! `config.toml`:
//! - `RAILSR_ENVIRONMENT` (`production` or anything else for sandbox)
//! - `RAILSR_API_KEY`
//! - `RAILSR_API_SECRET`
//! - `RAILSR_PROGRAM_ID`

use railsr_types::config::CredentialConfig;
use railsr_types::credential::{Credential, Environment};
use railsr_types::error::ConfigurationError;

pub const ENVIRONMENT_VAR: &str = "RAILSR_ENVIRONMENT";
pub const API_KEY_VAR: &str = "RAILSR_API_KEY";
pub const API_SECRET_VAR: &str = "RAILSR_API_SECRET";
pub const PROGRAM_ID_VAR: &str = "RAILSR_PROGRAM_ID";

/// Resolve the credential from the process environment and the config file.
pub fn resolve_credential(config: &CredentialConfig) -> Result<Credential, ConfigurationError> {
    resolve_with(config, |name| match std::env::var(name) {
        Ok(val) => Some(val),
        // Present but not valid Unicode: treat as not set
        Err(_) => None,
    })
}

/// Resolve using an arbitrary variable lookup. Empty values count as unset.
pub fn resolve_with<F>(config: &CredentialConfig, lookup: F) -> Result<Credential, ConfigurationError>
where
    F: Fn(&str) -> Option<String>,
{
    let pick = |var: &str, file: &Option<String>| -> Option<String> {
        lookup(var)
            .filter(|v| !v.is_empty())
            .or_else(|| file.clone().filter(|v| !v.is_empty()))
    };

    let environment = Environment::from_setting(pick(ENVIRONMENT_VAR, &config.environment).as_deref());
    let api_key = pick(API_KEY_VAR, &config.api_key)
        .ok_or_else(|| ConfigurationError::MissingCredential("api_key".to_string()))?;
    let api_secret = pick(API_SECRET_VAR, &config.api_secret)
        .ok_or_else(|| ConfigurationError::MissingCredential("api_secret".to_string()))?;
    let program_id = pick(PROGRAM_ID_VAR, &config.program_id)
        .ok_or_else(|| ConfigurationError::MissingCredential("program_id".to_string()))?;

    tracing::debug!(%environment, program_id = %program_id, "resolved Railsr credential");
    Ok(Credential::new(environment, api_key, api_secret, program_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn file_config() -> CredentialConfig {
        CredentialConfig {
            environment: None,
            api_key: Some("file-key".to_string()),
            api_secret: Some("file-secret".to_string()),
            program_id: Some("file-prog".to_string()),
        }
    }

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_file_values_used_without_env() {
        let cred = resolve_with(&file_config(), env(&[])).unwrap();
        assert_eq!(cred.api_key.expose(), "file-key");
        assert_eq!(cred.program_id, "file-prog");
        assert_eq!(cred.environment, Environment::Sandbox);
    }

    #[test]
    fn test_env_overrides_file() {
        let cred = resolve_with(
            &file_config(),
            env(&[(API_KEY_VAR, "env-key"), (ENVIRONMENT_VAR, "production")]),
        )
        .unwrap();
        assert_eq!(cred.api_key.expose(), "env-key");
        assert_eq!(cred.api_secret.expose(), "file-secret");
        assert_eq!(cred.environment, Environment::Production);
    }

    #[test]
    fn test_unknown_environment_is_sandbox() {
        let cred = resolve_with(&file_config(), env(&[(ENVIRONMENT_VAR, "staging")])).unwrap();
        assert_eq!(cred.base_url(), "https://api.sandbox.railsr.com/v1");
    }

    #[test]
    fn test_missing_field_is_reported() {
        let mut config = file_config();
        config.api_secret = Some(String::new());
        let err = resolve_with(&config, env(&[])).unwrap_err();
        assert_eq!(err, ConfigurationError::MissingCredential("api_secret".to_string()));
    }
}
