//! RailsrHttpClient -- concrete [`ApiClient`] implementation over reqwest.
//!
//! Every call carries the three authentication headers. The API key and
//! secret are wrapped in [`secrecy::SecretString`] and are only exposed when
//! constructing request headers; they never appear in `Debug` output or
//! tracing logs.

use reqwest::header::CONTENT_TYPE;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use railsr_core::client::ApiClient;
use railsr_types::credential::Credential;
use railsr_types::error::AdapterError;
use railsr_types::request::ApiRequest;
use railsr_types::resource::HttpMethod;

/// Header names sent on every call.
pub const API_KEY_HEADER: &str = "X-Api-Key";
pub const API_SECRET_HEADER: &str = "X-Api-Secret";
pub const PROGRAM_ID_HEADER: &str = "X-Program-Id";

/// Railsr REST client.
pub struct RailsrHttpClient {
    client: reqwest::Client,
    api_key: SecretString,
    api_secret: SecretString,
    program_id: String,
    base_url: String,
}

impl RailsrHttpClient {
    /// Create a client for the credential's environment.
    pub fn new(credential: &Credential) -> Result<Self, AdapterError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("railsr-connector/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AdapterError::upstream(None, format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: SecretString::from(credential.api_key.expose().to_string()),
            api_secret: SecretString::from(credential.api_secret.expose().to_string()),
            program_id: credential.program_id.clone(),
            base_url: credential.base_url().to_string(),
        })
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full API URL for a given path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl std::fmt::Debug for RailsrHttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RailsrHttpClient")
            .field("base_url", &self.base_url)
            .field("program_id", &self.program_id)
            .finish_non_exhaustive()
    }
}

impl ApiClient for RailsrHttpClient {
    async fn send(&self, request: &ApiRequest) -> Result<Value, AdapterError> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self
            .client
            .request(method, self.url(&request.path))
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .header(API_SECRET_HEADER, self.api_secret.expose_secret())
            .header(PROGRAM_ID_HEADER, &self.program_id)
            .header(CONTENT_TYPE, "application/json");

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        let query = request.query_pairs();
        if !query.is_empty() {
            builder = builder.query(&query);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::debug!(method = %request.method, path = %request.path, error = %e, "request failed");
            AdapterError::upstream(None, e.to_string())
        })?;

        let status = response.status();
        tracing::debug!(
            method = %request.method,
            path = %request.path,
            status = status.as_u16(),
            "railsr call"
        );

        let text = response
            .text()
            .await
            .map_err(|e| AdapterError::upstream(Some(status.as_u16()), e.to_string()))?;

        if !status.is_success() {
            return Err(AdapterError::upstream(
                Some(status.as_u16()),
                error_message(&text, status),
            ));
        }

        Ok(decode_body(&text))
    }
}

/// Decode a success body: empty is `null`, non-JSON is kept as a string.
fn decode_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// Best-effort message from an error body.
fn error_message(text: &str, status: reqwest::StatusCode) -> String {
    if let Ok(Value::Object(body)) = serde_json::from_str::<Value>(text) {
        for key in ["message", "error_description", "error"] {
            if let Some(message) = body.get(key).and_then(Value::as_str) {
                return message.to_string();
            }
        }
    }
    if text.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    } else {
        text.to_string()
    }
}
