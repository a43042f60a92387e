//! ApiClient trait definition.
//!
//! The seam between request construction and transport. Implementations
//! live in railsr-infra (e.g., `RailsrHttpClient`); tests use in-memory
//! mocks.

use railsr_types::error::AdapterError;
use railsr_types::request::ApiRequest;
use serde_json::Value;

/// Sends one [`ApiRequest`] to the Railsr API and returns the decoded body.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
pub trait ApiClient: Send + Sync {
    /// Perform the call. Non-success statuses and transport failures are
    /// reported as [`AdapterError::Upstream`].
    fn send(
        &self,
        request: &ApiRequest,
    ) -> impl std::future::Future<Output = Result<Value, AdapterError>> + Send;
}
