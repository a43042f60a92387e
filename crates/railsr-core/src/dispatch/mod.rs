//! Resource/operation dispatch.
//!
//! Maps a (resource, operation) selection plus the item's parameters onto a
//! concrete [`ApiRequest`]. The mapping is pure: no I/O and no response
//! transformation happens here.

pub mod spec;
pub mod table;

use serde_json::{Map, Value};

use railsr_types::error::{AdapterError, ConfigurationError};
use railsr_types::request::ApiRequest;
use railsr_types::resource::Resource;

pub use spec::{FieldRule, OperationSpec};
pub use table::OPERATIONS;

/// Find the descriptor for a supported pair.
pub fn lookup(resource: Resource, operation: &str) -> Option<&'static OperationSpec> {
    OPERATIONS
        .iter()
        .find(|op| op.resource == resource && op.operation == operation)
}

/// Resolve string tags and parameters into a request.
pub fn resolve(
    resource: &str,
    operation: &str,
    params: &Map<String, Value>,
) -> Result<ApiRequest, AdapterError> {
    let resource: Resource = resource.parse()?;
    let spec = lookup(resource, operation).ok_or_else(|| ConfigurationError::UnknownOperation {
        resource: resource.to_string(),
        operation: operation.to_string(),
    })?;

    let request = spec.apply(params)?;
    tracing::debug!(
        resource = %resource,
        operation,
        method = %request.method,
        path = %request.path,
        "resolved operation"
    );
    Ok(request)
}
