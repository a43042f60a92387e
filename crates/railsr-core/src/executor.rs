//! Batch execution of work items against the Railsr API.
//!
//! Items run strictly in order, one awaited call each. Every output record
//! carries the index of the item that produced it.

use std::sync::Arc;

use serde_json::{Map, Value, json};

use railsr_types::error::AdapterError;
use railsr_types::item::{ItemOutput, WorkItem};

use crate::client::ApiClient;
use crate::dispatch;

/// A batch aborted at `item` because of `source`.
#[derive(Debug, thiserror::Error)]
#[error("item {item} failed: {source}")]
pub struct BatchError {
    pub item: usize,
    #[source]
    pub source: AdapterError,
}

/// Runs work items through dispatch and the API client.
pub struct ItemExecutor<C> {
    client: Arc<C>,
    continue_on_fail: bool,
}

impl<C: ApiClient> ItemExecutor<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            continue_on_fail: false,
        }
    }

    /// Capture per-item failures as `{"error": message}` outputs instead of
    /// aborting the batch.
    pub fn continue_on_fail(mut self, enabled: bool) -> Self {
        self.continue_on_fail = enabled;
        self
    }

    /// Resolve and send a single item, returning the raw response.
    pub async fn run_one(&self, item: &WorkItem) -> Result<Value, AdapterError> {
        let request = dispatch::resolve(&item.resource, &item.operation, &item.params)?;
        self.client.send(&request).await
    }

    /// Execute every item in order.
    pub async fn execute(&self, items: &[WorkItem]) -> Result<Vec<ItemOutput>, BatchError> {
        let mut outputs = Vec::with_capacity(items.len());

        for (index, item) in items.iter().enumerate() {
            match self.run_one(item).await {
                Ok(response) => expand(response, index, &mut outputs),
                Err(e) if self.continue_on_fail => {
                    tracing::warn!(
                        item = index,
                        resource = %item.resource,
                        operation = %item.operation,
                        error = %e,
                        "item failed, continuing"
                    );
                    outputs.push(ItemOutput {
                        json: json!({ "error": e.to_string() }),
                        paired_item: index,
                    });
                }
                Err(source) => {
                    tracing::error!(
                        item = index,
                        resource = %item.resource,
                        operation = %item.operation,
                        error = %source,
                        "item failed"
                    );
                    return Err(BatchError {
                        item: index,
                        source,
                    });
                }
            }
        }

        tracing::debug!(items = items.len(), outputs = outputs.len(), "batch complete");
        Ok(outputs)
    }
}

/// Turn one response into output records: arrays fan out, null becomes an
/// empty object, bare scalars are wrapped under `data`.
fn expand(response: Value, index: usize, outputs: &mut Vec<ItemOutput>) {
    let record = |json| ItemOutput {
        json,
        paired_item: index,
    };
    match response {
        Value::Array(elements) => outputs.extend(elements.into_iter().map(record)),
        Value::Null => outputs.push(record(Value::Object(Map::new()))),
        Value::Object(_) => outputs.push(record(response)),
        scalar => outputs.push(record(json!({ "data": scalar }))),
    }
}
