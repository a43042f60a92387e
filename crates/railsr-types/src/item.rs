use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One input record for the item executor.
///
/// `params` is keyed by the host-side parameter names (camelCase, e.g.
/// `firstName`, `enduserId`, `enduserAdditionalFields`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    pub resource: String,
    pub operation: String,
    #[serde(default)]
    pub params: Map<String, Value>,
}

impl WorkItem {
    pub fn new(resource: impl Into<String>, operation: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            operation: operation.into(),
            params: Map::new(),
        }
    }

    /// Builder-style parameter insertion.
    pub fn param(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.params.insert(name.to_string(), value.into());
        self
    }
}

/// One output record, paired with the index of the item that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemOutput {
    pub json: Value,
    pub paired_item: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_work_item_deserialize_without_params() {
        let item: WorkItem =
            serde_json::from_value(json!({"resource": "payin", "operation": "list"})).unwrap();
        assert!(item.params.is_empty());
    }

    #[test]
    fn test_work_item_param_builder() {
        let item = WorkItem::new("card", "get").param("cardId", "card_1");
        assert_eq!(item.params["cardId"], "card_1");
    }

    #[test]
    fn test_item_output_serializes_camel_case() {
        let out = ItemOutput {
            json: json!({"id": "x"}),
            paired_item: 2,
        };
        let value = serde_json::to_value(&out).unwrap();
        assert_eq!(value["pairedItem"], 2);
    }
}
