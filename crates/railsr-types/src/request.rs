use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::resource::HttpMethod;

/// A concrete outbound call, relative to the environment's API root.
///
/// `body` and `query` are never `Some` with zero fields: the builders drop
/// empty objects so that GET-style calls carry no body and no bare `?`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiRequest {
    pub method: HttpMethod,
    /// Path below `/v1`, always starting with `/`.
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<Map<String, Value>>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            query: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Attach a JSON body; an empty object leaves the request body-less.
    pub fn with_body(mut self, body: Map<String, Value>) -> Self {
        self.body = if body.is_empty() { None } else { Some(body) };
        self
    }

    /// Attach a query object; an empty object leaves the URL bare.
    pub fn with_query(mut self, query: Map<String, Value>) -> Self {
        self.query = if query.is_empty() { None } else { Some(query) };
        self
    }

    /// Flatten the query object into string pairs.
    ///
    /// Strings are sent verbatim, numbers and booleans in their JSON text
    /// form, nulls are skipped, arrays and objects are JSON-encoded.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let Some(query) = &self.query else {
            return Vec::new();
        };
        query
            .iter()
            .filter_map(|(key, value)| {
                let rendered = match value {
                    Value::Null => return None,
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                Some((key.clone(), rendered))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_empty_body_is_dropped() {
        let req = ApiRequest::post("/ledgers/l1/freeze").with_body(Map::new());
        assert!(req.body.is_none());
    }

    #[test]
    fn test_empty_query_is_dropped() {
        let req = ApiRequest::get("/endusers").with_query(Map::new());
        assert!(req.query.is_none());
        assert!(req.query_pairs().is_empty());
    }

    #[test]
    fn test_non_empty_body_is_kept() {
        let req = ApiRequest::post("/kyb/checks").with_body(obj(json!({"company_id": "c1"})));
        assert_eq!(req.body.unwrap()["company_id"], "c1");
    }

    #[test]
    fn test_query_pairs_rendering() {
        let req = ApiRequest::get("/endusers").with_query(obj(json!({
            "status": "active",
            "limit": 20,
            "verified": true,
            "skip": null,
        })));
        let mut pairs = req.query_pairs();
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("limit".to_string(), "20".to_string()),
                ("status".to_string(), "active".to_string()),
                ("verified".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_serialization_omits_absent_parts() {
        let req = ApiRequest::get("/payins");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, json!({"method": "GET", "path": "/payins"}));
    }
}
