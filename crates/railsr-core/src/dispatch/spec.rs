//! Request descriptors and the field-mapping rules that apply them.
//!
//! An [`OperationSpec`] is static data: method, path template, and ordered
//! rules that turn a parameter map into a body and a query object. Applying
//! a spec never inspects the resource or operation tags again.

use serde_json::{Map, Value};

use railsr_types::error::ConfigurationError;
use railsr_types::request::ApiRequest;
use railsr_types::resource::{HttpMethod, Resource};

/// Placeholder replaced by the entity id in a path template.
pub const ID_PLACEHOLDER: &str = "{id}";

/// One step in building a body or query object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Required parameter copied under its wire name.
    Field {
        param: &'static str,
        wire: &'static str,
    },
    /// Optional parameter falling back to a literal when absent.
    OrDefault {
        param: &'static str,
        wire: &'static str,
        default: &'static str,
    },
    /// Optional collection whose entries are merged verbatim.
    Merge { param: &'static str },
    /// Literal discriminator value.
    Const {
        wire: &'static str,
        value: &'static str,
    },
    /// Optional collection attached under `wire` only when non-empty.
    Nested {
        param: &'static str,
        wire: &'static str,
    },
}

/// Shorthand for [`FieldRule::Field`].
pub const fn field(param: &'static str, wire: &'static str) -> FieldRule {
    FieldRule::Field { param, wire }
}

/// Shorthand for [`FieldRule::OrDefault`].
pub const fn defaulted(
    param: &'static str,
    wire: &'static str,
    default: &'static str,
) -> FieldRule {
    FieldRule::OrDefault {
        param,
        wire,
        default,
    }
}

/// Shorthand for [`FieldRule::Merge`].
pub const fn merge(param: &'static str) -> FieldRule {
    FieldRule::Merge { param }
}

/// Shorthand for [`FieldRule::Const`].
pub const fn constant(wire: &'static str, value: &'static str) -> FieldRule {
    FieldRule::Const { wire, value }
}

/// Shorthand for [`FieldRule::Nested`].
pub const fn nested(param: &'static str, wire: &'static str) -> FieldRule {
    FieldRule::Nested { param, wire }
}

/// Static request descriptor for one (resource, operation) pair.
#[derive(Debug, Clone, Copy)]
pub struct OperationSpec {
    pub resource: Resource,
    pub operation: &'static str,
    pub method: HttpMethod,
    /// Path below `/v1`, with at most one `{id}` placeholder.
    pub path: &'static str,
    /// Parameter holding the entity id when `path` has a placeholder.
    pub id_param: Option<&'static str>,
    pub body: &'static [FieldRule],
    pub query: &'static [FieldRule],
}

impl OperationSpec {
    /// Descriptor with no id, body, or query.
    pub const fn new(
        resource: Resource,
        operation: &'static str,
        method: HttpMethod,
        path: &'static str,
    ) -> Self {
        Self {
            resource,
            operation,
            method,
            path,
            id_param: None,
            body: &[],
            query: &[],
        }
    }

    pub const fn id(mut self, param: &'static str) -> Self {
        self.id_param = Some(param);
        self
    }

    pub const fn body(mut self, rules: &'static [FieldRule]) -> Self {
        self.body = rules;
        self
    }

    pub const fn query(mut self, rules: &'static [FieldRule]) -> Self {
        self.query = rules;
        self
    }

    /// Build the concrete request for one item's parameters.
    pub fn apply(&self, params: &Map<String, Value>) -> Result<ApiRequest, ConfigurationError> {
        let path = match self.id_param {
            Some(param) => {
                let id = entity_id(params, param)?;
                self.path.replacen(ID_PLACEHOLDER, &id, 1)
            }
            None => self.path.to_string(),
        };

        let body = build_object(self.body, params)?;
        let query = build_object(self.query, params)?;

        Ok(ApiRequest::new(self.method, path)
            .with_body(body)
            .with_query(query))
    }
}

fn entity_id(params: &Map<String, Value>, param: &str) -> Result<String, ConfigurationError> {
    match params.get(param) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        None | Some(Value::Null) => Err(ConfigurationError::MissingParameter(param.to_string())),
        Some(Value::String(_)) => Err(ConfigurationError::MissingParameter(param.to_string())),
        Some(_) => Err(ConfigurationError::InvalidParameter {
            name: param.to_string(),
            reason: "entity id must be a string or number".to_string(),
        }),
    }
}

fn build_object(
    rules: &[FieldRule],
    params: &Map<String, Value>,
) -> Result<Map<String, Value>, ConfigurationError> {
    let mut out = Map::new();
    for rule in rules {
        match *rule {
            FieldRule::Field { param, wire } => {
                let value = params
                    .get(param)
                    .filter(|v| !v.is_null())
                    .ok_or_else(|| ConfigurationError::MissingParameter(param.to_string()))?;
                out.insert(wire.to_string(), value.clone());
            }
            FieldRule::OrDefault {
                param,
                wire,
                default,
            } => {
                let value = match params.get(param) {
                    None | Some(Value::Null) => Value::String(default.to_string()),
                    Some(value) => value.clone(),
                };
                out.insert(wire.to_string(), value);
            }
            FieldRule::Merge { param } => {
                if let Some(collection) = collection(params, param)? {
                    for (key, value) in collection {
                        out.insert(key.clone(), value.clone());
                    }
                }
            }
            FieldRule::Const { wire, value } => {
                out.insert(wire.to_string(), Value::String(value.to_string()));
            }
            FieldRule::Nested { param, wire } => {
                if let Some(collection) = collection(params, param)? {
                    if !collection.is_empty() {
                        out.insert(wire.to_string(), Value::Object(collection.clone()));
                    }
                }
            }
        }
    }
    Ok(out)
}

/// Optional collection parameter; absent and null both mean empty.
fn collection<'a>(
    params: &'a Map<String, Value>,
    param: &str,
) -> Result<Option<&'a Map<String, Value>>, ConfigurationError> {
    match params.get(param) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(_) => Err(ConfigurationError::InvalidParameter {
            name: param.to_string(),
            reason: "expected an object".to_string(),
        }),
    }
}
