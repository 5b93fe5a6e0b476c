use crate::error::GenerateError;
use crate::schema::{SchemaNode, transform_outputs};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

/// A workflow unit test definition as saved by the designer.
///
/// Only `operationInfo` and `outputParameters` are interpreted; every other
/// top-level field (assertions, mocks, ...) is carried through untouched so a
/// definition can be written back without loss.
///
/// Parsing only fails for text that is not JSON or not a JSON object. Entries
/// of the wrong shape are read as empty ones.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UnitTestDefinition {
    #[serde(default, deserialize_with = "lenient_operation_info")]
    pub operation_info: IndexMap<String, OperationInfo>,
    #[serde(default, deserialize_with = "lenient_output_parameters")]
    pub output_parameters: IndexMap<String, OutputParameter>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UnitTestDefinition {
    pub fn from_json(json: &str) -> Result<Self, GenerateError> {
        serde_json::from_str(json).map_err(|e| GenerateError::JsonParse(e.to_string()))
    }

    pub fn from_value(value: Value) -> Result<Self, GenerateError> {
        serde_json::from_value(value).map_err(|e| GenerateError::JsonParse(e.to_string()))
    }
}

/// Metadata about one operation of the workflow.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OperationInfo {
    /// Empty when the definition has no string `type`.
    #[serde(rename = "type", default, deserialize_with = "lenient_type")]
    pub operation_type: String,
    /// Absent in older definitions; the operation name stands in for it.
    #[serde(
        default,
        deserialize_with = "lenient_operation_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub operation_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OperationInfo {
    pub fn new(operation_type: &str) -> Self {
        Self {
            operation_type: operation_type.to_string(),
            ..Self::default()
        }
    }

    /// Reads one `operationInfo` entry. Anything that is not an object yields
    /// an entry with an empty type.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    pub fn with_operation_id(mut self, operation_id: &str) -> Self {
        self.operation_id = Some(operation_id.to_string());
        self
    }

    /// The identity used to deduplicate operations within one pass.
    pub fn identity<'a>(&'a self, operation_name: &'a str) -> &'a str {
        self.operation_id.as_deref().unwrap_or(operation_name)
    }

    pub fn is_trigger(&self) -> bool {
        super::filter::is_trigger(&self.operation_type)
    }
}

/// The recorded outputs of one operation.
///
/// `outputs` is a flat map of dotted keys (`outputs.$.body.$.id`) to raw
/// schema nodes.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct OutputParameter {
    #[serde(default)]
    pub outputs: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OutputParameter {
    pub fn new(outputs: Value) -> Self {
        Self {
            outputs,
            extra: Map::new(),
        }
    }

    /// Reads one `outputParameters` entry. Anything that is not an object
    /// yields an entry without outputs.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    /// Folds the raw outputs into a schema tree. Anything that is not a JSON
    /// object yields an empty tree.
    pub fn schema(&self) -> SchemaNode {
        match &self.outputs {
            Value::Object(raw) => transform_outputs(raw),
            _ => SchemaNode::default(),
        }
    }
}

fn object_entries(value: Value, section: &str) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        _ => {
            warn!(section, "ignoring a section that is not a JSON object");
            Map::new()
        }
    }
}

fn lenient_operation_info<'de, D>(
    deserializer: D,
) -> Result<IndexMap<String, OperationInfo>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = object_entries(Value::deserialize(deserializer)?, "operationInfo");
    Ok(entries
        .into_iter()
        .map(|(name, value)| {
            if !value.is_object() {
                warn!(operation = %name, "operation info is not an object");
            }
            (name, OperationInfo::from_value(value))
        })
        .collect())
}

fn lenient_output_parameters<'de, D>(
    deserializer: D,
) -> Result<IndexMap<String, OutputParameter>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = object_entries(Value::deserialize(deserializer)?, "outputParameters");
    Ok(entries
        .into_iter()
        .map(|(name, value)| (name, OutputParameter::from_value(value)))
        .collect())
}

fn lenient_type<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

// Numeric and boolean ids are kept as their JSON text.
fn lenient_operation_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}
