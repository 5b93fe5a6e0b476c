use super::key::key_segments;
use super::types::SchemaType;
use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Descriptive fields kept when raw run outputs are folded into a schema tree.
pub const ALLOWED_FIELDS: [&str; 4] = ["type", "title", "format", "description"];

/// A typed view of one node of an operation's output schema.
///
/// Everything that is not one of the descriptive fields is a child, kept in
/// source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaNode {
    pub schema_type: Option<SchemaType>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub format: Option<String>,
    pub fields: IndexMap<String, SchemaNode>,
}

impl SchemaNode {
    /// A node with the given type and nothing else.
    pub fn typed(schema_type: SchemaType) -> Self {
        Self {
            schema_type: Some(schema_type),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_field(mut self, key: impl Into<String>, node: SchemaNode) -> Self {
        self.fields.insert(key.into(), node);
        self
    }

    pub fn is_object(&self) -> bool {
        self.schema_type.as_ref().is_some_and(SchemaType::is_object)
    }

    /// Converts an arbitrary JSON value into a schema node.
    ///
    /// Non-object values become an empty, untyped node. A `type` that is not a
    /// string is treated as missing.
    pub fn from_value(value: &Value) -> Self {
        let Value::Object(map) = value else {
            return Self::default();
        };

        let mut node = Self::default();
        for (key, child) in map {
            match key.as_str() {
                "type" => node.schema_type = child.as_str().map(SchemaType::parse),
                "title" => node.title = text_of(child),
                "description" => node.description = text_of(child),
                "format" => node.format = text_of(child),
                _ => {
                    node.fields.insert(key.clone(), Self::from_value(child));
                }
            }
        }
        node
    }

    /// Overwrites this node's descriptive fields with those present on `raw`.
    /// Children are left untouched.
    fn merge_descriptive(&mut self, raw: &Value) {
        let Value::Object(map) = raw else {
            return;
        };
        for field in ALLOWED_FIELDS {
            let Some(value) = map.get(field) else {
                continue;
            };
            match field {
                "type" => self.schema_type = value.as_str().map(SchemaType::parse),
                "title" => self.title = text_of(value),
                "format" => self.format = text_of(value),
                _ => self.description = text_of(value),
            }
        }
    }
}

fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Folds an operation's flat, dotted output keys into a nested schema tree.
///
/// Each key is normalized and split into segments; intermediate segments are
/// created as untyped nodes when missing, and only [`ALLOWED_FIELDS`] of the
/// raw node are merged into the addressed node. Keys are processed in order,
/// so a later key overwrites descriptive fields set by an earlier one.
pub fn transform_outputs(raw_outputs: &Map<String, Value>) -> SchemaNode {
    let mut root = SchemaNode::default();
    for (raw_key, raw_node) in raw_outputs {
        let mut node = &mut root;
        for segment in key_segments(raw_key) {
            node = node.fields.entry(segment).or_default();
        }
        node.merge_descriptive(raw_node);
    }
    root
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_value_splits_descriptive_fields_from_children() {
        let node = SchemaNode::from_value(&json!({
            "type": "object",
            "description": "A user",
            "id": { "type": "integer" },
            "name": { "type": "string", "title": "Name" }
        }));
        assert!(node.is_object());
        assert_eq!(node.description.as_deref(), Some("A user"));
        assert_eq!(node.fields.keys().collect::<Vec<_>>(), vec!["id", "name"]);
        assert_eq!(node.fields["name"].title.as_deref(), Some("Name"));
    }

    #[test]
    fn from_value_tolerates_garbage() {
        assert_eq!(SchemaNode::from_value(&json!(42)), SchemaNode::default());
        let node = SchemaNode::from_value(&json!({ "type": 7 }));
        assert_eq!(node.schema_type, None);
    }

    #[test]
    fn transform_drops_runtime_metadata() {
        let raw = json!({
            "outputs.$.body": { "type": "object", "x-ms-visibility": "internal", "key": "body.$" },
            "outputs.$.body.$.id": { "type": "integer", "description": "Identifier", "required": true }
        });
        let tree = transform_outputs(raw.as_object().unwrap());
        let body = &tree.fields["body"];
        assert!(body.is_object());
        assert_eq!(body.fields.len(), 1);
        let id = &body.fields["id"];
        assert_eq!(id.schema_type, Some(SchemaType::Integer));
        assert_eq!(id.description.as_deref(), Some("Identifier"));
        assert!(id.fields.is_empty());
    }

    #[test]
    fn later_keys_keep_existing_children() {
        let raw = json!({
            "outputs.$.body.$.id": { "type": "integer" },
            "outputs.$.body": { "type": "object" }
        });
        let tree = transform_outputs(raw.as_object().unwrap());
        assert!(tree.fields["body"].is_object());
        assert!(tree.fields["body"].fields.contains_key("id"));
    }

    #[test]
    fn root_key_describes_the_root() {
        let raw = json!({ "outputs.$": { "type": "object", "description": "All outputs" } });
        let tree = transform_outputs(raw.as_object().unwrap());
        assert!(tree.fields.is_empty());
        assert_eq!(tree.description.as_deref(), Some("All outputs"));
    }
}
