use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// C# type used for anything the schema does not pin down.
pub const FALLBACK_TYPE: &str = "JObject";

/// The `type` tag of a schema node.
///
/// Tags outside the recognized set are kept verbatim in `Unknown` so they can
/// still be matched by a user supplied type mapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SchemaType {
    String,
    Integer,
    Number,
    Boolean,
    Array,
    Object,
    Any,
    DateTime,
    Unknown(String),
}

impl SchemaType {
    /// Parses a raw type tag. Never fails.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "string" => SchemaType::String,
            "integer" => SchemaType::Integer,
            "number" => SchemaType::Number,
            "boolean" => SchemaType::Boolean,
            "array" => SchemaType::Array,
            "object" => SchemaType::Object,
            "any" => SchemaType::Any,
            "date-time" => SchemaType::DateTime,
            other => SchemaType::Unknown(other.to_string()),
        }
    }

    /// The raw tag as it appears in the schema.
    pub fn tag(&self) -> &str {
        match self {
            SchemaType::String => "string",
            SchemaType::Integer => "integer",
            SchemaType::Number => "number",
            SchemaType::Boolean => "boolean",
            SchemaType::Array => "array",
            SchemaType::Object => "object",
            SchemaType::Any => "any",
            SchemaType::DateTime => "date-time",
            SchemaType::Unknown(tag) => tag,
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self, SchemaType::Object)
    }
}

impl From<String> for SchemaType {
    fn from(tag: String) -> Self {
        SchemaType::parse(&tag)
    }
}

impl From<SchemaType> for String {
    fn from(schema_type: SchemaType) -> Self {
        schema_type.tag().to_string()
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Maps a schema type tag to its C# type name.
///
/// Missing and unrecognized tags fall back to `JObject`.
pub fn map_type(schema_type: Option<&SchemaType>) -> &'static str {
    match schema_type {
        Some(SchemaType::String) => "string",
        Some(SchemaType::Integer) => "int",
        Some(SchemaType::Number) => "double",
        Some(SchemaType::Boolean) => "bool",
        Some(SchemaType::Array) => "List<object>",
        Some(SchemaType::Object) | Some(SchemaType::Any) => FALLBACK_TYPE,
        Some(SchemaType::DateTime) => "DateTime",
        Some(SchemaType::Unknown(_)) | None => FALLBACK_TYPE,
    }
}

/// The type mapping used by one generation pass.
///
/// Starts out as [`map_type`] and lets callers replace the target type for
/// individual tags, e.g. `date-time` to `DateTimeOffset`.
#[derive(Debug, Clone, Default)]
pub struct TypeMap {
    overrides: AHashMap<String, String>,
}

impl TypeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the C# type emitted for `tag`.
    pub fn with_override(mut self, tag: &str, csharp_type: &str) -> Self {
        self.insert(tag, csharp_type);
        self
    }

    pub fn insert(&mut self, tag: &str, csharp_type: &str) {
        self.overrides
            .insert(tag.to_string(), csharp_type.to_string());
    }

    /// Resolves a type tag. Total: always returns a type name.
    pub fn resolve(&self, schema_type: Option<&SchemaType>) -> &str {
        schema_type
            .and_then(|t| self.overrides.get(t.tag()))
            .map(String::as_str)
            .unwrap_or_else(|| map_type(schema_type))
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}
