// Raw Swagger-style input. Nothing here is resolved; classification happens in `extract`.

use indexmap::IndexMap;
use serde::Deserialize;

/// A document with a top-level `definitions` map, in document order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaDocument {
    #[serde(default)]
    pub definitions: IndexMap<String, SchemaDefinition>,
}

/// One named entry of `definitions`.
///
/// Both shapes share a struct so the engine, not the deserializer, decides
/// whether a definition is an object, an enum, or malformed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaDefinition {
    #[serde(default)]
    pub properties: Option<IndexMap<String, SchemaProperty>>,
    #[serde(default)]
    pub required: Option<Vec<String>>,
    #[serde(default, rename = "enum", alias = "enums")]
    pub enum_: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaProperty {
    #[serde(default, rename = "$ref")]
    pub ref_: Option<String>,
    #[serde(default, rename = "type")]
    pub type_: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default, rename = "enum", alias = "enums")]
    pub enum_: Option<Vec<String>>,
    #[serde(default)]
    pub items: Option<Box<SchemaProperty>>,
}

impl SchemaDefinition {
    pub fn is_enum(&self) -> bool {
        self.enum_.is_some() && self.properties.is_none()
    }
    pub fn is_required(&self, property: &str) -> bool {
        self.required
            .as_ref()
            .is_some_and(|names| names.iter().any(|name| name == property))
    }
}

impl SchemaDocument {
    /// Build from an already parsed JSON value (e.g. the output of a jq filter).
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_path_to_error::Error<serde_json::Error>> {
        serde_path_to_error::deserialize(value)
    }
}
