//! Document loading: YAML or JSON by file extension.
//!
//! Errors carry the path of the offending node (`definitions.Foo.properties.bar.type`).
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::LoadError;
use crate::schema::SchemaDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "yaml" | "yml" => Some(Format::Yaml),
            "json" => Some(Format::Json),
            _ => None,
        }
    }
}

/// Read `path` as an untyped JSON value, whatever the source format.
pub fn load_value(path: &Path) -> Result<serde_json::Value, LoadError> {
    load(path)
}

/// Read and deserialize `path` straight into a [`SchemaDocument`].
pub fn load_document(path: &Path) -> Result<SchemaDocument, LoadError> {
    load(path)
}

fn load<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let format = Format::from_path(path)
        .ok_or_else(|| LoadError::UnrecognizedExtension { path: path.to_path_buf() })?;
    let source = std::fs::read_to_string(path)
        .map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;
    match format {
        Format::Yaml => from_yaml_with_path(&source).map_err(|(at, message)| LoadError::Yaml {
            path: path.to_path_buf(),
            at,
            message,
        }),
        Format::Json => from_json_with_path(&source).map_err(|(at, message)| LoadError::Json {
            path: path.to_path_buf(),
            at,
            message,
        }),
    }
}

/// Deserialize JSON with node-path context: `Err((path, message))`.
pub fn from_json_with_path<T: DeserializeOwned>(src: &str) -> Result<T, (String, String)> {
    let de = &mut serde_json::Deserializer::from_str(src);
    serde_path_to_error::deserialize::<_, T>(de).map_err(|err| {
        let path = err.path().to_string();
        (path, err.into_inner().to_string())
    })
}

/// Deserialize YAML with node-path context: `Err((path, message))`.
///
/// Goes through a JSON value first so scalars keep their YAML type: `enum: [1, 2]`
/// is rejected exactly as it would be in JSON instead of becoming `"1" | "2"`.
pub fn from_yaml_with_path<T: DeserializeOwned>(src: &str) -> Result<T, (String, String)> {
    let de = serde_yaml::Deserializer::from_str(src);
    let value = serde_path_to_error::deserialize::<_, serde_json::Value>(de).map_err(|err| {
        let path = err.path().to_string();
        (path, err.into_inner().to_string())
    })?;
    serde_path_to_error::deserialize::<_, T>(value).map_err(|err| {
        let path = err.path().to_string();
        (path, err.into_inner().to_string())
    })
}
