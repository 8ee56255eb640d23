use std::path::PathBuf;
use thiserror::Error;

/// Failures of the extraction engine. Any of these aborts the whole document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// `$ref` is not of the form `#/definitions/<name>` or names a missing definition
    #[error("invalid reference '{reference}'")]
    InvalidReference { reference: String },

    /// Property shape matches no type mapping rule
    #[error("invalid property type for '{definition}.{property}'")]
    InvalidPropertyType { definition: String, property: String },

    /// Definition has neither (or both) of `properties` and `enum`
    #[error("definition '{definition}' must have exactly one of 'properties' or 'enum'")]
    MalformedDefinition { definition: String },

    /// Two enum sources, or an enum and an object definition, share a type name
    #[error("type name '{name}' is produced by more than one source")]
    DuplicateEnumName { name: String },
}

/// Failures while reading a document from disk.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unrecognised file extension for path: {}", path.display())]
    UnrecognizedExtension { path: PathBuf },

    #[error("failed to parse YAML {} at {at}: {message}", path.display())]
    Yaml { path: PathBuf, at: String, message: String },

    #[error("failed to parse JSON {} at {at}: {message}", path.display())]
    Json { path: PathBuf, at: String, message: String },
}
