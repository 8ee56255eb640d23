use once_cell::sync::Lazy;
use regex::Regex;

use super::Extractor;
use crate::error::ExtractError;

/// `#/definitions/<name>`, single segment only.
static DEFINITION_REF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#/definitions/([^/]+)$").unwrap()
});

/// Target definition name of a local `$ref`, or `None` if the pointer has another shape.
pub fn definition_name(reference: &str) -> Option<&str> {
    DEFINITION_REF
        .captures(reference)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

impl Extractor<'_> {
    /// Type name a `$ref` resolves to: the enum type name when the target is an
    /// enum definition, the definition name itself otherwise. Single level only,
    /// the target's own properties are not looked at.
    pub fn resolve_reference(&self, reference: &str) -> Result<String, ExtractError> {
        let invalid = || ExtractError::InvalidReference { reference: reference.to_string() };
        let name = definition_name(reference).ok_or_else(invalid)?;
        let target = self.doc.definitions.get(name).ok_or_else(invalid)?;
        if target.is_enum() {
            Ok(self.enum_type_name(name))
        } else {
            Ok(name.to_string())
        }
    }
}
