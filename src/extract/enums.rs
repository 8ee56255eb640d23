use std::collections::HashSet;

use super::Extractor;
use crate::error::ExtractError;
use crate::model::Enum;
use crate::schema::SchemaProperty;

impl Extractor<'_> {
    /// Every enum to emit, in discovery order: definitions in document order,
    /// properties in declaration order. Two sources with the same type name are
    /// an error, and so is an enum named like an object definition.
    pub fn collect_enums(&self) -> Result<Vec<Enum>, ExtractError> {
        let found = self.doc.definitions.iter().flat_map(|(def_name, def)| {
            let standalone = def
                .enum_
                .as_ref()
                .filter(|_| def.is_enum())
                .map(|values| self.named_enum(def_name, values));
            let inline = def
                .properties
                .iter()
                .flatten()
                .filter_map(move |(prop_name, prop)| {
                    inline_enum(prop).map(|values| self.named_enum(prop_name, values))
                });
            standalone.into_iter().chain(inline)
        });

        let classes: HashSet<&str> = self
            .doc
            .definitions
            .iter()
            .filter(|(_, def)| def.properties.is_some())
            .map(|(name, _)| name.as_str())
            .collect();
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for e in found {
            if classes.contains(e.name.as_str()) || !seen.insert(e.name.clone()) {
                return Err(ExtractError::DuplicateEnumName { name: e.name });
            }
            out.push(e);
        }
        Ok(out)
    }

    fn named_enum(&self, ident: &str, values: &[String]) -> Enum {
        Enum { name: self.enum_type_name(ident), values: values.to_vec() }
    }
}

/// Inline `enum` values of a property, looking through array `items`.
/// A `$ref` never counts; its target is collected as a definition.
fn inline_enum(prop: &SchemaProperty) -> Option<&[String]> {
    if prop.ref_.is_some() {
        return None;
    }
    if let Some(values) = &prop.enum_ {
        return Some(values.as_slice());
    }
    match (prop.type_.as_deref(), &prop.items) {
        (Some("array"), Some(items)) => inline_enum(items),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::tests::doc;
    use crate::extract::ExtractOptions;
    use serde_json::json;

    fn collect(v: serde_json::Value) -> Result<Vec<Enum>, ExtractError> {
        let document = doc(v);
        let options = ExtractOptions::default();
        Extractor::new(&document, &options).collect_enums()
    }

    #[test]
    fn nested_arrays_are_searched() {
        let enums = collect(json!({
            "definitions": {
                "Grid": { "properties": {
                    "cells": { "type": "array", "items": { "type": "array", "items": { "type": "string", "enum": ["x", "o"] } } }
                } }
            }
        })).unwrap();
        assert_eq!(enums, vec![Enum { name: "Cells".into(), values: vec!["x".into(), "o".into()] }]);
    }

    #[test]
    fn refs_and_plain_properties_are_skipped() {
        let enums = collect(json!({
            "definitions": {
                "Holder": { "properties": {
                    "plain": { "type": "string" },
                    "linked": { "$ref": "#/definitions/Other" }
                } },
                "Other": { "properties": {} }
            }
        })).unwrap();
        assert!(enums.is_empty());
    }

    #[test]
    fn discovery_order_is_document_order() {
        let enums = collect(json!({
            "definitions": {
                "First": { "properties": {
                    "b-side": { "type": "string", "enum": ["1"] },
                    "a-side": { "type": "string", "enum": ["2"] }
                } },
                "mode": { "enum": ["on", "off"] },
                "Last": { "properties": { "tail": { "type": "string", "enum": ["3"] } } }
            }
        })).unwrap();
        let names: Vec<_> = enums.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["BSide", "ASide", "Mode", "Tail"]);
    }

    #[test]
    fn colliding_names_fail_fast() {
        let err = collect(json!({
            "definitions": {
                "Loan": { "properties": { "status": { "type": "string", "enum": ["open"] } } },
                "Bond": { "properties": { "status": { "type": "string", "enum": ["issued"] } } }
            }
        })).unwrap_err();
        assert_eq!(err, ExtractError::DuplicateEnumName { name: "Status".into() });

        let err = collect(json!({
            "definitions": {
                "asset-kind": { "enum": ["loan"] },
                "Holder": { "properties": { "asset-kind": { "type": "string", "enum": ["bond"] } } }
            }
        })).unwrap_err();
        assert_eq!(err, ExtractError::DuplicateEnumName { name: "AssetKind".into() });
    }

    #[test]
    fn enum_named_like_a_class_fails() {
        let err = collect(json!({
            "definitions": {
                "Status": { "properties": { "x": { "type": "string" } } },
                "Holder": { "properties": { "status": { "type": "string", "enum": ["a"] } } }
            }
        })).unwrap_err();
        assert_eq!(err, ExtractError::DuplicateEnumName { name: "Status".into() });

        // standalone enum definitions are not classes
        let enums = collect(json!({
            "definitions": {
                "status": { "enum": ["a"] },
                "Holder": { "properties": { "state": { "$ref": "#/definitions/status" } } }
            }
        })).unwrap();
        assert_eq!(enums[0].name, "Status");
    }
}
