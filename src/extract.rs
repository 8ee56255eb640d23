//! Extraction & resolution engine.
//!
//! Walk the raw `definitions`, classify each one, collect enums, resolve every
//! property to a final type name and build one class per object definition.
//! The whole pass is pure: one document in, one [`TypeModel`] out, or the first
//! error. Nothing partial is ever returned.
pub mod classes;
pub mod enums;
pub mod reference;
pub mod types;

use serde::Serialize;

use crate::error::ExtractError;
use crate::model::TypeModel;
use crate::naming::{self, Case};
use crate::schema::SchemaDocument;

// ------------------------------- Options --------------------------------- //

#[derive(Debug, Clone, Default, Serialize)]
pub struct ExtractOptions {
    /// Casing for class-independent type names (enums).
    pub type_case: Case,
    pub type_names: TypeNames,
}

/// Output spelling of every primitive slot, TypeScript by default.
#[derive(Debug, Clone, Serialize)]
pub struct TypeNames {
    pub number: String,
    pub boolean: String,
    pub string: String,
    /// `string` with `format: date | date-time`
    pub date: String,
    pub object: String,
    /// appended once per array level
    pub array_suffix: String,
}

impl Default for TypeNames {
    fn default() -> Self {
        Self {
            number: "number".into(),
            boolean: "boolean".into(),
            string: "string".into(),
            date: "Date".into(),
            object: "Object".into(),
            array_suffix: "[]".into(),
        }
    }
}

// ------------------------------- Engine ---------------------------------- //

pub struct Extractor<'a> {
    doc: &'a SchemaDocument,
    options: &'a ExtractOptions,
}

impl<'a> Extractor<'a> {
    pub fn new(doc: &'a SchemaDocument, options: &'a ExtractOptions) -> Self {
        Self { doc, options }
    }

    pub fn run(&self) -> Result<TypeModel, ExtractError> {
        self.classify()?;
        let enums = self.collect_enums()?;
        let classes = self.build_classes()?;
        Ok(TypeModel { classes, enums })
    }

    /// Every definition must be exactly one of object or enum.
    fn classify(&self) -> Result<(), ExtractError> {
        for (name, def) in &self.doc.definitions {
            if def.properties.is_some() == def.enum_.is_some() {
                return Err(ExtractError::MalformedDefinition { definition: name.clone() });
            }
        }
        Ok(())
    }

    /// Type name for an enum sourced from `ident` (definition or property name).
    pub fn enum_type_name(&self, ident: &str) -> String {
        naming::normalize(ident, self.options.type_case)
    }
}

/// Resolve `doc` into a type model with the given options.
pub fn extract(doc: &SchemaDocument, options: &ExtractOptions) -> Result<TypeModel, ExtractError> {
    Extractor::new(doc, options).run()
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Class, Enum, Property};
    use serde_json::{json, Value};

    pub(crate) fn doc(v: Value) -> SchemaDocument {
        SchemaDocument::from_value(v).unwrap()
    }

    fn run(v: Value) -> Result<TypeModel, ExtractError> {
        extract(&doc(v), &ExtractOptions::default())
    }

    fn prop(name: &str, type_name: &str, required: bool) -> Property {
        Property { name: name.into(), type_name: type_name.into(), required }
    }

    #[test]
    fn inline_enum_property() {
        let model = run(json!({
            "definitions": {
                "Sample": { "properties": { "prop1": { "type": "string", "enum": ["loan", "bond"] } } }
            }
        })).unwrap();
        assert_eq!(model.enums, vec![Enum { name: "Prop1".into(), values: vec!["loan".into(), "bond".into()] }]);
        assert_eq!(model.classes, vec![Class {
            name: "Sample".into(),
            properties: vec![prop("prop1", "Prop1", false)],
        }]);
    }

    #[test]
    fn enum_inside_array_items() {
        let model = run(json!({
            "definitions": {
                "Sample": { "properties": {
                    "prop1": { "type": "array", "items": { "type": "string", "enum": ["loan", "bond"] } }
                } }
            }
        })).unwrap();
        assert_eq!(model.enums, vec![Enum { name: "Prop1".into(), values: vec!["loan".into(), "bond".into()] }]);
        assert_eq!(model.class("Sample").unwrap().properties, vec![prop("prop1", "Prop1[]", false)]);
    }

    #[test]
    fn kebab_property_and_enum_names() {
        let model = run(json!({
            "definitions": {
                "Sample": { "properties": { "prop-type-string": { "type": "string", "enum": ["a"] } } }
            }
        })).unwrap();
        let sample = model.class("Sample").unwrap();
        assert_eq!(sample.properties, vec![prop("propTypeString", "PropTypeString", false)]);
        assert!(model.enum_named("PropTypeString").is_some());
    }

    #[test]
    fn unsupported_type_fails_whole_document() {
        let err = run(json!({
            "definitions": {
                "Good": { "properties": { "ok": { "type": "string" } } },
                "Bad": { "properties": { "odd": { "type": "unsupported-thing" } } }
            }
        })).unwrap_err();
        assert_eq!(err, ExtractError::InvalidPropertyType { definition: "Bad".into(), property: "odd".into() });
    }

    #[test]
    fn malformed_definitions_rejected() {
        let neither = run(json!({ "definitions": { "Empty": { "required": ["x"] } } })).unwrap_err();
        assert_eq!(neither, ExtractError::MalformedDefinition { definition: "Empty".into() });

        let both = run(json!({
            "definitions": { "Both": { "enum": ["a"], "properties": { "x": { "type": "string" } } } }
        })).unwrap_err();
        assert_eq!(both, ExtractError::MalformedDefinition { definition: "Both".into() });
    }

    #[test]
    fn standalone_enum_definition_and_reference() {
        let model = run(json!({
            "definitions": {
                "Holder": { "properties": {
                    "kind": { "$ref": "#/definitions/asset-kind" },
                    "kinds": { "type": "array", "items": { "$ref": "#/definitions/asset-kind" } }
                } },
                "asset-kind": { "enum": ["loan", "bond", "equity"] }
            }
        })).unwrap();
        assert_eq!(model.enums, vec![Enum {
            name: "AssetKind".into(),
            values: vec!["loan".into(), "bond".into(), "equity".into()],
        }]);
        assert_eq!(model.classes.len(), 1, "enum definitions produce no class");
        assert_eq!(model.class("Holder").unwrap().properties, vec![
            prop("kind", "AssetKind", false),
            prop("kinds", "AssetKind[]", false),
        ]);
    }

    #[test]
    fn required_set_uses_original_names() {
        let model = run(json!({
            "definitions": {
                "Sample": {
                    "required": ["first-name", "age"],
                    "properties": {
                        "first-name": { "type": "string" },
                        "lastName": { "type": "string" },
                        "age": { "type": "integer" }
                    }
                }
            }
        })).unwrap();
        assert_eq!(model.class("Sample").unwrap().properties, vec![
            prop("firstName", "string", true),
            prop("lastName", "string", false),
            prop("age", "number", true),
        ]);
    }

    #[test]
    fn resolution_is_deterministic() {
        let input = json!({
            "definitions": {
                "B": { "properties": { "z": { "type": "string", "enum": ["3", "1", "2"] }, "a": { "$ref": "#/definitions/A" } } },
                "A": { "properties": { "y": { "type": "array", "items": { "type": "array", "items": { "type": "boolean" } } } } },
                "C": { "enum": ["q", "p"] }
            }
        });
        let first = run(input.clone()).unwrap();
        let second = run(input).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap(),
        );
        let names: Vec<_> = first.classes.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["B", "A"]);
        let enums: Vec<_> = first.enums.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(enums, ["Z", "C"]);
        assert_eq!(first.enum_named("Z").unwrap().values, ["3", "1", "2"]);
    }

    #[test]
    fn camel_type_case_option() {
        let options = ExtractOptions { type_case: Case::Camel, ..ExtractOptions::default() };
        let model = extract(&doc(json!({
            "definitions": {
                "Sample": { "properties": { "loan-kind": { "type": "string", "enum": ["a", "b"] } } }
            }
        })), &options).unwrap();
        assert_eq!(model.enums[0].name, "loanKind");
        assert_eq!(model.classes[0].properties[0].type_name, "loanKind");
    }

    #[test]
    fn empty_document_gives_empty_model() {
        assert_eq!(run(json!({ "definitions": {} })).unwrap(), TypeModel::default());
        assert_eq!(run(json!({})).unwrap(), TypeModel::default());
    }
}
