use super::Extractor;
use crate::error::ExtractError;
use crate::model::{Class, Property};
use crate::naming;
use crate::schema::SchemaDefinition;

impl Extractor<'_> {
    /// One class per object definition, in document order. Enum definitions are skipped.
    pub fn build_classes(&self) -> Result<Vec<Class>, ExtractError> {
        self.doc
            .definitions
            .iter()
            .filter(|(_, def)| def.properties.is_some())
            .map(|(name, def)| self.build_class(name, def))
            .collect()
    }

    fn build_class(&self, name: &str, def: &SchemaDefinition) -> Result<Class, ExtractError> {
        let properties = def
            .properties
            .iter()
            .flatten()
            .map(|(prop_name, prop)| {
                Ok(Property {
                    name: naming::property_name(prop_name),
                    type_name: self.type_name(name, prop_name, prop)?,
                    // membership on the raw, non-normalized name
                    required: def.is_required(prop_name),
                })
            })
            .collect::<Result<Vec<_>, ExtractError>>()?;
        Ok(Class { name: name.to_string(), properties })
    }
}
