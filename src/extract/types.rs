use super::Extractor;
use crate::error::ExtractError;
use crate::schema::SchemaProperty;

impl Extractor<'_> {
    /// Final type name of `prop`, declared as `property` on `definition`.
    ///
    /// Priority: `$ref`, then inline `enum`, then `type`/`format`. Arrays recurse
    /// into `items` and append one suffix per level.
    pub fn type_name(
        &self,
        definition: &str,
        property: &str,
        prop: &SchemaProperty,
    ) -> Result<String, ExtractError> {
        if let Some(reference) = &prop.ref_ {
            return self.resolve_reference(reference);
        }
        if prop.enum_.is_some() {
            return Ok(self.enum_type_name(property));
        }
        let names = &self.options.type_names;
        let invalid = || ExtractError::InvalidPropertyType {
            definition: definition.to_string(),
            property: property.to_string(),
        };
        match prop.type_.as_deref() {
            Some("integer" | "number") => Ok(names.number.clone()),
            Some("boolean") => Ok(names.boolean.clone()),
            Some("string") => match prop.format.as_deref() {
                Some("date" | "date-time") => Ok(names.date.clone()),
                _ => Ok(names.string.clone()),
            },
            Some("object") => Ok(names.object.clone()),
            Some("array") => {
                let items = prop.items.as_deref().ok_or_else(invalid)?;
                let item = self.type_name(definition, property, items)?;
                Ok(format!("{item}{}", names.array_suffix))
            }
            _ => Err(invalid()),
        }
    }
}
