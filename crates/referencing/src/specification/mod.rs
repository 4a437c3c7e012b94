use serde_json::Value;

mod ids;
mod subresources;

use crate::{
    anchors,
    vocabularies::{VocabularySet, DRAFT_2020_12_VOCABULARIES},
    Anchor, Error, Resolver, Resource, ResourceRef, Segments,
};

/// JSON Schema specification version.
///
/// Only 2020-12 is supported. A schema whose `$schema` names an older draft
/// is rejected at [`Error::unknown_specification`] rather than silently
/// downgraded.
#[non_exhaustive]
#[derive(Debug, Default, PartialEq, Copy, Clone, Hash, Eq, PartialOrd, Ord)]
pub enum Draft {
    /// JSON Schema Draft 2020-12
    #[default]
    Draft202012,
}

impl Draft {
    #[must_use]
    pub fn create_resource(self, contents: Value) -> Resource {
        Resource::new(contents, self)
    }
    #[must_use]
    pub fn create_resource_ref(self, contents: &Value) -> ResourceRef<'_> {
        ResourceRef::new(contents, self)
    }
    /// Detect what specification could be applied to the given contents.
    ///
    /// # Errors
    ///
    /// On unknown `$schema` value it returns [`Error::UnknownSpecification`],
    /// including values that name a draft other than 2020-12.
    pub fn detect(self, contents: &Value) -> Result<Draft, Error> {
        if let Some(schema) = contents
            .as_object()
            .and_then(|contents| contents.get("$schema"))
            .and_then(|schema| schema.as_str())
        {
            match schema.trim_end_matches('#') {
                "https://json-schema.org/draft/2020-12/schema" => Ok(Draft::Draft202012),
                value => Err(Error::unknown_specification(value)),
            }
        } else {
            Ok(self)
        }
    }
    pub(crate) fn id_of(self, contents: &Value) -> Option<&str> {
        ids::dollar_id(contents)
    }
    #[must_use]
    pub fn subresources_of<'a>(
        self,
        contents: &'a Value,
    ) -> Box<dyn Iterator<Item = &'a Value> + 'a> {
        subresources::subresources_of(contents)
    }
    pub(crate) fn anchors<'a>(self, contents: &'a Value) -> Box<dyn Iterator<Item = Anchor> + 'a> {
        anchors::anchor(self, contents)
    }
    pub(crate) fn maybe_in_subresource<'r>(
        self,
        segments: &Segments,
        resolver: &Resolver<'r>,
        subresource: ResourceRef<'r>,
    ) -> Result<Resolver<'r>, Error> {
        subresources::maybe_in_subresource(segments, resolver, subresource)
    }
    /// Identifies known JSON schema keywords.
    #[must_use]
    pub fn is_known_keyword(&self, keyword: &str) -> bool {
        matches!(
            keyword,
            "$ref"
                | "$schema"
                | "additionalItems"
                | "additionalProperties"
                | "allOf"
                | "anyOf"
                | "dependencies"
                | "enum"
                | "exclusiveMaximum"
                | "exclusiveMinimum"
                | "format"
                | "items"
                | "maxItems"
                | "maxLength"
                | "maxProperties"
                | "maximum"
                | "minItems"
                | "minLength"
                | "minProperties"
                | "minimum"
                | "multipleOf"
                | "not"
                | "oneOf"
                | "pattern"
                | "patternProperties"
                | "properties"
                | "required"
                | "type"
                | "uniqueItems"
                | "$id"
                | "const"
                | "contains"
                | "propertyNames"
                | "else"
                | "if"
                | "then"
                | "$anchor"
                | "$defs"
                | "dependentRequired"
                | "dependentSchemas"
                | "maxContains"
                | "minContains"
                | "prefixItems"
                | "unevaluatedItems"
                | "unevaluatedProperties"
                | "$dynamicAnchor"
                | "$dynamicRef"
        )
    }

    pub(crate) fn default_vocabularies(self) -> VocabularySet {
        VocabularySet::from_known(DRAFT_2020_12_VOCABULARIES)
    }
}
