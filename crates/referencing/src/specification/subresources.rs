use serde_json::Value;

use crate::{segments::Segment, Error, Resolver, ResourceRef, Segments};

macro_rules! lookup {
    ($schema:expr, $in_value:expr, $in_subvalues:expr, $in_subarray:expr) => {
        $in_value
            .iter()
            .flat_map(|&keyword| $schema.get(keyword).into_iter())
            .chain($in_subvalues.iter().flat_map(|&keyword| {
                $schema
                    .get(keyword)
                    .and_then(Value::as_object)
                    .into_iter()
                    .flat_map(|o| o.values())
            }))
            .chain($in_subarray.iter().flat_map(|&keyword| {
                $schema
                    .get(keyword)
                    .and_then(Value::as_array)
                    .into_iter()
                    .flatten()
            }))
    };
}

pub(crate) use lookup;

pub(crate) fn subresources_of<'a>(contents: &'a Value) -> Box<dyn Iterator<Item = &'a Value> + 'a> {
    const IN_VALUE: &[&str] = &[
        "additionalProperties",
        "contains",
        "contentSchema",
        "else",
        "if",
        "items",
        "not",
        "propertyNames",
        "then",
        "unevaluatedItems",
        "unevaluatedProperties",
    ];
    const IN_SUBARRAY: &[&str] = &["allOf", "anyOf", "oneOf", "prefixItems"];
    const IN_SUBVALUES: &[&str] = &[
        "$defs",
        "definitions",
        "dependentSchemas",
        "patternProperties",
        "properties",
    ];

    match contents.as_object() {
        Some(schema) => Box::new(lookup!(schema, IN_VALUE, IN_SUBVALUES, IN_SUBARRAY)),
        None => Box::new(std::iter::empty()),
    }
}

pub(crate) fn maybe_in_subresource<'r>(
    segments: &Segments,
    resolver: &Resolver<'r>,
    subresource: ResourceRef<'r>,
) -> Result<Resolver<'r>, Error> {
    const IN_VALUE: &[&str] = &[
        "additionalProperties",
        "contains",
        "contentSchema",
        "else",
        "if",
        "items",
        "not",
        "propertyNames",
        "then",
        "unevaluatedItems",
        "unevaluatedProperties",
    ];
    const IN_CHILD: &[&str] = &[
        "allOf",
        "anyOf",
        "oneOf",
        "prefixItems",
        "$defs",
        "definitions",
        "dependentSchemas",
        "patternProperties",
        "properties",
    ];

    let mut iter = segments.iter();
    while let Some(segment) = iter.next() {
        if let Segment::Key(key) = segment {
            if !IN_VALUE.contains(&key.as_ref())
                && (!IN_CHILD.contains(&key.as_ref()) || iter.next().is_none())
            {
                return Ok(resolver.clone());
            }
        }
    }
    resolver.in_subresource(subresource)
}
