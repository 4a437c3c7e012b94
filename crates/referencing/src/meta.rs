//! The 2020-12 meta-schema, embedded at build time.
//!
//! Used when a consumer opts into self-validating a schema document before
//! compiling it (see `ValidationOptions::validate_schema` in `schema2020`).
use once_cell::sync::Lazy;
use serde_json::Value;

/// The draft 2020-12 core-and-validation meta-schema.
pub static DRAFT202012: Lazy<Value> = Lazy::new(|| {
    serde_json::from_slice(include_bytes!("../metaschemas/draft2020-12.json"))
        .expect("Invalid embedded meta-schema")
});

/// All meta-schemas known to this registry. Only 2020-12 is supported, so this is a
/// single-element list, kept as a list so `Registry::SPECIFICATIONS` can stay generic
/// over "however many meta-schemas this build knows about".
pub static META_SCHEMAS: Lazy<[(&'static str, &'static Value); 1]> =
    Lazy::new(|| [("https://json-schema.org/draft/2020-12/schema", &DRAFT202012)]);
