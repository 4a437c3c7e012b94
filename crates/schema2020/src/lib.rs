//! A JSON Schema 2020-12 validator for Rust.
//!
//! - Two-phase design: a schema document is parsed into a keyword-addressable tree, then lowered
//!   into a validator graph that can be reused across many validations.
//! - Full annotation tracking (`unevaluatedProperties` / `unevaluatedItems`), static and dynamic
//!   references, and the `basic` output format.
//! - Custom keywords and custom format checkers.
//! - Pluggable external reference retrieval (HTTP, filesystem).
//!
//! # Validation
//!
//! For simple use cases where you need to validate an instance against a schema once, use
//! [`is_valid`]:
//!
//! ```rust
//! use serde_json::json;
//!
//! let schema = json!({"type": "string"});
//! let instance = json!("Hello, world!");
//!
//! assert!(jsonschema::is_valid(&schema, &instance));
//! ```
//!
//! For better performance, especially when validating multiple instances against the same
//! schema, build a [`Validator`] once and reuse it:
//!
//! ```rust
//! use serde_json::json;
//!
//! let schema = json!({"type": "string"});
//! let validator = jsonschema::validator_for(&schema)
//!     .expect("Invalid schema");
//!
//! assert!(validator.is_valid(&json!("Hello, world!")));
//! assert!(!validator.is_valid(&json!(42)));
//!
//! // Iterate over all errors
//! let instance = json!(42);
//! let result = validator.validate(&instance);
//! if let Err(errors) = result {
//!     for error in errors {
//!         eprintln!("Error: {error}");
//!         eprintln!("Location: {}", error.instance_path);
//!     }
//! }
//! ```
//!
//! # Configuration
//!
//! [`ValidationOptions`], obtained from [`options()`], lets you configure a validator before
//! building it: custom retrievers, custom formats, custom keywords, additional in-memory
//! resources, and whether `format` is asserted rather than treated as an annotation.
//!
//! ```rust
//! use serde_json::json;
//!
//! let schema = json!({"type": "string", "format": "email"});
//! let validator = jsonschema::options()
//!     .should_validate_formats(true)
//!     .build(&schema)
//!     .expect("Invalid schema");
//! ```
//!
//! # Reference Resolving
//!
//! By default, external `$ref`/`$dynamicRef` targets are resolved with `reqwest` over HTTP(S)
//! and from the local filesystem for `file://` URIs. Either can be disabled via crate features:
//!
//! - Disable HTTP resolving: `default-features = false, features = ["resolve-file"]`
//! - Disable file resolving: `default-features = false, features = ["resolve-http"]`
//! - Disable both: `default-features = false`
//!
//! A consumer may also plug in a custom [`referencing::Retrieve`] implementation via
//! [`ValidationOptions::with_retriever`] to serve schemas from a static map, a database, or any
//! other source.
//!
//! # Output Styles
//!
//! `jsonschema` supports the `basic` output format from the 2020-12 specification, letting you
//! serialize validation results in a standardized shape using `serde`:
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use serde_json::json;
//!
//! let schema_json = json!({
//!     "title": "string value",
//!     "type": "string"
//! });
//! let instance = json!("some string");
//! let validator = jsonschema::validator_for(&schema_json)
//!     .expect("Invalid schema");
//!
//! let output = validator.apply(&instance).basic();
//! let output_json = serde_json::to_value(output)?;
//!
//! assert_eq!(
//!     output_json,
//!     json!({
//!         "valid": true,
//!         "annotations": [
//!             {
//!                 "keywordLocation": "",
//!                 "instanceLocation": "",
//!                 "annotations": {
//!                     "title": "string value"
//!                 }
//!             }
//!         ]
//!     })
//! );
//! #    Ok(())
//! # }
//! ```
//!
//! # Custom Keywords
//!
//! Extend validation with domain-specific keywords by implementing the [`Keyword`] trait and
//! registering a factory function with [`ValidationOptions::with_keyword`]:
//!
//! ```rust
//! use jsonschema::{
//!     paths::{JsonPointer, JsonPointerNode},
//!     ErrorIterator, Keyword, ValidationError,
//! };
//! use serde_json::{json, Map, Value};
//! use std::iter::once;
//!
//! struct EvenNumberValidator;
//!
//! impl Keyword for EvenNumberValidator {
//!     fn validate<'instance>(
//!         &self,
//!         instance: &'instance Value,
//!         instance_path: &JsonPointerNode,
//!     ) -> ErrorIterator<'instance> {
//!         if instance.as_u64().map_or(false, |n| n % 2 == 0) {
//!             Box::new(None.into_iter())
//!         } else {
//!             let error = ValidationError::custom(
//!                 JsonPointer::default(),
//!                 instance_path.into(),
//!                 instance,
//!                 "Number must be even",
//!             );
//!             Box::new(once(error))
//!         }
//!     }
//!
//!     fn is_valid(&self, instance: &Value) -> bool {
//!         instance.as_u64().map_or(false, |n| n % 2 == 0)
//!     }
//! }
//!
//! fn even_number_validator_factory<'a>(
//!     _parent: &'a Map<String, Value>,
//!     value: &'a Value,
//!     _path: JsonPointer,
//! ) -> Result<Box<dyn Keyword>, ValidationError<'a>> {
//!     if value.as_bool() == Some(true) {
//!         Ok(Box::new(EvenNumberValidator))
//!     } else {
//!         Err(ValidationError::custom(
//!             JsonPointer::default(),
//!             JsonPointer::default(),
//!             value,
//!             "The 'even-number' keyword must be set to true",
//!         ))
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let schema = json!({"even-number": true, "type": "integer"});
//! let validator = jsonschema::options()
//!     .with_keyword("even-number", even_number_validator_factory)
//!     .build(&schema)
//!     .expect("Invalid schema");
//!
//! assert!(validator.is_valid(&json!(2)));
//! assert!(!validator.is_valid(&json!(3)));
//! assert!(!validator.is_valid(&json!("not a number")));
//! # Ok(())
//! # }
//! ```
//!
//! # Custom Formats
//!
//! Register a domain-specific string format via [`ValidationOptions::with_format`]:
//!
//! ```rust
//! use serde_json::json;
//!
//! fn ends_with_42(s: &str) -> bool {
//!     s.ends_with("42!")
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let schema = json!({"type": "string", "format": "ends-with-42"});
//! let validator = jsonschema::options()
//!     .with_format("ends-with-42", ends_with_42)
//!     .should_validate_formats(true)
//!     .build(&schema)
//!     .expect("Invalid schema");
//!
//! assert!(validator.is_valid(&json!("Hello42!")));
//! assert!(!validator.is_valid(&json!("Hello43!")));
//! assert!(!validator.is_valid(&json!(42)));
//! #    Ok(())
//! # }
//! ```
//!
//! Custom format validators only run for string instances, and only when `format` is asserted
//! (see [`ValidationOptions::should_validate_formats`]).

mod cancellation;
mod compiler;
mod content_encoding;
mod content_media_type;
mod ecma;
pub mod error;
mod keywords;
mod node;
mod options;
pub mod output;
pub mod paths;
pub mod primitive_type;
pub(crate) mod properties;
mod retriever;
mod validator;

pub use cancellation::CancellationToken;
pub use error::{ErrorIterator, ValidationError};
pub use keywords::custom::Keyword;
pub use options::ValidationOptions;
pub use output::{BasicOutput, Output};
pub use referencing::{Draft, Resource};
pub use validator::Validator;

use serde_json::Value;

/// Create a default [`ValidationOptions`] for configuring JSON Schema validation.
///
/// # Example
///
/// ```rust
/// let schema = serde_json::json!({"type": "string"});
/// let validator = jsonschema::options().build(&schema).expect("Invalid schema");
/// ```
#[must_use]
#[inline]
pub fn options() -> ValidationOptions {
    Validator::options()
}

/// A shortcut for validating `instance` against `schema` using the default options.
///
/// ```rust
/// use jsonschema::is_valid;
/// use serde_json::json;
///
/// let schema = json!({"maxLength": 5});
/// let instance = json!("foo");
/// assert!(is_valid(&schema, &instance));
/// ```
///
/// This function panics if the schema itself is invalid.
#[must_use]
#[inline]
pub fn is_valid(schema: &Value, instance: &Value) -> bool {
    let compiled = validator_for(schema).expect("Invalid schema");
    compiled.is_valid(instance)
}

/// Compile `schema` using the default options, producing a reusable [`Validator`].
#[inline]
pub fn validator_for(schema: &Value) -> Result<Validator, ValidationError<'static>> {
    Validator::new(schema)
}

#[cfg(test)]
pub(crate) mod tests_util {
    use super::Validator;
    use crate::ValidationError;
    use serde_json::Value;

    pub(crate) fn is_not_valid_with(compiled: &Validator, instance: &Value) {
        assert!(
            !compiled.is_valid(instance),
            "{instance} should not be valid (via is_valid)"
        );
        assert!(
            compiled.validate(instance).is_err(),
            "{instance} should not be valid (via validate)"
        );
        assert!(
            !compiled.apply(instance).basic().is_valid(),
            "{instance} should not be valid (via apply)"
        );
    }

    pub(crate) fn is_not_valid(schema: &Value, instance: &Value) {
        let compiled = Validator::new(schema).unwrap();
        is_not_valid_with(&compiled, instance)
    }

    pub(crate) fn expect_errors(schema: &Value, instance: &Value, errors: &[&str]) {
        assert_eq!(
            Validator::new(schema)
                .expect("Should be a valid schema")
                .validate(instance)
                .expect_err(format!("{instance} should not be valid").as_str())
                .map(|e| e.to_string())
                .collect::<Vec<String>>(),
            errors
        )
    }

    pub(crate) fn is_valid_with(compiled: &Validator, instance: &Value) {
        if let Err(mut errors) = compiled.validate(instance) {
            let first = errors.next().expect("Errors iterator is empty");
            panic!(
                "{instance} should be valid (via validate). Error: {first} at {}",
                first.instance_path
            );
        }
        assert!(
            compiled.is_valid(instance),
            "{instance} should be valid (via is_valid)"
        );
        assert!(
            compiled.apply(instance).basic().is_valid(),
            "{instance} should be valid (via apply)"
        );
    }

    pub(crate) fn is_valid(schema: &Value, instance: &Value) {
        let compiled = Validator::new(schema).unwrap();
        is_valid_with(&compiled, instance);
    }

    pub(crate) fn validate(schema: &Value, instance: &Value) -> ValidationError<'static> {
        let compiled = Validator::new(schema).unwrap();
        compiled
            .validate(instance)
            .expect_err("Should be an error")
            .next()
            .expect("Should be an error")
            .into_owned()
    }

    pub(crate) fn assert_schema_path(schema: &Value, instance: &Value, expected: &str) {
        let error = validate(schema, instance);
        assert_eq!(error.schema_path.to_string(), expected)
    }

    /// Alias of [`assert_schema_path`] used by keyword tests that spell the schema-side
    /// pointer as a "location".
    pub(crate) fn assert_schema_location(schema: &Value, instance: &Value, expected: &str) {
        assert_schema_path(schema, instance, expected)
    }

    pub(crate) fn assert_schema_paths(schema: &Value, instance: &Value, expected: &[&str]) {
        let compiled = Validator::new(schema).unwrap();
        let errors = compiled.validate(instance).expect_err("Should be an error");
        for (error, schema_path) in errors.zip(expected) {
            assert_eq!(error.schema_path.to_string(), *schema_path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::is_valid;
    use serde_json::json;

    #[test]
    fn test_is_valid() {
        let schema = json!({"minLength": 5});
        let valid = json!("foobar");
        let invalid = json!("foo");
        assert!(is_valid(&schema, &valid));
        assert!(!is_valid(&schema, &invalid));
    }

    #[test]
    fn meta_schema_accepts_degenerate_enums() {
        for schema in [json!({"enum": [0, 0.0]}), json!({"enum": []})] {
            assert!(super::validator_for(&schema).is_ok());
        }
    }

    #[test]
    fn incomplete_escape_in_pattern() {
        let schema = json!({"pattern": "\\u"});
        assert!(super::validator_for(&schema).is_err())
    }
}
