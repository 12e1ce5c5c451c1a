//! # jsonschema
//!
//! A multi-draft JSON Schema validator: Draft 4, Draft 6, Draft 7,
//! 2019-09, and 2020-12, auto-detected from `$schema` or set explicitly.
//!
//! ## Example
//!
//! ```rust
//! use jsonschema::validate;
//! use serde_json::json;
//!
//! let schema = json!({"type": "string", "minLength": 3});
//! let result = validate(&json!("ok"), &schema).unwrap();
//! assert!(!result.valid);
//! for error in &result.errors {
//!     println!("{error}");
//! }
//! ```
//!
//! For draft overrides, format-assertion control, or an external schema
//! loader, build [`ValidationOptions`] via [`options()`]:
//!
//! ```rust
//! use jsonschema::{options, Draft};
//! use serde_json::json;
//!
//! let result = options()
//!     .with_draft(Draft::Draft7)
//!     .validate(&json!(42), &json!({"type": "integer"}))
//!     .unwrap();
//! assert!(result.valid);
//! ```
#![warn(
    clippy::doc_markdown,
    clippy::redundant_closure,
    clippy::explicit_iter_loop,
    clippy::match_same_arms,
    clippy::needless_borrow,
    clippy::print_stdout,
    clippy::cast_possible_truncation,
    clippy::trivially_copy_pass_by_ref,
    clippy::needless_pass_by_value,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications
)]

mod ecma;
mod engine;
mod error;
mod keywords;
mod options;
mod paths;
mod pointer;
mod primitive_type;
mod registry;
mod uri;

pub use error::{EngineError, ValidationError, ValidationResult};
pub use options::{options, Draft, DraftDetectionMode, NullSchemaLoader, SchemaLoader, ValidationOptions};
pub use paths::{JsonPath, PathChunk};

use serde_json::Value;

/// Validate `instance` against `schema`, autodetecting the draft from
/// `$schema` (defaulting to Draft 2020-12 if absent or unrecognized).
///
/// Returns `Err` only for a fatal engine fault (unbounded recursion,
/// unresolvable draft under strict detection); ordinary schema
/// disagreement is reported through `Ok(result)` with `result.valid == false`.
pub fn validate(instance: &Value, schema: &Value) -> Result<ValidationResult, EngineError> {
    options().validate(instance, schema)
}

/// Shortcut returning only whether `instance` satisfies `schema`, swallowing
/// any engine fault as `false`.
#[must_use]
pub fn is_valid(instance: &Value, schema: &Value) -> bool {
    validate(instance, schema).map(|r| r.valid).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn validate_reports_pass_and_fail() {
        let schema = json!({"type": "string", "minLength": 3});
        assert!(!validate(&json!("ok"), &schema).unwrap().valid);
        assert!(validate(&json!("long enough"), &schema).unwrap().valid);
    }

    #[test]
    fn is_valid_shortcut_matches_validate() {
        let schema = json!({"type": "number"});
        assert!(is_valid(&json!(42), &schema));
        assert!(!is_valid(&json!("nope"), &schema));
    }

    #[test]
    fn draft_override_via_options() {
        let result = options()
            .with_draft(Draft::Draft7)
            .validate(&json!(42), &json!({"type": "integer"}))
            .unwrap();
        assert!(result.valid);
    }
}
