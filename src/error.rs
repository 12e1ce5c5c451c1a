//! Validation outcomes and engine faults.
//!
//! Two clearly separated channels, per `spec.md` §7: a [`ValidationError`]
//! reports a schema rule the instance failed to satisfy; an [`EngineError`]
//! reports that the engine itself could not complete the call.
use crate::paths::JsonPath;
use std::{error, fmt};

/// A single keyword failure, located by the instance path that failed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub path: JsonPath,
    pub keyword: &'static str,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub(crate) fn new(path: JsonPath, keyword: &'static str, message: impl Into<String>) -> Self {
        ValidationError {
            path,
            keyword,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}: {}", self.keyword, self.path, self.message)
    }
}

impl error::Error for ValidationError {}

/// The outcome of a `validate` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    #[must_use]
    pub(crate) fn valid() -> Self {
        ValidationResult {
            valid: true,
            errors: Vec::new(),
        }
    }

    #[must_use]
    pub(crate) fn invalid(errors: Vec<ValidationError>) -> Self {
        ValidationResult {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Abnormal engine conditions, distinguished from `ValidationResult::valid
/// == false`. Per `spec.md` §7, these terminate the call rather than
/// contribute to the error list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Nested `validate_schema` recursion exceeded the 1000-frame ceiling.
    RecursionDepthExceeded,
    /// A `$ref`/`$recursiveRef`/`$dynamicRef` value is syntactically
    /// malformed (e.g. a JSON Pointer with a dangling `~`) and therefore
    /// cannot be resolved at all, as opposed to simply not being found.
    UnresolvedReference { reference: String },
    /// `$schema` named an unrecognized draft and the caller requested
    /// strict draft detection.
    UnsupportedDraft { schema_uri: String },
    /// `$schema` was absent and the caller requested strict draft detection.
    DraftCannotBeDetected,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::RecursionDepthExceeded => {
                write!(f, "schema recursion exceeded the maximum depth of 1000")
            }
            EngineError::UnresolvedReference { reference } => {
                write!(f, "malformed reference: {reference}")
            }
            EngineError::UnsupportedDraft { schema_uri } => {
                write!(f, "unrecognized $schema draft: {schema_uri}")
            }
            EngineError::DraftCannotBeDetected => {
                write!(f, "$schema is missing and strict draft detection is enabled")
            }
        }
    }
}

impl error::Error for EngineError {}
