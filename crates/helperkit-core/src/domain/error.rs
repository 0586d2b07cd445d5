// ============================================================================
// domain/error.rs - SCHEMA AND ARGUMENT ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reported once per render, inspected in tests)
/// - Categorizable (helper author mistake vs. call-site mistake)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Authoring Errors (raised while a helper declares its schema)
    // ========================================================================
    #[error("Argument '{name}' is already registered")]
    DuplicateArgument { name: String },

    #[error("Unknown type tag '{tag}' for argument '{argument}'")]
    InvalidTypeTag { argument: String, tag: String },

    #[error("Invalid argument name '{name}': {reason}")]
    InvalidArgumentName { name: String, reason: String },

    #[error("Invalid helper id '{id}': {reason}")]
    InvalidHelperId { id: String, reason: String },

    // ========================================================================
    // Validation Errors (raised while resolving a call site)
    // ========================================================================
    #[error("Required argument '{name}' was not supplied")]
    MissingRequiredArgument { name: String },

    #[error("Argument '{name}' expects {expected}, got {actual}")]
    InvalidArgumentValue {
        name: String,
        expected: String,
        actual: String,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DuplicateArgument { name } => vec![
                format!("Each argument name may be registered once; '{}' appears twice", name),
                "Rename one of the arguments or drop the duplicate registration".into(),
            ],
            Self::InvalidTypeTag { tag, .. } => vec![
                format!("'{}' is not a known type tag", tag),
                "Use one of: string, integer, float, boolean, array, object, mixed".into(),
            ],
            Self::MissingRequiredArgument { name } => vec![
                format!("Pass '{}' at the call site", name),
                "Or declare the argument as optional with a default value".into(),
            ],
            Self::InvalidArgumentValue { name, expected, .. } => vec![
                format!("Supply a value of type {} for '{}'", expected, name),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DuplicateArgument { .. }
            | Self::InvalidTypeTag { .. }
            | Self::InvalidArgumentName { .. }
            | Self::InvalidHelperId { .. } => ErrorCategory::Authoring,
            Self::MissingRequiredArgument { .. } | Self::InvalidArgumentValue { .. } => {
                ErrorCategory::Validation
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Authoring,
    Validation,
}
