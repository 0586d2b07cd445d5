//! Application layer errors.
//!
//! These errors represent failures while orchestrating helpers, not schema or
//! argument mistakes. Those are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while rendering helpers and reports.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Querying a value's structure failed for a reason other than access control.
    #[error("Introspection of '{path}' failed: {reason}")]
    IntrospectionFailure { path: String, reason: String },

    /// A child node refers to a helper nobody registered.
    #[error("Helper '{id}' is not registered")]
    HelperNotRegistered { id: String },

    /// The structured dumper could not produce its output.
    #[error("Dump of '{label}' failed: {reason}")]
    DumpFailed { label: String, reason: String },

    /// Registry access failed (lock poisoned).
    #[error("Helper registry error")]
    RegistryLock,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::IntrospectionFailure { path, .. } => vec![
                format!("The value at '{}' could not be inspected", path),
                "Check the host object's property accessors".into(),
            ],
            Self::HelperNotRegistered { id } => vec![
                format!("No helper is registered as '{}'", id),
                "Try: helperkit helpers to see registered helpers".into(),
            ],
            Self::DumpFailed { .. } => vec![
                "The value dumper failed while writing its output".into(),
                "Run with -vv to see where it stopped".into(),
            ],
            Self::RegistryLock => vec![
                "The helper registry is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IntrospectionFailure { .. } => ErrorCategory::Introspection,
            Self::HelperNotRegistered { .. } => ErrorCategory::NotFound,
            Self::DumpFailed { .. } | Self::RegistryLock => ErrorCategory::Internal,
        }
    }
}
