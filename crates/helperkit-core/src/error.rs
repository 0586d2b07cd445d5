//! Unified error handling for Helperkit Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Helperkit Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum HelperError {
    /// Errors from the domain layer (schema authoring, argument resolution).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (introspection, registry access).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl HelperError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in Helperkit".into(),
                "Please report this issue at: https://github.com/cosecruz/helperkit/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Authoring => ErrorCategory::Authoring,
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::RegistryLock))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A helper declared its schema incorrectly.
    Authoring,
    /// Arguments supplied at a call site were rejected.
    Validation,
    /// A helper or variable could not be found.
    NotFound,
    /// Querying a value's structure failed unexpectedly.
    Introspection,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type HelperResult<T> = Result<T, HelperError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> HelperResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> HelperResult<T> {
        self.map_err(|e| HelperError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_keep_their_category() {
        let err: HelperError = DomainError::DuplicateArgument {
            name: "title".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Authoring);

        let err: HelperError = DomainError::MissingRequiredArgument {
            name: "substring".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn only_lock_errors_are_retryable() {
        assert!(HelperError::from(ApplicationError::RegistryLock).is_retryable());
        assert!(
            !HelperError::from(ApplicationError::HelperNotRegistered { id: "x".into() })
                .is_retryable()
        );
    }

    #[test]
    fn context_wraps_foreign_errors_as_internal() {
        let parsed: Result<i64, _> = "abc".parse::<i64>();
        let err = parsed.context("parsing limit").unwrap_err();
        assert!(matches!(err, HelperError::Internal { ref message } if message.starts_with("parsing limit")));
    }
}
