//! Application layer for Helperkit.
//!
//! This layer contains:
//! - **Services**: the helpers themselves and the introspection reporter
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Argument contracts and values live in `crate::domain`; this layer wires
//! them to a registry and a pretty-printer.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    ArgumentInfo, DebugHelper, HelperInfo, HelperService, IntrospectionReporter, ReplaceHelper, replace,
};

// Re-export port traits (for adapter implementation)
pub use ports::{HelperRegistry, ValueDumper};

pub use error::ApplicationError;
