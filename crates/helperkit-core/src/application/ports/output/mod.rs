//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `helperkit-adapters` crate provides implementations.

use crate::domain::{HelperDescriptor, HelperId, Value};
use crate::error::HelperResult;

/// Port for helper registration and lookup.
///
/// Implemented by:
/// - `helperkit_adapters::registry::InMemoryRegistry`
///
/// Descriptors are registered once, when helpers are initialised, and looked
/// up by identity while rendering. This is the explicit replacement for
/// reflecting over live helper instances.
#[cfg_attr(test, mockall::automock)]
pub trait HelperRegistry: Send + Sync {
    /// Get a helper descriptor by identity.
    fn get(&self, id: &HelperId) -> HelperResult<HelperDescriptor>;

    /// List all registered descriptors.
    fn list(&self) -> HelperResult<Vec<HelperDescriptor>>;

    /// Insert or replace a descriptor.
    fn register(&self, descriptor: HelperDescriptor) -> HelperResult<()>;

    /// Remove a descriptor.
    fn remove(&self, id: &HelperId) -> HelperResult<()>;
}

/// Port for structured value dumps.
///
/// Implemented by:
/// - `helperkit_adapters::dumper::PlainTextDumper`
///
/// The output is a label line followed by a nested rendering of the value,
/// with containers deeper than `max_depth` summarized. The exact layout
/// belongs to the implementation; callers only embed it.
#[cfg_attr(test, mockall::automock)]
pub trait ValueDumper: Send + Sync {
    /// Dump `value` under `label`.
    ///
    /// # Errors
    /// Fails with `IntrospectionFailure` if a host object cannot list or read
    /// its properties for a reason other than access control.
    fn dump(&self, value: &Value, label: &str, max_depth: usize) -> HelperResult<String>;
}
