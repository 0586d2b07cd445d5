//! Built-in helper descriptors.
//!
//! Every helper that ships with Helperkit registers its descriptor here, so
//! the debug helper can report on any of them (itself included).

use helperkit_core::{
    application::{DebugHelper, ReplaceHelper},
    domain::HelperDescriptor,
    error::HelperResult,
};

/// Descriptors of all built-in helpers.
pub fn all_helpers() -> HelperResult<Vec<HelperDescriptor>> {
    Ok(vec![DebugHelper::descriptor()?, ReplaceHelper::descriptor()?])
}
