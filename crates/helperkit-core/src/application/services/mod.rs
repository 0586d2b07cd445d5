//! Application services - the helpers and their orchestration.
//!
//! Services coordinate the domain layer and ports: the reporter turns child
//! nodes into a debug report, the helpers implement their render operations,
//! and the helper service manages registered descriptors.

pub mod debug_helper;
pub mod helper_service;
pub mod introspection_service;
pub mod replace_helper;

pub use debug_helper::DebugHelper;
pub use helper_service::{ArgumentInfo, HelperInfo, HelperService};
pub use introspection_service::IntrospectionReporter;
pub use replace_helper::{ReplaceHelper, replace};
