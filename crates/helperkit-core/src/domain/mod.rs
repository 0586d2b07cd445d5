// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Helperkit.
//!
//! This module contains pure logic: argument schemas, values, references into
//! the host's render tree, and report assembly. Looking up helpers and
//! pretty-printing values are handled via ports (traits) defined in the
//! application layer.
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable after construction**: schemas and descriptors are built once

pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::{
    helper::{HelperDescriptor, HelperId},
    node::{ChildHelperReference, RenderNode, SuppliedArgument, VariableAccessorReference},
    report::{Report, ReportOptions, ReportSection},
    schema::{ArgumentDefinition, ArgumentSchema, Arguments},
    scope::Scope,
    value::{HostObject, PropertyError, UNDEFINED_LABEL, Value},
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::TypeTag;
