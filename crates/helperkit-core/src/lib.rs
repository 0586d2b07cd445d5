//! Helperkit Core - template helper contracts and introspection.
//!
//! This crate provides the domain and application layers for building
//! template-engine helpers: typed argument schemas, references into a host's
//! render tree, and a debug reporter that describes helpers and variables.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          helperkit-cli (CLI)            │
//! │      (fixtures, config, output)         │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (IntrospectionReporter, DebugHelper,   │
//! │   ReplaceHelper, HelperService)         │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (HelperRegistry, ValueDumper)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    helperkit-adapters (Infrastructure)  │
//! │  (InMemoryRegistry, PlainTextDumper)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (ArgumentSchema, Value, RenderNode,    │
//! │   Scope, Report)                        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use helperkit_core::prelude::*;
//!
//! let scope = Scope::new().with_variable("title", "Hello");
//! let mut helper = DebugHelper::new(reporter);
//! helper.set_child_nodes([RenderNode::variable("title")]);
//! let report = helper.render(&scope).unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        DebugHelper, HelperService, IntrospectionReporter, ReplaceHelper,
        ports::{HelperRegistry, ValueDumper},
        replace,
    };
    pub use crate::domain::{
        ArgumentDefinition, ArgumentSchema, Arguments, ChildHelperReference, HelperDescriptor,
        HelperId, HostObject, PropertyError, RenderNode, Report, ReportOptions, ReportSection,
        Scope, SuppliedArgument, TypeTag, Value, VariableAccessorReference,
    };
    pub use crate::error::{HelperError, HelperResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
