//! Infrastructure adapters for Helperkit.
//!
//! This crate implements the ports defined in `helperkit-core::application::ports`
//! and provides the pieces a host (or the CLI) needs to drive the helpers:
//! a structured value dumper, an in-memory helper registry, record-backed host
//! objects and a fixture loader.

pub mod builtin_helpers;
pub mod dumper;
pub mod fixture;
pub mod host;
pub mod registry;

// Re-export commonly used adapters
pub use dumper::PlainTextDumper;
pub use fixture::{Fixture, FixtureError, FixtureLoader};
pub use host::RecordObject;
pub use registry::InMemoryRegistry;
