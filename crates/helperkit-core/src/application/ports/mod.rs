//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `helperkit-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `HelperRegistry`: helper descriptors by identity
//!   - `ValueDumper`: structured pretty-printing of values
//!
//! The host's property-access rules are not a port here: they travel with the
//! values themselves as `domain::HostObject`.

pub mod output;

pub use output::{HelperRegistry, ValueDumper};
