//! Helper registry implementations.

pub mod memory;

pub use memory::InMemoryRegistry;
