//! Host object implementations.

pub mod record;

pub use record::RecordObject;
