//! Structured value dumpers.

pub mod plain;

pub use plain::PlainTextDumper;
