//! Domain value objects: TypeTag.
//!
//! # Design
//!
//! Pure value types: `Copy`, equality-by-value, no identity. The tag set is
//! closed; helpers cannot introduce their own tags.

use crate::domain::{entities::value::Value, error::DomainError};
use serde::{Deserialize, Serialize};
use std::fmt;

// ── TypeTag ──────────────────────────────────────────────────────────────────

/// The declared type of a helper argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    String,
    Integer,
    Float,
    Boolean,
    Array,
    Object,
    Mixed,
}

impl TypeTag {
    pub const ALL: [TypeTag; 7] = [
        Self::String,
        Self::Integer,
        Self::Float,
        Self::Boolean,
        Self::Array,
        Self::Object,
        Self::Mixed,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
            Self::Mixed => "mixed",
        }
    }

    /// Parse a tag as written by a helper author.
    ///
    /// The argument name is only used to build the error.
    pub fn parse(tag: &str, argument: &str) -> Result<Self, DomainError> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "string" => Ok(Self::String),
            "integer" | "int" => Ok(Self::Integer),
            "float" | "double" => Ok(Self::Float),
            "boolean" | "bool" => Ok(Self::Boolean),
            "array" => Ok(Self::Array),
            "object" => Ok(Self::Object),
            "mixed" => Ok(Self::Mixed),
            _ => Err(DomainError::InvalidTypeTag {
                argument: argument.to_string(),
                tag: tag.to_string(),
            }),
        }
    }

    /// Whether a value satisfies this tag. Null satisfies every tag.
    pub fn accepts(self, value: &Value) -> bool {
        match (self, value) {
            (_, Value::Null) | (Self::Mixed, _) => true,
            (Self::String, Value::String(_)) => true,
            (Self::Integer, Value::Integer(_)) => true,
            (Self::Float, Value::Float(_) | Value::Integer(_)) => true,
            (Self::Boolean, Value::Boolean(_)) => true,
            (Self::Array, Value::Array(_) | Value::Map(_)) => true,
            (Self::Object, Value::Object(_) | Value::Map(_)) => true,
            _ => false,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TypeTag {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, "")
    }
}
