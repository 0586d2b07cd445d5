//! Runtime template values and the host's property-access capability.
//!
//! Values are what the host puts into a [`Scope`](super::scope::Scope) and what
//! helpers receive as arguments. Plain data (scalars, lists, maps) is owned;
//! host objects are shared handles whose properties are only reachable through
//! the [`HostObject`] capability, which encodes the host's access rules.

use std::{fmt, sync::Arc};

use indexmap::IndexMap;
use thiserror::Error;

/// Type label reported for paths that cannot be resolved.
pub const UNDEFINED_LABEL: &str = "UNDEFINED/INACCESSIBLE";

/// Failure while reading a property through the host's access rules.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PropertyError {
    /// The property is absent or has no public accessor.
    ///
    /// This is an expected condition while walking variable paths.
    #[error("property '{property}' is not accessible on {subject}")]
    NotAccessible { property: String, subject: String },

    /// The host's query itself broke.
    #[error("{reason}")]
    Failure { reason: String },
}

impl PropertyError {
    pub fn not_accessible(property: impl Into<String>, subject: impl Into<String>) -> Self {
        Self::NotAccessible {
            property: property.into(),
            subject: subject.into(),
        }
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        Self::Failure {
            reason: reason.into(),
        }
    }

    pub fn is_not_accessible(&self) -> bool {
        matches!(self, Self::NotAccessible { .. })
    }
}

/// Capability implemented by the host for its object values.
///
/// Only properties exposed through a public accessor are "gettable".
/// Hosts following the common template-engine convention put a synthetic
/// entry at index 0 of [`gettable_property_names`](Self::gettable_property_names);
/// consumers that list real properties skip it.
pub trait HostObject: fmt::Debug + Send + Sync {
    /// Name of the object's type, shown in dumps.
    fn type_name(&self) -> &str;

    /// Names of the gettable properties, synthetic entry first.
    fn gettable_property_names(&self) -> Result<Vec<String>, PropertyError>;

    /// Read one property, honouring the host's access rules.
    fn property(&self, name: &str) -> Result<Value, PropertyError>;
}

/// A template value.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    Map(IndexMap<String, Value>),
    Object(Arc<dyn HostObject>),
}

impl Value {
    /// Wrap a host object.
    pub fn object(object: impl HostObject + 'static) -> Self {
        Self::Object(Arc::new(object))
    }

    /// Runtime type label, as shown in reports.
    pub fn type_label(&self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Array(_) | Self::Map(_) => "array",
            Self::Object(_) => "object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Read a property the way a variable path segment is resolved.
    ///
    /// - maps: key lookup
    /// - arrays: numeric index
    /// - objects: the host's accessor
    /// - null: not accessible
    /// - other scalars: a failure, they have no properties at all
    pub fn property(&self, name: &str) -> Result<Value, PropertyError> {
        match self {
            Self::Map(entries) => entries
                .get(name)
                .cloned()
                .ok_or_else(|| PropertyError::not_accessible(name, "array")),
            Self::Array(items) => name
                .parse::<usize>()
                .ok()
                .and_then(|index| items.get(index))
                .cloned()
                .ok_or_else(|| PropertyError::not_accessible(name, "array")),
            Self::Object(object) => object.property(name),
            Self::Null => Err(PropertyError::not_accessible(name, "NULL")),
            scalar => Err(PropertyError::failure(format!(
                "cannot read property '{}' of a {} value",
                name,
                scalar.type_label()
            ))),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            // Host objects compare by identity.
            (Self::Object(a), Self::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Compact single-line form, used for argument defaults in listings.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            Self::Object(object) => write!(f, "<{}>", object.type_name()),
        }
    }
}

// ── Conversions ──────────────────────────────────────────────────────────────

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::Array(value)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(value: IndexMap<String, Value>) -> Self {
        Self::Map(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Boolean(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Integer(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Self::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}
