//! Record-backed host objects.
//!
//! A [`RecordObject`] stands in for a host domain object: public properties
//! are readable through an accessor, hidden ones exist but are not. Like
//! template engines that list accessors by scanning methods, the gettable
//! property list starts with a synthetic `self` entry.

use indexmap::IndexMap;

use helperkit_core::domain::{HostObject, PropertyError, Value};

/// Name of the synthetic first gettable entry.
pub const SELF_ENTRY: &str = "self";

#[derive(Debug, Clone, Default)]
pub struct RecordObject {
    type_name: String,
    properties: IndexMap<String, Value>,
    hidden: IndexMap<String, Value>,
}

impl RecordObject {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            ..Self::default()
        }
    }

    /// Add a property with a public accessor.
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Add a property without an accessor.
    pub fn with_hidden(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.hidden.insert(name.into(), value.into());
        self
    }

    pub fn into_value(self) -> Value {
        Value::object(self)
    }
}

impl HostObject for RecordObject {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn gettable_property_names(&self) -> Result<Vec<String>, PropertyError> {
        Ok(std::iter::once(SELF_ENTRY.to_string())
            .chain(self.properties.keys().cloned())
            .collect())
    }

    fn property(&self, name: &str) -> Result<Value, PropertyError> {
        if let Some(value) = self.properties.get(name) {
            return Ok(value.clone());
        }
        let subject = if self.hidden.contains_key(name) {
            format!("{} (no public accessor)", self.type_name)
        } else {
            self.type_name.clone()
        };
        Err(PropertyError::not_accessible(name, subject))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> RecordObject {
        RecordObject::new("Post")
            .with_property("uid", 1)
            .with_property("title", "Hello")
            .with_hidden("password", "secret")
    }

    #[test]
    fn gettable_names_start_with_synthetic_entry() {
        assert_eq!(
            post().gettable_property_names().unwrap(),
            ["self", "uid", "title"]
        );
    }

    #[test]
    fn hidden_properties_are_not_accessible() {
        let err = post().property("password").unwrap_err();
        assert!(err.is_not_accessible());
        assert!(err.to_string().contains("no public accessor"));
        assert!(post().property(SELF_ENTRY).unwrap_err().is_not_accessible());
        assert_eq!(post().property("title").unwrap(), Value::from("Hello"));
    }
}
