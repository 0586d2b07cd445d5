//! Template variable scope.

use indexmap::IndexMap;

use crate::domain::entities::value::{PropertyError, Value};

/// Variables visible to a template at render time.
///
/// Built by the host before rendering; helpers only read from it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scope {
    variables: IndexMap<String, Value>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, consuming self and returning the extended scope.
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Resolve the first segment of a variable path.
    ///
    /// An unknown name is not accessible, exactly like a missing map key.
    pub fn lookup(&self, name: &str) -> Result<Value, PropertyError> {
        self.variables
            .get(name)
            .cloned()
            .ok_or_else(|| PropertyError::not_accessible(name, "the template scope"))
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Scope {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            variables: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
