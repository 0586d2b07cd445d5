//! Helper identity and registration metadata.
//!
//! A [`HelperDescriptor`] is everything the introspection reporter needs to
//! know about a helper without touching a live instance: its argument schema
//! and its two documentation strings. Descriptors are built once, when a helper
//! is registered, and looked up by [`HelperId`].

use std::fmt;

use crate::domain::{entities::schema::ArgumentSchema, error::DomainError};

/// Identity of a helper, as written in templates (e.g. `format.replace`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HelperId(String);

impl HelperId {
    /// Create a helper id.
    ///
    /// # Panics
    /// Panics on ids that [`parse`](Self::parse) would reject. Use `parse` for
    /// untrusted input.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        if let Err(e) = validate_id(&id) {
            panic!("{e}");
        }
        Self(id)
    }

    /// Parse an id from untrusted input.
    pub fn parse(id: &str) -> Result<Self, DomainError> {
        validate_id(id)?;
        Ok(Self(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part before the last `.`, if any (`format` for `format.replace`).
    pub fn namespace(&self) -> Option<&str> {
        self.0.rsplit_once('.').map(|(ns, _)| ns)
    }
}

impl fmt::Display for HelperId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn validate_id(id: &str) -> Result<(), DomainError> {
    let reason = if id.is_empty() {
        "id cannot be empty"
    } else if id.starts_with('.') || id.ends_with('.') || id.contains("..") {
        "id segments cannot be empty"
    } else if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
    {
        "id may only contain ASCII letters, digits, '.', '_' and '-'"
    } else {
        return Ok(());
    };

    Err(DomainError::InvalidHelperId {
        id: id.to_string(),
        reason: reason.to_string(),
    })
}

/// Registration record for one helper.
#[derive(Debug, Clone, PartialEq)]
pub struct HelperDescriptor {
    id: HelperId,
    class_doc: String,
    render_doc: String,
    schema: ArgumentSchema,
}

impl HelperDescriptor {
    pub fn new(id: HelperId, schema: ArgumentSchema) -> Self {
        Self {
            id,
            class_doc: String::new(),
            render_doc: String::new(),
            schema,
        }
    }

    /// Documentation describing the helper as a whole.
    pub fn with_class_doc(mut self, doc: impl Into<String>) -> Self {
        self.class_doc = doc.into();
        self
    }

    /// Documentation describing the helper's render operation.
    pub fn with_render_doc(mut self, doc: impl Into<String>) -> Self {
        self.render_doc = doc.into();
        self
    }

    pub fn id(&self) -> &HelperId {
        &self.id
    }

    pub fn class_doc(&self) -> &str {
        &self.class_doc
    }

    pub fn render_doc(&self) -> &str {
        &self.render_doc
    }

    pub fn schema(&self) -> &ArgumentSchema {
        &self.schema
    }
}
