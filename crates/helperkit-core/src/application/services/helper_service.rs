//! Helper Service - registry management operations.
//!
//! Registers, lists and removes helper descriptors, and resolves call-site
//! arguments against a registered helper's schema.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    application::ports::HelperRegistry,
    domain::{Arguments, HelperDescriptor, HelperId, Value},
    error::HelperResult,
};

/// One declared argument, for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArgumentInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub type_tag: String,
    pub description: String,
    pub required: bool,
    pub default_value: Option<String>,
}

/// Information about a helper for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HelperInfo {
    pub id: String,
    pub namespace: Option<String>,
    pub summary: String,
    pub arguments: Vec<ArgumentInfo>,
}

impl From<&HelperDescriptor> for HelperInfo {
    fn from(descriptor: &HelperDescriptor) -> Self {
        Self {
            id: descriptor.id().to_string(),
            namespace: descriptor.id().namespace().map(str::to_string),
            summary: descriptor
                .class_doc()
                .lines()
                .next()
                .unwrap_or_default()
                .trim()
                .to_string(),
            arguments: descriptor
                .schema()
                .iter()
                .map(|definition| ArgumentInfo {
                    name: definition.name().to_string(),
                    type_tag: definition.declared_type().to_string(),
                    description: definition.description().to_string(),
                    required: definition.is_required(),
                    default_value: definition.default_value().map(Value::to_string),
                })
                .collect(),
        }
    }
}

/// Service for helper registry operations.
pub struct HelperService {
    registry: Box<dyn HelperRegistry>,
}

impl HelperService {
    pub fn new(registry: Box<dyn HelperRegistry>) -> Self {
        Self { registry }
    }

    /// Add or replace a helper descriptor.
    pub fn register(&self, descriptor: HelperDescriptor) -> HelperResult<()> {
        debug!(helper = %descriptor.id(), "Registering helper");
        self.registry.register(descriptor)
    }

    pub fn get(&self, id: &HelperId) -> HelperResult<HelperDescriptor> {
        self.registry.get(id)
    }

    /// All helpers, sorted by identity.
    pub fn list(&self) -> HelperResult<Vec<HelperDescriptor>> {
        let mut helpers = self.registry.list()?;
        helpers.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(helpers)
    }

    /// Display records for all helpers, sorted by identity.
    pub fn list_info(&self) -> HelperResult<Vec<HelperInfo>> {
        Ok(self.list()?.iter().map(HelperInfo::from).collect())
    }

    pub fn remove(&self, id: &HelperId) -> HelperResult<()> {
        self.registry.remove(id)
    }

    /// Resolve call-site values against a registered helper's schema.
    #[instrument(skip_all, fields(helper = %id))]
    pub fn resolve_arguments(&self, id: &HelperId, supplied: &Arguments) -> HelperResult<Arguments> {
        let descriptor = self.registry.get(id)?;
        let resolved = descriptor.schema().resolve(supplied)?;
        descriptor.schema().validate(&resolved)?;
        Ok(resolved)
    }
}
