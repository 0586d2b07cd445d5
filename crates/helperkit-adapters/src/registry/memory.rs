//! In-memory helper registry with the built-in helpers.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use tracing::debug;

use helperkit_core::{
    application::{ApplicationError, ports::HelperRegistry},
    domain::{HelperDescriptor, HelperId},
    error::HelperResult,
};

use crate::builtin_helpers;

/// Thread-safe in-memory helper registry.
#[derive(Clone, Default)]
pub struct InMemoryRegistry {
    inner: Arc<RwLock<HashMap<HelperId, HelperDescriptor>>>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in helpers registered.
    pub fn with_builtin() -> HelperResult<Self> {
        let registry = Self::new();
        registry.load_builtin()?;
        Ok(registry)
    }

    pub fn load_builtin(&self) -> HelperResult<()> {
        for descriptor in builtin_helpers::all_helpers()? {
            self.register(descriptor)?;
        }
        Ok(())
    }

    pub fn len(&self) -> HelperResult<usize> {
        Ok(self.inner.read().map_err(|_| ApplicationError::RegistryLock)?.len())
    }

    pub fn is_empty(&self) -> HelperResult<bool> {
        Ok(self.len()? == 0)
    }

    pub fn clear(&self) -> HelperResult<()> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::RegistryLock)?
            .clear();
        Ok(())
    }
}

impl HelperRegistry for InMemoryRegistry {
    fn get(&self, id: &HelperId) -> HelperResult<HelperDescriptor> {
        let inner = self.inner.read().map_err(|_| ApplicationError::RegistryLock)?;

        inner.get(id).cloned().ok_or_else(|| {
            ApplicationError::HelperNotRegistered { id: id.to_string() }.into()
        })
    }

    fn list(&self) -> HelperResult<Vec<HelperDescriptor>> {
        let inner = self.inner.read().map_err(|_| ApplicationError::RegistryLock)?;
        Ok(inner.values().cloned().collect())
    }

    fn register(&self, descriptor: HelperDescriptor) -> HelperResult<()> {
        let mut inner = self.inner.write().map_err(|_| ApplicationError::RegistryLock)?;

        debug!(helper = %descriptor.id(), arguments = descriptor.schema().len(), "Helper registered");
        inner.insert(descriptor.id().clone(), descriptor);
        Ok(())
    }

    fn remove(&self, id: &HelperId) -> HelperResult<()> {
        let mut inner = self.inner.write().map_err(|_| ApplicationError::RegistryLock)?;

        inner
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| ApplicationError::HelperNotRegistered { id: id.to_string() }.into())
    }
}
