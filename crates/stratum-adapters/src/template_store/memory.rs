//! In-memory template store with built-in templates.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, RwLock},
};

use tracing::info;

use stratum_core::{application::ApplicationError, domain::TemplateId, error::StratumResult};

use crate::{builtin_templates, template_loader::TemplateOverrideLoader};

/// Thread-safe in-memory map of template id → text.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<HashMap<TemplateId, String>>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with every built-in template loaded.
    pub fn with_builtin() -> StratumResult<Self> {
        let store = Self::new();
        for id in TemplateId::ALL {
            store.insert(id, builtin_templates::builtin_text(id))?;
        }
        Ok(store)
    }

    /// Replace texts with the overrides found in `dir`. Returns how many
    /// templates were replaced.
    pub fn load_overrides(&self, dir: &Path) -> StratumResult<usize> {
        let overrides = TemplateOverrideLoader::new(dir).load_all()?;
        let count = overrides.len();
        for (id, text) in overrides {
            self.insert(id, text)?;
        }
        info!(path = %dir.display(), count, "template overrides applied");
        Ok(count)
    }

    pub fn insert(&self, id: TemplateId, text: impl Into<String>) -> StratumResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        inner.insert(id, text.into());
        Ok(())
    }

    /// Text for `id`; fails with `TemplateMissing` when none is registered.
    pub fn get(&self, id: TemplateId) -> StratumResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        inner.get(&id).cloned().ok_or_else(|| {
            ApplicationError::TemplateMissing {
                template: id.to_string(),
            }
            .into()
        })
    }

    pub fn remove(&self, id: TemplateId) -> StratumResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        inner.remove(&id);
        Ok(())
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_store_covers_every_template() {
        let store = InMemoryStore::with_builtin().unwrap();
        assert_eq!(store.len(), TemplateId::ALL.len());
    }

    #[test]
    fn removed_template_is_missing() {
        let store = InMemoryStore::with_builtin().unwrap();
        store.remove(TemplateId::Controller).unwrap();

        let err = store.get(TemplateId::Controller).unwrap_err();
        assert!(err.to_string().contains("Template missing: controller"));
    }
}
