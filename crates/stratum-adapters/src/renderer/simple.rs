//! Simple variable substitution renderer.

use tracing::instrument;

use stratum_core::{
    application::ports::TemplateRenderer,
    domain::{RenderContext, TemplateId},
    error::StratumResult,
};

use crate::template_store::InMemoryStore;

/// Renderer using basic `{{VARIABLE}}` substitution over a template store.
#[derive(Debug, Clone)]
pub struct SimpleRenderer {
    store: InMemoryStore,
}

impl SimpleRenderer {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }

    /// Renderer over the bundled templates only.
    pub fn with_builtin() -> StratumResult<Self> {
        Ok(Self::new(InMemoryStore::with_builtin()?))
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(template = %template))]
    fn render(&self, template: TemplateId, context: &RenderContext) -> StratumResult<String> {
        let text = self.store.get(template)?;
        Ok(context.render(&text))
    }
}
