use tracing::debug;

use crate::dom::Document;
use crate::error::{CatalogError, CatalogResult};
use crate::extensions::PagePlugin;

use super::CatalogPage;

impl<D: Document> CatalogPage<D> {
    /// Adds an observer. Plugins see page events in registration order.
    ///
    /// Ids must be non-blank and unique within the page.
    pub fn register_plugin(&mut self, plugin: Box<dyn PagePlugin>) -> CatalogResult<()> {
        let id = plugin.id();
        if id.trim().is_empty() {
            return Err(CatalogError::InvalidData(
                "plugin id must not be blank".to_owned(),
            ));
        }
        if self.has_plugin(id) {
            return Err(CatalogError::InvalidData(format!(
                "page plugin `{id}` is already registered"
            )));
        }
        debug!(plugin = id, position = self.plugins.len(), "page plugin registered");
        self.plugins.push(plugin);
        Ok(())
    }

    /// Detaches a plugin and hands it back so hosts can read what it gathered.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> Option<Box<dyn PagePlugin>> {
        let position = self.plugins.iter().position(|p| p.id() == plugin_id)?;
        debug!(plugin = plugin_id, "page plugin unregistered");
        Some(self.plugins.remove(position))
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.plugins.iter().any(|plugin| plugin.id() == plugin_id)
    }

    /// Registered ids in dispatch order.
    pub fn plugin_ids(&self) -> impl Iterator<Item = &str> {
        self.plugins.iter().map(|plugin| plugin.id())
    }
}
