//! Chat-model trait and provider registry

mod trait_def;

pub use trait_def::ChatModel;

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{Error, Result};

/// Registry of chat-model adapters, keyed by provider ID.
#[derive(Default, Clone)]
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn ChatModel>>,
}

impl ProviderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a model under the given ID. Returns `self` for chaining.
    pub fn register<M: ChatModel + 'static>(mut self, id: impl Into<String>, model: M) -> Self {
        self.providers.insert(id.into(), Arc::new(model));
        self
    }

    /// Look up a model by provider ID.
    pub fn get_provider(&self, id: &str) -> Result<Arc<dyn ChatModel>> {
        self.providers
            .get(id)
            .cloned()
            .ok_or_else(|| Error::ProviderNotFound(id.to_string()))
    }

    /// List all registered provider IDs.
    pub fn list_providers(&self) -> Vec<String> {
        self.providers.keys().cloned().collect()
    }
}
