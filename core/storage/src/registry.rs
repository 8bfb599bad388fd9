//! Provider registry for dynamic provider resolution.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use medialift_common::{Error, Result};

use crate::provider::UploadProvider;

/// Factory function type for creating providers.
pub type ProviderFactory = Box<dyn Fn(Value) -> Result<Arc<dyn UploadProvider>> + Send + Sync>;

/// Registry for upload provider factories.
///
/// Allows the hosting CMS to register and resolve upload providers by name
/// and configuration.
pub struct ProviderRegistry {
    factories: HashMap<String, ProviderFactory>,
}

impl ProviderRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a provider factory.
    ///
    /// # Preconditions
    /// - `name` must be unique within the registry
    ///
    /// # Errors
    /// - Returns error if name is already registered
    pub fn register(&mut self, name: impl Into<String>, factory: ProviderFactory) -> Result<()> {
        let name = name.into();
        if self.factories.contains_key(&name) {
            return Err(Error::InvalidInput(format!(
                "Provider '{}' is already registered",
                name
            )));
        }
        self.factories.insert(name, factory);
        Ok(())
    }

    /// Resolve a provider by name and configuration.
    ///
    /// # Errors
    /// - Provider not found
    /// - Configuration invalid for the provider
    pub fn resolve(&self, name: &str, config: Value) -> Result<Arc<dyn UploadProvider>> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| Error::NotFound(format!("Provider '{}' is not registered", name)))?;
        factory(config)
    }

    /// Get list of registered provider names.
    pub fn providers(&self) -> Vec<String> {
        self.factories.keys().cloned().collect()
    }

    /// Check if a provider is registered.
    pub fn has_provider(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a registry with the providers this workspace ships.
pub fn create_default_registry() -> ProviderRegistry {
    let mut registry = ProviderRegistry::new();

    // Register memory provider (for testing)
    registry
        .register(
            "memory",
            Box::new(|config| {
                let bucket = config
                    .get("bucket")
                    .and_then(|v| v.as_str())
                    .unwrap_or("memory");
                Ok(Arc::new(crate::memory::MemoryProvider::new(bucket)))
            }),
        )
        .expect("Failed to register memory provider");

    // Register Google Cloud Storage provider
    registry
        .register(
            "gcs",
            Box::new(|config| crate::gcs::create_gcs_provider(config)),
        )
        .expect("Failed to register gcs provider");

    registry
}
