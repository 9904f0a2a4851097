//! Builder configuration registry.
//!
//! Self-service: a builder configures its own thresholds, overwriting any
//! previous record. Reads never fail — an unknown builder gets the zeroed
//! (open) configuration.

use std::collections::HashMap;

use stakegate_types::{AccountId, BuilderConfig};

/// Source of truth for per-builder escrow parameters.
pub struct BuilderRegistry {
    configs: HashMap<AccountId, BuilderConfig>,
}

impl BuilderRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            configs: HashMap::new(),
        }
    }

    /// Create or overwrite the builder's configuration.
    pub fn configure(&mut self, builder: AccountId, config: BuilderConfig) {
        self.configs.insert(builder, config);
    }

    /// Current configuration; zeroed (open) for unknown builders.
    #[must_use]
    pub fn config(&self, builder: AccountId) -> BuilderConfig {
        self.configs.get(&builder).copied().unwrap_or_default()
    }

    /// Whether the builder has ever configured itself.
    #[must_use]
    pub fn is_configured(&self, builder: AccountId) -> bool {
        self.configs.contains_key(&builder)
    }

    /// Number of configured builders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}

impl Default for BuilderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
