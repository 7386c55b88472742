//! Modifier definition loading

use super::ConfigError;
use crate::registry::{ModifierDef, ModifierRegistry};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Container for modifier definitions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModifiersConfig {
    #[serde(rename = "modifiers", default)]
    pub modifiers: Vec<ModifierDef>,
}

impl ModifiersConfig {
    /// Build a registry, rejecting duplicate ids
    pub fn into_registry(self) -> Result<ModifierRegistry, ConfigError> {
        let mut seen = HashSet::new();
        let mut registry = ModifierRegistry::new();

        for def in self.modifiers {
            if !seen.insert(def.id.clone()) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate modifier id: {}",
                    def.id
                )));
            }
            registry.register(def);
        }

        debug!(count = registry.len(), "loaded modifier definitions");
        Ok(registry)
    }
}

/// Load modifier definitions from a TOML string
pub fn parse_modifier_defs(content: &str) -> Result<ModifierRegistry, ConfigError> {
    let config: ModifiersConfig = super::parse_toml(content)?;
    config.into_registry()
}
