//! Modifier definitions and the registry that stacks them
//!
//! A definition names one modifier source (an item, a buff, a stance) and
//! carries either a nominal value or an explicit vector. Stacking the active
//! definitions of one context sums their vectors slot by slot.

use crate::types::{Damage, ModifierContext, Nominal};
use crate::vector::ModifierVector;
use crate::AcdsError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Where a definition's vector comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierSource {
    /// Compact eighths, encoded with the context's encoder
    Nominal(Nominal),
    /// Explicit slot counts
    Vector(ModifierVector),
}

/// A named modifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawModifierDef", into = "RawModifierDef")]
pub struct ModifierDef {
    /// Unique identifier (e.g., "iron_skin")
    pub id: String,
    /// Display name
    pub name: String,
    /// Bonus or reduction
    pub context: ModifierContext,
    /// Nominal or explicit vector
    pub source: ModifierSource,
}

impl ModifierDef {
    /// Definition backed by a nominal, encoded for `context` on use
    pub fn from_nominal(
        id: impl Into<String>,
        name: impl Into<String>,
        context: ModifierContext,
        nominal: Nominal,
    ) -> Self {
        ModifierDef {
            id: id.into(),
            name: name.into(),
            context,
            source: ModifierSource::Nominal(nominal),
        }
    }

    /// Definition backed by explicit slot counts
    pub fn from_vector(
        id: impl Into<String>,
        name: impl Into<String>,
        context: ModifierContext,
        vector: ModifierVector,
    ) -> Self {
        ModifierDef {
            id: id.into(),
            name: name.into(),
            context,
            source: ModifierSource::Vector(vector),
        }
    }

    /// The vector this definition contributes to a stack
    pub fn to_vector(&self) -> ModifierVector {
        match self.source {
            ModifierSource::Nominal(nominal) => self.context.encode(nominal),
            ModifierSource::Vector(vector) => vector,
        }
    }
}

/// Flat wire shape: exactly one of `nominal` / `vector` is set
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawModifierDef {
    id: String,
    #[serde(default)]
    name: String,
    context: ModifierContext,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    nominal: Option<Nominal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    vector: Option<ModifierVector>,
}

impl TryFrom<RawModifierDef> for ModifierDef {
    type Error = String;

    fn try_from(raw: RawModifierDef) -> Result<Self, Self::Error> {
        let source = match (raw.nominal, raw.vector) {
            (Some(nominal), None) => ModifierSource::Nominal(nominal),
            (None, Some(vector)) => ModifierSource::Vector(vector),
            (Some(_), Some(_)) => {
                return Err(format!("modifier {} sets both nominal and vector", raw.id))
            }
            (None, None) => return Err(format!("modifier {} needs a nominal or a vector", raw.id)),
        };

        let name = if raw.name.is_empty() { raw.id.clone() } else { raw.name };

        Ok(ModifierDef {
            id: raw.id,
            name,
            context: raw.context,
            source,
        })
    }
}

impl From<ModifierDef> for RawModifierDef {
    fn from(def: ModifierDef) -> Self {
        let (nominal, vector) = match def.source {
            ModifierSource::Nominal(nominal) => (Some(nominal), None),
            ModifierSource::Vector(vector) => (None, Some(vector)),
        };
        RawModifierDef {
            id: def.id,
            name: def.name,
            context: def.context,
            nominal,
            vector,
        }
    }
}

/// Modifier definition registry
#[derive(Debug, Clone, Default)]
pub struct ModifierRegistry {
    /// Mapping from modifier ID to definition
    defs: HashMap<String, ModifierDef>,
}

impl ModifierRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        ModifierRegistry {
            defs: HashMap::new(),
        }
    }

    /// Register a modifier, replacing any previous definition with the same id
    pub fn register(&mut self, def: ModifierDef) {
        debug!(id = %def.id, context = def.context.abbreviation(), "registering modifier");
        self.defs.insert(def.id.clone(), def);
    }

    /// Get a modifier definition by ID
    pub fn get(&self, id: &str) -> Option<&ModifierDef> {
        self.defs.get(id)
    }

    /// Number of registered definitions
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// True if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Iterate all definitions (unordered)
    pub fn iter(&self) -> impl Iterator<Item = &ModifierDef> {
        self.defs.values()
    }

    /// Sum the vectors of the named modifiers.
    ///
    /// Every id must exist and belong to `context`.
    pub fn stack(&self, context: ModifierContext, ids: &[&str]) -> Result<ModifierVector, AcdsError> {
        let mut total = ModifierVector::ZERO;

        for &id in ids {
            let def = self
                .get(id)
                .ok_or_else(|| AcdsError::UnknownModifier(id.to_string()))?;

            if def.context != context {
                return Err(AcdsError::ContextMismatch {
                    id: id.to_string(),
                    expected: context,
                    actual: def.context,
                });
            }

            total += def.to_vector();
        }

        Ok(total)
    }

    /// Stack the named modifiers and apply them to `damage`
    pub fn apply(
        &self,
        context: ModifierContext,
        damage: Damage,
        ids: &[&str],
    ) -> Result<Damage, AcdsError> {
        let vector = self.stack(context, ids)?;
        Ok(context.apply(damage, &vector))
    }

    /// Load a small set of example modifiers
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        // Damage Reduction
        registry.register(ModifierDef::from_nominal(
            "iron_skin",
            "Iron Skin",
            ModifierContext::Reduction,
            1, // 12.5%
        ));
        registry.register(ModifierDef::from_nominal(
            "guard",
            "Guard",
            ModifierContext::Reduction,
            2, // 25%
        ));
        registry.register(ModifierDef::from_nominal(
            "fortify",
            "Fortify",
            ModifierContext::Reduction,
            4, // 50%
        ));
        registry.register(ModifierDef::from_nominal(
            "immunity",
            "Immunity",
            ModifierContext::Reduction,
            8,
        ));
        registry.register(ModifierDef::from_nominal(
            "exposed",
            "Exposed",
            ModifierContext::Reduction,
            -2, // takes 25% more
        ));

        // Damage Bonus
        registry.register(ModifierDef::from_nominal(
            "sharpened",
            "Sharpened",
            ModifierContext::Bonus,
            1,
        ));
        registry.register(ModifierDef::from_nominal(
            "empowered",
            "Empowered",
            ModifierContext::Bonus,
            4,
        ));
        registry.register(ModifierDef::from_nominal(
            "berserk",
            "Berserk",
            ModifierContext::Bonus,
            8, // double damage
        ));
        registry.register(ModifierDef::from_nominal(
            "weakened",
            "Weakened",
            ModifierContext::Bonus,
            -2,
        ));

        registry
    }
}
