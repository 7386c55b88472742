//! Core types specific to ACDS

use serde::{Deserialize, Serialize};

use crate::reduce;
use crate::vector::{db_vector_from_nominal, dr_vector_from_nominal, ModifierVector};
use crate::AcdsError;

/// Running damage value. Wide enough that `damage * 8` never overflows the
/// `i128` intermediate used by each step.
pub type Damage = i64;

/// Signed repetition count stored in a single vector slot
pub type Count = i32;

/// Compact modifier magnitude in eighths
pub type Nominal = i32;

/// Number of slots in a modifier vector (one per eighth)
pub const SLOT_COUNT: usize = 8;

/// Common divisor shared by every slot
pub const DIVISOR: i64 = 8;

/// Which way a single step moves the running damage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Raise,
    Lower,
}

impl Direction {
    /// The opposite direction
    pub fn inverse(self) -> Self {
        match self {
            Direction::Raise => Direction::Lower,
            Direction::Lower => Direction::Raise,
        }
    }
}

/// Modifier context: dealing damage (bonus) or receiving it (reduction)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierContext {
    /// Damage Bonus: positive counts raise damage
    Bonus,
    /// Damage Reduction: positive counts lower damage
    Reduction,
}

impl ModifierContext {
    /// Get both contexts
    pub fn all() -> &'static [ModifierContext] {
        &[ModifierContext::Bonus, ModifierContext::Reduction]
    }

    /// Short label used in logs and benchmark ids
    pub fn abbreviation(self) -> &'static str {
        match self {
            ModifierContext::Bonus => "DB",
            ModifierContext::Reduction => "DR",
        }
    }

    /// Direction applied by a positive count in this context
    pub fn primary_direction(self) -> Direction {
        match self {
            ModifierContext::Bonus => Direction::Raise,
            ModifierContext::Reduction => Direction::Lower,
        }
    }

    /// Direction for a slot count, or `None` for an empty slot
    pub fn direction_for(self, count: Count) -> Option<Direction> {
        match count.signum() {
            1 => Some(self.primary_direction()),
            -1 => Some(self.primary_direction().inverse()),
            _ => None,
        }
    }

    /// Encode a nominal value with this context's encoder
    pub fn encode(self, nominal: Nominal) -> ModifierVector {
        match self {
            ModifierContext::Bonus => db_vector_from_nominal(nominal),
            ModifierContext::Reduction => dr_vector_from_nominal(nominal),
        }
    }

    /// Apply a vector to `damage` in this context (saturating)
    pub fn apply(self, damage: Damage, vector: &ModifierVector) -> Damage {
        reduce::apply(self, damage, vector)
    }

    /// Apply a vector to `damage` in this context, failing on overflow
    pub fn try_apply(self, damage: Damage, vector: &ModifierVector) -> Result<Damage, AcdsError> {
        reduce::try_apply(self, damage, vector)
    }
}

impl std::fmt::Display for ModifierContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModifierContext::Bonus => write!(f, "damage bonus"),
            ModifierContext::Reduction => write!(f, "damage reduction"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_for_count() {
        assert_eq!(ModifierContext::Bonus.direction_for(3), Some(Direction::Raise));
        assert_eq!(ModifierContext::Bonus.direction_for(-1), Some(Direction::Lower));
        assert_eq!(ModifierContext::Reduction.direction_for(2), Some(Direction::Lower));
        assert_eq!(ModifierContext::Reduction.direction_for(-2), Some(Direction::Raise));
        assert_eq!(ModifierContext::Bonus.direction_for(0), None);
        assert_eq!(ModifierContext::Reduction.direction_for(0), None);
    }

    #[test]
    fn test_context_serialization() {
        let json = serde_json::to_string(&ModifierContext::Reduction).unwrap();
        assert_eq!(json, "\"reduction\"");

        let parsed: ModifierContext = serde_json::from_str("\"bonus\"").unwrap();
        assert_eq!(parsed, ModifierContext::Bonus);
    }

    #[test]
    fn test_context_encode_dispatch() {
        assert_eq!(ModifierContext::Bonus.encode(10), db_vector_from_nominal(10));
        assert_eq!(ModifierContext::Reduction.encode(-3), dr_vector_from_nominal(-3));
    }
}
