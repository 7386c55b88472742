//! acds_core - Additive Common Divisor System for damage scaling
//!
//! This library provides:
//! - ModifierVector: stacked percentage modifiers as eight signed counts of eighths
//! - Nominal encoders: compact eighth values to vectors, per context
//! - Reducers: sequential application of a vector to an integer damage value
//! - ModifierRegistry: named modifier definitions, parseable from TOML strings
//!
//! There are two ACDS contexts:
//! - Damage Bonus (DB): used for dealing damage
//! - Damage Reduction (DR): used for reducing damage

pub mod config;
pub mod error;
pub mod reduce;
pub mod registry;
pub mod types;
pub mod vector;

pub mod prelude;

// Re-export core types for convenience
pub use error::AcdsError;
pub use reduce::{
    apply, damage_bonus, damage_bonus_early_exit, damage_reduction, damage_reduction_early_exit,
    try_apply, try_damage_bonus, try_damage_reduction, EarlyExitVector, Fraction, FractionList,
};
pub use registry::{ModifierDef, ModifierRegistry, ModifierSource};
pub use types::{Count, Damage, Direction, ModifierContext, Nominal, DIVISOR, SLOT_COUNT};
pub use vector::{
    db_vector_from_nominal, dr_vector_from_nominal, split_nominal, ModifierVector, NominalSplit,
};
