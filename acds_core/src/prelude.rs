//! Prelude module for convenient imports
//!
//! ```rust
//! use acds_core::prelude::*;
//!
//! let dr = dr_vector_from_nominal(4);
//! assert_eq!(damage_reduction(1000, &dr), 500);
//! ```

// Core types
pub use crate::types::{Count, Damage, Direction, ModifierContext, Nominal};
pub use crate::vector::ModifierVector;
pub use crate::AcdsError;

// Encoders
pub use crate::vector::{db_vector_from_nominal, dr_vector_from_nominal};

// Reducers
pub use crate::reduce::{damage_bonus, damage_reduction, try_damage_bonus, try_damage_reduction};

// Registry
pub use crate::registry::{ModifierDef, ModifierRegistry};
