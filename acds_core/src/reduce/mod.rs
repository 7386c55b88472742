//! Reducers - applying a modifier vector to a damage value

mod sequential;
pub mod variants;

pub use sequential::{
    apply, damage_bonus, damage_reduction, try_apply, try_damage_bonus, try_damage_reduction,
};
pub use variants::{
    damage_bonus_early_exit, damage_reduction_early_exit, EarlyExitVector, Fraction, FractionList,
};
