//! Error type for vector construction and checked reduction

use crate::types::{Damage, ModifierContext};
use thiserror::Error;

/// Errors raised at the ACDS API boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AcdsError {
    /// A slice or list did not have exactly one entry per slot
    #[error("modifier vector needs {expected} slots, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A checked reduction left the `i64` damage range
    #[error("damage overflowed at slot {slot} (running damage {damage})")]
    Overflow { slot: usize, damage: Damage },

    /// A fraction was built with a zero denominator
    #[error("fraction {numerator}/0 has a zero denominator")]
    ZeroDenominator { numerator: u32 },

    /// Expanding a vector into single steps would exceed the step cap
    #[error("vector expands to {steps} steps, limit is {limit}")]
    TooManySteps { steps: u64, limit: u64 },

    /// A registry lookup named an id that was never registered
    #[error("unknown modifier: {0}")]
    UnknownModifier(String),

    /// A registry lookup named a modifier from the other context
    #[error("modifier {id} is a {actual} modifier, expected {expected}")]
    ContextMismatch {
        id: String,
        expected: ModifierContext,
        actual: ModifierContext,
    },
}
