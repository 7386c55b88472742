//! ModifierVector - eight signed counts, one per eighth step
//!
//! Slot `i` (1-based) holds how many times the `i/8` step is applied. The sign
//! of the count picks the direction relative to the modifier context.
//!
//! Stacking several sources of the same context is slot-wise addition:
//! two 12.5% reductions are `[2, 0, 0, 0, 0, 0, 0, 0]`.

mod nominal;

pub use nominal::{db_vector_from_nominal, dr_vector_from_nominal, split_nominal, NominalSplit};

use crate::types::{Count, SLOT_COUNT};
use crate::AcdsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg};

/// Fixed 8-slot modifier vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModifierVector([Count; SLOT_COUNT]);

impl ModifierVector {
    /// The all-zero vector (no effect)
    pub const ZERO: Self = ModifierVector([0; SLOT_COUNT]);

    /// Create a vector from its slot counts
    pub const fn new(slots: [Count; SLOT_COUNT]) -> Self {
        ModifierVector(slots)
    }

    /// Borrow the raw slot counts
    pub fn slots(&self) -> &[Count; SLOT_COUNT] {
        &self.0
    }

    /// Count stored at a 1-based slot index
    pub fn slot(&self, index: usize) -> Option<Count> {
        index.checked_sub(1).and_then(|i| self.0.get(i).copied())
    }

    /// Iterate `(index, count)` pairs in application order, indices 1..=8
    pub fn iter_slots(&self) -> impl Iterator<Item = (usize, Count)> + '_ {
        self.0.iter().enumerate().map(|(i, &count)| (i + 1, count))
    }

    /// Number of slots with a non-zero count
    pub fn non_zero_count(&self) -> usize {
        self.0.iter().filter(|&&count| count != 0).count()
    }

    /// Whether every slot is zero
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&count| count == 0)
    }

    /// Total number of single steps a reduction will perform
    pub fn step_count(&self) -> u64 {
        self.0.iter().map(|count| u64::from(count.unsigned_abs())).sum()
    }
}

impl From<[Count; SLOT_COUNT]> for ModifierVector {
    fn from(slots: [Count; SLOT_COUNT]) -> Self {
        ModifierVector(slots)
    }
}

impl From<ModifierVector> for [Count; SLOT_COUNT] {
    fn from(vector: ModifierVector) -> Self {
        vector.0
    }
}

impl TryFrom<&[Count]> for ModifierVector {
    type Error = AcdsError;

    fn try_from(slots: &[Count]) -> Result<Self, Self::Error> {
        let slots: [Count; SLOT_COUNT] = slots.try_into().map_err(|_| AcdsError::InvalidLength {
            expected: SLOT_COUNT,
            actual: slots.len(),
        })?;
        Ok(ModifierVector(slots))
    }
}

impl TryFrom<Vec<Count>> for ModifierVector {
    type Error = AcdsError;

    fn try_from(slots: Vec<Count>) -> Result<Self, Self::Error> {
        ModifierVector::try_from(slots.as_slice())
    }
}

impl Add for ModifierVector {
    type Output = ModifierVector;

    fn add(mut self, rhs: ModifierVector) -> ModifierVector {
        self += rhs;
        self
    }
}

impl AddAssign for ModifierVector {
    fn add_assign(&mut self, rhs: ModifierVector) {
        for (slot, other) in self.0.iter_mut().zip(rhs.0) {
            *slot = slot.saturating_add(other);
        }
    }
}

impl Neg for ModifierVector {
    type Output = ModifierVector;

    fn neg(self) -> ModifierVector {
        ModifierVector(self.0.map(Count::saturating_neg))
    }
}

impl std::iter::Sum for ModifierVector {
    fn sum<I: Iterator<Item = ModifierVector>>(iter: I) -> Self {
        iter.fold(ModifierVector::ZERO, Add::add)
    }
}

impl<'a> std::iter::Sum<&'a ModifierVector> for ModifierVector {
    fn sum<I: Iterator<Item = &'a ModifierVector>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for ModifierVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, count) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", count)?;
        }
        write!(f, "]")
    }
}
