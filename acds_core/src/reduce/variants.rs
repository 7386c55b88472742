//! Alternative reducer formulations
//!
//! Both produce exactly the same damage as the sequential fold; they only
//! trade memory layout and loop shape for speed in different workloads.
//!
//! - [`EarlyExitVector`]: stops once every non-zero slot has been applied.
//! - [`FractionList`]: an explicit list of single steps instead of counts.

use super::sequential::{apply_slot, checked, next_damage, saturate};
use crate::types::{Damage, Direction, ModifierContext, DIVISOR};
use crate::vector::ModifierVector;
use crate::AcdsError;

/// Modifier vector with its non-zero slot count cached for early exit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EarlyExitVector {
    vector: ModifierVector,
    non_zero: usize,
}

impl EarlyExitVector {
    /// Wrap a vector, counting its non-zero slots
    pub fn new(vector: ModifierVector) -> Self {
        EarlyExitVector {
            vector,
            non_zero: vector.non_zero_count(),
        }
    }

    /// The wrapped vector
    pub fn vector(&self) -> &ModifierVector {
        &self.vector
    }

    /// Number of slots with a non-zero count
    pub fn non_zero(&self) -> usize {
        self.non_zero
    }

    /// Apply in the given context, skipping everything after the last non-zero slot
    pub fn apply(&self, context: ModifierContext, damage: Damage) -> Damage {
        let mut output = damage;
        let mut remaining = self.non_zero;
        let mut settle = saturate;

        for (index, count) in self.vector.iter_slots() {
            if remaining == 0 {
                break;
            }
            if count == 0 {
                continue;
            }
            output = match apply_slot(context, output, index, count, &mut settle) {
                Ok(value) => value,
                Err(never) => match never {},
            };
            remaining -= 1;
        }

        output
    }
}

impl From<ModifierVector> for EarlyExitVector {
    fn from(vector: ModifierVector) -> Self {
        EarlyExitVector::new(vector)
    }
}

/// Returns damage after damage bonus, exiting after the last non-zero slot
pub fn damage_bonus_early_exit(damage: Damage, db_vector: &EarlyExitVector) -> Damage {
    db_vector.apply(ModifierContext::Bonus, damage)
}

/// Returns damage after damage reduction, exiting after the last non-zero slot
pub fn damage_reduction_early_exit(damage: Damage, dr_vector: &EarlyExitVector) -> Damage {
    dr_vector.apply(ModifierContext::Reduction, damage)
}

/// One explicit step: move damage by `floor(damage * numerator / denominator)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: u32,
    denominator: u32,
    direction: Direction,
}

impl Fraction {
    /// Create a fraction step. The denominator must be non-zero.
    pub fn new(numerator: u32, denominator: u32, direction: Direction) -> Result<Self, AcdsError> {
        if denominator == 0 {
            return Err(AcdsError::ZeroDenominator { numerator });
        }
        Ok(Fraction {
            numerator,
            denominator,
            direction,
        })
    }

    /// The `index/8` step for a vector slot
    fn eighths(index: usize, direction: Direction) -> Self {
        Fraction {
            numerator: index as u32,
            denominator: DIVISOR as u32,
            direction,
        }
    }

    /// Step numerator
    pub fn numerator(&self) -> u32 {
        self.numerator
    }

    /// Step denominator, never zero
    pub fn denominator(&self) -> u32 {
        self.denominator
    }

    /// Whether the step raises or lowers damage
    pub fn direction(&self) -> Direction {
        self.direction
    }

    fn next(&self, damage: Damage) -> i128 {
        next_damage(damage, self.numerator, self.denominator, self.direction)
    }
}

/// Ordered list of single fraction steps
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FractionList {
    fractions: Vec<Fraction>,
}

impl FractionList {
    /// Most single steps [`FractionList::from_vector`] will expand a vector into
    pub const MAX_STEPS: u64 = 4096;

    /// Empty list, the identity
    pub fn new() -> Self {
        FractionList {
            fractions: Vec::new(),
        }
    }

    /// Expand a vector into one fraction per single step.
    ///
    /// Allocates one entry per repetition, so vectors whose total step count
    /// exceeds [`FractionList::MAX_STEPS`] are rejected with
    /// [`AcdsError::TooManySteps`].
    pub fn from_vector(
        context: ModifierContext,
        vector: &ModifierVector,
    ) -> Result<Self, AcdsError> {
        let steps = vector.step_count();
        if steps > Self::MAX_STEPS {
            return Err(AcdsError::TooManySteps {
                steps,
                limit: Self::MAX_STEPS,
            });
        }

        let mut list = FractionList {
            fractions: Vec::with_capacity(steps as usize),
        };
        for (index, count) in vector.iter_slots() {
            if let Some(direction) = context.direction_for(count) {
                for _ in 0..count.unsigned_abs() {
                    list.push(Fraction::eighths(index, direction));
                }
            }
        }
        Ok(list)
    }

    /// Append one step
    pub fn push(&mut self, fraction: Fraction) {
        self.fractions.push(fraction);
    }

    /// Number of single steps
    pub fn len(&self) -> usize {
        self.fractions.len()
    }

    /// True if the list has no steps
    pub fn is_empty(&self) -> bool {
        self.fractions.is_empty()
    }

    /// Steps in application order
    pub fn iter(&self) -> impl Iterator<Item = &Fraction> {
        self.fractions.iter()
    }

    /// Apply every step in order, saturating at the `i64` bounds
    pub fn apply(&self, damage: Damage) -> Damage {
        let mut output = damage;
        for (position, fraction) in self.fractions.iter().enumerate() {
            output = match saturate(fraction.next(output), position + 1, output) {
                Ok(value) => value,
                Err(never) => match never {},
            };
        }
        output
    }

    /// Apply every step in order, failing if damage leaves the `i64` range
    pub fn try_apply(&self, damage: Damage) -> Result<Damage, AcdsError> {
        self.fractions
            .iter()
            .enumerate()
            .try_fold(damage, |output, (position, fraction)| {
                checked(fraction.next(output), position + 1, output)
            })
    }
}

impl FromIterator<Fraction> for FractionList {
    fn from_iter<I: IntoIterator<Item = Fraction>>(iter: I) -> Self {
        FractionList {
            fractions: iter.into_iter().collect(),
        }
    }
}
