//! Reference reducer - sequential fold over the eight slots
//!
//! Slots are processed in ascending order and every single step is computed
//! against the running damage, so `[2, 0, ..]` is 12.5% of 1000 followed by
//! 12.5% of 875, not 25% of 1000.
//!
//! Step size: `floor(damage * i / 8)`, rounding toward negative infinity.

use crate::types::{Count, Damage, Direction, ModifierContext, DIVISOR};
use crate::vector::ModifierVector;
use crate::AcdsError;
use std::convert::Infallible;
use tracing::{trace, warn};

/// Running damage after one step of `numerator / denominator`.
///
/// Computed in `i128`: the product never overflows and the caller decides how
/// to bring an out-of-range result back to `Damage`.
pub(crate) fn next_damage(
    damage: Damage,
    numerator: u32,
    denominator: u32,
    direction: Direction,
) -> i128 {
    let current = i128::from(damage);
    let step = (current * i128::from(numerator)).div_euclid(i128::from(denominator));

    match direction {
        Direction::Raise => current + step,
        Direction::Lower => current - step,
    }
}

/// Clamp an out-of-range step result to the `Damage` bounds
pub(crate) fn saturate(next: i128, slot: usize, damage: Damage) -> Result<Damage, Infallible> {
    match Damage::try_from(next) {
        Ok(value) => Ok(value),
        Err(_) => {
            warn!(slot, damage, "damage saturated at i64 bounds");
            Ok(if next > 0 { Damage::MAX } else { Damage::MIN })
        }
    }
}

/// Reject an out-of-range step result
pub(crate) fn checked(next: i128, slot: usize, damage: Damage) -> Result<Damage, AcdsError> {
    Damage::try_from(next).map_err(|_| AcdsError::Overflow { slot, damage })
}

/// Apply `count` repetitions of the `index/8` step
pub(crate) fn apply_slot<E>(
    context: ModifierContext,
    mut damage: Damage,
    index: usize,
    count: Count,
    settle: &mut impl FnMut(i128, usize, Damage) -> Result<Damage, E>,
) -> Result<Damage, E> {
    let Some(direction) = context.direction_for(count) else {
        return Ok(damage);
    };

    trace!(context = context.abbreviation(), slot = index, count, damage, "applying slot");

    for _ in 0..count.unsigned_abs() {
        let next = next_damage(damage, index as u32, DIVISOR as u32, direction);
        let settled = settle(next, index, damage)?;
        // The step depends only on the running damage, so an unchanged value
        // (zero, a step that floors to nothing, a saturated bound) repeats forever
        if settled == damage {
            break;
        }
        damage = settled;
    }

    Ok(damage)
}

fn fold<E>(
    context: ModifierContext,
    damage: Damage,
    vector: &ModifierVector,
    mut settle: impl FnMut(i128, usize, Damage) -> Result<Damage, E>,
) -> Result<Damage, E> {
    let mut output = damage;

    for (index, count) in vector.iter_slots() {
        output = apply_slot(context, output, index, count, &mut settle)?;
    }

    Ok(output)
}

/// Apply a vector in the given context, saturating at the `i64` bounds
pub fn apply(context: ModifierContext, damage: Damage, vector: &ModifierVector) -> Damage {
    match fold(context, damage, vector, saturate) {
        Ok(output) => output,
        Err(never) => match never {},
    }
}

/// Apply a vector in the given context, failing if damage leaves the `i64` range
pub fn try_apply(
    context: ModifierContext,
    damage: Damage,
    vector: &ModifierVector,
) -> Result<Damage, AcdsError> {
    fold(context, damage, vector, checked)
}

/// Returns damage after damage bonus. (+) raises damage, (-) lowers it.
pub fn damage_bonus(damage: Damage, db_vector: &ModifierVector) -> Damage {
    apply(ModifierContext::Bonus, damage, db_vector)
}

/// Returns damage after damage reduction. (+) lowers damage, (-) raises it.
pub fn damage_reduction(damage: Damage, dr_vector: &ModifierVector) -> Damage {
    apply(ModifierContext::Reduction, damage, dr_vector)
}

/// Checked form of [`damage_bonus`]
pub fn try_damage_bonus(damage: Damage, db_vector: &ModifierVector) -> Result<Damage, AcdsError> {
    try_apply(ModifierContext::Bonus, damage, db_vector)
}

/// Checked form of [`damage_reduction`]
pub fn try_damage_reduction(
    damage: Damage,
    dr_vector: &ModifierVector,
) -> Result<Damage, AcdsError> {
    try_apply(ModifierContext::Reduction, damage, dr_vector)
}
