//! Nominal encoders - compact eighth values to modifier vectors
//!
//! A nominal value counts eighths. The whole multiples of 8 go to slot 8 and the
//! remainder (1..=7) gets a single count in its own slot:
//!
//! | nominal | vector                     | meaning         |
//! |---------|----------------------------|-----------------|
//! | 1       | `[1, 0, 0, 0, 0, 0, 0, 0]` | 12.5%           |
//! | 7       | `[0, 0, 0, 0, 0, 0, 1, 0]` | 87.5%           |
//! | 8       | `[0, 0, 0, 0, 0, 0, 0, 1]` | 100%            |
//! | 10      | `[0, 1, 0, 0, 0, 0, 0, 1]` | 25% then 100%   |
//! | 19      | `[0, 0, 1, 0, 0, 0, 0, 2]` | 37.5% then 2x100% |
//!
//! The split works on `|nominal|` so negative values decompose exactly like
//! positive ones; only the sign of the stored counts differs.

use super::ModifierVector;
use crate::types::{Count, Nominal, DIVISOR, SLOT_COUNT};

/// Decomposition of a nominal value into whole and fractional eighths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NominalSplit {
    /// Number of full 8/8 steps
    pub whole: u32,
    /// Leftover eighths, always in `0..8`
    pub remainder: u8,
    /// Whether the nominal was negative
    pub negative: bool,
}

impl NominalSplit {
    /// Signed count for slot 8
    pub fn whole_count(&self) -> Count {
        self.signed(self.whole)
    }

    /// Signed count for the remainder slot
    pub fn remainder_count(&self) -> Count {
        self.signed(1)
    }

    fn signed(&self, magnitude: u32) -> Count {
        // whole <= |i32::MIN| / 8, so the magnitude always fits in a Count
        let magnitude = magnitude as Count;
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }

    fn into_vector(self) -> ModifierVector {
        let mut slots = [0; SLOT_COUNT];

        if self.whole != 0 {
            slots[SLOT_COUNT - 1] = self.whole_count();
        }
        if self.remainder != 0 {
            slots[usize::from(self.remainder) - 1] = self.remainder_count();
        }

        ModifierVector::new(slots)
    }
}

/// Split a nominal into whole and remainder eighths using unsigned division
pub fn split_nominal(nominal: Nominal) -> NominalSplit {
    let magnitude = nominal.unsigned_abs();
    let divisor = DIVISOR as u32;

    NominalSplit {
        whole: magnitude / divisor,
        remainder: (magnitude % divisor) as u8,
        negative: nominal < 0,
    }
}

/// Convert a nominal Damage Bonus value into vector form.
///
/// Positive nominals raise damage, negative nominals lower it.
pub fn db_vector_from_nominal(nominal: Nominal) -> ModifierVector {
    split_nominal(nominal).into_vector()
}

/// Convert a nominal Damage Reduction value into vector form.
///
/// Positive nominals lower damage, negative nominals raise it. A nominal of 8
/// or more includes at least one full 100% reduction (immunity).
pub fn dr_vector_from_nominal(nominal: Nominal) -> ModifierVector {
    split_nominal(nominal).into_vector()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_nominal() {
        assert_eq!(db_vector_from_nominal(0), ModifierVector::ZERO);
        assert_eq!(dr_vector_from_nominal(0), ModifierVector::ZERO);
    }

    #[test]
    fn test_fraction_only() {
        assert_eq!(
            dr_vector_from_nominal(4),
            ModifierVector::new([0, 0, 0, 1, 0, 0, 0, 0])
        );
        assert_eq!(
            dr_vector_from_nominal(-4),
            ModifierVector::new([0, 0, 0, -1, 0, 0, 0, 0])
        );
    }

    #[test]
    fn test_whole_and_fraction() {
        assert_eq!(
            db_vector_from_nominal(10),
            ModifierVector::new([0, 1, 0, 0, 0, 0, 0, 1])
        );
        assert_eq!(
            db_vector_from_nominal(19),
            ModifierVector::new([0, 0, 1, 0, 0, 0, 0, 2])
        );
        assert_eq!(
            db_vector_from_nominal(-9),
            ModifierVector::new([-1, 0, 0, 0, 0, 0, 0, -1])
        );
    }

    #[test]
    fn test_exact_multiple_of_eight() {
        assert_eq!(
            dr_vector_from_nominal(16),
            ModifierVector::new([0, 0, 0, 0, 0, 0, 0, 2])
        );
        assert_eq!(
            dr_vector_from_nominal(-8),
            ModifierVector::new([0, 0, 0, 0, 0, 0, 0, -1])
        );
    }

    #[test]
    fn test_split_negative_matches_positive() {
        let pos = split_nominal(27);
        let neg = split_nominal(-27);
        assert_eq!((pos.whole, pos.remainder), (3, 3));
        assert_eq!((neg.whole, neg.remainder), (3, 3));
        assert!(!pos.negative);
        assert!(neg.negative);
    }

    #[test]
    fn test_extreme_nominals() {
        let min = split_nominal(Nominal::MIN);
        assert_eq!(min.whole, 1 << 28);
        assert_eq!(min.remainder, 0);
        assert_eq!(
            dr_vector_from_nominal(Nominal::MIN).slot(8),
            Some(-(1 << 28))
        );

        let max = db_vector_from_nominal(Nominal::MAX);
        assert_eq!(max.slot(8), Some(Nominal::MAX / 8));
        assert_eq!(max.slot(7), Some(1));
    }
}
