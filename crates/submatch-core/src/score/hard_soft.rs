//! HardSoftScore - two-level score with hard and soft constraints.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// A score with separate hard and soft constraint levels.
///
/// Hard constraints must be satisfied for an assignment to be feasible; for
/// the matching engine the hard level counts conflict-invariant violations
/// and must stay at zero. Soft constraints are optimization objectives:
/// covered capacity, satisfied pins, avoided split penalties.
///
/// When comparing scores, hard is compared first; soft only breaks ties.
///
/// # Examples
///
/// ```
/// use submatch_core::HardSoftScore;
///
/// let infeasible = HardSoftScore::of(-1, 1_000);
/// let feasible = HardSoftScore::of(0, 50);
///
/// // feasible beats infeasible no matter the soft level
/// assert!(feasible > infeasible);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HardSoftScore {
    hard: i64,
    soft: i64,
}

impl HardSoftScore {
    /// The zero score.
    pub const ZERO: HardSoftScore = HardSoftScore { hard: 0, soft: 0 };

    /// Creates a new score.
    #[inline]
    pub const fn of(hard: i64, soft: i64) -> Self {
        HardSoftScore { hard, soft }
    }

    /// Creates a score with only a hard component.
    #[inline]
    pub const fn of_hard(hard: i64) -> Self {
        HardSoftScore { hard, soft: 0 }
    }

    /// Creates a score with only a soft component.
    #[inline]
    pub const fn of_soft(soft: i64) -> Self {
        HardSoftScore { hard: 0, soft }
    }

    /// Returns the hard score component.
    #[inline]
    pub const fn hard(&self) -> i64 {
        self.hard
    }

    /// Returns the soft score component.
    #[inline]
    pub const fn soft(&self) -> i64 {
        self.soft
    }

    /// True if all hard constraints are satisfied.
    #[inline]
    pub const fn is_feasible(&self) -> bool {
        self.hard >= 0
    }
}

impl Ord for HardSoftScore {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.hard.cmp(&other.hard) {
            Ordering::Equal => self.soft.cmp(&other.soft),
            other => other,
        }
    }
}

impl PartialOrd for HardSoftScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for HardSoftScore {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        HardSoftScore::of(self.hard + other.hard, self.soft + other.soft)
    }
}

impl Sub for HardSoftScore {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        HardSoftScore::of(self.hard - other.hard, self.soft - other.soft)
    }
}

impl Neg for HardSoftScore {
    type Output = Self;

    fn neg(self) -> Self {
        HardSoftScore::of(-self.hard, -self.soft)
    }
}

impl fmt::Debug for HardSoftScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HardSoftScore({}, {})", self.hard, self.soft)
    }
}

impl fmt::Display for HardSoftScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}hard/{}soft", self.hard, self.soft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hard_dominates_soft() {
        assert!(HardSoftScore::of(0, -1_000) > HardSoftScore::of(-1, 1_000));
        assert!(HardSoftScore::of(1, 0) > HardSoftScore::of(0, 1_000_000));
    }

    #[test]
    fn soft_breaks_ties() {
        assert!(HardSoftScore::of(0, 10) > HardSoftScore::of(0, 5));
        assert_eq!(HardSoftScore::of(0, 5), HardSoftScore::of(0, 5));
    }

    #[test]
    fn feasibility() {
        assert!(HardSoftScore::ZERO.is_feasible());
        assert!(HardSoftScore::of(0, -5).is_feasible());
        assert!(!HardSoftScore::of(-1, 100).is_feasible());
    }

    #[test]
    fn arithmetic() {
        let a = HardSoftScore::of(-1, 10);
        let b = HardSoftScore::of(0, 5);
        assert_eq!(a + b, HardSoftScore::of(-1, 15));
        assert_eq!(a - b, HardSoftScore::of(-1, 5));
        assert_eq!(-a, HardSoftScore::of(1, -10));
    }

    #[test]
    fn display_format() {
        assert_eq!(HardSoftScore::of(-2, 350).to_string(), "-2hard/350soft");
    }
}
