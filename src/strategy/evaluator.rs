//! Stateful win-condition evaluator.
//!
//! An `Evaluator` is a strategy plus the number of draws that matched it so
//! far. The counter only moves through [`Evaluator::execute`] and never
//! goes down; the only way to start over is to build a new evaluator.

use serde::{Deserialize, Serialize};

use super::kind::StrategyKind;

/// A strategy with its running match count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluator {
    kind: StrategyKind,
    counter: u32,
}

impl Evaluator {
    /// Create an evaluator with no matches yet.
    #[must_use]
    pub const fn new(kind: StrategyKind) -> Self {
        Self { kind, counter: 0 }
    }

    /// Feed one drawn number.
    ///
    /// Counts the number if it matches, then reports whether the
    /// threshold has been reached.
    pub fn execute(&mut self, candidate: u32) -> bool {
        if self.kind.matches(candidate) {
            self.counter = self.counter.saturating_add(1);
        }
        self.is_won()
    }

    /// Whether the threshold has been reached.
    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.counter >= self.kind.threshold()
    }

    /// The strategy being evaluated.
    #[must_use]
    pub const fn kind(&self) -> StrategyKind {
        self.kind
    }

    /// Matching draws seen so far.
    #[must_use]
    pub const fn counter(&self) -> u32 {
        self.counter
    }

    /// Matching draws needed to win.
    #[must_use]
    pub const fn threshold(&self) -> u32 {
        self.kind.threshold()
    }
}

impl From<StrategyKind> for Evaluator {
    fn from(kind: StrategyKind) -> Self {
        Self::new(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_evaluator_is_pending() {
        for kind in StrategyKind::ALL {
            let eval = Evaluator::new(kind);
            assert_eq!(eval.counter(), 0);
            assert_eq!(eval.threshold(), kind.threshold());
            assert!(!eval.is_won());
        }
    }

    #[test]
    fn test_non_matching_draw_leaves_counter() {
        let mut eval = Evaluator::new(StrategyKind::FiveEven);
        assert!(!eval.execute(3));
        assert_eq!(eval.counter(), 0);
    }

    #[test]
    fn test_wins_exactly_at_threshold() {
        let mut eval = Evaluator::new(StrategyKind::ThreeTenMul);
        assert!(!eval.execute(10));
        assert!(!eval.execute(7));
        assert!(!eval.execute(20));
        assert_eq!(eval.counter(), 2);
        assert!(eval.execute(30));
        assert_eq!(eval.counter(), 3);
    }

    #[test]
    fn test_one_prime_wins_on_one() {
        let mut eval = Evaluator::new(StrategyKind::OnePrime);
        assert!(eval.execute(1));
    }

    #[test]
    fn test_stays_won_after_threshold() {
        let mut eval = Evaluator::new(StrategyKind::TwoTwentyFiveMul);
        eval.execute(25);
        eval.execute(50);
        assert!(eval.execute(3));
        assert_eq!(eval.counter(), 2);
    }

    #[test]
    fn test_serialization() {
        let mut eval = Evaluator::new(StrategyKind::FiveOdd);
        eval.execute(1);
        let json = serde_json::to_string(&eval).unwrap();
        let back: Evaluator = serde_json::from_str(&json).unwrap();
        assert_eq!(eval, back);
    }
}
