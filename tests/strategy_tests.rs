//! Strategy and evaluator property tests.
//!
//! These tests pin down the predicate of every strategy over the full draw
//! range and the counting rules of the evaluator.

use draw_game::{Evaluator, StrategyKind};
use proptest::prelude::*;

fn is_conventional_prime(n: u32) -> bool {
    n >= 2 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0)
}

/// Test the simple modular predicates over every possible draw.
#[test]
fn test_modular_predicates_full_range() {
    for n in 1..=100 {
        assert_eq!(StrategyKind::FiveEven.matches(n), n % 2 == 0, "FiveEven({})", n);
        assert_eq!(StrategyKind::FiveOdd.matches(n), n % 2 == 1, "FiveOdd({})", n);
        assert_eq!(StrategyKind::ThreeTenMul.matches(n), n % 10 == 0, "ThreeTenMul({})", n);
        assert_eq!(
            StrategyKind::TwoTwentyFiveMul.matches(n),
            n % 25 == 0,
            "TwoTwentyFiveMul({})",
            n
        );
    }
}

/// Trial division counts 1 as well as every conventional prime.
#[test]
fn test_one_prime_full_range() {
    assert!(StrategyKind::OnePrime.matches(1));
    assert!(StrategyKind::OnePrime.matches(2));

    for n in 2..=100 {
        assert_eq!(
            StrategyKind::OnePrime.matches(n),
            is_conventional_prime(n),
            "OnePrime({})",
            n
        );
    }
}

/// Exactly 26 of the 100 possible draws satisfy OnePrime: 25 primes plus 1.
#[test]
fn test_one_prime_match_count() {
    let matches = (1..=100).filter(|&n| StrategyKind::OnePrime.matches(n)).count();
    assert_eq!(matches, 26);
}

/// Every strategy wins after exactly `threshold` matching draws.
#[test]
fn test_win_exactly_at_threshold() {
    let matching = |kind: StrategyKind| (1..=100).find(|&n| kind.matches(n)).unwrap();

    for kind in StrategyKind::ALL {
        let n = matching(kind);
        let mut eval = Evaluator::new(kind);

        for i in 1..kind.threshold() {
            assert!(!eval.execute(n), "{} won early at match {}", kind, i);
        }
        assert!(eval.execute(n), "{} did not win at threshold", kind);
        assert_eq!(eval.counter(), kind.threshold());
    }
}

proptest! {
    /// The counter never decreases and grows only on matching draws.
    #[test]
    fn prop_counter_monotonic(
        kind_index in 0usize..5,
        draws in proptest::collection::vec(1u32..=100, 0..200),
    ) {
        let kind = StrategyKind::ALL[kind_index];
        let mut eval = Evaluator::new(kind);
        let mut previous = 0;

        for n in draws {
            eval.execute(n);
            let expected = previous + u32::from(kind.matches(n));
            prop_assert_eq!(eval.counter(), expected);
            previous = eval.counter();
        }
    }

    /// A win is signalled iff the matching draws so far reach the threshold.
    #[test]
    fn prop_win_iff_threshold_reached(
        kind_index in 0usize..5,
        draws in proptest::collection::vec(1u32..=100, 1..200),
    ) {
        let kind = StrategyKind::ALL[kind_index];
        let mut eval = Evaluator::new(kind);
        let mut matched = 0;

        for n in draws {
            if kind.matches(n) {
                matched += 1;
            }
            prop_assert_eq!(eval.execute(n), matched >= kind.threshold());
        }
    }

    /// Names round-trip through parsing regardless of case.
    #[test]
    fn prop_parse_ignores_case(kind_index in 0usize..5, upper in any::<bool>()) {
        let kind = StrategyKind::ALL[kind_index];
        let name = if upper {
            kind.name().to_uppercase()
        } else {
            kind.name().to_lowercase()
        };
        prop_assert_eq!(name.parse::<StrategyKind>(), Ok(kind));
    }
}
