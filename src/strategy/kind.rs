//! The closed set of win-condition strategies.
//!
//! Each strategy pairs a predicate over drawn numbers with the number of
//! times that predicate must hold before the holder wins. Both are plain
//! per-variant data, so adding a variant without a threshold or predicate
//! fails to compile.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::GameError;

/// Strategy identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    /// Five even numbers.
    FiveEven,
    /// Five odd numbers.
    FiveOdd,
    /// One prime number (trial division, so 1 counts).
    OnePrime,
    /// Three multiples of ten.
    ThreeTenMul,
    /// Two multiples of twenty-five.
    TwoTwentyFiveMul,
}

impl StrategyKind {
    /// Every strategy, in the order the default roster assigns them.
    pub const ALL: [StrategyKind; 5] = [
        StrategyKind::FiveEven,
        StrategyKind::FiveOdd,
        StrategyKind::OnePrime,
        StrategyKind::ThreeTenMul,
        StrategyKind::TwoTwentyFiveMul,
    ];

    /// How many matching draws are needed to win.
    #[must_use]
    pub const fn threshold(self) -> u32 {
        match self {
            StrategyKind::FiveEven => 5,
            StrategyKind::FiveOdd => 5,
            StrategyKind::OnePrime => 1,
            StrategyKind::ThreeTenMul => 3,
            StrategyKind::TwoTwentyFiveMul => 2,
        }
    }

    /// Whether a drawn number counts towards this strategy.
    #[must_use]
    pub fn matches(self, n: u32) -> bool {
        match self {
            StrategyKind::FiveEven => n % 2 == 0,
            StrategyKind::FiveOdd => n % 2 == 1,
            StrategyKind::OnePrime => has_no_divisor_below(n),
            StrategyKind::ThreeTenMul => n % 10 == 0,
            StrategyKind::TwoTwentyFiveMul => n % 25 == 0,
        }
    }

    /// Identifying name, as shown in the win announcement.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            StrategyKind::FiveEven => "FiveEven",
            StrategyKind::FiveOdd => "FiveOdd",
            StrategyKind::OnePrime => "OnePrime",
            StrategyKind::ThreeTenMul => "ThreeTenMul",
            StrategyKind::TwoTwentyFiveMul => "TwoTwentyFiveMul",
        }
    }
}

/// Trial division over `2..n`.
///
/// The range is empty for `n <= 2`, so 0, 1 and 2 all pass.
fn has_no_divisor_below(n: u32) -> bool {
    (2..n).all(|d| n % d != 0)
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = GameError;

    /// Parse an identifying name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GameError::UnknownStrategy { name: s.to_string() })
    }
}
