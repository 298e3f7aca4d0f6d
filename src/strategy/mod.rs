//! Win-condition strategies.
//!
//! A [`StrategyKind`] is a pure rule: which numbers count and how many are
//! needed. An [`Evaluator`] carries one rule together with its progress.
//!
//! | Strategy | needs | counts `n` when |
//! |---|---|---|
//! | `FiveEven` | 5 | `n % 2 == 0` |
//! | `FiveOdd` | 5 | `n % 2 == 1` |
//! | `OnePrime` | 1 | no `d` in `2..n` divides `n` |
//! | `ThreeTenMul` | 3 | `n % 10 == 0` |
//! | `TwoTwentyFiveMul` | 2 | `n % 25 == 0` |
//!
//! ```
//! use draw_game::strategy::{Evaluator, StrategyKind};
//!
//! let mut eval = Evaluator::new(StrategyKind::TwoTwentyFiveMul);
//! assert!(!eval.execute(25));
//! assert!(!eval.execute(30));
//! assert!(eval.execute(75));
//! ```

mod evaluator;
mod kind;

pub use evaluator::Evaluator;
pub use kind::StrategyKind;
