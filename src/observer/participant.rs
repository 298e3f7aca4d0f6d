//! A named player holding one replaceable evaluator.

use serde::{Deserialize, Serialize};

use crate::game::Winner;
use crate::strategy::{Evaluator, StrategyKind};

use super::Observer;

/// A player in the game.
///
/// All progress lives in the evaluator; swapping it starts the count over.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    name: String,
    evaluator: Evaluator,
}

impl Participant {
    /// Create a participant with a fresh evaluator for `kind`.
    pub fn new(name: impl Into<String>, kind: StrategyKind) -> Self {
        Self::with_evaluator(name, Evaluator::new(kind))
    }

    /// Create a participant around an existing evaluator.
    pub fn with_evaluator(name: impl Into<String>, evaluator: Evaluator) -> Self {
        Self {
            name: name.into(),
            evaluator,
        }
    }

    /// The participant's label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The evaluator currently in use.
    #[must_use]
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Replace the evaluator, returning the old one with its progress.
    pub fn set_evaluator(&mut self, evaluator: impl Into<Evaluator>) -> Evaluator {
        let old = std::mem::replace(&mut self.evaluator, evaluator.into());
        tracing::debug!(
            participant = %self.name,
            from = %old.kind(),
            to = %self.evaluator.kind(),
            "evaluator replaced"
        );
        old
    }
}

impl Observer for Participant {
    fn name(&self) -> &str {
        &self.name
    }

    fn on_broadcast(&mut self, number: u32) -> Option<Winner> {
        if self.evaluator.execute(number) {
            Some(Winner::new(self.name.clone(), self.evaluator.kind()))
        } else {
            None
        }
    }
}

/// The standard roster: `P1` to `P5`, one per strategy in table order.
pub fn default_roster() -> Vec<Participant> {
    StrategyKind::ALL
        .into_iter()
        .enumerate()
        .map(|(i, kind)| Participant::new(format!("P{}", i + 1), kind))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participant_basics() {
        let p = Participant::new("P1", StrategyKind::FiveEven);
        assert_eq!(p.name(), "P1");
        assert_eq!(p.evaluator().kind(), StrategyKind::FiveEven);
        assert_eq!(p.evaluator().counter(), 0);
    }

    #[test]
    fn test_broadcast_forwards_to_evaluator() {
        let mut p = Participant::new("P2", StrategyKind::FiveOdd);
        assert!(p.on_broadcast(3).is_none());
        assert!(p.on_broadcast(4).is_none());
        assert_eq!(p.evaluator().counter(), 1);
    }

    #[test]
    fn test_win_reports_name_and_strategy() {
        let mut p = Participant::new("P3", StrategyKind::OnePrime);
        let winner = p.on_broadcast(2).unwrap();
        assert_eq!(winner, Winner::new("P3", StrategyKind::OnePrime));
    }

    #[test]
    fn test_set_evaluator_discards_progress() {
        let mut p = Participant::new("P1", StrategyKind::ThreeTenMul);
        p.on_broadcast(10);
        p.on_broadcast(20);

        let old = p.set_evaluator(StrategyKind::TwoTwentyFiveMul);
        assert_eq!(old.counter(), 2);
        assert_eq!(p.evaluator().kind(), StrategyKind::TwoTwentyFiveMul);
        assert_eq!(p.evaluator().counter(), 0);
    }

    #[test]
    fn test_default_roster() {
        let roster = default_roster();
        let names: Vec<_> = roster.iter().map(Participant::name).collect();
        assert_eq!(names, vec!["P1", "P2", "P3", "P4", "P5"]);

        let kinds: Vec<_> = roster.iter().map(|p| p.evaluator().kind()).collect();
        assert_eq!(kinds, StrategyKind::ALL.to_vec());
    }
}
