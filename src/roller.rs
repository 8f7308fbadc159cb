use tracing::debug;

use crate::error::Result;
use crate::rng::Rng;
use crate::types::{Range, RollerState};

#[derive(Clone, Debug, Default)]
pub struct Roller {
    range: Option<Range>,
    remaining: Vec<i64>,
    drawn: Vec<i64>,
}

impl Roller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, min: i64, max: i64) -> Result<()> {
        let range = Range::new(min, max)?;
        self.remaining = range.members();
        self.drawn.clear();
        self.range = Some(range);
        debug!(min, max, "roller started");
        Ok(())
    }

    /// Removes and returns a uniformly chosen remaining number. `None` once
    /// exhausted or before the first `start`, without touching state or `rng`.
    pub fn roll_next(&mut self, rng: &mut Rng) -> Option<i64> {
        if self.remaining.is_empty() {
            return None;
        }
        let idx = rng.pick_index(self.remaining.len());
        let value = self.remaining.swap_remove(idx);
        self.drawn.push(value);
        if self.remaining.is_empty() {
            debug!(drawn = self.drawn.len(), "roller exhausted");
        }
        Some(value)
    }

    pub fn state(&self) -> RollerState {
        match (self.range, self.remaining.is_empty()) {
            (None, _) => RollerState::Idle,
            (Some(_), false) => RollerState::Active,
            (Some(_), true) => RollerState::Exhausted,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.state() == RollerState::Exhausted
    }

    pub fn range(&self) -> Option<Range> {
        self.range
    }

    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    pub fn drawn(&self) -> &[i64] {
        &self.drawn
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::error::DistributorError;

    #[test]
    fn rolls_each_number_once_then_stops() {
        let mut rng = Rng::new(31);
        let mut roller = Roller::new();
        roller.start(1, 5).expect("valid range");
        assert_eq!(roller.state(), RollerState::Active);

        let mut rolled = Vec::new();
        for _ in 0..5 {
            rolled.push(roller.roll_next(&mut rng).expect("numbers remain"));
        }
        let unique: HashSet<i64> = rolled.iter().copied().collect();
        assert_eq!(unique, (1..=5).collect::<HashSet<_>>());
        assert!(roller.is_exhausted());

        let before = rng.clone().next_u32();
        assert_eq!(roller.roll_next(&mut rng), None);
        assert_eq!(rng.next_u32(), before, "exhausted roll must not draw");
        assert_eq!(roller.drawn(), rolled.as_slice());
    }

    #[test]
    fn idle_roller_yields_nothing() {
        let mut rng = Rng::new(1);
        let mut roller = Roller::new();
        assert_eq!(roller.state(), RollerState::Idle);
        assert_eq!(roller.roll_next(&mut rng), None);
        assert!(roller.drawn().is_empty());
    }

    #[test]
    fn failed_start_keeps_current_session() {
        let mut rng = Rng::new(8);
        let mut roller = Roller::new();
        roller.start(1, 3).expect("valid range");
        roller.roll_next(&mut rng).expect("numbers remain");

        assert_eq!(roller.start(9, 2), Err(DistributorError::InvalidRange));
        assert_eq!(roller.range(), Some(Range::new(1, 3).expect("valid range")));
        assert_eq!(roller.remaining_count(), 2);
        assert_eq!(roller.drawn().len(), 1);
    }

    #[test]
    fn restart_after_exhaustion_draws_again() {
        let mut rng = Rng::new(15);
        let mut roller = Roller::new();
        roller.start(4, 4).expect("valid range");
        assert_eq!(roller.roll_next(&mut rng), Some(4));
        assert!(roller.is_exhausted());

        roller.start(10, 12).expect("valid range");
        assert_eq!(roller.state(), RollerState::Active);
        assert!(roller.drawn().is_empty());
        let mut rolled: Vec<i64> = std::iter::from_fn(|| roller.roll_next(&mut rng)).collect();
        rolled.sort_unstable();
        assert_eq!(rolled, vec![10, 11, 12]);
    }

    #[test]
    fn first_roll_is_roughly_uniform() {
        let mut rng = Rng::new(2025);
        let mut counts = [0usize; 4];
        for _ in 0..4_000 {
            let mut roller = Roller::new();
            roller.start(0, 3).expect("valid range");
            let value = roller.roll_next(&mut rng).expect("numbers remain");
            counts[value as usize] += 1;
        }
        assert!(counts.iter().all(|count| (800..1_200).contains(count)));
    }
}
