//! Testing utilities.
//!
//! Provides [`ScriptedPicks`], a deterministic stand-in for the thread
//! RNG so tests can assert exact selections instead of sampling.

use crate::engine::IndexSource;

/// An index source that returns a scripted sequence of picks in order.
///
/// Panics when the script runs out or a scripted index is out of range
/// for the candidate list; both mean the test script and the scenario
/// disagree.
pub struct ScriptedPicks {
    picks: Vec<usize>,
    next: usize,
}

impl ScriptedPicks {
    pub fn new(picks: impl Into<Vec<usize>>) -> Self {
        Self {
            picks: picks.into(),
            next: 0,
        }
    }

    /// Picks left in the script.
    pub fn remaining(&self) -> usize {
        self.picks.len().saturating_sub(self.next)
    }
}

impl IndexSource for ScriptedPicks {
    fn next_index(&mut self, len: usize) -> usize {
        let pick = match self.picks.get(self.next) {
            Some(&pick) => pick,
            None => panic!("ScriptedPicks exhausted after {} picks", self.next),
        };
        self.next += 1;
        assert!(
            pick < len,
            "scripted pick {pick} out of range for {len} candidates"
        );
        pick
    }
}
