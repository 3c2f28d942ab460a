//! Letter selection: non-repeating random picks per mood.
//!
//! The engine is a pure function over `(mood, pool, seen)` plus an
//! injectable index source. It owns the one real invariant of the
//! page: within a cycle, no letter repeats until the pool is
//! exhausted; on exhaustion the cycle restarts seeded with the fresh
//! pick. Persistence lives elsewhere (see [`crate::store`] and
//! [`crate::session`]).

use crate::content::{Letter, MoodId};
use crate::seen::SeenSet;
use rand::Rng;

/// Source of uniformly distributed indices into a candidate list.
///
/// Implemented for every [`rand::Rng`], so production call sites use
/// the thread RNG; tests can substitute
/// [`ScriptedPicks`](crate::testing::ScriptedPicks) to assert exact
/// selections.
pub trait IndexSource {
    /// Return an index in `0..len`. `len` is never zero.
    fn next_index(&mut self, len: usize) -> usize;
}

impl<R: Rng> IndexSource for R {
    fn next_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Outcome of a successful selection.
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    /// The chosen letter.
    pub letter: &'a Letter,

    /// True when every pool letter had been seen and the cycle was
    /// restarted by this pick.
    pub cycle_restarted: bool,
}

/// Pick one letter from a mood's pool, updating the seen record.
///
/// Returns `None` on an empty pool, leaving `seen` untouched; an empty
/// pool is a normal "no content for this mood" condition, not an
/// error. Otherwise draws uniformly from the not-yet-seen letters and
/// appends the pick to the mood's record. Once the record covers the
/// whole pool, the draw comes from the *full* pool and the record is
/// reset to just that pick: the first letter of a new cycle may repeat
/// the previous cycle's last one. That edge is long-standing page
/// behavior and is kept as is.
///
/// Callers must guarantee id uniqueness within `pool`; duplicates only
/// weaken the no-repeat guarantee, they cannot corrupt the record.
pub fn select_letter_with<'a, S: IndexSource>(
    mood: &MoodId,
    pool: &[&'a Letter],
    seen: &mut SeenSet,
    indexes: &mut S,
) -> Option<Selection<'a>> {
    if pool.is_empty() {
        return None;
    }

    let available: Vec<&Letter> = pool
        .iter()
        .copied()
        .filter(|letter| !seen.contains(mood, letter.id))
        .collect();

    if available.is_empty() {
        let choice = pool[indexes.next_index(pool.len())];
        seen.restart(mood, choice.id);
        Some(Selection {
            letter: choice,
            cycle_restarted: true,
        })
    } else {
        let choice = available[indexes.next_index(available.len())];
        seen.record(mood, choice.id);
        Some(Selection {
            letter: choice,
            cycle_restarted: false,
        })
    }
}

/// [`select_letter_with`] using the thread RNG.
pub fn select_letter<'a>(
    mood: &MoodId,
    pool: &[&'a Letter],
    seen: &mut SeenSet,
) -> Option<Selection<'a>> {
    select_letter_with(mood, pool, seen, &mut rand::thread_rng())
}
