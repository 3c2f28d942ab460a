//! Per-mood record of letters already shown.

use crate::content::{LetterId, MoodId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from mood to the letter ids already shown this cycle.
///
/// Serializes as a bare `{"mood": [ids]}` object, the exact shape the
/// page has always stored. Per-mood order is insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeenSet {
    moods: HashMap<MoodId, Vec<LetterId>>,
}

impl SeenSet {
    /// Create an empty record: nothing seen yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The ids already shown for a mood, oldest first.
    pub fn ids_for(&self, mood: &MoodId) -> &[LetterId] {
        self.moods.get(mood).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, mood: &MoodId, id: LetterId) -> bool {
        self.ids_for(mood).contains(&id)
    }

    /// Number of ids recorded for a mood.
    pub fn seen_count(&self, mood: &MoodId) -> usize {
        self.ids_for(mood).len()
    }

    pub fn is_empty(&self) -> bool {
        self.moods.values().all(Vec::is_empty)
    }

    /// Record a newly shown letter for a mood.
    pub fn record(&mut self, mood: &MoodId, id: LetterId) {
        let ids = self.moods.entry(mood.clone()).or_default();
        if !ids.contains(&id) {
            ids.push(id);
        }
    }

    /// Start a fresh cycle for a mood, seeded with the just-shown
    /// letter so it is not repeated immediately within the new cycle.
    pub fn restart(&mut self, mood: &MoodId, id: LetterId) {
        self.moods.insert(mood.clone(), vec![id]);
    }
}
