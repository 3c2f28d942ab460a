//! LetterSession - the primary public API for letter selection.
//!
//! Wraps the content collections, the seen-letter record and its
//! storage behind the one call a presentation layer needs:
//! [`LetterSession::next_letter`]. The caller keeps its own notion of
//! "current mood"; nothing here is global.

use crate::content::{ContentStore, Letter, MoodId, Photo, PhotoId};
use crate::engine;
use crate::seen::SeenSet;
use crate::store::SeenStore;

/// A letter-picking session for one visitor.
pub struct LetterSession {
    content: ContentStore,
    seen: SeenSet,
    store: SeenStore,
}

impl LetterSession {
    /// Open a session, loading the persisted seen-letter record.
    ///
    /// A missing or corrupt record starts the session with nothing
    /// seen; opening cannot fail.
    pub async fn open(content: ContentStore, store: SeenStore) -> Self {
        let seen = store.load().await;
        Self {
            content,
            seen,
            store,
        }
    }

    /// Pick the next letter for a mood.
    ///
    /// Returns `None` when the mood has no letters, a normal condition
    /// the caller renders as "nothing to show". The updated record is
    /// written back after every pick; a failed write is logged and the
    /// pick still returned.
    pub async fn next_letter(&mut self, mood: &MoodId) -> Option<Letter> {
        let pool = self.content.pool(mood);
        let choice = engine::select_letter(mood, &pool, &mut self.seen)?
            .letter
            .clone();

        if let Err(e) = self.store.save(&self.seen).await {
            tracing::warn!("failed to persist seen-letter record: {}", e);
        }

        Some(choice)
    }

    /// Look up a photo for the modal.
    pub fn photo(&self, id: PhotoId) -> Option<&Photo> {
        self.content.photo(id)
    }

    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    pub fn seen(&self) -> &SeenSet {
        &self.seen
    }
}
