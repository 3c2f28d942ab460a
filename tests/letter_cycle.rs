//! End-to-end tests for the letter cycle through the public API.
//!
//! These tests drive a real session against a temp-dir store and
//! verify the no-repeat cycle, the exhaustion reset, surprise-pool
//! routing and recovery from a corrupt store file.

use keepsake_core::{
    ContentStore, Letter, LetterId, LetterSession, MoodId, SeenStore, SeenSet,
};
use std::collections::HashSet;
use tempfile::TempDir;

fn happy_letter(id: u32) -> Letter {
    Letter {
        id: LetterId(id),
        mood_id: Some(MoodId::new("happy")),
        text: format!("carta {id}"),
        memory: None,
    }
}

/// Content with a single three-letter pool: happy letters 1..=3.
fn three_letter_content() -> ContentStore {
    ContentStore::new(vec![], (1..=3).map(happy_letter).collect(), vec![])
}

// =============================================================================
// TEST 1: Full cycle, then reset
// =============================================================================

#[tokio::test]
async fn test_three_picks_cover_pool_then_fourth_resets() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = SeenStore::new(keepsake_core::seen_store_path(temp_dir.path()));
    let mood = MoodId::new("happy");

    let mut session = LetterSession::open(three_letter_content(), store).await;

    // Three successive picks are a permutation of {1, 2, 3}.
    let mut picked_ids = HashSet::new();
    for _ in 0..3 {
        let letter = session.next_letter(&mood).await.expect("pool is non-empty");
        assert!(picked_ids.insert(letter.id), "letter repeated mid-cycle");
    }
    let all_ids: HashSet<LetterId> = [1, 2, 3].map(LetterId).into();
    assert_eq!(picked_ids, all_ids);

    // The fourth pick starts a fresh cycle holding exactly that id.
    let fourth = session.next_letter(&mood).await.expect("pool is non-empty");
    assert!(all_ids.contains(&fourth.id));
    assert_eq!(session.seen().ids_for(&mood), &[fourth.id]);
}

// =============================================================================
// TEST 2: Durability across reopen
// =============================================================================

#[tokio::test]
async fn test_cycle_survives_session_reopen() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = keepsake_core::seen_store_path(temp_dir.path());
    let mood = MoodId::new("happy");

    let mut picked_ids = HashSet::new();
    for _ in 0..3 {
        // A fresh session per pick, as if the page were reloaded.
        let mut session =
            LetterSession::open(three_letter_content(), SeenStore::new(&path)).await;
        let letter = session.next_letter(&mood).await.expect("pool is non-empty");
        assert!(
            picked_ids.insert(letter.id),
            "letter repeated across reloads"
        );
    }

    assert_eq!(picked_ids.len(), 3);
}

// =============================================================================
// TEST 3: Surprise routing
// =============================================================================

#[tokio::test]
async fn test_surprise_draws_from_surprise_collection_only() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = SeenStore::new(keepsake_core::seen_store_path(temp_dir.path()));

    // The surprise letters reuse ids 1..=2 and even carry mood tags;
    // neither may affect routing.
    let surprises = vec![
        Letter {
            id: LetterId(1),
            mood_id: Some(MoodId::new("happy")),
            text: "sorpresa uno".to_string(),
            memory: None,
        },
        Letter {
            id: LetterId(2),
            mood_id: None,
            text: "sorpresa dos".to_string(),
            memory: None,
        },
    ];
    let content = ContentStore::new(vec![], (1..=3).map(happy_letter).collect(), surprises);
    let mut session = LetterSession::open(content, store).await;

    let mood = MoodId::surprise();
    let mut texts = HashSet::new();
    for _ in 0..2 {
        let letter = session.next_letter(&mood).await.expect("surprises exist");
        assert!(letter.text.starts_with("sorpresa"));
        texts.insert(letter.text);
    }
    assert_eq!(texts.len(), 2);

    // The surprise cycle is tracked under its own key.
    assert_eq!(session.seen().seen_count(&mood), 2);
    assert_eq!(session.seen().seen_count(&MoodId::new("happy")), 0);
}

// =============================================================================
// TEST 4: Corrupt store recovery
// =============================================================================

#[tokio::test]
async fn test_corrupt_store_recovers_to_fresh_cycle() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = keepsake_core::seen_store_path(temp_dir.path());
    std::fs::write(&path, "]]] not a seen record").expect("write fixture");

    let mood = MoodId::new("happy");
    let mut session =
        LetterSession::open(three_letter_content(), SeenStore::new(&path)).await;

    // Opening degraded to an empty record, and picking works.
    assert!(session.seen().is_empty());
    let letter = session.next_letter(&mood).await.expect("pool is non-empty");
    assert_eq!(session.seen().ids_for(&mood), &[letter.id]);

    // The pick overwrote the corrupt file with a well-formed record.
    let reloaded: SeenSet = SeenStore::new(&path).load().await;
    assert_eq!(reloaded.ids_for(&mood), &[letter.id]);
}

// =============================================================================
// TEST 5: Missing content
// =============================================================================

#[tokio::test]
async fn test_empty_pool_yields_nothing_and_changes_nothing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = keepsake_core::seen_store_path(temp_dir.path());

    // All payloads malformed: the page still opens, with nothing to show.
    let content = ContentStore::from_payloads("oops", "oops", "oops");
    let mut session = LetterSession::open(content, SeenStore::new(&path)).await;

    assert!(session.next_letter(&MoodId::new("happy")).await.is_none());
    assert!(session.next_letter(&MoodId::surprise()).await.is_none());
    assert!(session.seen().is_empty());
    assert!(!path.exists());
}
