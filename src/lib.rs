//! Letter selection engine for a commemorative photo and letters page.
//!
//! This crate provides:
//! - Mood-scoped letter pools with a reserved `"surprise"` collection
//! - Non-repeating random selection that resets once a pool is exhausted
//! - Durable "already seen" state that survives page reloads
//! - A session facade wrapping content, state and storage
//!
//! # Quick Start
//!
//! ```ignore
//! use keepsake_core::{create_sample_content, LetterSession, MoodId, SeenStore};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = SeenStore::new("seen_letters.json");
//!     let mut session = LetterSession::open(create_sample_content(), store).await;
//!
//!     if let Some(letter) = session.next_letter(&MoodId::new("happy")).await {
//!         println!("{}", letter.text);
//!     }
//! }
//! ```

pub mod content;
pub mod engine;
pub mod seen;
pub mod session;
pub mod store;
pub mod testing;

// Primary public API
pub use content::{create_sample_content, ContentStore, Letter, LetterId, MoodId, Photo, PhotoId};
pub use engine::{select_letter, select_letter_with, IndexSource, Selection};
pub use seen::SeenSet;
pub use session::LetterSession;
pub use store::{seen_store_path, SeenStore, StoreError};
