//! Content types for the commemorative page.
//!
//! Contains the three read-only collections supplied at startup —
//! photos, mood letters, surprise letters — and the mood-pool
//! derivation used by the selection engine. Collections arrive as JSON
//! payloads; a payload that fails to parse degrades to an empty
//! collection so the rest of the page still comes up.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Types
// ============================================================================

/// Unique identifier for letters. Uniqueness is only required within a
/// single pool; the engine does not check it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LetterId(pub u32);

impl fmt::Display for LetterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for photos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhotoId(pub u32);

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A mood category tag used to select a letter pool.
///
/// `"surprise"` is a reserved sentinel: it selects the separate
/// surprise collection instead of filtering the mood letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoodId(pub String);

impl MoodId {
    /// The reserved sentinel tag.
    pub const SURPRISE: &'static str = "surprise";

    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The sentinel mood drawing from the surprise collection.
    pub fn surprise() -> Self {
        Self(Self::SURPRISE.to_string())
    }

    pub fn is_surprise(&self) -> bool {
        self.0 == Self::SURPRISE
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MoodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MoodId {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

// ============================================================================
// Records
// ============================================================================

/// A letter shown for a mood. Immutable after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Letter {
    pub id: LetterId,

    /// Mood tag; absent for letters in the surprise collection.
    #[serde(default, rename = "moodId", skip_serializing_if = "Option::is_none")]
    pub mood_id: Option<MoodId>,

    /// Display body.
    pub text: String,

    /// Optional annotation shown under the letter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<String>,
}

impl Letter {
    /// The annotation caption, when the letter carries a memory.
    pub fn memory_line(&self) -> Option<String> {
        self.memory.as_ref().map(|m| format!("Recuerdo: {m}"))
    }

    /// Plain-text rendition for the clipboard: body, blank line,
    /// memory caption when present.
    pub fn share_text(&self) -> String {
        match self.memory_line() {
            Some(line) => format!("{}\n\n{}", self.text, line),
            None => self.text.clone(),
        }
    }
}

/// A gallery photo. Irrelevant to letter selection; carried for the
/// modal lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: PhotoId,
    pub src: String,
    pub title: String,
    pub caption: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
}

impl Photo {
    /// Date and place joined for the modal caption line.
    pub fn meta_line(&self) -> String {
        let mut meta = self.date.clone().unwrap_or_default();
        if let Some(place) = &self.place {
            if !meta.is_empty() {
                meta.push_str(" • ");
            }
            meta.push_str(place);
        }
        meta
    }
}

// ============================================================================
// Content Store
// ============================================================================

/// The read-only content collections for one page.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    photos: Vec<Photo>,
    letters: Vec<Letter>,
    surprises: Vec<Letter>,
}

impl ContentStore {
    pub fn new(photos: Vec<Photo>, letters: Vec<Letter>, surprises: Vec<Letter>) -> Self {
        Self {
            photos,
            letters,
            surprises,
        }
    }

    /// Build a store from the three JSON payloads.
    ///
    /// Each collection is parsed independently; a malformed payload
    /// degrades to an empty collection and does not affect the others.
    pub fn from_payloads(photos: &str, letters: &str, surprises: &str) -> Self {
        Self {
            photos: parse_collection(photos, "photos"),
            letters: parse_collection(letters, "letters"),
            surprises: parse_collection(surprises, "surprises"),
        }
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    pub fn surprises(&self) -> &[Letter] {
        &self.surprises
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty() && self.letters.is_empty() && self.surprises.is_empty()
    }

    /// Look up a photo for the modal.
    pub fn photo(&self, id: PhotoId) -> Option<&Photo> {
        self.photos.iter().find(|p| p.id == id)
    }

    /// Derive the letter pool for a mood.
    ///
    /// The surprise sentinel selects the whole surprise collection,
    /// regardless of any `mood_id` field on its letters; every other
    /// mood filters the mood-letter collection by tag.
    pub fn pool(&self, mood: &MoodId) -> Vec<&Letter> {
        if mood.is_surprise() {
            self.surprises.iter().collect()
        } else {
            self.letters
                .iter()
                .filter(|l| l.mood_id.as_ref() == Some(mood))
                .collect()
        }
    }
}

fn parse_collection<T: serde::de::DeserializeOwned>(payload: &str, what: &str) -> Vec<T> {
    match serde_json::from_str(payload) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!("failed to parse {} payload, using empty collection: {}", what, e);
            Vec::new()
        }
    }
}

/// Create a small sample content set.
///
/// Two moods, a surprise collection and a couple of photos; handy for
/// documentation and tests.
pub fn create_sample_content() -> ContentStore {
    let letters = vec![
        Letter {
            id: LetterId(1),
            mood_id: Some(MoodId::new("happy")),
            text: "Hoy me acordé de tu risa y el día se arregló solo.".to_string(),
            memory: Some("la tarde en la playa".to_string()),
        },
        Letter {
            id: LetterId(2),
            mood_id: Some(MoodId::new("happy")),
            text: "Cada foto nuestra es un lugar al que puedo volver.".to_string(),
            memory: None,
        },
        Letter {
            id: LetterId(3),
            mood_id: Some(MoodId::new("sad")),
            text: "Los días grises también pasan, y yo sigo aquí.".to_string(),
            memory: Some("aquel invierno".to_string()),
        },
    ];

    let surprises = vec![
        Letter {
            id: LetterId(1),
            mood_id: None,
            text: "Sorpresa: te quiero más que ayer.".to_string(),
            memory: None,
        },
        Letter {
            id: LetterId(2),
            mood_id: None,
            text: "Sorpresa: revisa el cajón de la cocina.".to_string(),
            memory: Some("donde guardamos las entradas".to_string()),
        },
    ];

    let photos = vec![
        Photo {
            id: PhotoId(1),
            src: "/img/beach.jpg".to_string(),
            title: "La playa".to_string(),
            caption: "El primer viaje juntos.".to_string(),
            date: Some("2023-02-14".to_string()),
            place: Some("Valparaíso".to_string()),
        },
        Photo {
            id: PhotoId(2),
            src: "/img/kitchen.jpg".to_string(),
            title: "La cocina".to_string(),
            caption: "Panqueques un domingo cualquiera.".to_string(),
            date: None,
            place: None,
        },
    ];

    ContentStore::new(photos, letters, surprises)
}
