//! Durable storage for the seen-letter record.
//!
//! One JSON document at a fixed path, the whole mapping written on
//! every save. Loading never fails: a missing file or a document of
//! unexpected shape reads as "nothing seen yet". There is no schema
//! version; the data is cheap to lose and cheap to rebuild.

use crate::seen::SeenSet;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

/// Errors from seen-set persistence.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// File-backed storage for a [`SeenSet`].
#[derive(Debug, Clone)]
pub struct SeenStore {
    path: PathBuf,
}

impl SeenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored seen-set.
    ///
    /// Missing or unreadable files and malformed content all degrade
    /// to an empty mapping; corruption is treated as "nothing seen
    /// yet" rather than surfaced.
    pub async fn load(&self) -> SeenSet {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("no seen-letter record at {}", self.path.display());
                return SeenSet::new();
            }
            Err(e) => {
                tracing::warn!(
                    "failed to read seen-letter record at {}: {}",
                    self.path.display(),
                    e
                );
                return SeenSet::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(seen) => seen,
            Err(e) => {
                tracing::warn!(
                    "malformed seen-letter record at {}, starting fresh: {}",
                    self.path.display(),
                    e
                );
                SeenSet::new()
            }
        }
    }

    /// Write the full mapping in a single store operation.
    ///
    /// Callers treat failure as best-effort; the record only saves a
    /// visitor from rereading letters early.
    pub async fn save(&self, seen: &SeenSet) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(seen)?;
        fs::write(&self.path, content).await?;
        Ok(())
    }
}

/// Conventional location of the seen-letter record.
pub fn seen_store_path(base_dir: impl AsRef<Path>) -> PathBuf {
    base_dir.as_ref().join("seen_letters.json")
}
