//! High-score persistence port
//!
//! The engine takes the store as an injected dependency instead of touching
//! ambient storage. A single integer survives process restarts; nothing else
//! does.

use log::warn;
use std::fs;
use std::path::PathBuf;

/// Storage port for the single persisted high-score value
pub trait HighScoreStore {
    /// Read the stored high score, or 0 when nothing is stored
    fn load(&self) -> u32;

    /// Persist a new high score
    ///
    /// Failures must be absorbed by the implementation; a broken store never
    /// takes the session down.
    fn save(&mut self, score: u32);
}

/// File-backed store: one integer in a text file
///
/// An unreadable or corrupt file degrades to a high score of 0. Write errors
/// are logged and swallowed.
#[derive(Debug, Clone)]
pub struct FileHighScore {
    path: PathBuf,
}

impl FileHighScore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HighScoreStore for FileHighScore {
    fn load(&self) -> u32 {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|content| content.trim().parse().ok())
            .unwrap_or(0)
    }

    fn save(&mut self, score: u32) {
        if let Err(e) = fs::write(&self.path, score.to_string()) {
            warn!(
                "Failed to persist high score to {}: {e}",
                self.path.display()
            );
        }
    }
}

/// In-process store for tests and benchmark runs
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScore {
    score: u32,
}

impl MemoryHighScore {
    #[must_use]
    pub fn new(score: u32) -> Self {
        Self { score }
    }
}

impl HighScoreStore for MemoryHighScore {
    fn load(&self) -> u32 {
        self.score
    }

    fn save(&mut self, score: u32) {
        self.score = score;
    }
}
