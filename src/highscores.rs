//! Top-3 high-score table, persisted between sessions as a small JSON
//! array (e.g. `[12,7,3]`) under `~/.skybird/`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Maximum number of persisted scores.
pub const MAX_ENTRIES: usize = 3;

/// Descending, deduplicated sequence of at most [`MAX_ENTRIES`] scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighScoreTable {
    entries: Vec<u32>,
}

impl Default for HighScoreTable {
    fn default() -> Self {
        Self {
            entries: vec![0; MAX_ENTRIES],
        }
    }
}

impl HighScoreTable {
    /// Build a table from raw entries, normalizing them.
    pub fn from_entries(entries: Vec<u32>) -> Self {
        let mut table = Self { entries };
        table.normalize();
        table
    }

    pub fn entries(&self) -> &[u32] {
        &self.entries
    }

    pub fn best(&self) -> u32 {
        self.entries.first().copied().unwrap_or(0)
    }

    /// Insert a session's final score: re-sort descending, deduplicate,
    /// truncate to capacity.
    pub fn record(&mut self, score: u32) {
        self.entries.push(score);
        self.normalize();
    }

    fn normalize(&mut self) {
        self.entries.sort_unstable_by(|a, b| b.cmp(a));
        self.entries.dedup();
        self.entries.truncate(MAX_ENTRIES);
    }
}

/// Loads and saves the high-score table at a fixed path.
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    /// Store under `~/.skybird/highscores.json`, creating the directory if
    /// needed.
    pub fn new() -> io::Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine home directory",
            )
        })?;
        let dir = home.join(".skybird");
        fs::create_dir_all(&dir)?;
        Ok(Self {
            path: dir.join("highscores.json"),
        })
    }

    /// Store at an explicit path (used by tests).
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the persisted table; a missing or corrupt file yields the
    /// default zeroed table.
    pub fn load(&self) -> HighScoreTable {
        match fs::read_to_string(&self.path) {
            Ok(json) => match serde_json::from_str::<Vec<u32>>(&json) {
                Ok(entries) => HighScoreTable::from_entries(entries),
                Err(_) => HighScoreTable::default(),
            },
            Err(_) => HighScoreTable::default(),
        }
    }

    /// Persist the table as a compact JSON array.
    pub fn save(&self, table: &HighScoreTable) -> io::Result<()> {
        let json = serde_json::to_string(table)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, json)
    }
}
