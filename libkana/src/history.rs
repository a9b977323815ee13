//! Play history persistence.
//!
//! Two layouts are supported: one pretty JSON document holding the player
//! name and every game, or newline-delimited JSON with one `GameEntry` per
//! line. Both are UTF-8 with kana left unescaped.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use typing_core::PhraseRecord;

use crate::game::TypingGame;
use crate::score;

pub const DEFAULT_USERNAME: &str = "No Name";

/// One finished game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEntry {
    pub played_at: DateTime<Utc>,
    pub phrases: Vec<PhraseRecord>,
}

impl GameEntry {
    pub fn new(played_at: DateTime<Utc>, phrases: Vec<PhraseRecord>) -> Self {
        Self { played_at, phrases }
    }

    pub fn from_game(game: &TypingGame, played_at: DateTime<Utc>) -> Self {
        Self::new(played_at, game.records())
    }

    /// (attempted, accepted) keystrokes.
    pub fn entered_lengths(&self) -> (usize, usize) {
        self.phrases.iter().fold((0, 0), |(act, formal), p| {
            (
                act + p.actually_entered.chars().count(),
                formal + p.formally_entered.chars().count(),
            )
        })
    }

    pub fn total_time(&self) -> Duration {
        let ms: f64 = self.phrases.iter().map(PhraseRecord::total_ms).sum();
        Duration::from_secs_f64(ms.max(0.0) / 1000.0)
    }

    pub fn score(&self) -> Option<f64> {
        let (actual, formal) = self.entered_lengths();
        score::score(formal, actual, self.total_time())
    }
}

/// Everything stored in a JSON history file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameHistory {
    pub username: String,
    #[serde(default)]
    pub games: Vec<GameEntry>,
}

impl Default for GameHistory {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            games: Vec::new(),
        }
    }
}

impl GameHistory {
    /// Load a JSON history; a missing file yields an empty history.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no history yet");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read history {}", path.display()))?;
        let mut history: GameHistory = serde_json::from_str(&content)
            .with_context(|| format!("malformed history {}", path.display()))?;
        if history.username.is_empty() {
            history.username = DEFAULT_USERNAME.to_string();
        }
        Ok(history)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write history {}", path.display()))?;
        debug!(path = %path.display(), games = self.games.len(), "history saved");
        Ok(())
    }

    pub fn push(&mut self, entry: GameEntry) {
        self.games.push(entry);
    }

    /// Append one entry as a single JSON line.
    pub fn append_ndjson<P: AsRef<Path>>(path: P, entry: &GameEntry) -> Result<()> {
        let path = path.as_ref();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open {}", path.display()))?;
        let line = serde_json::to_string(entry)?;
        writeln!(file, "{}", line)?;
        Ok(())
    }

    /// Read every entry of an NDJSON file. Blank lines are skipped; a
    /// missing file yields no entries.
    pub fn read_ndjson<P: AsRef<Path>>(path: P) -> Result<Vec<GameEntry>> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        let mut entries = Vec::new();
        for (lineno, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let entry = serde_json::from_str::<GameEntry>(&line).map_err(|e| {
                warn!(line = lineno + 1, error = %e, "bad history line");
                e
            });
            entries.push(entry.with_context(|| {
                format!("{}:{}: malformed entry", path.display(), lineno + 1)
            })?);
        }
        Ok(entries)
    }
}
