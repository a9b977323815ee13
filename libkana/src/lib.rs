//! libkana crate root
//!
//! Hiragana romaji typing on top of `typing-core`: the kana spelling table,
//! the nasal rule for "ん", a built-in phrase corpus, the multi-phrase game
//! session with scoring, and play history persistence.
//!
//! Public API exported here:
//! - `standard_table` - shared kana `SpellingTable`
//! - `KanaConfig` from `config`
//! - `Prompt` and corpus helpers from `corpus`
//! - `TypingGame` from `game`
//! - `GameHistory` / `GameEntry` from `history`
//! - scoring helpers from `score`

use std::sync::Arc;

use once_cell::sync::Lazy;
use tracing::debug;

pub mod config;
pub mod corpus;
pub mod game;
pub mod history;
pub mod romaji;
pub mod score;

pub use config::{HistoryFormat, KanaConfig};
pub use corpus::{default_corpus, parse_tsv, Prompt};
pub use game::TypingGame;
pub use history::{GameEntry, GameHistory};
pub use score::{accuracy, score};

// Convenience re-exports for callers that only depend on libkana.
pub use typing_core::{
    Config, Feed, NasalRule, PhraseError, PhraseRecord, SpellingTable, TableError, TypingPhrase,
};

static STANDARD_TABLE: Lazy<Arc<SpellingTable>> = Lazy::new(|| Arc::new(build_table()));

/// Build a fresh kana table with the "ん" rule and its confirmation set.
pub fn build_table() -> SpellingTable {
    let mut table = SpellingTable::new();
    for (cluster, spellings) in romaji::KANA_ROMAJI.entries() {
        table.insert(*cluster, spellings.iter().copied());
    }
    for cluster in romaji::CONFIRMATION_REQUIRED {
        table.confirm_after(*cluster);
    }
    debug!(clusters = table.len(), "kana table built");
    table.with_nasal(NasalRule::new(romaji::NASAL_CLUSTER, romaji::NASAL_SHORT))
}

/// The process-wide kana table, built once and shared read-only.
pub fn standard_table() -> Arc<SpellingTable> {
    Arc::clone(&STANDARD_TABLE)
}

/// Build a phrase against the standard table.
pub fn phrase(reading: &str, text: &str) -> Result<TypingPhrase, PhraseError> {
    TypingPhrase::new(&STANDARD_TABLE, reading, text)
}
