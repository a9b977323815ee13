//! typing-core
//!
//! Script-agnostic romanized input matching shared by the script-specific
//! crates (libkana).
//!
//! Given a spelling table and a reading, the core cuts the reading into every
//! valid sequence of clusters, tracks which spellings are still consistent
//! with what has been typed, commits a cluster once one spelling is complete,
//! and projects the keystrokes still expected.
//!
//! Public API:
//! - `SpellingTable` / `NasalRule` - Cluster -> spellings configuration
//! - `SegmentGraph` / `Edge` - Per-offset cluster edges of one reading
//! - `apply_nasal_filter` - Removes ambiguous short nasal spellings
//! - `Matcher` / `Feed` - Incremental keystroke matcher
//! - `remaining_display` - Canonical remaining-input projection
//! - `KeystrokeTimer` - Per-attempt timing
//! - `TypingPhrase` - One phrase instance combining all of the above
//! - `PhraseRecord` - Flat serializable snapshot
//! - `Config` - Configuration and feature flags
use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{PhraseError, TableError};

pub mod table;
pub use table::{NasalRule, SpellingTable, MAX_CLUSTER_LEN};

pub mod graph;
pub use graph::{is_half_width, Edge, SegmentGraph};

pub mod filter;
pub use filter::apply_nasal_filter;

pub mod matcher;
pub use matcher::{Candidate, Commit, Feed, Matcher};

pub mod display;
pub use display::{project, remaining_display, Projected};

pub mod timing;
pub use timing::KeystrokeTimer;

pub mod record;
pub use record::PhraseRecord;

pub mod phrase;
pub use phrase::TypingPhrase;

/// Generic configuration for phrase construction.
///
/// Script-specific options belong in the script crate's config (for example
/// `KanaConfig`), which flattens this struct.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Compose the reading to NFC before building the graph, so decomposed
    /// voiced marks still hit table keys.
    pub normalize_nfc: bool,

    /// Treat half-width ASCII (0x20..=0x7F) as self-spelled one-character
    /// clusters without a table lookup.
    pub ascii_passthrough: bool,

    /// Longest reading accepted, in characters.
    pub max_phrase_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            normalize_nfc: true,
            ascii_passthrough: true,
            max_phrase_len: 8192,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
