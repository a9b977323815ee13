//! Error types for table configuration and phrase construction.
//!
//! A rejected keystroke is not an error: `TypingPhrase::feed` reports it as
//! `Feed::Rejected`. The variants here are the fatal configuration errors
//! that refuse to build a table or a phrase.

use thiserror::Error;

/// Problems found while validating or loading a `SpellingTable`.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("cluster key is empty")]
    EmptyCluster,

    #[error("cluster '{cluster}' is {len} characters long (max {max})")]
    ClusterTooLong { cluster: String, len: usize, max: usize },

    #[error("cluster '{0}' has no spellings")]
    NoSpellings(String),

    #[error("cluster '{cluster}' has an empty spelling")]
    EmptySpelling { cluster: String },

    #[error("spelling '{spelling}' of cluster '{cluster}' is not ASCII")]
    NonAsciiSpelling { cluster: String, spelling: String },

    #[error("nasal cluster '{0}' is not in the table")]
    UnknownNasal(String),

    #[error("nasal short spelling '{0}' must be exactly one character")]
    NasalShortLength(String),

    #[error("nasal short spelling '{spelling}' is not a spelling of '{cluster}'")]
    NasalShortMissing { cluster: String, spelling: String },

    #[error("failed to parse table: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize table: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to read table file: {0}")]
    Io(#[from] std::io::Error),
}

/// Problems that prevent a phrase from being typed at all.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PhraseError {
    /// A character at `offset` is neither ASCII nor the start of any cluster.
    #[error("character '{ch}' at offset {offset} has no spelling")]
    Uncovered { offset: usize, ch: char },

    /// The nasal filter removed every edge at `offset`.
    #[error("no spelling remains at offset {offset} after nasal filtering")]
    DeadEnd { offset: usize },

    #[error("phrase is {len} characters long (max {max})")]
    TooLong { len: usize, max: usize },

    /// The table failed `SpellingTable::validate`.
    #[error("invalid spelling table: {0}")]
    InvalidTable(String),
}
