//! Spelling table: script cluster -> accepted ASCII spellings.
//!
//! The table is immutable configuration once built. Phrase instances borrow
//! it only while building their segment graph, so a single table (usually
//! behind an `Arc`) serves any number of phrases.
//!
//! Besides the cluster map the table carries the two pieces of context the
//! nasal rule needs: which cluster is the syllabic nasal (and its one-letter
//! short spelling), and the set of clusters after which that short spelling
//! is not allowed.

use std::collections::BTreeMap;

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use crate::error::TableError;

/// Longest cluster (in characters) a table may contain.
pub const MAX_CLUSTER_LEN: usize = 3;

/// The syllabic nasal and its ambiguous one-letter spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NasalRule {
    /// Cluster text, e.g. "ん".
    pub cluster: String,
    /// Single-character spelling, e.g. "n".
    pub short: String,
}

impl NasalRule {
    pub fn new<C: Into<String>, S: Into<String>>(cluster: C, short: S) -> Self {
        Self {
            cluster: cluster.into(),
            short: short.into(),
        }
    }

    /// The letter a user types to confirm a short nasal.
    pub fn letter(&self) -> Option<char> {
        let mut chars = self.short.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

/// On-disk (TOML) shape of a table. `BTreeMap` keeps the output stable.
#[derive(Debug, Default, Serialize, Deserialize)]
struct TableFile {
    #[serde(default)]
    confirmation_required: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    nasal: Option<NasalRule>,
    #[serde(default)]
    clusters: BTreeMap<String, Vec<String>>,
}

/// Mapping from clusters to their ordered spellings.
///
/// # Example
/// ```
/// use typing_core::{NasalRule, SpellingTable};
///
/// let mut table = SpellingTable::new();
/// table.insert("か", ["ka"]);
/// table.insert("ん", ["n", "nn", "xn"]);
/// table.confirm_after("あ");
/// let table = table.with_nasal(NasalRule::new("ん", "n"));
///
/// assert_eq!(table.spellings("か"), Some(&["ka".to_string()][..]));
/// assert!(table.requires_confirmation("あ"));
/// assert!(table.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SpellingTable {
    clusters: AHashMap<String, Vec<String>>,
    confirmation_required: AHashSet<String>,
    nasal: Option<NasalRule>,
    max_cluster_len: usize,
}

impl SpellingTable {
    /// Create an empty table with no nasal rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(cluster, spellings)` pairs.
    pub fn with_entries<C, I, S>(entries: I) -> Self
    where
        C: AsRef<str>,
        S: AsRef<str>,
        I: IntoIterator<Item = (C, Vec<S>)>,
    {
        let mut table = Self::new();
        for (cluster, spellings) in entries {
            table.insert(cluster.as_ref(), spellings.iter().map(|s| s.as_ref()));
        }
        table
    }

    /// Append spellings for a cluster. Spellings already present are skipped
    /// so the first-seen order is preserved.
    pub fn insert<C, I, S>(&mut self, cluster: C, spellings: I)
    where
        C: Into<String>,
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        let cluster = cluster.into();
        let len = cluster.chars().count();
        if len > self.max_cluster_len {
            self.max_cluster_len = len;
        }
        let entry = self.clusters.entry(cluster).or_default();
        for spelling in spellings {
            let spelling = spelling.into();
            if !entry.contains(&spelling) {
                entry.push(spelling);
            }
        }
    }

    /// Mark `cluster` as one after which the nasal's short spelling is
    /// disallowed.
    pub fn confirm_after<C: Into<String>>(&mut self, cluster: C) {
        self.confirmation_required.insert(cluster.into());
    }

    /// Set the nasal rule.
    pub fn with_nasal(mut self, rule: NasalRule) -> Self {
        self.nasal = Some(rule);
        self
    }

    pub fn set_nasal(&mut self, rule: Option<NasalRule>) {
        self.nasal = rule;
    }

    /// Spellings for an exact cluster, in table order.
    pub fn spellings(&self, cluster: &str) -> Option<&[String]> {
        self.clusters.get(cluster).map(|v| v.as_slice())
    }

    pub fn contains(&self, cluster: &str) -> bool {
        self.clusters.contains_key(cluster)
    }

    pub fn requires_confirmation(&self, cluster: &str) -> bool {
        self.confirmation_required.contains(cluster)
    }

    pub fn nasal(&self) -> Option<&NasalRule> {
        self.nasal.as_ref()
    }

    /// Length in characters of the longest cluster key.
    pub fn max_cluster_len(&self) -> usize {
        self.max_cluster_len
    }

    /// Number of clusters.
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Check structural constraints that graph building relies on.
    pub fn validate(&self) -> Result<(), TableError> {
        for (cluster, spellings) in &self.clusters {
            let len = cluster.chars().count();
            if len == 0 {
                return Err(TableError::EmptyCluster);
            }
            if len > MAX_CLUSTER_LEN {
                return Err(TableError::ClusterTooLong {
                    cluster: cluster.clone(),
                    len,
                    max: MAX_CLUSTER_LEN,
                });
            }
            if spellings.is_empty() {
                return Err(TableError::NoSpellings(cluster.clone()));
            }
            for spelling in spellings {
                if spelling.is_empty() {
                    return Err(TableError::EmptySpelling {
                        cluster: cluster.clone(),
                    });
                }
                if !spelling.is_ascii() {
                    return Err(TableError::NonAsciiSpelling {
                        cluster: cluster.clone(),
                        spelling: spelling.clone(),
                    });
                }
            }
        }

        if let Some(rule) = &self.nasal {
            let spellings = self
                .spellings(&rule.cluster)
                .ok_or_else(|| TableError::UnknownNasal(rule.cluster.clone()))?;
            if rule.letter().is_none() {
                return Err(TableError::NasalShortLength(rule.short.clone()));
            }
            if !spellings.iter().any(|s| *s == rule.short) {
                return Err(TableError::NasalShortMissing {
                    cluster: rule.cluster.clone(),
                    spelling: rule.short.clone(),
                });
            }
        }
        Ok(())
    }

    // ========== TOML ==========

    /// Parse and validate a table from TOML text.
    ///
    /// ```
    /// use typing_core::SpellingTable;
    ///
    /// let table = SpellingTable::from_toml_str(r#"
    /// confirmation_required = ["あ"]
    ///
    /// [nasal]
    /// cluster = "ん"
    /// short = "n"
    ///
    /// [clusters]
    /// "あ" = ["a"]
    /// "ん" = ["n", "nn"]
    /// "#).unwrap();
    /// assert_eq!(table.len(), 2);
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, TableError> {
        let file: TableFile = toml::from_str(content)?;
        let mut table = Self::new();
        for (cluster, spellings) in file.clusters {
            table.insert(cluster, spellings);
        }
        for cluster in file.confirmation_required {
            table.confirm_after(cluster);
        }
        table.nasal = file.nasal;
        table.validate()?;
        Ok(table)
    }

    /// Load and validate a table from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self, TableError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Serialize to TOML with clusters in sorted order.
    pub fn to_toml_string(&self) -> Result<String, TableError> {
        let mut confirmation_required: Vec<String> =
            self.confirmation_required.iter().cloned().collect();
        confirmation_required.sort();
        let file = TableFile {
            confirmation_required,
            nasal: self.nasal.clone(),
            clusters: self
                .clusters
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        };
        Ok(toml::to_string_pretty(&file)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SpellingTable {
        let mut t = SpellingTable::new();
        t.insert("し", ["si", "shi"]);
        t.insert("しゃ", ["sya", "sha"]);
        t.insert("ん", ["n", "nn", "xn"]);
        t.confirm_after("な");
        t.with_nasal(NasalRule::new("ん", "n"))
    }

    #[test]
    fn insert_keeps_order_and_skips_duplicates() {
        let mut t = SpellingTable::new();
        t.insert("し", ["si", "shi"]);
        t.insert("し", ["shi", "ci"]);
        assert_eq!(
            t.spellings("し").unwrap(),
            &["si".to_string(), "shi".to_string(), "ci".to_string()]
        );
    }

    #[test]
    fn tracks_longest_cluster() {
        let t = sample();
        assert_eq!(t.max_cluster_len(), 2);
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn nasal_letter() {
        assert_eq!(NasalRule::new("ん", "n").letter(), Some('n'));
        assert_eq!(NasalRule::new("ん", "nn").letter(), None);
    }

    #[test]
    fn validate_rejects_bad_nasal() {
        let t = sample().with_nasal(NasalRule::new("ん", "q"));
        assert!(matches!(
            t.validate(),
            Err(TableError::NasalShortMissing { .. })
        ));

        let t = sample().with_nasal(NasalRule::new("む", "m"));
        assert!(matches!(t.validate(), Err(TableError::UnknownNasal(_))));
    }

    #[test]
    fn validate_rejects_long_cluster_and_non_ascii() {
        let mut t = SpellingTable::new();
        t.insert("っきゃあ", ["kkyaa"]);
        assert!(matches!(
            t.validate(),
            Err(TableError::ClusterTooLong { len: 4, .. })
        ));

        let mut t = SpellingTable::new();
        t.insert("か", ["kā"]);
        assert!(matches!(
            t.validate(),
            Err(TableError::NonAsciiSpelling { .. })
        ));
    }

    #[test]
    fn toml_roundtrip_preserves_rules() {
        let t = sample();
        let text = t.to_toml_string().unwrap();
        let back = SpellingTable::from_toml_str(&text).unwrap();
        assert_eq!(back.spellings("しゃ"), t.spellings("しゃ"));
        assert!(back.requires_confirmation("な"));
        assert_eq!(back.nasal(), t.nasal());
    }
}
