//! Segment graph: every way a phrase can be cut into clusters.
//!
//! For each character offset of the phrase the graph stores the edges that
//! start there. An edge says "the next `cluster_len` characters may be typed
//! as `spelling`". Offsets are character (not byte) offsets.
//!
//! Edges in a slot are ordered longest cluster first, then shortest
//! spelling, with table order breaking any remaining tie. The first edge of
//! a slot is its canonical edge: the display path follows it and the nasal
//! filter inspects it.

use tracing::debug;

use crate::error::PhraseError;
use crate::table::SpellingTable;

/// One (cluster, spelling) pair anchored at a phrase offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub cluster: String,
    pub spelling: String,
    pub origin: usize,
    /// Cluster length in characters.
    pub cluster_len: usize,
}

impl Edge {
    pub fn new<C: Into<String>, S: Into<String>>(cluster: C, spelling: S, origin: usize) -> Self {
        let cluster = cluster.into();
        let cluster_len = cluster.chars().count();
        Self {
            cluster,
            spelling: spelling.into(),
            origin,
            cluster_len,
        }
    }

    /// Offset just past this edge's cluster.
    pub fn end(&self) -> usize {
        self.origin + self.cluster_len
    }

    /// Spelling length in characters.
    pub fn spelling_len(&self) -> usize {
        self.spelling.chars().count()
    }

    pub fn spelling_char(&self, index: usize) -> Option<char> {
        self.spelling.chars().nth(index)
    }

    /// The unmatched part of the spelling after `progress` characters.
    pub fn spelling_from(&self, progress: usize) -> &str {
        match self.spelling.char_indices().nth(progress) {
            Some((byte, _)) => &self.spelling[byte..],
            None => "",
        }
    }
}

/// Characters that map to themselves without a table lookup.
pub fn is_half_width(c: char) -> bool {
    (' '..='\u{7f}').contains(&c)
}

/// Per-offset edge lists for one phrase.
#[derive(Debug, Clone)]
pub struct SegmentGraph {
    phrase: Vec<char>,
    slots: Vec<Vec<Edge>>,
}

impl SegmentGraph {
    /// Build the graph for `phrase`.
    ///
    /// Half-width characters become single self-spelled edges when
    /// `ascii_passthrough` is set. Every other offset probes `phrase[l..r]`
    /// for growing `r` and stops at the first substring that is not a table
    /// key. An offset left without edges fails with `PhraseError::Uncovered`.
    pub fn build(
        table: &SpellingTable,
        phrase: &str,
        ascii_passthrough: bool,
    ) -> Result<Self, PhraseError> {
        let phrase: Vec<char> = phrase.chars().collect();
        let n = phrase.len();
        let mut slots: Vec<Vec<Edge>> = Vec::with_capacity(n);

        for l in 0..n {
            let mut edges = Vec::new();
            let c = phrase[l];

            if ascii_passthrough && is_half_width(c) {
                edges.push(Edge::new(c.to_string(), c.to_string(), l));
            } else {
                let mut key = String::new();
                for r in (l + 1)..=n {
                    key.push(phrase[r - 1]);
                    let Some(spellings) = table.spellings(&key) else {
                        break;
                    };
                    for spelling in spellings {
                        edges.push(Edge::new(key.clone(), spelling.clone(), l));
                    }
                }
            }

            if edges.is_empty() {
                return Err(PhraseError::Uncovered { offset: l, ch: c });
            }

            // Stable: equal keys keep table order.
            edges.sort_by(|a, b| {
                b.cluster_len
                    .cmp(&a.cluster_len)
                    .then_with(|| a.spelling_len().cmp(&b.spelling_len()))
            });
            slots.push(edges);
        }

        debug!(
            chars = n,
            edges = slots.iter().map(Vec::len).sum::<usize>(),
            "built segment graph"
        );
        Ok(Self { phrase, slots })
    }

    /// Phrase length in characters (the terminal offset).
    pub fn len(&self) -> usize {
        self.phrase.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrase.is_empty()
    }

    pub fn phrase(&self) -> &[char] {
        &self.phrase
    }

    /// Edges starting at `offset`; empty at or past the terminal offset.
    pub fn edges_at(&self, offset: usize) -> &[Edge] {
        self.slots.get(offset).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// First sorted edge at `offset`.
    pub fn canonical(&self, offset: usize) -> Option<&Edge> {
        self.edges_at(offset).first()
    }

    pub(crate) fn slot_mut(&mut self, offset: usize) -> Option<&mut Vec<Edge>> {
        self.slots.get_mut(offset)
    }

    /// Fail on the first non-terminal offset with no outgoing edge.
    pub fn check_reachable(&self) -> Result<(), PhraseError> {
        match self.slots.iter().position(|s| s.is_empty()) {
            Some(offset) => Err(PhraseError::DeadEnd { offset }),
            None => Ok(()),
        }
    }

    /// Canonical edges from `from` to the end of the phrase.
    pub fn canonical_path(&self, from: usize) -> Vec<&Edge> {
        let mut path = Vec::new();
        let mut offset = from;
        while let Some(edge) = self.canonical(offset) {
            path.push(edge);
            offset = edge.end();
        }
        path
    }
}
