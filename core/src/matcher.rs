//! Incremental matcher over a segment graph.
//!
//! The matcher owns the graph for one phrase, a cursor into it and the live
//! candidates at that cursor. Candidates are indices into the cursor's edge
//! slot plus a progress count, so stepping never aliases graph data.
//!
//! One typed character moves the matcher through these cases:
//! - it confirms a nasal whose short spelling was the most recent commit,
//!   even with keys of the next cluster typed since (`Feed::Absorbed`,
//!   nothing else changes);
//! - it matches no candidate (`Feed::Rejected`, nothing changes);
//! - it matches and some candidate finishes its spelling (`Committed`, or
//!   `Completed` at the end of the phrase); every other candidate is
//!   abandoned and the next slot's edges become the candidates;
//! - it matches without finishing anything (`Progressed`).

use tracing::{debug, trace};

use crate::graph::{Edge, SegmentGraph};
use crate::table::NasalRule;

/// An edge at the cursor and how many characters of its spelling are typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Index into `graph.edges_at(cursor)`.
    pub edge: usize,
    pub progress: usize,
}

/// A cluster whose spelling was fully typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub offset: usize,
    pub cluster: String,
    pub spelling: String,
}

impl Commit {
    fn from_edge(edge: &Edge) -> Self {
        Self {
            offset: edge.origin,
            cluster: edge.cluster.clone(),
            spelling: edge.spelling.clone(),
        }
    }
}

/// Outcome of one keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feed {
    /// Matched no candidate; state is unchanged.
    Rejected,
    /// Matched, no cluster finished yet.
    Progressed,
    /// A cluster finished and the cursor moved.
    Committed(Commit),
    /// The last cluster finished; the phrase is complete.
    Completed(Commit),
    /// Redundant nasal confirmation, accepted without moving.
    Absorbed,
}

impl Feed {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Feed::Rejected)
    }

    pub fn commit(&self) -> Option<&Commit> {
        match self {
            Feed::Committed(c) | Feed::Completed(c) => Some(c),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Matcher {
    graph: SegmentGraph,
    nasal: Option<NasalRule>,
    cursor: usize,
    candidates: Vec<Candidate>,
    /// Set on commit, cleared only by absorption.
    last_commit: Option<Commit>,
    committed: Vec<Commit>,
}

impl Matcher {
    /// Start at offset 0 with every edge there as a candidate.
    pub fn new(graph: SegmentGraph, nasal: Option<NasalRule>) -> Self {
        let mut matcher = Self {
            graph,
            nasal,
            cursor: 0,
            candidates: Vec::new(),
            last_commit: None,
            committed: Vec::new(),
        };
        matcher.reset_candidates();
        matcher
    }

    fn reset_candidates(&mut self) {
        self.candidates = (0..self.graph.edges_at(self.cursor).len())
            .map(|edge| Candidate { edge, progress: 0 })
            .collect();
    }

    pub fn graph(&self) -> &SegmentGraph {
        &self.graph
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// The edge a candidate points at.
    pub fn edge(&self, candidate: &Candidate) -> Option<&Edge> {
        self.graph.edges_at(self.cursor).get(candidate.edge)
    }

    /// Commits so far, in order.
    pub fn committed(&self) -> &[Commit] {
        &self.committed
    }

    pub fn last_commit(&self) -> Option<&Commit> {
        self.last_commit.as_ref()
    }

    pub fn is_complete(&self) -> bool {
        self.cursor == self.graph.len()
    }

    fn absorbs(&self, c: char) -> bool {
        match (&self.nasal, &self.last_commit) {
            (Some(rule), Some(last)) => {
                rule.letter() == Some(c) && last.cluster == rule.cluster && last.spelling == rule.short
            }
            _ => false,
        }
    }

    /// Consume one typed character.
    pub fn step(&mut self, c: char) -> Feed {
        if self.is_complete() {
            return Feed::Rejected;
        }

        if self.absorbs(c) {
            trace!(%c, cursor = self.cursor, "nasal confirmation absorbed");
            self.last_commit = None;
            return Feed::Absorbed;
        }

        let slot = self.graph.edges_at(self.cursor);
        let expects = |cand: &Candidate| slot[cand.edge].spelling_char(cand.progress) == Some(c);

        if !self.candidates.iter().any(expects) {
            trace!(%c, cursor = self.cursor, "rejected");
            return Feed::Rejected;
        }

        self.candidates.retain(expects);

        let finished = self
            .candidates
            .iter()
            .find(|cand| cand.progress + 1 == slot[cand.edge].spelling_len())
            .map(|cand| &slot[cand.edge]);

        let Some(edge) = finished else {
            for cand in &mut self.candidates {
                cand.progress += 1;
            }
            trace!(%c, cursor = self.cursor, live = self.candidates.len(), "progressed");
            return Feed::Progressed;
        };

        let commit = Commit::from_edge(edge);
        self.cursor = edge.end();
        debug!(cluster = %commit.cluster, spelling = %commit.spelling, cursor = self.cursor, "commit");
        self.last_commit = Some(commit.clone());
        self.committed.push(commit.clone());

        if self.is_complete() {
            self.candidates.clear();
            return Feed::Completed(commit);
        }
        self.reset_candidates();
        Feed::Committed(commit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::apply_nasal_filter;
    use crate::table::SpellingTable;

    fn table() -> SpellingTable {
        let mut t = SpellingTable::new();
        t.insert("し", ["si", "shi"]);
        t.insert("しゃ", ["sya", "sha"]);
        t.insert("ゃ", ["lya", "xya"]);
        t.insert("か", ["ka"]);
        t.insert("ん", ["n", "nn", "xn"]);
        t.insert("あ", ["a"]);
        t.confirm_after("あ");
        t.with_nasal(NasalRule::new("ん", "n"))
    }

    fn matcher(phrase: &str) -> Matcher {
        let t = table();
        let mut g = SegmentGraph::build(&t, phrase, true).unwrap();
        apply_nasal_filter(&mut g, &t);
        Matcher::new(g, t.nasal().cloned())
    }

    fn feed_all(m: &mut Matcher, input: &str) -> Vec<bool> {
        input.chars().map(|c| m.step(c).is_accepted()).collect()
    }

    #[test]
    fn commits_longest_cluster_spelling() {
        let mut m = matcher("しゃ");
        assert_eq!(m.step('s'), Feed::Progressed);
        assert_eq!(m.step('h'), Feed::Progressed);
        let feed = m.step('a');
        assert_eq!(feed.commit().unwrap().cluster, "しゃ");
        assert!(matches!(feed, Feed::Completed(_)));
        assert!(m.is_complete());
        assert!(m.candidates().is_empty());
    }

    #[test]
    fn splits_into_shorter_clusters() {
        let mut m = matcher("しゃ");
        assert_eq!(feed_all(&mut m, "shixya"), vec![true; 6]);
        let clusters: Vec<&str> = m.committed().iter().map(|c| c.cluster.as_str()).collect();
        assert_eq!(clusters, vec!["し", "ゃ"]);
    }

    #[test]
    fn rejection_keeps_state() {
        let mut m = matcher("しゃ");
        m.step('s');
        let before = (m.cursor(), m.candidates().to_vec());
        assert_eq!(m.step('k'), Feed::Rejected);
        assert_eq!((m.cursor(), m.candidates().to_vec()), before);
        assert_eq!(feed_all(&mut m, "ya"), vec![true, true]);
        assert!(m.is_complete());
    }

    #[test]
    fn commit_abandons_longer_pending_spellings() {
        // After "n", both "n" and "nn" match; "n" finishes first.
        let mut m = matcher("んか");
        let feed = m.step('n');
        assert_eq!(feed.commit().unwrap().spelling, "n");
        assert_eq!(m.cursor(), 1);
        assert_eq!(m.candidates(), &[Candidate { edge: 0, progress: 0 }]);
    }

    #[test]
    fn absorbs_one_confirmation_letter() {
        let mut m = matcher("んか");
        m.step('n');
        let candidates = m.candidates().to_vec();
        assert_eq!(m.step('n'), Feed::Absorbed);
        assert_eq!(m.cursor(), 1);
        assert_eq!(m.candidates(), candidates.as_slice());
        // A second extra letter is not absorbed.
        assert_eq!(m.step('n'), Feed::Rejected);
        assert_eq!(feed_all(&mut m, "ka"), vec![true, true]);
        assert!(m.is_complete());
    }

    #[test]
    fn confirmation_survives_until_next_commit() {
        let mut m = matcher("んか");
        assert!(matches!(m.step('n'), Feed::Committed(_)));
        assert_eq!(m.step('k'), Feed::Progressed);
        assert_eq!(m.step('n'), Feed::Absorbed);
        assert!(m.last_commit().is_none());
        assert!(matches!(m.step('a'), Feed::Completed(_)));
    }

    #[test]
    fn confirmation_required_nasal_needs_long_spelling() {
        let mut m = matcher("んあ");
        assert_eq!(m.step('n'), Feed::Progressed);
        assert_eq!(m.cursor(), 0);
        assert!(matches!(m.step('n'), Feed::Committed(_)));
        assert_eq!(m.committed()[0].spelling, "nn");
        assert_eq!(m.step('n'), Feed::Rejected);
        assert!(matches!(m.step('a'), Feed::Completed(_)));
    }

    #[test]
    fn complete_matcher_rejects_everything() {
        let mut m = matcher("か");
        feed_all(&mut m, "ka");
        assert_eq!(m.step('a'), Feed::Rejected);
        assert_eq!(m.cursor(), 1);
    }
}
