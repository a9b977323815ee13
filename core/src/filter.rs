//! Nasal disambiguation.
//!
//! The nasal's one-letter spelling is dropped where the following text
//! would read as a continuation of it: at the end of the phrase, or when
//! the canonical cluster that follows is in the table's
//! confirmation-required set. Only the longer spellings remain there.

use tracing::debug;

use crate::graph::SegmentGraph;
use crate::table::SpellingTable;

/// Remove disallowed short nasal edges. Returns how many were removed.
pub fn apply_nasal_filter(graph: &mut SegmentGraph, table: &SpellingTable) -> usize {
    let Some(rule) = table.nasal() else {
        return 0;
    };

    let n = graph.len();
    let mut removed = 0;

    for offset in 0..n {
        let must_confirm = |end: usize| {
            end == n
                || graph
                    .canonical(end)
                    .is_some_and(|next| table.requires_confirmation(&next.cluster))
        };

        let doomed: Vec<bool> = graph
            .edges_at(offset)
            .iter()
            .map(|e| e.cluster == rule.cluster && e.spelling == rule.short && must_confirm(e.end()))
            .collect();
        if !doomed.contains(&true) {
            continue;
        }

        if let Some(slot) = graph.slot_mut(offset) {
            let mut flags = doomed.into_iter();
            slot.retain(|_| !flags.next().unwrap_or(false));
        }
        removed += 1;
        debug!(offset, "short nasal spelling removed");
    }

    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::NasalRule;

    fn table() -> SpellingTable {
        let mut t = SpellingTable::new();
        t.insert("ん", ["n", "nn", "xn"]);
        t.insert("あ", ["a"]);
        t.insert("か", ["ka"]);
        t.insert("な", ["na"]);
        t.confirm_after("あ");
        t.confirm_after("な");
        t.with_nasal(NasalRule::new("ん", "n"))
    }

    fn spellings(g: &SegmentGraph, offset: usize) -> Vec<String> {
        g.edges_at(offset).iter().map(|e| e.spelling.clone()).collect()
    }

    #[test]
    fn keeps_short_before_plain_cluster() {
        let t = table();
        let mut g = SegmentGraph::build(&t, "んか", true).unwrap();
        assert_eq!(apply_nasal_filter(&mut g, &t), 0);
        assert_eq!(spellings(&g, 0), vec!["n", "nn", "xn"]);
    }

    #[test]
    fn drops_short_before_confirmation_cluster() {
        let t = table();
        let mut g = SegmentGraph::build(&t, "んあ", true).unwrap();
        assert_eq!(apply_nasal_filter(&mut g, &t), 1);
        assert_eq!(spellings(&g, 0), vec!["nn", "xn"]);

        let mut g = SegmentGraph::build(&t, "かんな", true).unwrap();
        apply_nasal_filter(&mut g, &t);
        assert_eq!(spellings(&g, 1), vec!["nn", "xn"]);
    }

    #[test]
    fn drops_short_at_phrase_end() {
        let t = table();
        let mut g = SegmentGraph::build(&t, "かん", true).unwrap();
        apply_nasal_filter(&mut g, &t);
        assert_eq!(spellings(&g, 1), vec!["nn", "xn"]);
        assert!(g.check_reachable().is_ok());
    }

    #[test]
    fn no_rule_no_change() {
        let mut t = SpellingTable::new();
        t.insert("ん", ["n", "nn"]);
        let mut g = SegmentGraph::build(&t, "ん", true).unwrap();
        assert_eq!(apply_nasal_filter(&mut g, &t), 0);
        assert_eq!(spellings(&g, 0), vec!["n", "nn"]);
    }
}
