//! Remaining-input projection for UI feedback.
//!
//! Follows one canonical way to finish the phrase from the matcher's
//! current state. The result is advisory text; it is never fed back into
//! the matcher.

use crate::matcher::Matcher;

/// One cluster on the projected path and the spelling still to type for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projected<'a> {
    pub cluster: &'a str,
    pub pending: &'a str,
}

/// Project the remaining clusters without touching matcher state.
///
/// The live candidate with the longest cluster (then the shortest remaining
/// spelling) contributes its unmatched suffix; every later offset
/// contributes its canonical edge's full spelling.
pub fn project(matcher: &Matcher) -> Vec<Projected<'_>> {
    let graph = matcher.graph();
    let mut out = Vec::new();

    let head = matcher
        .candidates()
        .iter()
        .filter_map(|cand| matcher.edge(cand).map(|edge| (edge, cand.progress)))
        .min_by(|(a, pa), (b, pb)| {
            b.cluster_len
                .cmp(&a.cluster_len)
                .then_with(|| (a.spelling_len() - pa).cmp(&(b.spelling_len() - pb)))
        });

    let Some((edge, progress)) = head else {
        return out;
    };
    out.push(Projected {
        cluster: &edge.cluster,
        pending: edge.spelling_from(progress),
    });

    for edge in graph.canonical_path(edge.end()) {
        out.push(Projected {
            cluster: &edge.cluster,
            pending: &edge.spelling,
        });
    }
    out
}

/// The full string of characters still expected, along the projected path.
pub fn remaining_display(matcher: &Matcher) -> String {
    project(matcher).iter().map(|p| p.pending).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::apply_nasal_filter;
    use crate::graph::SegmentGraph;
    use crate::table::{NasalRule, SpellingTable};

    fn matcher(phrase: &str) -> Matcher {
        let mut t = SpellingTable::new();
        t.insert("し", ["si", "shi"]);
        t.insert("しゃ", ["sya", "sha"]);
        t.insert("ゃ", ["lya", "xya"]);
        t.insert("じ", ["ji", "zi"]);
        t.insert("じゃ", ["zya", "ja", "jya"]);
        t.insert("ん", ["n", "nn", "xn"]);
        t.insert("あ", ["a"]);
        t.confirm_after("あ");
        let t = t.with_nasal(NasalRule::new("ん", "n"));
        let mut g = SegmentGraph::build(&t, phrase, true).unwrap();
        apply_nasal_filter(&mut g, &t);
        Matcher::new(g, t.nasal().cloned())
    }

    #[test]
    fn initial_display_uses_canonical_edges() {
        let m = matcher("しゃじゃんあ");
        assert_eq!(remaining_display(&m), "syajanna");
    }

    #[test]
    fn display_follows_typed_prefix() {
        let mut m = matcher("しゃ");
        m.step('s');
        m.step('h');
        // "sha" and "shi" are live; the longer cluster wins.
        assert_eq!(remaining_display(&m), "a");
        m.step('i');
        assert_eq!(remaining_display(&m), "lya");
    }

    #[test]
    fn display_is_idempotent() {
        let mut m = matcher("じゃん");
        m.step('j');
        let first = remaining_display(&m);
        assert_eq!(first, remaining_display(&m));
        assert_eq!(first, "ann");
    }

    #[test]
    fn projected_clusters() {
        let m = matcher("しゃあ");
        let clusters: Vec<&str> = project(&m).iter().map(|p| p.cluster).collect();
        assert_eq!(clusters, vec!["しゃ", "あ"]);
    }

    #[test]
    fn complete_projects_nothing() {
        let mut m = matcher("あ");
        m.step('a');
        assert_eq!(remaining_display(&m), "");
        assert!(project(&m).is_empty());
    }
}
