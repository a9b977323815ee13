//! One phrase being typed.
//!
//! `TypingPhrase` ties the pieces together: it builds and filters the
//! segment graph once, then routes each keystroke through the timer, the
//! entered-character logs and the matcher.

use std::time::Duration;

use tracing::{debug, warn};
use unicode_normalization::UnicodeNormalization;

use crate::display;
use crate::error::PhraseError;
use crate::filter::apply_nasal_filter;
use crate::graph::SegmentGraph;
use crate::matcher::{Candidate, Commit, Feed, Matcher};
use crate::record::PhraseRecord;
use crate::table::SpellingTable;
use crate::timing::KeystrokeTimer;
use crate::Config;

#[derive(Debug, Clone)]
pub struct TypingPhrase {
    reading: String,
    text: String,
    matcher: Matcher,
    formally_entered: String,
    actually_entered: String,
    timer: KeystrokeTimer,
}

impl TypingPhrase {
    /// Build a phrase with the default `Config`. An empty `text` shows the
    /// reading itself.
    pub fn new(table: &SpellingTable, reading: &str, text: &str) -> Result<Self, PhraseError> {
        Self::with_config(table, reading, text, &Config::default())
    }

    pub fn with_config(
        table: &SpellingTable,
        reading: &str,
        text: &str,
        config: &Config,
    ) -> Result<Self, PhraseError> {
        table.validate().map_err(|e| {
            warn!(error = %e, "spelling table rejected");
            PhraseError::InvalidTable(e.to_string())
        })?;

        let reading: String = if config.normalize_nfc {
            reading.nfc().collect()
        } else {
            reading.to_string()
        };

        let len = reading.chars().count();
        if len > config.max_phrase_len {
            return Err(PhraseError::TooLong {
                len,
                max: config.max_phrase_len,
            });
        }

        let mut graph = SegmentGraph::build(table, &reading, config.ascii_passthrough)
            .map_err(|e| {
                warn!(%reading, error = %e, "phrase not typeable");
                e
            })?;
        apply_nasal_filter(&mut graph, table);
        graph.check_reachable()?;
        debug!(%reading, chars = len, "phrase ready");

        let text = if text.is_empty() { reading.clone() } else { text.to_string() };
        Ok(Self {
            matcher: Matcher::new(graph, table.nasal().cloned()),
            reading,
            text,
            formally_entered: String::new(),
            actually_entered: String::new(),
            timer: KeystrokeTimer::new(),
        })
    }

    /// Feed one typed character.
    ///
    /// A retired (complete) phrase rejects input and records nothing.
    pub fn feed(&mut self, c: char) -> Feed {
        if self.is_complete() {
            return Feed::Rejected;
        }
        self.timer.lap();
        self.actually_entered.push(c);

        let feed = self.matcher.step(c);
        if feed.is_accepted() {
            self.formally_entered.push(c);
        }
        feed
    }

    pub fn is_complete(&self) -> bool {
        self.matcher.is_complete()
    }

    /// Characters still expected along one canonical path.
    pub fn remaining_display(&self) -> String {
        display::remaining_display(&self.matcher)
    }

    pub fn formally_entered(&self) -> &str {
        &self.formally_entered
    }

    pub fn actually_entered(&self) -> &str {
        &self.actually_entered
    }

    pub fn keystroke_intervals(&self) -> &[Duration] {
        self.timer.intervals()
    }

    pub fn reading(&self) -> &str {
        &self.reading
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Character offset of the next uncommitted cluster.
    pub fn cursor(&self) -> usize {
        self.matcher.cursor()
    }

    /// The part of the reading not yet committed.
    pub fn remaining_reading(&self) -> String {
        self.reading.chars().skip(self.cursor()).collect()
    }

    pub fn candidates(&self) -> &[Candidate] {
        self.matcher.candidates()
    }

    pub fn committed(&self) -> &[Commit] {
        self.matcher.committed()
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn start_timer(&mut self) {
        self.timer.start();
    }

    pub fn stop_timer(&mut self) {
        self.timer.stop();
    }

    pub fn total_time(&self) -> Duration {
        self.timer.total()
    }

    pub fn record(&self) -> PhraseRecord {
        PhraseRecord {
            sentence: self.reading.clone(),
            text: self.text.clone(),
            formally_entered: self.formally_entered.clone(),
            actually_entered: self.actually_entered.clone(),
            keystroke_intervals_ms: self
                .timer
                .intervals()
                .iter()
                .map(|d| d.as_secs_f64() * 1000.0)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::NasalRule;

    fn table() -> SpellingTable {
        let mut t = SpellingTable::new();
        t.insert("か", ["ka"]);
        t.insert("が", ["ga"]);
        t.insert("ん", ["n", "nn", "xn"]);
        t.with_nasal(NasalRule::new("ん", "n"))
    }

    #[test]
    fn logs_accepted_and_attempted() {
        let mut p = TypingPhrase::new(&table(), "かん", "").unwrap();
        assert!(p.feed('k').is_accepted());
        assert!(!p.feed('x').is_accepted());
        for c in "ann".chars() {
            assert!(p.feed(c).is_accepted());
        }
        assert!(p.is_complete());
        assert_eq!(p.formally_entered(), "kann");
        assert_eq!(p.actually_entered(), "kxann");
        assert_eq!(p.text(), "かん");
    }

    #[test]
    fn retired_phrase_ignores_input() {
        let mut p = TypingPhrase::new(&table(), "か", "蚊").unwrap();
        p.feed('k');
        p.feed('a');
        assert_eq!(p.feed('a'), Feed::Rejected);
        assert_eq!(p.actually_entered(), "ka");
    }

    #[test]
    fn every_attempt_is_timed_after_start() {
        let mut p = TypingPhrase::new(&table(), "か", "").unwrap();
        p.start_timer();
        p.feed('q');
        p.feed('k');
        p.feed('a');
        assert_eq!(p.keystroke_intervals().len(), 3);
        assert_eq!(p.record().keystroke_intervals_ms.len(), 3);
    }

    #[test]
    fn normalizes_decomposed_reading() {
        // "か" + combining voiced mark composes to "が".
        let p = TypingPhrase::new(&table(), "\u{304B}\u{3099}", "").unwrap();
        assert_eq!(p.reading(), "が");
        assert_eq!(p.remaining_display(), "ga");
    }

    #[test]
    fn uncovered_reading_is_an_error() {
        let err = TypingPhrase::new(&table(), "かき", "").unwrap_err();
        assert_eq!(err, PhraseError::Uncovered { offset: 1, ch: 'き' });
    }

    #[test]
    fn long_reading_is_an_error() {
        let config = Config {
            max_phrase_len: 2,
            ..Config::default()
        };
        let err = TypingPhrase::with_config(&table(), "かかか", "", &config).unwrap_err();
        assert_eq!(err, PhraseError::TooLong { len: 3, max: 2 });
    }

    #[test]
    fn invalid_table_is_an_error() {
        let mut t = table();
        t.insert("き", [""]);
        let err = TypingPhrase::new(&t, "か", "").unwrap_err();
        assert!(matches!(err, PhraseError::InvalidTable(_)));

        let t = table().with_nasal(NasalRule::new("ん", "nn"));
        let err = TypingPhrase::new(&t, "かん", "").unwrap_err();
        assert!(matches!(err, PhraseError::InvalidTable(_)));
    }

    #[test]
    fn filtered_nasal_without_long_spelling_is_a_dead_end() {
        let mut t = SpellingTable::new();
        t.insert("か", ["ka"]);
        t.insert("ん", ["n"]);
        let t = t.with_nasal(NasalRule::new("ん", "n"));
        let err = TypingPhrase::new(&t, "かん", "").unwrap_err();
        assert_eq!(err, PhraseError::DeadEnd { offset: 1 });
    }

    #[test]
    fn remaining_reading_tracks_cursor() {
        let mut p = TypingPhrase::new(&table(), "かが", "").unwrap();
        p.feed('k');
        p.feed('a');
        assert_eq!(p.remaining_reading(), "が");
        assert_eq!(p.record().formally_entered, "ka");
    }
}
