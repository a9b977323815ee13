//! Multi-phrase game session.
//!
//! Phrases are typed in order. The current phrase's timer runs from the
//! moment it becomes current; finishing a phrase stops its timer and starts
//! the next one.

use std::time::Duration;

use tracing::{debug, info, warn};
use typing_core::{Config, Feed, PhraseError, PhraseRecord, SpellingTable, TypingPhrase};

use crate::corpus::Prompt;
use crate::score;

#[derive(Debug, Clone)]
pub struct TypingGame {
    phrases: Vec<TypingPhrase>,
    problem_no: usize,
    started: bool,
}

impl TypingGame {
    /// Build every phrase up front so a bad reading fails before play starts.
    pub fn new(table: &SpellingTable, prompts: &[Prompt], config: &Config) -> Result<Self, PhraseError> {
        let phrases = prompts
            .iter()
            .map(|p| TypingPhrase::with_config(table, &p.reading, &p.text, config))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(phrases = phrases.len(), "game ready");
        Ok(Self {
            phrases,
            problem_no: 0,
            started: false,
        })
    }

    /// Start the first phrase's timer.
    pub fn start(&mut self) {
        self.started = true;
        if let Some(p) = self.phrases.get_mut(self.problem_no) {
            p.start_timer();
        }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Index of the phrase being typed; equals `len()` once finished.
    pub fn problem_no(&self) -> usize {
        self.problem_no
    }

    pub fn is_completed(&self) -> bool {
        self.problem_no == self.phrases.len()
    }

    pub fn current(&self) -> Option<&TypingPhrase> {
        self.phrases.get(self.problem_no)
    }

    pub fn phrases(&self) -> &[TypingPhrase] {
        &self.phrases
    }

    /// Feed one keystroke to the current phrase, moving on when it completes.
    /// Keystrokes before `start` are rejected and not recorded.
    pub fn input_char(&mut self, c: char) -> Feed {
        if !self.started {
            warn!(%c, "keystroke before game start ignored");
            return Feed::Rejected;
        }
        let Some(phrase) = self.phrases.get_mut(self.problem_no) else {
            return Feed::Rejected;
        };
        let feed = phrase.feed(c);
        if phrase.is_complete() {
            self.next();
        }
        feed
    }

    fn next(&mut self) {
        if let Some(p) = self.phrases.get_mut(self.problem_no) {
            p.stop_timer();
            info!(
                problem = self.problem_no,
                reading = p.reading(),
                typed = p.actually_entered(),
                "phrase finished"
            );
        }
        self.problem_no += 1;
        if let Some(p) = self.phrases.get_mut(self.problem_no) {
            p.start_timer();
        }
    }

    /// Time spent on all phrases so far.
    pub fn total_time(&self) -> Duration {
        self.phrases.iter().map(TypingPhrase::total_time).sum()
    }

    /// (attempted, accepted) keystroke counts over all phrases.
    pub fn entered_lengths(&self) -> (usize, usize) {
        self.phrases.iter().fold((0, 0), |(act, formal), p| {
            (
                act + p.actually_entered().chars().count(),
                formal + p.formally_entered().chars().count(),
            )
        })
    }

    pub fn score(&self) -> Option<f64> {
        let (actual, formal) = self.entered_lengths();
        score::score(formal, actual, self.total_time())
    }

    pub fn records(&self) -> Vec<PhraseRecord> {
        self.phrases.iter().map(TypingPhrase::record).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standard_table;

    fn game() -> TypingGame {
        let prompts = vec![Prompt::new("朝", "あさ"), Prompt::new("蚊", "か")];
        TypingGame::new(&standard_table(), &prompts, &Config::default()).unwrap()
    }

    #[test]
    fn moves_through_phrases() {
        let mut g = game();
        g.start();
        for c in "asa".chars() {
            assert!(g.input_char(c).is_accepted());
        }
        assert_eq!(g.problem_no(), 1);
        assert_eq!(g.current().unwrap().text(), "蚊");
        assert!(!g.input_char('z').is_accepted());
        g.input_char('k');
        g.input_char('a');
        assert!(g.is_completed());
        assert!(g.current().is_none());
        assert_eq!(g.input_char('a'), Feed::Rejected);
    }

    #[test]
    fn counts_attempted_and_accepted() {
        let mut g = game();
        g.start();
        for c in "asxaka".chars() {
            g.input_char(c);
        }
        assert_eq!(g.entered_lengths(), (6, 5));
        let records = g.records();
        assert_eq!(records[0].actually_entered, "asxa");
        assert_eq!(records[1].formally_entered, "ka");
        // Every keystroke after start produced one interval.
        let intervals: usize = records.iter().map(|r| r.keystroke_intervals_ms.len()).sum();
        assert_eq!(intervals, 6);
    }

    #[test]
    fn input_before_start_is_ignored() {
        let mut g = game();
        assert_eq!(g.input_char('a'), Feed::Rejected);
        assert!(!g.is_started());
        assert_eq!(g.entered_lengths(), (0, 0));
        assert!(g.phrases()[0].keystroke_intervals().is_empty());

        g.start();
        assert!(g.input_char('a').is_accepted());
        assert_eq!(g.phrases()[0].keystroke_intervals().len(), 1);
    }

    #[test]
    fn bad_prompt_fails_up_front() {
        let prompts = vec![Prompt::new("漢字", "漢字")];
        let err = TypingGame::new(&standard_table(), &prompts, &Config::default()).unwrap_err();
        assert!(matches!(err, PhraseError::Uncovered { offset: 0, .. }));
    }
}
