//! Flat, serializable snapshot of a typed phrase.

use serde::{Deserialize, Serialize};

/// What a finished (or abandoned) phrase looks like on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhraseRecord {
    /// Reading the user typed against.
    pub sentence: String,
    /// Text shown to the user.
    pub text: String,
    /// Every accepted character, in order.
    pub formally_entered: String,
    /// Every attempted character, in order.
    pub actually_entered: String,
    /// Time before each attempt, in milliseconds.
    pub keystroke_intervals_ms: Vec<f64>,
}

impl PhraseRecord {
    pub fn total_ms(&self) -> f64 {
        self.keystroke_intervals_ms.iter().sum()
    }

    /// Single-line JSON, as used for newline-delimited logs.
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_line_keeps_kana_readable() {
        let rec = PhraseRecord {
            sentence: "あさ".into(),
            text: "朝".into(),
            formally_entered: "asa".into(),
            actually_entered: "aza".into(),
            keystroke_intervals_ms: vec![100.0, 50.5, 20.0],
        };
        let line = rec.to_json_line().unwrap();
        assert!(!line.contains('\n'));
        assert!(line.contains("あさ"));
        assert_eq!(PhraseRecord::from_json(&line).unwrap(), rec);
        assert_eq!(rec.total_ms(), 170.5);
    }
}
