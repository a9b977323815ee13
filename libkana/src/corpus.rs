//! Phrase corpus: display text paired with the hiragana reading to type.

use std::path::Path;

use anyhow::{Context, Result};

/// One prompt: what is shown and what is typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub text: String,
    pub reading: String,
}

impl Prompt {
    pub fn new<T: Into<String>, R: Into<String>>(text: T, reading: R) -> Self {
        Self {
            text: text.into(),
            reading: reading.into(),
        }
    }
}

const BUILTIN: &[(&str, &str)] = &[
    ("七転び八起き", "ななころびやおき"),
    ("あさはぱん", "あさはぱん"),
    (
        "デッドデッドデーモンズデデデデデストラクション",
        "でっどでっどでーもんずででででですとらくしょん",
    ),
    (
        "シャバダバ酒場じゃ朝から生　鼻高々なかなか頭が空",
        "しゃばだばさかばじゃあさからなま はなたかだかなかなかあたまがから",
    ),
    ("木村カエラ", "きむらかえら"),
    ("ONE PIECE", "ONE PIECE"),
    (
        "燕雀安んぞ鴻鵠の志を知らんや",
        "えんじゃくいずくんぞこうこくのこころざしをしらんや",
    ),
    ("qwerty", "qwerty"),
    ("ンジャメナ", "んじゃめな"),
    ("グリムジョー・ジャガージャック", "ぐりむじょー・じゃがーじゃっく"),
];

/// The built-in prompts, in order.
pub fn default_corpus() -> Vec<Prompt> {
    BUILTIN.iter().map(|(t, r)| Prompt::new(*t, *r)).collect()
}

/// Parse `text<TAB>reading` lines. Blank lines and `#` comments are
/// skipped; a line without a tab uses the same string for both.
pub fn parse_tsv(content: &str) -> Vec<Prompt> {
    content
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty() && !line.trim_start().starts_with('#'))
        .map(|line| match line.split_once('\t') {
            Some((text, reading)) => Prompt::new(text.trim(), reading.trim()),
            None => Prompt::new(line.trim(), line.trim()),
        })
        .collect()
}

pub fn load_tsv<P: AsRef<Path>>(path: P) -> Result<Vec<Prompt>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read corpus {}", path.display()))?;
    let prompts = parse_tsv(&content);
    if prompts.is_empty() {
        anyhow::bail!("corpus {} has no prompts", path.display());
    }
    Ok(prompts)
}

/// Take `count` prompts in order, wrapping around a short corpus.
pub fn pick(corpus: &[Prompt], count: usize) -> Vec<Prompt> {
    corpus.iter().cycle().take(count).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_ten_prompts() {
        let corpus = default_corpus();
        assert_eq!(corpus.len(), 10);
        assert_eq!(corpus[5], Prompt::new("ONE PIECE", "ONE PIECE"));
    }

    #[test]
    fn parses_tsv_lines() {
        let prompts = parse_tsv("# heading\n朝\tあさ\n\nqwerty\n");
        assert_eq!(
            prompts,
            vec![Prompt::new("朝", "あさ"), Prompt::new("qwerty", "qwerty")]
        );
    }

    #[test]
    fn pick_wraps_around() {
        let corpus = vec![Prompt::new("a", "a"), Prompt::new("b", "b")];
        let picked: Vec<String> = pick(&corpus, 3).into_iter().map(|p| p.text).collect();
        assert_eq!(picked, vec!["a", "b", "a"]);
        assert!(pick(&[], 3).is_empty());
    }
}
