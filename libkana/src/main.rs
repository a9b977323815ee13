use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, Utc};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use libkana::corpus::{self, Prompt};
use libkana::{GameEntry, GameHistory, HistoryFormat, KanaConfig, SpellingTable, TypingGame};

#[derive(Parser)]
#[command(name = "kana-typing")]
#[command(about = "Romaji typing practice for hiragana phrases")]
struct Args {
    /// Number of phrases to play
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Corpus file with `text<TAB>reading` lines
    #[arg(long)]
    corpus: Option<PathBuf>,

    /// History file (JSON document, or NDJSON with --ndjson)
    #[arg(long, default_value = "data.txt")]
    history: PathBuf,

    /// Append history as newline-delimited JSON
    #[arg(long)]
    ndjson: bool,

    /// Player name for a new history file
    #[arg(long)]
    user: Option<String>,

    /// KanaConfig TOML file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the effective configuration to this file and exit
    #[arg(long)]
    save_config: Option<PathBuf>,
}

fn load_config(args: &Args) -> Result<KanaConfig> {
    let mut cfg = match &args.config {
        Some(path) => KanaConfig::load_toml(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => KanaConfig::default(),
    };
    if let Some(n) = args.count {
        cfg.phrase_count = n;
    }
    if let Some(user) = &args.user {
        cfg.username = user.clone();
    }
    if args.ndjson {
        cfg.history_format = HistoryFormat::Ndjson;
    }
    Ok(cfg)
}

fn load_table(cfg: &KanaConfig) -> Result<std::sync::Arc<SpellingTable>> {
    match &cfg.table_path {
        Some(path) => {
            let table = SpellingTable::load_toml(path)
                .with_context(|| format!("failed to load table {}", path.display()))?;
            Ok(std::sync::Arc::new(table))
        }
        None => Ok(libkana::standard_table()),
    }
}

fn show_prompt(game: &TypingGame) {
    if let Some(p) = game.current() {
        println!();
        println!("{}", p.text());
        println!("{}", p.reading());
        println!("{}", p.remaining_display());
    }
}

fn play(game: &mut TypingGame) -> Result<()> {
    let stdin = io::stdin();
    game.start();
    show_prompt(game);

    for line in stdin.lock().lines() {
        let line = line.context("error reading stdin")?;
        let mut echo = String::new();
        for c in line.chars() {
            let before = game.problem_no();
            let accepted = game.input_char(c).is_accepted();
            echo.push(if accepted { c } else { '×' });
            if game.problem_no() != before {
                println!("{}", echo);
                echo.clear();
                show_prompt(game);
            }
            if game.is_completed() {
                return Ok(());
            }
        }
        if !echo.is_empty() {
            print!("{}", echo);
            if let Some(p) = game.current() {
                print!(" {}", p.remaining_display());
            }
            println!();
        }
        io::stdout().flush()?;
    }
    Ok(())
}

fn print_summary(game: &TypingGame) {
    let (actual, formal) = game.entered_lengths();
    println!();
    match game.score() {
        Some(score) => println!("スコア : {:.2}", score),
        None => println!("スコア : -"),
    }
    if let Some(acc) = libkana::accuracy(formal, actual) {
        println!("正確性 : {:.1}%", acc * 100.0);
    }
    println!("入力時間 : {:.2}s", game.total_time().as_secs_f64());
    if let Some(kps) = libkana::score::keystrokes_per_second(formal, game.total_time()) {
        println!("打鍵速度 : {:.2} keys/s", kps);
    }
}

fn print_past(entries: &[GameEntry]) {
    println!("過去の記録");
    for entry in entries {
        let when = entry.played_at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S");
        match entry.score() {
            Some(score) => println!("{} : score: {:.2}", when, score),
            None => println!("{} : score: -", when),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let cfg = load_config(&args)?;
    if let Some(path) = &args.save_config {
        cfg.save_toml(path)
            .with_context(|| format!("failed to write config {}", path.display()))?;
        println!("config written to {}", path.display());
        return Ok(());
    }
    let table = load_table(&cfg)?;

    let prompts: Vec<Prompt> = match &args.corpus {
        Some(path) => corpus::load_tsv(path)?,
        None => corpus::default_corpus(),
    };
    let prompts = corpus::pick(&prompts, cfg.phrase_count);

    let mut game = TypingGame::new(&table, &prompts, cfg.base()).context("corpus is not typeable")?;
    play(&mut game)?;

    if !game.is_completed() {
        println!();
        println!("(input ended before the last phrase)");
        return Ok(());
    }
    print_summary(&game);

    let entry = GameEntry::from_game(&game, Utc::now());
    let past = match cfg.history_format {
        HistoryFormat::Json => {
            let mut history = GameHistory::load(&args.history)?;
            if args.user.is_some() || history.games.is_empty() {
                history.username = cfg.username.clone();
            }
            history.push(entry);
            history.save(&args.history)?;
            history.games
        }
        HistoryFormat::Ndjson => {
            GameHistory::append_ndjson(&args.history, &entry)?;
            GameHistory::read_ndjson(&args.history)?
        }
    };
    print_past(&past);
    Ok(())
}
