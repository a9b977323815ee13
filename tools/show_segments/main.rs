use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use typing_core::{apply_nasal_filter, SegmentGraph, SpellingTable, TypingPhrase};

/// Print the segment graph of one or more readings.
#[derive(Parser)]
#[command(name = "show_segments")]
struct Args {
    /// Readings to inspect
    #[arg(required = true)]
    readings: Vec<String>,

    /// Spelling table TOML (defaults to the built-in kana table)
    #[arg(long)]
    table: Option<PathBuf>,

    /// Require ASCII characters to be covered by the table
    #[arg(long)]
    no_ascii: bool,

    /// Show edges before the nasal filter runs
    #[arg(long)]
    unfiltered: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let table: Arc<SpellingTable> = match &args.table {
        Some(path) => Arc::new(
            SpellingTable::load_toml(path)
                .with_context(|| format!("failed to load table {}", path.display()))?,
        ),
        None => libkana::standard_table(),
    };

    let ascii = !args.no_ascii;
    for reading in &args.readings {
        println!("reading: {}", reading);
        let mut graph = SegmentGraph::build(&table, reading, ascii)
            .with_context(|| format!("cannot segment {:?}", reading))?;
        if !args.unfiltered {
            let removed = apply_nasal_filter(&mut graph, &table);
            println!("  nasal edges removed: {}", removed);
        }
        for offset in 0..graph.len() {
            let edges: Vec<String> = graph
                .edges_at(offset)
                .iter()
                .map(|e| format!("{}={}", e.cluster, e.spelling))
                .collect();
            println!("  [{}] {}", offset, edges.join(" "));
        }
        let path: Vec<&str> = graph
            .canonical_path(0)
            .iter()
            .map(|e| e.cluster.as_str())
            .collect();
        println!("  canonical: {}", path.join("|"));

        let config = typing_core::Config {
            ascii_passthrough: ascii,
            ..typing_core::Config::default()
        };
        match TypingPhrase::with_config(&table, reading, "", &config) {
            Ok(p) => println!("  display: {}", p.remaining_display()),
            Err(e) => println!("  not typeable: {}", e),
        }
    }
    Ok(())
}
