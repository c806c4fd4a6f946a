//! extract-thinking - Print the thinking blocks of a Claude Code session log

mod cli;
mod run;

use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use transcript_core::JsonlReader;

use cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let reader = JsonlReader::open(&cli.file)
        .with_context(|| format!("failed to open {}", cli.file.display()))?;

    let mut out = BufWriter::new(io::stdout().lock());
    let stats = run::run(reader, cli.max_chars, &mut out)?;

    info!(
        records = stats.records,
        printed = stats.printed,
        skipped = stats.skipped,
        malformed = stats.malformed,
        "thinking extracted"
    );

    Ok(())
}
