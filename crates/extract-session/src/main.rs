//! extract-session - Print a plain-text transcript of a Claude Code session log

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

    let path = match cli.file_or_usage() {
        Ok(path) => path,
        Err(usage) => {
            println!("{}", usage);
            std::process::exit(1);
        }
    };

    let reader = JsonlReader::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let mut out = BufWriter::new(io::stdout().lock());
    let mut err = io::stderr().lock();
    let stats = run::run(reader, cli.max_chars, &mut out, &mut err)?;

    info!(
        records = stats.records,
        printed = stats.printed,
        skipped = stats.skipped,
        malformed = stats.malformed,
        "transcript extracted"
    );

    Ok(())
}
