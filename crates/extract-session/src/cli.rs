//! CLI argument definitions

use clap::{CommandFactory, Parser};
use std::path::{Path, PathBuf};
use transcript_core::DEFAULT_ENTRY_CHARS;

/// Print a plain-text transcript of a Claude Code session log
#[derive(Parser, Debug)]
#[command(name = "extract-session")]
#[command(author = "Claude Code SDK")]
#[command(version)]
#[command(about = "Print a plain-text transcript of a Claude Code session log")]
pub struct Cli {
    /// Session file (JSONL) to read
    // Optional here; `file_or_usage` turns a missing path into the usage text
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Maximum characters printed per message
    #[arg(long, env = "EXTRACT_SESSION_MAX_CHARS", default_value_t = DEFAULT_ENTRY_CHARS)]
    pub max_chars: usize,
}

impl Cli {
    /// The session file to read, or the usage text when none was given
    pub fn file_or_usage(&self) -> Result<&Path, String> {
        self.file
            .as_deref()
            .ok_or_else(|| Cli::command().render_usage().to_string())
    }
}
