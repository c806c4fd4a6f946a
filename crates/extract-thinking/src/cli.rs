//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;
use transcript_core::DEFAULT_THINKING_CHARS;

/// Session read when no file is given
pub const DEFAULT_SESSION_FILE: &str = "/data/data/com.termux/files/home/.claude/projects/-data-data-com-termux-files-home-MateBot-ted/4c383291-b76a-49a7-9399-a78ccd8f2470.jsonl";

/// Print the thinking blocks of a Claude Code session log
#[derive(Parser, Debug)]
#[command(name = "extract-thinking")]
#[command(author = "Claude Code SDK")]
#[command(version)]
#[command(about = "Print the thinking blocks of a Claude Code session log")]
pub struct Cli {
    /// Session file (JSONL) to read
    #[arg(value_name = "FILE", env = "EXTRACT_THINKING_FILE", default_value = DEFAULT_SESSION_FILE)]
    pub file: PathBuf,

    /// Maximum characters printed per thinking block
    #[arg(long, env = "EXTRACT_THINKING_MAX_CHARS", default_value_t = DEFAULT_THINKING_CHARS)]
    pub max_chars: usize,
}
