//! Thinking extraction pass

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;
use transcript_core::{thinking_entries, ExtractStats, JsonlReader};

/// Write every non-empty assistant thinking block to `out`
///
/// Malformed lines are skipped silently (logged at debug level).
pub fn run<R, W>(reader: JsonlReader<R>, max_chars: usize, out: &mut W) -> Result<ExtractStats>
where
    R: BufRead,
    W: Write,
{
    let mut stats = ExtractStats::default();

    for line in reader {
        match line.context("failed to read session file")? {
            Ok(record) => {
                stats.records += 1;
                let entries = thinking_entries(&record, max_chars);
                if entries.is_empty() {
                    stats.skipped += 1;
                }
                for entry in entries {
                    write!(out, "{}", entry)?;
                    stats.printed += 1;
                }
            }
            Err(e) => {
                debug!(line = e.line_number, error = %e.source, "skipping malformed line");
                stats.malformed += 1;
            }
        }
    }

    out.flush()?;
    Ok(stats)
}
