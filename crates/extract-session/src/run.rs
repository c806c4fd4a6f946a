//! Transcript extraction pass

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;
use transcript_core::{transcript_entry, ExtractStats, JsonlReader};

/// Write the transcript of every user and assistant line to `out`
///
/// Malformed lines are reported to `err` and skipped. Read errors abort the pass.
pub fn run<R, W, E>(reader: JsonlReader<R>, max_chars: usize, out: &mut W, err: &mut E) -> Result<ExtractStats>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut stats = ExtractStats::default();

    for line in reader {
        match line.context("failed to read session file")? {
            Ok(record) => {
                stats.records += 1;
                match transcript_entry(&record, max_chars) {
                    Some(entry) => {
                        write!(out, "{}", entry)?;
                        stats.printed += 1;
                    }
                    None => {
                        debug!(line = record.line_number, line_type = %record.line_type, "skipping record");
                        stats.skipped += 1;
                    }
                }
            }
            Err(e) => {
                writeln!(err, "{}", e)?;
                stats.malformed += 1;
            }
        }
    }

    out.flush()?;
    Ok(stats)
}
