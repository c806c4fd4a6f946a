//! JSONL parsing utilities for session files

use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::types::{ParsedLine, Record};

/// A line that could not be decoded
#[derive(Error, Debug)]
#[error("Error parsing line {line_number}: {source}")]
pub struct LineError {
    /// Line number in the file (1-indexed)
    pub line_number: usize,
    pub source: serde_json::Error,
}

/// Outcome of decoding one non-blank line
pub type LineResult = Result<Record, LineError>;

/// Parse a single JSONL line into a Record
pub fn parse_line(raw: &str, line_number: usize) -> LineResult {
    let parsed: ParsedLine = serde_json::from_str::<Value>(raw.trim())
        .and_then(serde_json::from_value)
        .map_err(|source| LineError { line_number, source })?;
    Ok(Record::from_parsed(parsed, line_number))
}

/// Iterates the non-blank lines of a JSONL source in file order
///
/// Decode failures are yielded per line so callers can report and continue;
/// only I/O errors end iteration with an `Err`.
pub struct JsonlReader<R> {
    lines: Lines<R>,
    line_number: usize,
}

impl JsonlReader<BufReader<File>> {
    /// Open a JSONL file for reading
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> JsonlReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
        }
    }
}

impl<R: BufRead> Iterator for JsonlReader<R> {
    type Item = io::Result<LineResult>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let raw = match self.lines.next()? {
                Ok(raw) => raw,
                Err(e) => return Some(Err(e)),
            };
            self.line_number += 1;

            // Blank lines still count towards line numbers
            if raw.trim().is_empty() {
                continue;
            }

            return Some(Ok(parse_line(&raw, self.line_number)));
        }
    }
}
