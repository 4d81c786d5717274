//! The literal scanner: applies the quoted-string pattern line by line.

use crate::input::InputSource;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

lazy_static! {
    /// A double- or single-quoted run whose body is any non-delimiter,
    /// non-backslash character or a backslash followed by any character.
    static ref LITERAL_PATTERN: Regex =
        Regex::new(r#""(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'"#).expect("invalid literal pattern");
}

/// One quoted literal found in the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchRecord {
    /// 1-based line number of the containing line.
    pub line_number: usize,
    /// The containing line with surrounding whitespace trimmed.
    pub source_line: String,
    /// The literal body with the quote delimiters removed. Escape
    /// sequences are kept verbatim, not interpreted.
    pub literal_value: String,
}

/// Scan `input` for quoted string literals.
///
/// `input` is either a file path (when it ends in a recognized extension)
/// or raw text to scan directly. A file which cannot be opened or read is
/// reported with a one-line message and produces an empty result; no error
/// reaches the caller.
///
/// Records are ordered by line number, then left to right within a line.
///
/// ```
/// use litscan::scanner::scan;
///
/// let records = scan("x = 'a'");
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].literal_value, "a");
/// ```
pub fn scan(input: &str) -> Vec<MatchRecord> {
    match InputSource::classify(input) {
        InputSource::Path(path) => scan_file(path),
        InputSource::Text(text) => scan_text(text),
    }
}

fn scan_file(path: &Path) -> Vec<MatchRecord> {
    debug!("Scanning file {}", path.display());
    match read_records(path) {
        Ok(records) => records,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            println!("Error: File '{}' not found.", path.display());
            Vec::new()
        }
        Err(e) => {
            println!("Error occurred: {}", e);
            Vec::new()
        }
    }
}

fn read_records(path: &Path) -> io::Result<Vec<MatchRecord>> {
    let file = File::open(path)?;
    let mut records = Vec::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        collect_line(index + 1, &line?, &mut records);
    }
    Ok(records)
}

fn scan_text(text: &str) -> Vec<MatchRecord> {
    debug!("Scanning {} bytes of text", text.len());
    let mut records = Vec::new();
    for (index, line) in text.split('\n').enumerate() {
        collect_line(index + 1, line, &mut records);
    }
    records
}

fn collect_line(line_number: usize, line: &str, records: &mut Vec<MatchRecord>) {
    for found in LITERAL_PATTERN.find_iter(line) {
        let with_quotes = found.as_str();
        records.push(MatchRecord {
            line_number,
            source_line: line.trim().to_string(),
            literal_value: with_quotes[1..with_quotes.len() - 1].to_string(),
        });
    }
}
