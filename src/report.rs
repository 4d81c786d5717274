//! Fixed-width table output for scan results.

use crate::scanner::MatchRecord;
use std::io::{self, Write};
use termcolor::{ColorSpec, WriteColor};

/// Print `records` as a table, or a notice when there are none.
///
/// Columns are left-justified to minimum widths of 8 (line number) and 40
/// (literal); wider values expand their row rather than being truncated.
pub fn report<W: WriteColor>(out: &mut W, records: &[MatchRecord]) -> io::Result<()> {
    if records.is_empty() {
        writeln!(out, "No string literals found.")?;
        return Ok(());
    }
    out.set_color(ColorSpec::new().set_bold(true))?;
    writeln!(out, "Found string literals in the following lines:")?;
    out.reset()?;
    writeln!(out, "{:<8} {:<40} {}", "Line", "String", "Full Line")?;
    writeln!(out, "{}", "-".repeat(80))?;
    for record in records {
        writeln!(
            out,
            "{:<8} {:<40} {}",
            record.line_number, record.literal_value, record.source_line
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::Buffer;

    fn render(records: &[MatchRecord]) -> String {
        let mut buf = Buffer::no_color();
        report(&mut buf, records).unwrap();
        String::from_utf8(buf.into_inner()).unwrap()
    }

    fn record(line_number: usize, source_line: &str, literal_value: &str) -> MatchRecord {
        MatchRecord {
            line_number,
            source_line: source_line.to_string(),
            literal_value: literal_value.to_string(),
        }
    }

    #[test]
    fn empty_notice() {
        assert_eq!(render(&[]), "No string literals found.\n");
    }

    #[test]
    fn table_layout() {
        let records = vec![
            record(1, "print('hi')", "hi"),
            record(
                12,
                "t(\"a very long literal that exceeds the column\")",
                "a very long literal that exceeds the column",
            ),
        ];
        let expected = concat!(
            "Found string literals in the following lines:\n",
            "Line     String                                   Full Line\n",
            "--------------------------------------------------------------------------------\n",
            "1        hi                                       print('hi')\n",
            "12       a very long literal that exceeds the column t(\"a very long literal that exceeds the column\")\n",
        );
        assert_eq!(render(&records), expected);
    }
}
