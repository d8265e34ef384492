// logyear - core/export.rs
//
// Rendering of matched lines as text, CSV, or JSON.
// Core layer: writes to any Write trait object.

use crate::core::model::{LineMatch, OutputFormat};
use crate::util::constants;
use crate::util::error::ExportError;
use std::io::Write;

/// Write `matches` for `year` in the requested format.
///
/// Returns the number of matches written.
pub fn write_matches<W: Write>(
    matches: &[LineMatch],
    year: i64,
    format: OutputFormat,
    writer: W,
) -> Result<usize, ExportError> {
    match format {
        OutputFormat::Text => write_text(matches, year, writer),
        OutputFormat::Csv => export_csv(matches, writer),
        OutputFormat::Json => export_json(matches, writer),
    }
}

/// Human-readable listing: a header naming the year, then one marked line
/// per match. With no matches, a single "no logs found" line.
pub fn write_text<W: Write>(
    matches: &[LineMatch],
    year: i64,
    mut writer: W,
) -> Result<usize, ExportError> {
    if matches.is_empty() {
        writeln!(writer, "{}", no_matches_message(year))?;
        return Ok(0);
    }

    writeln!(writer, "Logs found for year {year}:")?;
    for m in matches {
        writeln!(writer, "{}{}", constants::MATCH_MARKER, m.text)?;
    }
    writer.flush()?;
    Ok(matches.len())
}

/// The line printed when nothing matched.
pub fn no_matches_message(year: i64) -> String {
    format!("No logs found for year {year}.")
}

/// Writes: line, text
pub fn export_csv<W: Write>(matches: &[LineMatch], writer: W) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["line", "text"])
        .map_err(ExportError::Csv)?;

    for m in matches {
        csv_writer
            .write_record([m.line_number.to_string().as_str(), m.text.as_str()])
            .map_err(ExportError::Csv)?;
    }

    csv_writer.flush()?;
    Ok(matches.len())
}

/// Pretty-printed JSON array of `{ line_number, text }` objects.
pub fn export_json<W: Write>(matches: &[LineMatch], mut writer: W) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(&mut writer, matches).map_err(ExportError::Json)?;
    writeln!(writer)?;
    Ok(matches.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_match(line_number: u64, text: &str) -> LineMatch {
        LineMatch {
            line_number,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_text_output_has_header_and_markers() {
        let matches = vec![
            make_match(1, "2025-01-01 start"),
            make_match(3, "2025-01-02 stop"),
        ];
        let mut buf = Vec::new();
        let count = write_text(&matches, 2025, &mut buf).unwrap();
        assert_eq!(count, 2);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Logs found for year 2025:\n- 2025-01-01 start\n- 2025-01-02 stop\n"
        );
    }

    #[test]
    fn test_text_output_without_matches() {
        let mut buf = Vec::new();
        let count = write_text(&[], 2030, &mut buf).unwrap();
        assert_eq!(count, 0);
        assert_eq!(String::from_utf8(buf).unwrap(), "No logs found for year 2030.\n");
    }

    #[test]
    fn test_csv_export_quotes_commas() {
        let matches = vec![make_match(7, "2025, a comma")];
        let mut buf = Vec::new();
        let count = export_csv(&matches, &mut buf).unwrap();
        assert_eq!(count, 1);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "line,text\n7,\"2025, a comma\"\n"
        );
    }

    #[test]
    fn test_json_export() {
        let matches = vec![make_match(2, "2025 boot")];
        let mut buf = Vec::new();
        write_matches(&matches, 2025, OutputFormat::Json, &mut buf).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed[0]["line_number"], 2);
        assert_eq!(parsed[0]["text"], "2025 boot");
    }

    #[test]
    fn test_json_export_empty_is_empty_array() {
        let mut buf = Vec::new();
        export_json(&[], &mut buf).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed, serde_json::json!([]));
    }
}
