// logyear - app/filter_cmd.rs
//
// The filter command: settings resolution, the scan, and translation of
// the outcome into output, messages, and an exit code.
//
// Output and diagnostics are written to caller-supplied writers so the
// whole command can be exercised from tests.

use crate::core::export;
use crate::core::filter;
use crate::core::model::{MatchMode, OutputFormat, YearQuery};
use crate::platform::config::AppConfig;
use crate::util::constants;
use crate::util::error::{LogYearError, Result};
use std::io::Write;

/// Effective filter settings after merging CLI flags over config.toml.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterSettings {
    pub mode: MatchMode,
    pub format: OutputFormat,
}

impl FilterSettings {
    /// CLI value > config value > default. Config values were validated at
    /// load time; anything unparseable here falls back to the default.
    pub fn resolve(
        cli_mode: Option<MatchMode>,
        cli_format: Option<OutputFormat>,
        config: &AppConfig,
    ) -> Self {
        let mode = cli_mode
            .or_else(|| config.match_mode.as_deref().and_then(|m| m.parse().ok()))
            .unwrap_or_default();
        let format = cli_format
            .or_else(|| config.output_format.as_deref().and_then(|f| f.parse().ok()))
            .unwrap_or_default();
        Self { mode, format }
    }
}

/// Run the year filter and print the result.
///
/// An unreadable input is reported on `err` and then handled as an empty
/// result, so the run still ends with the "no logs found" output and exit
/// code 0. Only a failure to write the output itself is a non-zero exit.
pub fn run<W: Write, E: Write>(
    query: &YearQuery,
    format: OutputFormat,
    mut out: W,
    mut err: E,
) -> i32 {
    let outcome = match execute(query, format, &mut out) {
        Err(LogYearError::Filter(e)) => {
            if e.is_not_found() {
                tracing::warn!(error = %e, "Input unreadable; reporting no matches");
            } else {
                tracing::error!(error = %e, "Year filter failed; reporting no matches");
            }
            let _ = writeln!(err, "Error: {e}");
            export::write_matches(&[], query.year, format, &mut out).map_err(LogYearError::from)
        }
        other => other,
    };

    match outcome {
        Ok(count) => {
            tracing::debug!(count, "Matches written");
            constants::EXIT_OK
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to write matches");
            let _ = writeln!(err, "Error: {e}");
            constants::EXIT_FAILURE
        }
    }
}

/// Scan and write; returns the number of matches written.
fn execute<W: Write>(query: &YearQuery, format: OutputFormat, out: W) -> Result<usize> {
    let matches = filter::scan_matches(query)?;
    Ok(export::write_matches(&matches, query.year, format, out)?)
}
