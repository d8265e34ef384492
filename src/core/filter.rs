// logyear - core/filter.rs
//
// Year filter over line-oriented text.
//
// The matching and scanning logic is pure and works on any `BufRead`.
// `filter_by_year` / `scan_matches` add the file open, which goes through
// platform::fs so the handle is scoped to the scan.

use crate::core::model::{LineMatch, MatchMode, YearQuery};
use crate::platform::fs::{open_lines, LineReader};
use crate::util::constants;
use crate::util::error::FilterError;
use regex::Regex;
use std::io::BufRead;
use std::path::Path;

/// Compiled test for "does this line mention the year".
#[derive(Debug, Clone)]
pub enum YearMatcher {
    /// Plain substring containment of the decimal form.
    Substring(String),

    /// Decimal form not adjacent to other digits.
    Token(Regex),
}

impl YearMatcher {
    pub fn new(year: i64, mode: MatchMode) -> Result<Self, FilterError> {
        Self::from_needle(year.to_string(), mode)
    }

    pub fn for_query(query: &YearQuery) -> Result<Self, FilterError> {
        Self::from_needle(query.needle(), query.mode)
    }

    fn from_needle(needle: String, mode: MatchMode) -> Result<Self, FilterError> {
        match mode {
            MatchMode::Substring => Ok(Self::Substring(needle)),
            MatchMode::Token => {
                let pattern = format!(r"(?:^|[^0-9]){}(?:[^0-9]|$)", regex::escape(&needle));
                let regex = Regex::new(&pattern).map_err(|e| FilterError::InvalidPattern {
                    pattern: pattern.clone(),
                    source: e,
                })?;
                Ok(Self::Token(regex))
            }
        }
    }

    /// Case-sensitive test against the untrimmed line.
    pub fn is_match(&self, line: &str) -> bool {
        match self {
            Self::Substring(needle) => line.contains(needle.as_str()),
            Self::Token(regex) => regex.is_match(line),
        }
    }
}

/// Return the trimmed text of every line in `query.path` that mentions
/// `query.year`, in file order.
///
/// An unopenable file yields `FilterError::FileNotFound`; the caller treats
/// that as "no lines" and reports it.
pub fn filter_by_year(query: &YearQuery) -> Result<Vec<String>, FilterError> {
    Ok(scan_matches(query)?
        .into_iter()
        .map(|m| m.text)
        .collect())
}

/// Like [`filter_by_year`] but keeps the 1-based line number of each match.
pub fn scan_matches(query: &YearQuery) -> Result<Vec<LineMatch>, FilterError> {
    let matcher = YearMatcher::for_query(query)?;
    let reader = open_lines(&query.path).map_err(|e| {
        tracing::warn!(path = %query.path.display(), error = %e, "Cannot open input file");
        FilterError::FileNotFound {
            path: query.path.clone(),
            source: e,
        }
    })?;

    let matches = filter_lines(reader, &matcher, &query.path)?;

    tracing::info!(
        path = %query.path.display(),
        year = query.year,
        mode = %query.mode,
        matches = matches.len(),
        "Year filter complete"
    );
    Ok(matches)
}

/// Scan every line of `reader`, collecting trimmed matches in order.
///
/// The first read error ends the scan and discards what was gathered.
/// `path` is used for error context only.
pub fn filter_lines<R: BufRead>(
    mut reader: LineReader<R>,
    matcher: &YearMatcher,
    path: &Path,
) -> Result<Vec<LineMatch>, FilterError> {
    let mut matches = Vec::new();

    loop {
        let line_number = reader.next_line_number();
        let (line_number, line) = match reader.next() {
            None => break,
            Some(Ok(item)) => item,
            Some(Err(e)) => {
                tracing::warn!(
                    path = %path.display(),
                    line_number,
                    error = %e,
                    discarded = matches.len(),
                    "Read failed mid-scan"
                );
                return Err(FilterError::Io {
                    path: path.to_path_buf(),
                    line_number,
                    source: e,
                });
            }
        };

        if matcher.is_match(&line) {
            let text = line.trim();
            tracing::trace!(
                line_number,
                preview = %preview(text),
                "Line matched"
            );
            matches.push(LineMatch {
                line_number,
                text: text.to_string(),
            });
        }
    }

    Ok(matches)
}

fn preview(text: &str) -> &str {
    match text.char_indices().nth(constants::DEBUG_MAX_LINE_PREVIEW) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
