// logyear - core/model.rs
//
// Core data model types. Pure data definitions with no I/O.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

// =============================================================================
// Year query
// =============================================================================

/// How a year is recognised inside a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// The year's decimal digits appear anywhere in the line. `202` matches
    /// `2025` and `20201`. This is the historical behaviour and the default.
    #[default]
    Substring,

    /// The year's digits must not touch other digits on either side.
    /// `202` matches `v202 release` but not `2025`.
    Token,
}

impl MatchMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Substring => "substring",
            Self::Token => "token",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "substring" => Ok(Self::Substring),
            "token" => Ok(Self::Token),
            other => Err(format!(
                "unknown match mode '{other}' (expected substring or token)"
            )),
        }
    }
}

/// One filter invocation: which file, which year, how to match.
///
/// Built once by the command wrapper and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearQuery {
    pub path: PathBuf,
    pub year: i64,
    pub mode: MatchMode,
}

impl YearQuery {
    pub fn new(path: impl Into<PathBuf>, year: i64) -> Self {
        Self {
            path: path.into(),
            year,
            mode: MatchMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// The decimal text searched for in each line.
    pub fn needle(&self) -> String {
        self.year.to_string()
    }
}

// =============================================================================
// Line match
// =============================================================================

/// A line that contained the queried year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineMatch {
    /// 1-based line number in the source file.
    pub line_number: u64,

    /// Line content with surrounding whitespace and terminator removed.
    pub text: String,
}

// =============================================================================
// Output format
// =============================================================================

/// Rendering used by the filter command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Header line plus one `- `-prefixed line per match.
    #[default]
    Text,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "unknown output format '{other}' (expected text, csv or json)"
            )),
        }
    }
}

// =============================================================================
// Backup summary
// =============================================================================

/// Outcome of a successful backup run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackupSummary {
    pub source: PathBuf,
    pub target: PathBuf,

    /// Destination paths written, in copy order.
    pub copied: Vec<PathBuf>,

    /// Source entries that were not files (subdirectories) and were left alone.
    pub skipped: Vec<PathBuf>,

    /// True when the target directory did not exist and was created.
    pub created_target: bool,
}
