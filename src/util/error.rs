// logyear - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// All errors preserve the causal chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all logyear operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum LogYearError {
    /// Year filter failed.
    Filter(FilterError),

    /// Directory backup failed.
    Backup(BackupError),

    /// Export of matched lines failed.
    Export(ExportError),
}

impl fmt::Display for LogYearError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Filter(e) => write!(f, "Filter error: {e}"),
            Self::Backup(e) => write!(f, "Backup error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
        }
    }
}

impl std::error::Error for LogYearError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Filter(e) => Some(e),
            Self::Backup(e) => Some(e),
            Self::Export(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Filter errors
// ---------------------------------------------------------------------------

/// Errors raised while scanning a file for a year.
#[derive(Debug)]
pub enum FilterError {
    /// The input file could not be opened (missing, permission denied, ...).
    /// No file handle was acquired.
    FileNotFound { path: PathBuf, source: io::Error },

    /// A read failed after the file was opened. Matches gathered before the
    /// failure are discarded.
    Io {
        path: PathBuf,
        line_number: u64,
        source: io::Error,
    },

    /// The token matcher could not be compiled.
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}

impl FilterError {
    /// True for the "input unreadable" class of failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound { .. })
    }
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound { path, source } => {
                write!(f, "The file '{}' could not be opened: {source}", path.display())
            }
            Self::Io {
                path,
                line_number,
                source,
            } => write!(
                f,
                "'{}' line {line_number}: read failed: {source}",
                path.display()
            ),
            Self::InvalidPattern { pattern, source } => {
                write!(f, "Invalid match pattern '{pattern}': {source}")
            }
        }
    }
}

impl std::error::Error for FilterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileNotFound { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            Self::InvalidPattern { source, .. } => Some(source),
        }
    }
}

impl From<FilterError> for LogYearError {
    fn from(e: FilterError) -> Self {
        Self::Filter(e)
    }
}

// ---------------------------------------------------------------------------
// Backup errors
// ---------------------------------------------------------------------------

/// Errors related to directory backup.
#[derive(Debug)]
pub enum BackupError {
    /// The source directory does not exist.
    SourceNotFound { path: PathBuf },

    /// The source path exists but is not a directory.
    SourceNotADirectory { path: PathBuf },

    /// The target resolves to the source directory itself.
    SameDirectory { path: PathBuf },

    /// A source file and its destination are the same file.
    SameFile { path: PathBuf, copied_before: usize },

    /// The target directory could not be created.
    CreateTarget { path: PathBuf, source: io::Error },

    /// Listing the source directory failed.
    ReadDir {
        path: PathBuf,
        source: walkdir::Error,
    },

    /// Copying a single file failed. The backup stops at this file.
    Copy {
        from: PathBuf,
        to: PathBuf,
        copied_before: usize,
        source: io::Error,
    },
}

impl fmt::Display for BackupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceNotFound { path } => {
                write!(f, "Source directory '{}' does not exist", path.display())
            }
            Self::SourceNotADirectory { path } => {
                write!(f, "Source '{}' is not a directory", path.display())
            }
            Self::SameDirectory { path } => write!(
                f,
                "Target '{}' is the source directory; refusing to copy files onto themselves",
                path.display()
            ),
            Self::SameFile {
                path,
                copied_before,
            } => write!(
                f,
                "'{}' is both source and destination; stopped after {copied_before} file(s)",
                path.display()
            ),
            Self::CreateTarget { path, source } => write!(
                f,
                "Could not create target directory '{}': {source}",
                path.display()
            ),
            Self::ReadDir { path, source } => {
                write!(f, "Could not list '{}': {source}", path.display())
            }
            Self::Copy {
                from,
                to,
                copied_before,
                source,
            } => write!(
                f,
                "Copying '{}' to '{}' failed after {copied_before} file(s): {source}",
                from.display(),
                to.display()
            ),
        }
    }
}

impl std::error::Error for BackupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CreateTarget { source, .. } => Some(source),
            Self::ReadDir { source, .. } => Some(source),
            Self::Copy { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<BackupError> for LogYearError {
    fn from(e: BackupError) -> Self {
        Self::Backup(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to writing matched lines out.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the output.
    Io(io::Error),

    /// CSV serialisation error.
    Csv(csv::Error),

    /// JSON serialisation error.
    Json(serde_json::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(source) => write!(f, "Output I/O error: {source}"),
            Self::Csv(source) => write!(f, "CSV output error: {source}"),
            Self::Json(source) => write!(f, "JSON output error: {source}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(source) => Some(source),
            Self::Csv(source) => Some(source),
            Self::Json(source) => Some(source),
        }
    }
}

impl From<io::Error> for ExportError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ExportError> for LogYearError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is not one of the accepted values.
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::InvalidValue {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is not recognised. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for logyear results.
pub type Result<T> = std::result::Result<T, LogYearError>;
