// logyear - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "logyear";

/// Application identifier used for config directories.
pub const APP_ID: &str = "logyear";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Filter output
// =============================================================================

/// Marker printed before each matched line in text output.
pub const MATCH_MARKER: &str = "- ";

/// Buffer capacity for the line reader.
pub const READ_BUFFER_SIZE: usize = 64 * 1024; // 64 KB

/// Maximum length of a log line included in debug output.
/// Prevents accidental exposure of sensitive data in long lines.
pub const DEBUG_MAX_LINE_PREVIEW: usize = 200;

/// Accepted values for `[filter] match_mode` and `--match`.
pub const VALID_MATCH_MODES: &[&str] = &["substring", "token"];

/// Accepted values for `[output] format` and `--format`.
pub const VALID_OUTPUT_FORMATS: &[&str] = &["text", "csv", "json"];

// =============================================================================
// Exit codes
// =============================================================================

/// Successful run, including "no matches" and unreadable-input runs.
pub const EXIT_OK: i32 = 0;

/// A recognised runtime failure (backup error, output write failure).
pub const EXIT_FAILURE: i32 = 1;

// =============================================================================
// Logging
// =============================================================================

/// Default log level. Diagnostics stay quiet unless asked for, since
/// stdout carries the command's actual output.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
