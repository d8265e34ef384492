// logyear - app/startup.rs
//
// Shared start-up sequence for both binaries:
// 1. Locate and load config.toml (CLI override > platform default)
// 2. Initialise logging from CLI flag + config
// 3. Surface config warnings

use crate::platform::config::{self, AppConfig, PlatformPaths};
use crate::util::{constants, logging};
use std::io::Write;
use std::path::Path;

/// Load configuration and bring up logging. Config warnings are written to
/// `err` because logging is not yet running when they are produced.
pub fn init<E: Write>(config_override: Option<&Path>, debug_flag: bool, mut err: E) -> AppConfig {
    let config_path = match config_override {
        Some(p) => p.to_path_buf(),
        None => PlatformPaths::resolve().config_file(),
    };

    let (config, warnings) = config::load_config(&config_path);

    logging::init(
        debug_flag,
        config.log_level.as_deref(),
        config.log_file.as_deref(),
    );

    for warning in &warnings {
        let _ = writeln!(err, "Warning: {warning}");
    }

    tracing::info!(
        version = constants::APP_VERSION,
        config = %config_path.display(),
        debug = debug_flag,
        "{} starting",
        constants::APP_NAME
    );

    config
}
