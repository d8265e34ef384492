// logyear - bin/logyear-backup.rs
//
// Entry point for the directory backup. Copies every file directly inside
// SOURCE_DIR into TARGET_DIR, creating the target if needed.

use clap::Parser;
use logyear::app::{backup_cmd, startup};
use std::path::PathBuf;

/// logyear-backup - copy the files of a directory into a backup directory.
///
/// Only direct files are copied; subdirectories are skipped. Files that
/// already exist in the target are overwritten.
#[derive(Parser, Debug)]
#[command(name = "logyear-backup", version, about)]
struct Cli {
    /// Directory whose files are copied.
    source_dir: PathBuf,

    /// Directory receiving the copies (created if missing).
    target_dir: PathBuf,

    /// Path to config.toml (defaults to the platform config directory).
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    startup::init(cli.config.as_deref(), cli.debug, std::io::stderr());

    let code = backup_cmd::run(
        &cli.source_dir,
        &cli.target_dir,
        std::io::stdout().lock(),
        std::io::stderr(),
    );
    std::process::exit(code);
}
