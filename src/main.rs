// logyear - main.rs
//
// Entry point for the year filter. Handles:
// 1. CLI argument parsing (usage and year errors exit with status 2)
// 2. Config + logging start-up
// 3. Running the filter and exiting with its status

use clap::Parser;
use logyear::app::{filter_cmd, startup};
use logyear::core::model::{MatchMode, OutputFormat, YearQuery};
use std::path::PathBuf;

/// logyear - print the lines of a log file that mention a given year.
///
/// Matching is a plain substring test on the year's digits, so 202 also
/// matches 2025. Use `--match token` for a stricter test.
#[derive(Parser, Debug)]
#[command(name = "logyear", version, about)]
struct Cli {
    /// Log file to scan.
    file: PathBuf,

    /// Year to look for (base-10 integer).
    #[arg(value_parser = parse_year, allow_negative_numbers = true)]
    year: i64,

    /// How the year is matched: substring (default) or token.
    #[arg(short = 'm', long = "match", value_parser = parse_match_mode)]
    match_mode: Option<MatchMode>,

    /// Output format: text (default), csv or json.
    #[arg(short = 'f', long = "format", value_parser = parse_output_format)]
    format: Option<OutputFormat>,

    /// Path to config.toml (defaults to the platform config directory).
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn parse_year(s: &str) -> Result<i64, String> {
    s.trim()
        .parse::<i64>()
        .map_err(|_| format!("the year must be a base-10 integer, got '{s}'"))
}

fn parse_match_mode(s: &str) -> Result<MatchMode, String> {
    s.parse()
}

fn parse_output_format(s: &str) -> Result<OutputFormat, String> {
    s.parse()
}

fn main() {
    let cli = Cli::parse();

    let config = startup::init(cli.config.as_deref(), cli.debug, std::io::stderr());
    let settings = filter_cmd::FilterSettings::resolve(cli.match_mode, cli.format, &config);
    let query = YearQuery::new(cli.file, cli.year).with_mode(settings.mode);

    let code = filter_cmd::run(
        &query,
        settings.format,
        std::io::stdout().lock(),
        std::io::stderr(),
    );
    std::process::exit(code);
}
