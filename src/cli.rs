use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::formatting::{ColorMode, FormattingConfig};
pub use crate::io::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "census-report")]
#[command(about = "Community profile tables from census table-builder exports", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the report described by a configuration file
    Report {
        /// Configuration file (defaults to the nearest census-report.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format (defaults to the config's default_format, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        /// -v: Progress for each export
        /// -vv: Reconciliation details
        /// -vvv: Everything
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,

        /// Disable colors in terminal output
        #[arg(long = "plain", conflicts_with = "color")]
        plain: bool,

        /// When to color terminal output: auto, always or never
        #[arg(long = "color", value_name = "WHEN", value_parser = parse_color_mode)]
        color: Option<ColorMode>,
    },

    /// Write a census-report.toml with the default thresholds
    Init {
        /// Directory to write the configuration into
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

fn parse_color_mode(value: &str) -> Result<ColorMode, String> {
    ColorMode::parse(value)
        .ok_or_else(|| format!("invalid color mode '{value}' (expected auto, always or never)"))
}

/// Formatting from `--plain` / `--color`, falling back to the environment.
pub fn formatting_config(plain: bool, color: Option<ColorMode>) -> FormattingConfig {
    match (plain, color) {
        (true, _) => FormattingConfig::plain(),
        (false, Some(mode)) => FormattingConfig::new(mode),
        (false, None) => FormattingConfig::from_env(),
    }
}

/// Log filter for a `-v` count; `RUST_LOG` still takes precedence.
pub fn log_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
