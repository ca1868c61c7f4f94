use anyhow::Result;
use clap::Parser;
use census_report::cli::{formatting_config, log_level, Cli, Commands};
use census_report::commands::{handle_report, init_config, ReportCommandConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            config,
            format,
            output,
            verbosity,
            plain,
            color,
        } => {
            init_logging(verbosity);
            handle_report(ReportCommandConfig {
                config,
                format,
                output,
                formatting: formatting_config(plain, color),
            })
        }
        Commands::Init { dir, force } => {
            init_logging(0);
            init_config(&dir, force)
        }
    }
}

fn init_logging(verbosity: u8) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level(verbosity)))
        .format_timestamp(None)
        .init();
}
