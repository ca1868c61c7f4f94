use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::config::{find_config, load_config, ReportConfig, CONFIG_FILE_NAME};
use crate::formatting::{ColorMode, FormattingConfig};
use crate::io::{create_writer, ensure_dir, OutputFormat};
use crate::report::build_report;

#[derive(Debug, Clone)]
pub struct ReportCommandConfig {
    pub config: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub formatting: FormattingConfig,
}

pub fn handle_report(command: ReportCommandConfig) -> Result<()> {
    let config_path = locate_config(command.config)?;
    let config = load_config(&config_path)?;

    let format = resolve_format(command.format, &config);
    let formatting = resolve_formatting(command.formatting, &config);
    log::debug!("Writing {:?} report", format);

    let report = build_report(&config)?;

    let sink: Box<dyn Write> = match &command.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                ensure_dir(parent)?;
            }
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(std::io::stdout().lock()),
    };

    let mut writer = create_writer(format, sink, formatting);
    writer.write_report(&report)?;

    if let Some(path) = &command.output {
        log::info!("Wrote report to {}", path.display());
    }
    Ok(())
}

fn locate_config(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    find_config(&cwd).with_context(|| {
        format!(
            "No {CONFIG_FILE_NAME} found in {} or its parents; run `census-report init` or pass --config",
            cwd.display()
        )
    })
}

// Command line wins, then the config file, then terminal output
fn resolve_format(cli: Option<OutputFormat>, config: &ReportConfig) -> OutputFormat {
    cli.or_else(|| {
        config
            .output
            .default_format
            .as_deref()
            .and_then(OutputFormat::parse)
    })
    .unwrap_or(OutputFormat::Terminal)
}

fn resolve_formatting(cli: FormattingConfig, config: &ReportConfig) -> FormattingConfig {
    match (cli.color, config.output.use_color) {
        (ColorMode::Auto, Some(true)) => FormattingConfig::new(ColorMode::Always),
        (ColorMode::Auto, Some(false)) => FormattingConfig::new(ColorMode::Never),
        _ => cli,
    }
}
