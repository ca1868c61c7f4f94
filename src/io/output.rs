use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;

use super::writers::{HtmlWriter, JsonWriter, MarkdownWriter, TerminalWriter};
use crate::core::CensusReport;
use crate::formatting::FormattingConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tables for the terminal
    Terminal,
    /// Markdown tables
    Markdown,
    /// Machine-readable JSON
    Json,
    /// Standalone webpage
    Html,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(s, true).ok()
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &CensusReport) -> anyhow::Result<()>;
}

pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Html => Box::new(HtmlWriter::new(writer)),
    }
}
