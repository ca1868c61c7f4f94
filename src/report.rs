//! One report run: load each configured export and build its table.

use chrono::Utc;

use crate::config::{AgeSexSection, CategorySection, ReportConfig};
use crate::core::{AgeSexTable, CategoryTable, CensusReport, IncomeTable, Result, ResultExt};
use crate::income::{build_income_table, IncomeSettings};
use crate::io::loader::{load_export, load_income_rows};
use crate::summary::{summarize, summarize_age_sex};

pub fn build_report(config: &ReportConfig) -> Result<CensusReport> {
    let income = income_section(config).context("Household income")?;

    let education = config
        .education
        .as_ref()
        .map(|section| category_section(config, section))
        .transpose()
        .context("Education")?;

    let dwelling = config
        .dwelling
        .as_ref()
        .map(|section| category_section(config, section))
        .transpose()
        .context("Dwelling size")?;

    let age_sex = config
        .age_sex
        .as_ref()
        .map(|section| age_sex_section(config, section))
        .transpose()
        .context("Age and sex")?;

    Ok(CensusReport {
        title: config.report.title.clone(),
        area: config.report.area.clone(),
        generated_at: Utc::now(),
        income,
        education,
        dwelling,
        age_sex,
    })
}

fn income_section(config: &ReportConfig) -> Result<IncomeTable> {
    let section = &config.income;
    let path = config.resolve(&section.file);
    log::info!("Loading household income from {}", path.display());

    let rows = load_income_rows(&path, &section.layout)?;
    build_income_table(
        &rows,
        IncomeSettings {
            thresholds: &section.thresholds,
            substitutions: &section.substitutions,
            rounding: config.rounding(),
        },
    )
}

fn category_section(config: &ReportConfig, section: &CategorySection) -> Result<CategoryTable> {
    let path = config.resolve(&section.file);
    log::info!("Loading {} from {}", section.title, path.display());

    let rows = load_export(&path, &section.layout, 1)?;
    Ok(summarize(
        &section.title,
        &rows,
        &section.exclude,
        &section.groups,
        config.rounding(),
    ))
}

fn age_sex_section(config: &ReportConfig, section: &AgeSexSection) -> Result<AgeSexTable> {
    let path = config.resolve(&section.file);
    log::info!("Loading age and sex from {}", path.display());

    let rows = load_export(&path, &section.layout, 2)?;
    Ok(summarize_age_sex(&rows, &section.exclude, config.rounding()))
}
