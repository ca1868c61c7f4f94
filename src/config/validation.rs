//! Post-parse checks for a loaded `ReportConfig`.
//!
//! Every problem is collected before failing so a single run reports all of
//! them.

use super::sections::{CategorySection, ExportLayout};
use super::ReportConfig;
use crate::core::{Error, Result};

pub fn validate_config(config: &ReportConfig) -> Result<()> {
    let errors = collect_errors(config);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(Error::Validation(errors.join("; ")))
    }
}

pub(crate) fn collect_errors(config: &ReportConfig) -> Vec<String> {
    let mut errors = Vec::new();

    if let Err(e) = config.income.thresholds.validate() {
        errors.push(format!("income.thresholds: {e}"));
    }
    check_layout("income.layout", &config.income.layout, &mut errors);

    for (i, sub) in config.income.substitutions.iter().enumerate() {
        if sub.label.trim().is_empty() {
            errors.push(format!("income.substitutions[{i}]: label is empty"));
        }
    }

    if let Some(section) = &config.education {
        check_category("education", section, &mut errors);
    }
    if let Some(section) = &config.dwelling {
        check_category("dwelling", section, &mut errors);
    }
    if let Some(section) = &config.age_sex {
        check_layout("age_sex.layout", &section.layout, &mut errors);
    }

    errors
}

fn check_layout(field: &str, layout: &ExportLayout, errors: &mut Vec<String>) {
    if layout.row_count == 0 {
        errors.push(format!("{field}: row_count must be greater than 0"));
    }
}

fn check_category(field: &str, section: &CategorySection, errors: &mut Vec<String>) {
    check_layout(&format!("{field}.layout"), &section.layout, errors);

    let mut seen: Vec<&str> = Vec::new();
    for group in &section.groups {
        if group.members.is_empty() {
            errors.push(format!("{field}.groups '{}': no members", group.label));
        }
        for member in &group.members {
            if seen.contains(&member.as_str()) {
                errors.push(format!(
                    "{field}.groups: '{member}' belongs to more than one group"
                ));
            }
            seen.push(member);
        }
    }
}
