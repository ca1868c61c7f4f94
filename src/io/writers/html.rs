use anyhow::Result;
use html_escape::encode_text;
use std::fmt::Write as _;
use std::io::Write;

use crate::core::{AgeSexTable, CategoryTable, CensusReport, IncomeTable};
use crate::formatting::{format_count, format_percentage};
use crate::io::output::OutputWriter;

pub struct HtmlWriter<W: Write> {
    writer: W,
    template: &'static str,
}

impl<W: Write> HtmlWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            template: include_str!("templates/report.html"),
        }
    }

    fn render_html(&self, report: &CensusReport) -> Result<String> {
        let mut sections = render_income(&report.income)?;
        if let Some(age_sex) = &report.age_sex {
            sections.push_str(&render_age_sex(age_sex)?);
        }
        for category in [&report.education, &report.dwelling].into_iter().flatten() {
            sections.push_str(&render_category(category)?);
        }

        let area = report.area.as_deref().unwrap_or("");
        let html = self
            .template
            .replace("{{{TITLE}}}", &encode_text(&report.title))
            .replace("{{{AREA}}}", &encode_text(area))
            .replace(
                "{{{TIMESTAMP}}}",
                &report.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            )
            .replace("{{{SECTIONS}}}", &sections);
        Ok(html)
    }
}

impl<W: Write> OutputWriter for HtmlWriter<W> {
    fn write_report(&mut self, report: &CensusReport) -> Result<()> {
        let html = self.render_html(report)?;
        write!(self.writer, "{}", html)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Table row with a proportional bar in front of the share.
fn share_row(out: &mut String, label: &str, count: u64, percentage: f64) -> std::fmt::Result {
    writeln!(
        out,
        "<tr><td>{}</td><td class=\"num\">{}</td><td class=\"num\"><span class=\"bar\" style=\"width: {:.1}%\"></span>{}</td></tr>",
        encode_text(label),
        format_count(count),
        percentage.clamp(0.0, 100.0) * 0.6,
        format_percentage(percentage)
    )
}

fn render_income(income: &IncomeTable) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "<section id=\"income\">")?;
    writeln!(out, "<h2>Household income</h2>")?;
    writeln!(out, "<table>")?;
    writeln!(
        out,
        "<thead><tr><th>Annual household income</th><th class=\"num\">Households</th><th class=\"num\">Share</th></tr></thead>"
    )?;
    writeln!(out, "<tbody>")?;
    for row in &income.rows {
        share_row(&mut out, &row.label, row.count, row.percentage)?;
    }
    writeln!(
        out,
        "<tr class=\"total\"><td>Total</td><td class=\"num\">{}</td><td></td></tr>",
        format_count(income.total)
    )?;
    writeln!(out, "</tbody>")?;
    writeln!(out, "</table>")?;
    if !income.excluded.is_empty() {
        let excluded: Vec<String> = income
            .excluded
            .iter()
            .map(|label| encode_text(label).into_owned())
            .collect();
        writeln!(
            out,
            "<p class=\"note\">Excluded from the table: {}.</p>",
            excluded.join(", ")
        )?;
    }
    writeln!(out, "</section>")?;
    Ok(out)
}

fn render_category(category: &CategoryTable) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "<section>")?;
    writeln!(out, "<h2>{}</h2>", encode_text(&category.title))?;
    writeln!(out, "<table>")?;
    writeln!(
        out,
        "<thead><tr><th>Category</th><th class=\"num\">Count</th><th class=\"num\">Share</th></tr></thead>"
    )?;
    writeln!(out, "<tbody>")?;
    for row in &category.rows {
        share_row(&mut out, &row.label, row.count, row.percentage)?;
    }
    writeln!(
        out,
        "<tr class=\"total\"><td>Total</td><td class=\"num\">{}</td><td></td></tr>",
        format_count(category.total)
    )?;
    writeln!(out, "</tbody>")?;
    writeln!(out, "</table>")?;
    writeln!(out, "</section>")?;
    Ok(out)
}

fn render_age_sex(age_sex: &AgeSexTable) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "<section id=\"age-sex\">")?;
    writeln!(out, "<h2>Age and sex</h2>")?;
    writeln!(out, "<table>")?;
    writeln!(
        out,
        "<thead><tr><th>Age</th><th class=\"num\">Male</th><th class=\"num\">Female</th><th class=\"num\">Persons</th><th class=\"num\">Share</th></tr></thead>"
    )?;
    writeln!(out, "<tbody>")?;
    for row in &age_sex.rows {
        writeln!(
            out,
            "<tr><td>{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td></tr>",
            encode_text(&row.label),
            format_count(row.male),
            format_count(row.female),
            format_count(row.total),
            format_percentage(row.total_pct)
        )?;
    }
    writeln!(
        out,
        "<tr class=\"total\"><td>Total</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td></td></tr>",
        format_count(age_sex.male_total),
        format_count(age_sex.female_total),
        format_count(age_sex.total)
    )?;
    writeln!(out, "</tbody>")?;
    writeln!(out, "</table>")?;
    if let Some(ratio) = age_sex.sex_ratio {
        writeln!(
            out,
            "<p class=\"note\">Sex ratio: {ratio:.2} males per 100 females.</p>"
        )?;
    }
    writeln!(out, "</section>")?;
    Ok(out)
}
