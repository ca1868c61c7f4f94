use std::io::Write;

use crate::core::{AgeSexTable, CategoryTable, CensusReport, IncomeTable};
use crate::formatting::{format_count, format_percentage};
use crate::io::output::OutputWriter;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &CensusReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_income(&report.income)?;
        if let Some(age_sex) = &report.age_sex {
            self.write_age_sex(age_sex)?;
        }
        for category in [&report.education, &report.dwelling].into_iter().flatten() {
            self.write_category(category)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &CensusReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# {}", report.title)?;
        writeln!(self.writer)?;
        if let Some(area) = &report.area {
            writeln!(self.writer, "**Area:** {area}")?;
            writeln!(self.writer)?;
        }
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_income(&mut self, income: &IncomeTable) -> anyhow::Result<()> {
        writeln!(self.writer, "## Household income")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Household income | Households | Share |")?;
        writeln!(self.writer, "|------------------|-----------:|------:|")?;
        for row in &income.rows {
            self.write_row(&row.label, row.count, row.percentage)?;
        }
        writeln!(
            self.writer,
            "| **Total** | **{}** | |",
            format_count(income.total)
        )?;
        writeln!(self.writer)?;

        if !income.excluded.is_empty() {
            writeln!(
                self.writer,
                "_Excluded from the table: {}._",
                income.excluded.join(", ")
            )?;
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_category(&mut self, category: &CategoryTable) -> anyhow::Result<()> {
        writeln!(self.writer, "## {}", category.title)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Category | Count | Share |")?;
        writeln!(self.writer, "|----------|------:|------:|")?;
        for row in &category.rows {
            self.write_row(&row.label, row.count, row.percentage)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_age_sex(&mut self, age_sex: &AgeSexTable) -> anyhow::Result<()> {
        writeln!(self.writer, "## Age and sex")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Age | Male | Female | Persons | Share |")?;
        writeln!(self.writer, "|-----|-----:|-------:|--------:|------:|")?;
        for row in &age_sex.rows {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} |",
                row.label,
                format_count(row.male),
                format_count(row.female),
                format_count(row.total),
                format_percentage(row.total_pct)
            )?;
        }
        writeln!(self.writer)?;
        if let Some(ratio) = age_sex.sex_ratio {
            writeln!(self.writer, "Sex ratio: {ratio:.2} males per 100 females.")?;
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_row(&mut self, label: &str, count: u64, percentage: f64) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "| {} | {} | {} |",
            label,
            format_count(count),
            format_percentage(percentage)
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::writers::test_support::sample_report;

    #[test]
    fn test_markdown_income_table() {
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer)
            .write_report(&sample_report())
            .unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.starts_with("# Community profile"));
        assert!(output.contains("| -$1 or less | 5 | 5.88% |"));
        assert!(output.contains("| $0-$12,999 | 60 | 70.59% |"));
        assert!(output.contains("| **Total** | **85** | |"));
        assert!(output.contains("_Excluded from the table: Not stated._"));
    }

    #[test]
    fn test_markdown_sections_in_order() {
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer)
            .write_report(&sample_report())
            .unwrap();
        let output = String::from_utf8(buffer).unwrap();

        let income = output.find("## Household income").unwrap();
        let age = output.find("## Age and sex").unwrap();
        let education = output.find("## Highest qualification").unwrap();
        assert!(income < age && age < education);
    }
}
