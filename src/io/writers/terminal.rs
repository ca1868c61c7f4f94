use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::{Cell, CellAlignment, Table};
use std::io::Write;

use crate::core::{AgeSexTable, CategoryTable, CensusReport, IncomeTable};
use crate::formatting::{
    format_count, format_percentage, ColoredFormatter, FormattingConfig, OutputFormatter,
    PlainFormatter,
};
use crate::io::output::OutputWriter;

pub struct TerminalWriter<W: Write> {
    writer: W,
    config: FormattingConfig,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, config: FormattingConfig) -> Self {
        Self { writer, config }
    }

    fn new_table(&self, header: Vec<&str>) -> Table {
        let mut table = Table::new();
        let preset = if self.config.color.should_use_color() {
            UTF8_FULL
        } else {
            ASCII_FULL
        };
        table.load_preset(preset).set_header(header);
        table
    }

    fn formatter(&self) -> Box<dyn OutputFormatter> {
        if self.config.color.should_use_color() {
            Box::new(ColoredFormatter::new(self.config))
        } else {
            Box::new(PlainFormatter)
        }
    }

    fn section(&mut self, f: &dyn OutputFormatter, title: &str, table: &Table) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", f.header(title))?;
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn income_table(&self, income: &IncomeTable) -> Table {
        let mut table = self.new_table(vec!["Household income", "Households", "Share"]);
        for row in &income.rows {
            table.add_row(vec![
                Cell::new(&row.label),
                right(format_count(row.count)),
                right(format_percentage(row.percentage)),
            ]);
        }
        table.add_row(vec![
            Cell::new("Total"),
            right(format_count(income.total)),
            right(format_percentage(if income.total > 0 { 100.0 } else { 0.0 })),
        ]);
        table
    }

    fn category_table(&self, category: &CategoryTable) -> Table {
        let mut table = self.new_table(vec![category.title.as_str(), "Count", "Share"]);
        for row in &category.rows {
            table.add_row(vec![
                Cell::new(&row.label),
                right(format_count(row.count)),
                right(format_percentage(row.percentage)),
            ]);
        }
        table
    }

    fn age_sex_table(&self, age_sex: &AgeSexTable) -> Table {
        let mut table = self.new_table(vec!["Age", "Male", "Female", "Persons", "Share"]);
        for row in &age_sex.rows {
            table.add_row(vec![
                Cell::new(&row.label),
                right(format_count(row.male)),
                right(format_count(row.female)),
                right(format_count(row.total)),
                right(format_percentage(row.total_pct)),
            ]);
        }
        table.add_row(vec![
            Cell::new("Total"),
            right(format_count(age_sex.male_total)),
            right(format_count(age_sex.female_total)),
            right(format_count(age_sex.total)),
            Cell::new(""),
        ]);
        table
    }
}

fn right(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &CensusReport) -> anyhow::Result<()> {
        let formatter = self.formatter();
        let f = formatter.as_ref();

        writeln!(self.writer, "{}", f.header(&report.title))?;
        if let Some(area) = &report.area {
            writeln!(self.writer, "{}", f.info(area))?;
        }
        writeln!(
            self.writer,
            "{}",
            f.dim(&format!(
                "Generated {}",
                report.generated_at.format("%Y-%m-%d %H:%M UTC")
            ))
        )?;
        writeln!(self.writer)?;

        let income = self.income_table(&report.income);
        self.section(f, "Household income", &income)?;

        if let Some(age_sex) = &report.age_sex {
            let table = self.age_sex_table(age_sex);
            self.section(f, "Age and sex", &table)?;
            if let Some(ratio) = age_sex.sex_ratio {
                writeln!(self.writer, "Sex ratio: {ratio:.2} males per 100 females")?;
                writeln!(self.writer)?;
            }
        }

        for category in [&report.education, &report.dwelling].into_iter().flatten() {
            let table = self.category_table(category);
            self.section(f, &category.title, &table)?;
        }

        self.writer.flush()?;
        Ok(())
    }
}
