mod common;

use census_report::config::{load_config, ExportLayout, IncomeSection, Thresholds};
use census_report::io::load_income_rows;
use census_report::{build_income_table, build_report, Error, IncomeSettings, ReportConfig, RoundingMode};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn income_rows(dir: &Path) -> Vec<census_report::RawIncomeRow> {
    let path = dir.join("income.csv");
    fs::write(&path, common::income_export()).unwrap();
    load_income_rows(&path, &ExportLayout::household_income()).unwrap()
}

#[test]
fn test_default_thresholds_coarsen_export_bands() {
    let dir = TempDir::new().unwrap();
    let rows = income_rows(dir.path());
    assert_eq!(rows.len(), 23);

    let section = IncomeSection::new("income.csv");
    let table = build_income_table(
        &rows,
        IncomeSettings {
            thresholds: &section.thresholds,
            substitutions: &section.substitutions,
            rounding: RoundingMode::HalfUp,
        },
    )
    .unwrap();

    let summary: Vec<(&str, u64, f64)> = table
        .rows
        .iter()
        .map(|r| (r.label.as_str(), r.count, r.percentage))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("$25,999 or less", 1000, 20.0),
            ("$26,000-$51,999", 1200, 24.0),
            ("$52,000-$77,999", 800, 16.0),
            ("$78,000-$103,999", 600, 12.0),
            ("$104,000-$129,999", 500, 10.0),
            ("$130,000-$155,999", 400, 8.0),
            ("$156,000-$181,999", 250, 5.0),
            ("$182,000-$207,999", 150, 3.0),
            ("$208,000-$233,999", 60, 1.2),
            ("$234,000 or more", 40, 0.8),
        ]
    );
    assert_eq!(table.total, 5000);
    assert_eq!(
        table.excluded,
        vec![
            "Partial income stated",
            "All incomes not stated",
            "Not applicable",
            "Total"
        ]
    );
}

#[test]
fn test_coarser_thresholds_merge_more_bands() {
    let dir = TempDir::new().unwrap();
    let rows = income_rows(dir.path());
    let thresholds = Thresholds::new(vec![52_000, 104_000]).unwrap();
    let section = IncomeSection::new("income.csv");

    let table = build_income_table(
        &rows,
        IncomeSettings {
            thresholds: &thresholds,
            substitutions: &section.substitutions,
            rounding: RoundingMode::HalfUp,
        },
    )
    .unwrap();

    let labels: Vec<&str> = table.rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["$51,999 or less", "$52,000-$103,999", "$104,000 or more"]
    );
    let counts: Vec<u64> = table.rows.iter().map(|r| r.count).collect();
    assert_eq!(counts, vec![2200, 1400, 1400]);
    assert_eq!(counts.iter().sum::<u64>(), table.total);
}

#[test]
fn test_without_substitutions_negative_and_nil_are_skipped() {
    let dir = TempDir::new().unwrap();
    let rows = income_rows(dir.path());
    let thresholds = Thresholds::default();

    let table = build_income_table(
        &rows,
        IncomeSettings {
            thresholds: &thresholds,
            substitutions: &[],
            rounding: RoundingMode::HalfUp,
        },
    )
    .unwrap();

    assert_eq!(table.rows[0].label, "$1-$25,999");
    assert_eq!(table.rows[0].count, 903);
    assert_eq!(table.total, 4903);
    assert!(table.excluded.contains(&"Negative income".to_string()));
    assert!(table.excluded.contains(&"Nil income".to_string()));
}

#[test]
fn test_full_report_from_config() {
    let dir = TempDir::new().unwrap();
    common::write_project(dir.path(), common::FULL_CONFIG);

    let config = load_config(&dir.path().join("census-report.toml")).unwrap();
    let report = build_report(&config).unwrap();

    assert_eq!(report.title, "Ballarat community profile");
    assert_eq!(report.area.as_deref(), Some("Ballarat (SA2)"));
    assert_eq!(report.income.total, 5000);
    assert_eq!(report.income.rows.len(), 10);

    let education = report.education.expect("education section");
    assert_eq!(education.total, 5000);
    let first: Vec<(&str, u64, f64)> = education
        .rows
        .iter()
        .take(4)
        .map(|r| (r.label.as_str(), r.count, r.percentage))
        .collect();
    assert_eq!(
        first,
        vec![
            ("Postgraduate", 800, 16.0),
            ("Bachelor Degree Level", 1600, 32.0),
            ("Advanced Diploma and Diploma Level", 900, 18.0),
            ("Certificate III & IV Level", 1700, 34.0),
        ]
    );

    assert!(report.dwelling.is_none());

    let age_sex = report.age_sex.expect("age and sex section");
    assert_eq!(age_sex.rows.len(), 3);
    assert_eq!(age_sex.male_total, 1000);
    assert_eq!(age_sex.female_total, 950);
    assert_eq!(age_sex.sex_ratio, Some(105.26));
}

#[test]
fn test_missing_export_is_reported_with_section() {
    let dir = TempDir::new().unwrap();
    let mut config = ReportConfig::new(IncomeSection::new("missing.csv"));
    config.base_dir = dir.path().to_path_buf();

    let err = build_report(&config).unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("Household income"), "{message}");
    assert!(message.contains("missing.csv"), "{message}");
}

#[test]
fn test_short_export_is_a_layout_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("income.csv");
    fs::write(&path, common::income_export()).unwrap();

    let err = load_income_rows(&path, &ExportLayout::new(11, 40)).unwrap_err();
    assert!(matches!(err, Error::Layout { .. }), "{err:?}");
}

#[test]
fn test_malformed_income_label_fails_the_report() {
    let dir = TempDir::new().unwrap();
    let export = common::income_export().replace("($52,000-$64,999)", "($64,999-$52,000)");
    let path = dir.path().join("income.csv");
    fs::write(&path, export).unwrap();

    let rows = load_income_rows(&path, &ExportLayout::household_income()).unwrap();
    let section = IncomeSection::new("income.csv");
    let err = build_income_table(
        &rows,
        IncomeSettings {
            thresholds: &section.thresholds,
            substitutions: &section.substitutions,
            rounding: RoundingMode::HalfUp,
        },
    )
    .unwrap_err();

    match err {
        Error::Parse { label, .. } => assert_eq!(label, "$1,000-$1,249 ($64,999-$52,000)"),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_report_error_keeps_the_failing_variant() {
    let dir = TempDir::new().unwrap();
    common::write_project(dir.path(), common::INCOME_ONLY_CONFIG);
    let path = dir.path().join("data/income.csv");
    let export = fs::read_to_string(&path)
        .unwrap()
        .replace("($52,000-$64,999)", "($64,999-$52,000)");
    fs::write(&path, export).unwrap();

    let config = load_config(&dir.path().join("census-report.toml")).unwrap();
    let err = build_report(&config).unwrap_err();

    assert!(err.to_string().starts_with("Household income: "));
    match err.root_cause() {
        Error::Parse { label, .. } => assert_eq!(label, "$1,000-$1,249 ($64,999-$52,000)"),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_out_of_order_export_names_the_data_row() {
    let dir = TempDir::new().unwrap();
    // Swap two adjacent bands; the second of them is data row 11
    let export = common::income_export()
        .replace("\"$1,000-$1,249 ($52,000-$64,999)\",450,", "SWAP")
        .replace(
            "\"$1,250-$1,499 ($65,000-$77,999)\",350,",
            "\"$1,000-$1,249 ($52,000-$64,999)\",450,",
        )
        .replace("SWAP", "\"$1,250-$1,499 ($65,000-$77,999)\",350,");
    let path = dir.path().join("income.csv");
    fs::write(&path, export).unwrap();

    let rows = load_income_rows(&path, &ExportLayout::household_income()).unwrap();
    let section = IncomeSection::new("income.csv");
    let err = build_income_table(
        &rows,
        IncomeSettings {
            thresholds: &section.thresholds,
            substitutions: &section.substitutions,
            rounding: RoundingMode::HalfUp,
        },
    )
    .unwrap_err();

    assert!(matches!(err, Error::Ordering { row: 10, .. }), "{err:?}");
    assert!(err.to_string().contains("data row 11"));
}
