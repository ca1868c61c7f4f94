#![allow(dead_code)]

use indoc::indoc;
use std::fs;
use std::path::Path;

/// Eleven title records ahead of the data, as TableBuilder writes them.
const EXPORT_HEADER: &str = indoc! {r#"
    "Australian Bureau of Statistics"
    "2021 Census - counting dwellings, place of enumeration"
    "HIND Total Household Income (weekly) by SA2 (UR)"
    "Counting: Dwellings Location on Census Night"
    "Filters:"
    "Default Summation","Dwellings Location on Census Night"
    "SA2 (UR)","Ballarat"
    "Copyright Commonwealth of Australia, 2022"
    "Data and material produced by the ABS"
    "Cells in this table have been randomly adjusted"
    "HIND Total Household Income (weekly)","Count"
"#};

const EXPORT_FOOTER: &str = indoc! {r#"
    "Data Source: Census of Population and Housing, 2021, TableBuilder"
    "INFO","Cells in this table have been randomly adjusted to avoid the release of confidential data."
"#};

/// 23 household income rows; 5,000 households fall in a stated range.
const INCOME_ROWS: &str = indoc! {r#"
    "Negative income",12,
    "Nil income",85,
    "$1-$149 ($1-$7,799)",40,
    "$150-$299 ($7,800-$15,599)",160,
    "$300-$399 ($15,600-$20,799)",310,
    "$400-$499 ($20,800-$25,999)",393,
    "$500-$649 ($26,000-$33,799)",420,
    "$650-$799 ($33,800-$41,599)",380,
    "$800-$999 ($41,600-$51,999)",400,
    "$1,000-$1,249 ($52,000-$64,999)",450,
    "$1,250-$1,499 ($65,000-$77,999)",350,
    "$1,500-$1,749 ($78,000-$90,999)",300,
    "$1,750-$1,999 ($91,000-$103,999)",300,
    "$2,000-$2,499 ($104,000-$129,999)",500,
    "$2,500-$2,999 ($130,000-$155,999)",400,
    "$3,000-$3,499 ($156,000-$181,999)",250,
    "$3,500-$3,999 ($182,000-$207,999)",150,
    "$4,000-$4,499 ($208,000-$233,999)",60,
    "$4,500 or more ($234,000 or more)",40,
    "Partial income stated",210,
    "All incomes not stated",300,
    "Not applicable",0,
    "Total","5,510",
"#};

const EDUCATION_ROWS: &str = indoc! {r#"
    "Postgraduate Degree Level",600,
    "Graduate Diploma and Graduate Certificate Level",200,
    "Bachelor Degree Level","1,600",
    "Advanced Diploma and Diploma Level",900,
    "Certificate III & IV Level","1,700",
    "Secondary Education - Years 10 and above",0,
    "Certificate I & II Level",0,
    "Secondary Education - Years 9 and below",0,
    "Supplementary Codes",0,
    "Not stated",450,
    "Not applicable","3,100",
    "Total","8,550",
"#};

const AGE_SEX_ROWS: &str = indoc! {r#"
    "0-4 years",310,290,
    "5-9 years",330,320,
    "10-14 years",360,340,
    "Total","1,000",950,
"#};

fn export(rows: &str) -> String {
    format!("{EXPORT_HEADER}{rows}{EXPORT_FOOTER}")
}

pub fn income_export() -> String {
    export(INCOME_ROWS)
}

pub fn education_export() -> String {
    export(EDUCATION_ROWS)
}

pub fn age_sex_export() -> String {
    export(AGE_SEX_ROWS)
}

pub const INCOME_ONLY_CONFIG: &str = indoc! {r#"
    [report]
    title = "Ballarat households"
    area = "Ballarat (SA2)"

    [income]
    file = "data/income.csv"
"#};

pub const FULL_CONFIG: &str = indoc! {r#"
    [report]
    title = "Ballarat community profile"
    area = "Ballarat (SA2)"

    [income]
    file = "data/income.csv"

    [education]
    file = "data/education.csv"
    title = "Highest qualification"
    layout = { skip_rows = 11, row_count = 12 }

    [[education.groups]]
    label = "Postgraduate"
    members = ["Postgraduate Degree Level", "Graduate Diploma and Graduate Certificate Level"]

    [age_sex]
    file = "data/age_sex.csv"
    layout = { skip_rows = 11, row_count = 4 }
"#};

/// Lay out a project directory: config at the root, exports under `data/`.
pub fn write_project(dir: &Path, config: &str) {
    let data = dir.join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("income.csv"), income_export()).unwrap();
    fs::write(data.join("education.csv"), education_export()).unwrap();
    fs::write(data.join("age_sex.csv"), age_sex_export()).unwrap();
    fs::write(dir.join("census-report.toml"), config).unwrap();
}
