use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::Path;

pub const DEFAULT_CONFIG: &str = r#"# census-report configuration

[report]
title = "Census Community Profile"
# area = "Ballarat (SA2)"
# half-up or half-even; applies to every table
rounding = "half-up"

[income]
file = "data/household_income.csv"
layout = { skip_rows = 11, row_count = 23 }
thresholds = [26000, 52000, 78000, 104000, 130000, 156000, 182000, 208000, 234000]

[[income.substitutions]]
label = "Negative income"
replacement = "less than $0 (-$1 or less)"

[[income.substitutions]]
label = "Nil income"
replacement = "$0 ($0-$0)"

# [education]
# file = "data/education.csv"
# title = "Highest qualification"
# layout = { skip_rows = 11, row_count = 12 }
#
# [[education.groups]]
# label = "Postgraduate"
# members = ["Postgraduate Degree Level", "Graduate Diploma and Graduate Certificate Level"]

# [dwelling]
# file = "data/bedrooms.csv"
# title = "Bedrooms per dwelling"
# layout = { skip_rows = 11, row_count = 9 }

# [age_sex]
# file = "data/age_sex.csv"
# layout = { skip_rows = 11, row_count = 22 }

[output]
default_format = "html"
"#;

pub fn init_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    println!("Created {} configuration file", config_path.display());

    Ok(())
}
