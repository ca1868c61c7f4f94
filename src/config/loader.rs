use std::fs;
use std::path::{Path, PathBuf};

use super::core::ReportConfig;
use super::validation::validate_config;
use crate::core::{Error, Result, ResultExt};

pub const CONFIG_FILE_NAME: &str = "census-report.toml";

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<ReportConfig> {
    let config = toml::from_str::<ReportConfig>(contents)?;
    validate_config(&config)?;
    Ok(config)
}

/// Load a config file; relative input paths resolve against its directory.
pub fn load_config(path: &Path) -> Result<ReportConfig> {
    let contents = fs::read_to_string(path).map_err(|e| Error::from_io(e, path))?;
    let mut config =
        parse_and_validate_config(&contents).context(format!("Loading {}", path.display()))?;

    config.base_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its parents for `census-report.toml`.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    let found = directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|path| path.is_file());

    if found.is_none() {
        log::debug!(
            "No {} found after checking {} directories",
            CONFIG_FILE_NAME,
            MAX_TRAVERSAL_DEPTH
        );
    }
    found
}
