// src/core/ignore/loader.rs
use crate::constants::CONFIG_FILE_NAME;
use crate::error::ProcessError;
use crate::models::ConfigFileSettings;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Looks for a `.repo2llm` file in `dir` and then in each parent directory.
///
/// # Arguments
///
/// * `dir` - The directory to start searching from. It does not need to exist.
///
/// # Returns
///
/// * `Some(path)` of the first config file found, or `None` once the filesystem
///   root has been checked
#[inline]
#[must_use]
pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
    let mut current_dir = dir.to_path_buf();
    let mut visited = HashSet::new();

    while !visited.contains(&current_dir) {
        visited.insert(current_dir.clone());

        let config_file = current_dir.join(CONFIG_FILE_NAME);
        if config_file.is_file() {
            debug!(path = %config_file.display(), "Found config file");
            return Some(config_file);
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => break,
        }
    }

    None
}

/// Parses config file content: one pattern per line, surrounding whitespace
/// removed, blank lines and `#` comments skipped.
#[inline]
#[must_use]
pub fn parse_config(content: &str) -> ConfigFileSettings {
    let ignore = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_owned)
        .collect();

    ConfigFileSettings { ignore }
}

/// Reads and parses a config file.
///
/// # Errors
///
/// Returns [`ProcessError::ConfigFile`] if the file cannot be read or is not valid UTF-8.
#[inline]
pub fn load_config_file(path: &Path) -> Result<ConfigFileSettings, ProcessError> {
    let content = fs::read_to_string(path).map_err(|source| ProcessError::ConfigFile {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_config(&content))
}

/// Finds and loads the nearest config file for a scan root.
///
/// # Arguments
///
/// * `dir` - The scan root; the search walks upwards from here
///
/// # Returns
///
/// * `Ok(None)` when no config file exists in `dir` or any ancestor
///
/// # Errors
///
/// Returns an error if a config file is found but cannot be read.
#[inline]
pub fn load_ignore_patterns(dir: &Path) -> Result<Option<ConfigFileSettings>, ProcessError> {
    let Some(path) = find_config_file(dir) else {
        return Ok(None);
    };

    let settings = load_config_file(&path)?;
    info!(
        path = %path.display(),
        patterns = settings.ignore.len(),
        "Loaded ignore patterns from config file"
    );
    Ok(Some(settings))
}
