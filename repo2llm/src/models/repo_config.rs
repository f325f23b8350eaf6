// src/models/repo_config.rs
use crate::constants::DEFAULT_IGNORE_PATTERNS;
use crate::error::ProcessError;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Settings for one repository scan.
#[derive(Debug, Clone)]
pub struct RepoConfig {
    root_dir: PathBuf,
    ignore_patterns: BTreeSet<String>,
    include_patterns: Option<BTreeSet<String>>,
}

impl RepoConfig {
    /// Validates the scan root and seeds the built-in ignore patterns.
    ///
    /// # Arguments
    ///
    /// * `root_dir` - The directory to scan; relative paths are resolved against
    ///   the current working directory
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::Configuration`] if the root does not exist, cannot
    /// be resolved, or is not a directory.
    #[inline]
    pub fn new(root_dir: impl AsRef<Path>) -> Result<Self, ProcessError> {
        let root = root_dir.as_ref();
        let invalid = |reason: String| ProcessError::Configuration {
            path: root.to_path_buf(),
            reason,
        };

        let root_dir = root
            .canonicalize()
            .map_err(|err| invalid(err.to_string()))?;
        if !root_dir.is_dir() {
            return Err(invalid("not a directory".to_owned()));
        }

        Ok(Self {
            root_dir,
            ignore_patterns: DEFAULT_IGNORE_PATTERNS
                .iter()
                .map(|pattern| (*pattern).to_owned())
                .collect(),
            include_patterns: None,
        })
    }

    /// Absolute, canonical scan root.
    #[inline]
    #[must_use]
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    #[inline]
    #[must_use]
    pub const fn ignore_patterns(&self) -> &BTreeSet<String> {
        &self.ignore_patterns
    }

    #[inline]
    #[must_use]
    pub const fn include_patterns(&self) -> Option<&BTreeSet<String>> {
        self.include_patterns.as_ref()
    }

    /// Adds patterns on top of the ones already configured.
    #[inline]
    pub fn add_ignore_patterns<I, S>(&mut self, patterns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_patterns
            .extend(patterns.into_iter().map(Into::into));
    }

    /// Replaces the include filter. An empty collection removes it.
    #[inline]
    pub fn set_include_patterns<I, S>(&mut self, patterns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns: BTreeSet<String> = patterns.into_iter().map(Into::into).collect();
        self.include_patterns = if patterns.is_empty() {
            None
        } else {
            Some(patterns)
        };
    }
}
