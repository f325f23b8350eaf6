// src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that can occur while configuring, scanning or rendering a repository.
///
/// Only `Configuration`, `ConfigFile` and `Clipboard` abort a run. The remaining
/// variants are caught by the processor and written into the output as inline
/// diagnostics.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The scan root is missing, unreadable or not a directory.
    #[error("Invalid root directory {}: {reason}", .path.display())]
    Configuration { path: PathBuf, reason: String },

    /// A `.repo2llm` file was found but could not be read.
    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A directory could not be listed.
    #[error("Error processing {path}: {source}")]
    Traversal {
        path: String,
        #[source]
        source: walkdir::Error,
    },

    #[error("Error reading {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to access clipboard: {0}")]
    Clipboard(String),
}

impl ProcessError {
    /// Formats the error as the inline diagnostic block placed in the output.
    #[inline]
    #[must_use]
    pub fn diagnostic(&self) -> String {
        format!("\n# {self}\n")
    }
}
