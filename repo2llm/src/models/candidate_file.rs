// src/models/candidate_file.rs
use std::path::PathBuf;

/// A regular file that survived ignore and include filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    /// Path relative to the scan root, with forward slashes.
    pub relative: String,
    pub absolute: PathBuf,
}
