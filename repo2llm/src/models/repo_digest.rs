// src/models/repo_digest.rs
use crate::error::ProcessError;
use crate::models::RenderedFile;

const SECTION_SEPARATOR: &str = "\n";

/// The concatenated document produced by one scan, in traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoDigest {
    sections: Vec<String>,
    files: Vec<String>,
}

impl RepoDigest {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sections: Vec::new(),
            files: Vec::new(),
        }
    }

    #[inline]
    pub fn push_file(&mut self, rendered: RenderedFile) {
        self.files.push(rendered.path);
        self.sections.push(rendered.text);
    }

    /// Records an error as inline text. Diagnostics do not count as files.
    #[inline]
    pub fn push_diagnostic(&mut self, error: &ProcessError) {
        self.sections.push(error.diagnostic());
    }

    /// The full document: every section joined by a newline.
    #[inline]
    #[must_use]
    pub fn output(&self) -> String {
        self.sections.join(SECTION_SEPARATOR)
    }

    /// Relative paths of the rendered files, in output order.
    #[inline]
    #[must_use]
    pub fn files(&self) -> &[String] {
        &self.files
    }

    #[inline]
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
