// src/formatters.rs
pub mod generic;
pub mod language;
pub mod registry;

pub use generic::TextSniffer;
pub use language::Language;
pub use registry::RendererRegistry;

use crate::core::scanner::utils::to_forward_slashes;
use crate::models::RenderedFile;

/// Wraps file content in the `<file name="...">` envelope.
///
/// # Arguments
///
/// * `path` - Path relative to the scan root; backslashes are rewritten to `/`
/// * `content` - The raw file text
///
/// # Returns
///
/// * The empty form `<file name="{path}"></file>\n` when `content` is blank,
///   otherwise `<file name="{path}">\n\n{content}\n</file>`
#[inline]
#[must_use]
pub fn wrap_content(path: &str, content: &str) -> String {
    let path = to_forward_slashes(path);
    if content.trim().is_empty() {
        format!("<file name=\"{path}\"></file>\n")
    } else {
        format!("<file name=\"{path}\">\n\n{content}\n</file>")
    }
}

/// A content renderer selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Renderer {
    /// Known source or data format; content is wrapped as-is.
    Language(Language),
    /// Anything else; content is wrapped only if it looks like text.
    GenericText(TextSniffer),
}

impl Renderer {
    /// Renders one file.
    ///
    /// # Returns
    ///
    /// * `None` when the generic renderer decides the content is binary
    #[inline]
    #[must_use]
    pub fn render(&self, path: &str, content: &str) -> Option<RenderedFile> {
        if let Self::GenericText(sniffer) = self {
            if !sniffer.is_text(content) {
                return None;
            }
        }

        Some(RenderedFile {
            path: to_forward_slashes(path),
            text: wrap_content(path, content),
        })
    }
}
