// src/formatters/registry.rs
use crate::formatters::{Language, Renderer, TextSniffer};
use std::collections::BTreeMap;
use std::path::Path;

/// Immutable lookup from file extension to renderer, built once per run.
///
/// Extensions are matched case-sensitively and include the leading dot.
#[derive(Debug, Clone, PartialEq)]
pub struct RendererRegistry {
    by_extension: BTreeMap<String, Renderer>,
    fallback: Option<Renderer>,
}

impl Default for RendererRegistry {
    /// Every [`Language`] plus the generic text renderer as fallback.
    #[inline]
    fn default() -> Self {
        let mut registry = Self::empty();
        for language in Language::ALL {
            for extension in language.extensions() {
                registry.register(extension, Renderer::Language(language));
            }
        }
        registry.with_fallback(Renderer::GenericText(TextSniffer::default()))
    }
}

impl RendererRegistry {
    /// A registry with no entries and no fallback.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            by_extension: BTreeMap::new(),
            fallback: None,
        }
    }

    /// Maps `extension` (for example `.py`) to `renderer`, replacing any
    /// previous entry.
    #[inline]
    pub fn register(&mut self, extension: &str, renderer: Renderer) {
        self.by_extension.insert(extension.to_owned(), renderer);
    }

    #[inline]
    #[must_use]
    pub fn with_fallback(mut self, renderer: Renderer) -> Self {
        self.fallback = Some(renderer);
        self
    }

    /// Resolves the renderer for a file.
    ///
    /// # Returns
    ///
    /// * The registered renderer for the file's extension, else the fallback,
    ///   else `None`, meaning the file is skipped
    #[inline]
    #[must_use]
    pub fn renderer_for(&self, path: &Path) -> Option<&Renderer> {
        path.extension()
            .and_then(|extension| extension.to_str())
            .and_then(|extension| self.by_extension.get(&format!(".{extension}")))
            .or(self.fallback.as_ref())
    }
}
