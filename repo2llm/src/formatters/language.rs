// src/formatters/language.rs

/// Source and data formats with a dedicated renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    Python,
    JavaScript,
    TypeScript,
    Json,
    Toml,
    Yaml,
    Markdown,
}

impl Language {
    pub const ALL: [Self; 7] = [
        Self::Python,
        Self::JavaScript,
        Self::TypeScript,
        Self::Json,
        Self::Toml,
        Self::Yaml,
        Self::Markdown,
    ];

    /// File extensions, including the leading dot, handled by this language.
    #[inline]
    #[must_use]
    pub const fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Python => &[".py"],
            Self::JavaScript => &[".js", ".jsx"],
            Self::TypeScript => &[".ts", ".tsx"],
            Self::Json => &[".json"],
            Self::Toml => &[".toml"],
            Self::Yaml => &[".yaml", ".yml"],
            Self::Markdown => &[".md"],
        }
    }
}
