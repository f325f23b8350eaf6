// src/core/ignore/matcher.rs
use crate::core::ignore::patterns::{GlobPattern, PatternSet};

/// Optional allow-list applied after ignore rules. Empty means every file passes.
#[derive(Debug, Clone, Default)]
pub struct IncludeFilter {
    globs: Vec<GlobPattern>,
}

impl IncludeFilter {
    #[inline]
    #[must_use]
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut globs: Vec<GlobPattern> = patterns
            .into_iter()
            .map(|pattern| pattern.as_ref().trim().to_owned())
            .filter(|pattern| !pattern.is_empty())
            .map(|pattern| GlobPattern::new(&pattern))
            .collect();
        globs.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        globs.dedup_by(|a, b| a.as_str() == b.as_str());
        Self { globs }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.globs.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn matches(&self, relative_path: &str) -> bool {
        self.globs.is_empty() || self.globs.iter().any(|glob| glob.matches(relative_path))
    }
}

/// Decides ignore and include outcomes for paths relative to the scan root.
///
/// Paths are expected in forward-slash form with no leading `./`.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    patterns: PatternSet,
    include: IncludeFilter,
}

impl Matcher {
    #[inline]
    #[must_use]
    pub const fn new(patterns: PatternSet, include: IncludeFilter) -> Self {
        Self { patterns, include }
    }

    /// Returns `true` if the entry at `relative_path` must be skipped.
    ///
    /// The empty path (the scan root itself) is always ignored. Otherwise an
    /// entry is ignored when any of its segments hits a directory-name token,
    /// which is what makes directory ignores cover whole subtrees, or when the
    /// whole path matches an ignore glob.
    #[inline]
    #[must_use]
    pub fn should_ignore(&self, relative_path: &str) -> bool {
        if relative_path.is_empty() {
            return true;
        }

        let segments: Vec<&str> = relative_path.split('/').collect();
        if self
            .patterns
            .dir_tokens()
            .any(|token| token.matches_segments(&segments))
        {
            return true;
        }

        self.patterns
            .globs()
            .any(|glob| glob.matches(relative_path))
    }

    #[inline]
    #[must_use]
    pub fn matches_include(&self, relative_path: &str) -> bool {
        self.include.matches(relative_path)
    }
}
