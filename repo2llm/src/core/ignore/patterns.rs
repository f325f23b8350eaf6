// src/core/ignore/patterns.rs
use glob::{MatchOptions, Pattern};
use std::collections::{BTreeMap, BTreeSet};
use tracing::warn;

/// `*`, `?` and `[...]` never cross a `/`; matching is case-sensitive.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

const GLOB_METACHARACTERS: [char; 3] = ['*', '?', '['];

/// Returns `true` if the pattern must be matched with glob semantics rather than
/// compared segment by segment.
#[inline]
#[must_use]
pub fn is_glob(pattern: &str) -> bool {
    pattern.contains(GLOB_METACHARACTERS)
}

/// A directory-name token, compared exactly against path segments.
///
/// Tokens may span several segments (`src/nested`), in which case the segments
/// must appear contiguously in the candidate path.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DirToken {
    name: String,
    segments: Vec<String>,
    anchored: bool,
}

impl DirToken {
    /// Builds a token from a raw pattern, dropping the trailing slash.
    ///
    /// A leading `/` anchors the token to the scan root. Returns `None` when no
    /// segments remain.
    #[inline]
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let (body, anchored) = raw
            .strip_prefix('/')
            .map_or((raw, false), |stripped| (stripped, true));
        let segments: Vec<String> = body
            .split('/')
            .filter(|segment| !segment.is_empty() && *segment != ".")
            .map(str::to_owned)
            .collect();
        if segments.is_empty() {
            return None;
        }

        Some(Self {
            name: segments.join("/"),
            segments,
            anchored,
        })
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub const fn is_anchored(&self) -> bool {
        self.anchored
    }

    /// Checks the token against the ordered segments of a relative path.
    #[inline]
    #[must_use]
    pub fn matches_segments(&self, path_segments: &[&str]) -> bool {
        let same = |window: &[&str]| {
            window
                .iter()
                .zip(&self.segments)
                .all(|(candidate, token)| *candidate == token.as_str())
        };

        if self.anchored {
            return path_segments
                .get(..self.segments.len())
                .is_some_and(same);
        }
        path_segments.windows(self.segments.len()).any(same)
    }
}

/// A glob compiled once when the pattern set is built.
#[derive(Debug, Clone)]
pub struct GlobPattern {
    raw: String,
    anchored: bool,
    subtree: bool,
    compiled: Option<Pattern>,
}

impl GlobPattern {
    /// Compiles `raw`. Unparsable globs are kept but never match.
    ///
    /// A leading `/` anchors the glob to the scan root. A trailing `/` marks a
    /// directory glob, which also matches everything beneath a match.
    #[inline]
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let (body, anchored) = raw
            .strip_prefix('/')
            .map_or((raw, false), |stripped| (stripped, true));
        let trimmed = body.trim_end_matches('/');
        let subtree = trimmed.len() < body.len();
        let body = trimmed;
        let compiled = match Pattern::new(body) {
            Ok(pattern) => Some(pattern),
            Err(err) => {
                warn!(pattern = raw, error = %err, "Invalid glob pattern will never match");
                None
            }
        };

        Self {
            raw: raw.to_owned(),
            anchored,
            subtree,
            compiled,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[inline]
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.compiled.is_some()
    }

    /// Matches a forward-slash relative path.
    ///
    /// Unanchored globs also match any trailing run of the path's segments, so
    /// `*.py` matches `src/main.py` while `src/*.py` stays scoped to `src`.
    /// Directory globs are additionally tried against every ancestor of the path.
    #[inline]
    #[must_use]
    pub fn matches(&self, relative_path: &str) -> bool {
        let Some(pattern) = &self.compiled else {
            return false;
        };
        if self.matches_path(pattern, relative_path) {
            return true;
        }

        self.subtree
            && relative_path.match_indices('/').any(|(index, _)| {
                relative_path
                    .get(..index)
                    .is_some_and(|ancestor| self.matches_path(pattern, ancestor))
            })
    }

    fn matches_path(&self, pattern: &Pattern, relative_path: &str) -> bool {
        if pattern.matches_with(relative_path, MATCH_OPTIONS) {
            return true;
        }
        if self.anchored {
            return false;
        }

        relative_path.match_indices('/').any(|(index, _)| {
            relative_path
                .get(index.saturating_add(1)..)
                .is_some_and(|suffix| pattern.matches_with(suffix, MATCH_OPTIONS))
        })
    }
}

/// Ignore patterns split into exact segment tokens and whole-path globs.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    dir_tokens: BTreeSet<DirToken>,
    globs: BTreeMap<String, GlobPattern>,
}

impl PatternSet {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies every raw pattern. Duplicates collapse, including a name given
    /// both with and without its trailing slash.
    #[inline]
    #[must_use]
    pub fn classify<I, S>(raw_patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for pattern in raw_patterns {
            set.add_pattern(pattern.as_ref());
        }
        set
    }

    /// Adds a single raw pattern.
    ///
    /// Blank patterns are ignored. Patterns containing `*`, `?` or `[` become
    /// globs; everything else becomes a directory-name token.
    #[inline]
    pub fn add_pattern(&mut self, pattern: &str) {
        let pattern = pattern.trim();
        if pattern.is_empty() {
            return;
        }

        if is_glob(pattern) {
            if !self.globs.contains_key(pattern) {
                self.globs
                    .insert(pattern.to_owned(), GlobPattern::new(pattern));
            }
        } else if let Some(token) = DirToken::parse(pattern) {
            self.dir_tokens.insert(token);
        }
    }

    #[inline]
    pub fn dir_tokens(&self) -> impl Iterator<Item = &DirToken> {
        self.dir_tokens.iter()
    }

    #[inline]
    pub fn globs(&self) -> impl Iterator<Item = &GlobPattern> {
        self.globs.values()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dir_tokens.is_empty() && self.globs.is_empty()
    }
}
