// src/core/scanner/walker.rs
use crate::core::ignore::Matcher;
use crate::core::scanner::utils::relative_path;
use crate::error::ProcessError;
use crate::models::CandidateFile;
use std::path::Path;
use tracing::debug;
use walkdir::{DirEntry, FilterEntry, IntoIter, WalkDir};

type EntryPredicate<'a> = Box<dyn FnMut(&DirEntry) -> bool + 'a>;

/// Deterministic, depth-first traversal of a scan root.
///
/// Entries are visited sorted by file name at every level. Ignored directories
/// are pruned before they are read, so nothing beneath them is ever listed.
#[derive(Debug, Clone, Copy)]
pub struct Walker<'a> {
    root: &'a Path,
    matcher: &'a Matcher,
    follow_links: bool,
}

impl<'a> Walker<'a> {
    #[inline]
    #[must_use]
    pub const fn new(root: &'a Path, matcher: &'a Matcher) -> Self {
        Self {
            root,
            matcher,
            follow_links: false,
        }
    }

    /// Descend into symlinked directories. Off by default; symlinks to regular
    /// files are yielded either way.
    #[inline]
    #[must_use]
    pub const fn follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    /// Starts a new single-pass traversal.
    #[inline]
    #[must_use]
    pub fn scan(&self) -> Walk<'a> {
        let root = self.root;
        let matcher = self.matcher;
        let predicate: EntryPredicate<'a> = Box::new(move |entry: &DirEntry| {
            let keep = relative_path(root, entry.path())
                .is_some_and(|relative| !matcher.should_ignore(&relative));
            if !keep {
                debug!(path = %entry.path().display(), "Skipping ignored entry");
            }
            keep
        });

        let entries = WalkDir::new(root)
            .min_depth(1)
            .follow_links(self.follow_links)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(predicate);

        Walk {
            root,
            matcher,
            entries,
        }
    }
}

/// Lazily yields eligible files in traversal order.
///
/// Directories that cannot be listed are reported as [`ProcessError::Traversal`]
/// items; the walk then carries on with their siblings.
pub struct Walk<'a> {
    root: &'a Path,
    matcher: &'a Matcher,
    entries: FilterEntry<IntoIter, EntryPredicate<'a>>,
}

impl Iterator for Walk<'_> {
    type Item = Result<CandidateFile, ProcessError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(source) => {
                    let path = source
                        .path()
                        .and_then(|path| relative_path(self.root, path))
                        .filter(|relative| !relative.is_empty())
                        .unwrap_or_else(|| ".".to_owned());
                    return Some(Err(ProcessError::Traversal { path, source }));
                }
            };

            if !is_regular_file(&entry) {
                continue;
            }

            let Some(relative) = relative_path(self.root, entry.path()) else {
                continue;
            };
            if !self.matcher.matches_include(&relative) {
                debug!(path = %relative, "Skipping file outside include patterns");
                continue;
            }

            return Some(Ok(CandidateFile {
                relative,
                absolute: entry.into_path(),
            }));
        }
    }
}

/// Regular files, plus symlinks whose target is a regular file. Linked
/// directories are never entered unless links are followed.
fn is_regular_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}

/// Scans `root` with the default walker settings.
#[inline]
#[must_use]
pub fn scan<'a>(root: &'a Path, matcher: &'a Matcher) -> Walk<'a> {
    Walker::new(root, matcher).scan()
}
