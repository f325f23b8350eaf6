// src/core/scanner/utils.rs
use std::path::{Component, Path};

/// Expresses `path` relative to `root` using forward slashes.
///
/// Returns an empty string for the root itself and `None` for paths outside it.
/// Non-UTF-8 segments are converted lossily.
#[inline]
#[must_use]
pub fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let segments: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    Some(segments.join("/"))
}

/// Rewrites host separators so a path reads the same on every platform.
#[inline]
#[must_use]
pub fn to_forward_slashes(path: &str) -> String {
    path.replace('\\', "/")
}
