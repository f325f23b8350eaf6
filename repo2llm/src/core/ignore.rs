// src/core/ignore.rs
pub mod loader;
pub mod matcher;
pub mod patterns;

pub use loader::{find_config_file, load_config_file, load_ignore_patterns, parse_config};
pub use matcher::{IncludeFilter, Matcher};
pub use patterns::{DirToken, GlobPattern, PatternSet, is_glob};
