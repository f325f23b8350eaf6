// src/constants.rs

/// Name of the per-project ignore file, searched for from the scan root upwards.
pub const CONFIG_FILE_NAME: &str = ".repo2llm";

pub const DEFAULT_PREVIEW_LENGTH: usize = 200;

/// Patterns ignored on every run before config-file and command-line additions.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    // version control
    ".git",
    ".hg",
    ".svn",
    // dependency and build caches
    "node_modules",
    "__pycache__",
    ".venv",
    "venv",
    ".tox",
    ".mypy_cache",
    ".pytest_cache",
    ".ruff_cache",
    "target",
    // editors and local environment
    ".idea",
    ".vscode",
    ".env",
    ".DS_Store",
    CONFIG_FILE_NAME,
    // compiled artifacts
    "*.pyc",
    "*.pyo",
    "*.so",
    "*.dylib",
    "*.dll",
    "*.exe",
    "*.egg-info",
    "*.lock",
];
