// src/models/config_file_settings.rs
use std::collections::BTreeSet;

/// Patterns read from a `.repo2llm` file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFileSettings {
    pub ignore: BTreeSet<String>,
}
