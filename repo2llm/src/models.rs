// src/models.rs
pub mod candidate_file;
pub mod config_file_settings;
pub mod rendered_file;
pub mod repo_config;
pub mod repo_digest;

pub use candidate_file::CandidateFile;
pub use config_file_settings::ConfigFileSettings;
pub use rendered_file::RenderedFile;
pub use repo_config::RepoConfig;
pub use repo_digest::RepoDigest;
