// src/lib.rs
pub mod cli;
pub mod clipboard;
pub mod constants;
pub mod core;
pub mod error;
pub mod formatters;
pub mod models;
pub mod utils;

pub use crate::cli::{Args, build_config, run};
pub use crate::clipboard::{Clipboard, SystemClipboard};
pub use crate::core::ignore::{IncludeFilter, Matcher, PatternSet};
pub use crate::core::scanner::{RepoProcessor, Walker};
pub use crate::error::ProcessError;
pub use crate::formatters::{Renderer, RendererRegistry};
pub use crate::models::{RepoConfig, RepoDigest};
