// src/cli.rs
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

use crate::clipboard::Clipboard;
use crate::constants::DEFAULT_PREVIEW_LENGTH;
use crate::core::ignore::load_ignore_patterns;
use crate::core::scanner::RepoProcessor;
use crate::models::{RepoConfig, RepoDigest};
use crate::utils::{print_preview, print_success};

/// Copy repository contents to the clipboard for sharing with LLMs.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Root directory to process (defaults to current directory)
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Additional patterns to ignore (e.g., "*.txt", "temp/")
    #[arg(short, long)]
    pub ignore: Vec<String>,

    /// Only include files matching these patterns (e.g., "*.py", "src/*.ts")
    #[arg(short = 'n', long)]
    pub include: Vec<String>,

    /// Show preview of copied content (default)
    #[arg(long, overrides_with = "no_preview")]
    pub preview: bool,

    /// Do not show a preview
    #[arg(long, overrides_with = "preview")]
    pub no_preview: bool,

    /// Length of preview in characters
    #[arg(long, default_value_t = DEFAULT_PREVIEW_LENGTH)]
    pub preview_length: usize,
}

impl Args {
    /// Whether the preview should be printed; the later of the two flags wins.
    #[inline]
    #[must_use]
    pub const fn show_preview(&self) -> bool {
        !self.no_preview
    }
}

/// Builds the scan configuration from defaults, the nearest `.repo2llm` file
/// and the command-line patterns, in that order.
///
/// # Errors
///
/// This function may return an error if:
/// * The directory does not exist or is not a directory
/// * A config file was found but could not be read
#[inline]
pub fn build_config(args: &Args) -> Result<RepoConfig> {
    let mut config = RepoConfig::new(&args.directory)?;

    if let Some(settings) = load_ignore_patterns(config.root_dir())
        .with_context(|| format!("Failed to load ignore patterns for {}", args.directory.display()))?
    {
        config.add_ignore_patterns(settings.ignore);
    }

    config.add_ignore_patterns(args.ignore.iter().cloned());
    config.set_include_patterns(args.include.iter().cloned());
    debug!(
        root = %config.root_dir().display(),
        ignore = config.ignore_patterns().len(),
        include = config.include_patterns().map_or(0, |patterns| patterns.len()),
        "Built scan configuration"
    );
    Ok(config)
}

/// Processes the repository, copies the result and prints the summary.
///
/// # Arguments
///
/// * `args` - Parsed command-line arguments
/// * `clipboard` - Where the document is copied to
///
/// # Returns
///
/// * `Ok(RepoDigest)` - The document that was copied, with its file list
///
/// # Errors
///
/// This function may return an error if:
/// * The configuration cannot be built (see [`build_config`])
/// * The clipboard cannot be written
#[inline]
pub fn run<C: Clipboard + ?Sized>(args: &Args, clipboard: &mut C) -> Result<RepoDigest> {
    let config = build_config(args)?;
    let digest = RepoProcessor::new(config).process_repository();
    let output = digest.output();

    clipboard
        .copy(&output)
        .context("Failed to copy repository contents")?;

    print_success(digest.file_count());
    if args.show_preview() && !output.is_empty() {
        print_preview(&output, args.preview_length);
    }

    Ok(digest)
}
