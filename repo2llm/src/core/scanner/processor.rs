// src/core/scanner/processor.rs
use crate::core::ignore::{IncludeFilter, Matcher, PatternSet};
use crate::core::scanner::walker::Walker;
use crate::error::ProcessError;
use crate::formatters::RendererRegistry;
use crate::models::{CandidateFile, RepoConfig, RepoDigest};
use std::fs;
use std::io;
use tracing::{debug, info, warn};

/// Turns a configured repository into a single wrapped document.
#[derive(Debug, Clone)]
pub struct RepoProcessor {
    config: RepoConfig,
    matcher: Matcher,
    renderers: RendererRegistry,
}

impl RepoProcessor {
    /// Builds the matcher and the default renderer registry for `config`.
    #[inline]
    #[must_use]
    pub fn new(config: RepoConfig) -> Self {
        let patterns = PatternSet::classify(config.ignore_patterns());
        let include = IncludeFilter::new(config.include_patterns().into_iter().flatten());

        Self {
            config,
            matcher: Matcher::new(patterns, include),
            renderers: RendererRegistry::default(),
        }
    }

    /// Replaces the renderer registry.
    #[inline]
    #[must_use]
    pub fn with_renderers(mut self, renderers: RendererRegistry) -> Self {
        self.renderers = renderers;
        self
    }

    /// Walks the repository and renders every eligible file in traversal order.
    ///
    /// Unlistable directories and unreadable files do not stop the run; each
    /// one leaves an inline diagnostic in the output instead. Files that are not
    /// valid UTF-8, or that the generic renderer judges to be binary, are
    /// skipped silently.
    ///
    /// # Returns
    ///
    /// * The assembled [`RepoDigest`], whose `files()` lists the rendered paths
    #[inline]
    #[must_use]
    pub fn process_repository(&self) -> RepoDigest {
        let walker = Walker::new(self.config.root_dir(), &self.matcher);
        let digest = self.assemble(walker.scan());

        info!(
            root = %self.config.root_dir().display(),
            files = digest.file_count(),
            "Processed repository"
        );
        digest
    }

    /// Renders a stream of walk results in order, turning errors into
    /// diagnostics.
    fn assemble<I>(&self, candidates: I) -> RepoDigest
    where
        I: IntoIterator<Item = Result<CandidateFile, ProcessError>>,
    {
        let mut digest = RepoDigest::new();
        for candidate in candidates {
            match candidate {
                Ok(candidate) => {
                    if let Err(err) = self.process_file(&candidate, &mut digest) {
                        warn!(error = %err, "Failed to process file");
                        digest.push_diagnostic(&err);
                    }
                }
                Err(err) => {
                    warn!(error = %err, "Failed to traverse directory");
                    digest.push_diagnostic(&err);
                }
            }
        }
        digest
    }

    fn process_file(&self, candidate: &CandidateFile, digest: &mut RepoDigest) -> Result<(), ProcessError> {
        let Some(renderer) = self.renderers.renderer_for(&candidate.absolute) else {
            debug!(path = %candidate.relative, "No renderer for file");
            return Ok(());
        };

        let content = match fs::read_to_string(&candidate.absolute) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                warn!(path = %candidate.relative, "Skipping file that is not valid UTF-8");
                return Ok(());
            }
            Err(source) => {
                return Err(ProcessError::FileRead {
                    path: candidate.relative.clone(),
                    source,
                });
            }
        };

        match renderer.render(&candidate.relative, &content) {
            Some(rendered) => digest.push_file(rendered),
            None => debug!(path = %candidate.relative, "Skipping binary file"),
        }
        Ok(())
    }
}
