//! # Site Generation
//!
//! Builds a static site: the output directory is emptied, the static
//! directory (if any) is copied into it, then every markdown file under the content directory is
//! rendered through the template and written to the mirrored path with an
//! `.html` extension.
//!
//! Pages are processed one at a time in sorted path order so output and logs
//! are deterministic. A failing page either aborts the build or, with
//! `keep_going`, is logged and skipped.

use std::path::PathBuf;

use relative_path::RelativePathBuf;
use thiserror::Error;

use crate::{
    io::{self, IoError},
    page::{PageError, render_page},
};

#[derive(Debug, Error)]
pub enum SiteError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error("failed to render {path}: {source}")]
    Page {
        path: RelativePathBuf,
        source: PageError,
    },
}

/// A page that failed to render and was skipped.
#[derive(Debug)]
pub struct SkippedPage {
    pub path: RelativePathBuf,
    pub error: PageError,
}

/// What a build produced.
#[derive(Debug, Default)]
pub struct SiteReport {
    /// Number of static files copied into the output directory.
    pub static_files: usize,
    /// Output paths of generated pages, relative to the output directory.
    pub generated: Vec<RelativePathBuf>,
    pub skipped: Vec<SkippedPage>,
}

#[derive(Debug, Clone)]
pub struct SiteBuilder {
    pub content_dir: PathBuf,
    /// Copied verbatim into the output directory; skipped when `None`.
    pub static_dir: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub template: String,
    pub base_path: String,
    pub keep_going: bool,
}

impl SiteBuilder {
    pub fn new(content_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>, template: impl Into<String>) -> Self {
        Self {
            content_dir: content_dir.into(),
            static_dir: None,
            output_dir: output_dir.into(),
            template: template.into(),
            base_path: "/".to_string(),
            keep_going: false,
        }
    }

    pub fn static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }

    pub fn base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    pub fn keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }

    pub fn build(&self) -> Result<SiteReport, SiteError> {
        let mut report = SiteReport::default();

        // Every build starts from an empty output directory
        match &self.static_dir {
            Some(static_dir) => {
                report.static_files = io::copy_dir_recursive(static_dir, &self.output_dir)?;
            }
            None => io::clean_dir(&self.output_dir)?,
        }

        for source in io::scan_markdown_files(&self.content_dir)? {
            match self.generate_page(&source) {
                Ok(target) => report.generated.push(target),
                Err(SiteError::Page { path, source }) if self.keep_going => {
                    log::warn!("skipping {path}: {source}");
                    report.skipped.push(SkippedPage { path, error: source });
                }
                Err(e) => return Err(e),
            }
        }

        log::info!(
            "generated {} pages ({} skipped), copied {} static files",
            report.generated.len(),
            report.skipped.len(),
            report.static_files
        );
        Ok(report)
    }

    /// Renders one content file and writes it, returning the output path.
    fn generate_page(&self, source: &RelativePathBuf) -> Result<RelativePathBuf, SiteError> {
        let target = source.with_extension("html");
        log::info!("generating {source} -> {target}");

        let markdown = io::read_file(source, &self.content_dir)?;
        let html = render_page(&markdown, &self.template, &self.base_path).map_err(|e| {
            SiteError::Page {
                path: source.clone(),
                source: e,
            }
        })?;

        io::write_file(&target, &self.output_dir, &html)?;
        Ok(target)
    }
}
