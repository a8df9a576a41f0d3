//! Extraction pipeline: fetch → parse → walk → render → write.
//!
//! Any fatal failure aborts the run before the output file is touched.
//! The file is staged next to its destination and renamed into place.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use proptype_core::config::ExtractConfig;
use proptype_core::errors::ExtractResult;
use proptype_core::ModifierCategory;
use serde::Serialize;
use tracing::{info, warn};

use crate::codegen;
use crate::engine::types::CategorizedLiterals;
use crate::extract_categorized_literals;
use crate::fetch::{HttpFetcher, SourceFetcher};

/// Summary of a completed run.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractReport {
    pub output_path: PathBuf,
    pub bytes_written: usize,
    pub counts: Vec<(ModifierCategory, usize)>,
    pub duration_ms: u64,
}

/// Rendered output that has not been written anywhere.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub table: CategorizedLiterals,
    pub contents: String,
}

pub struct ExtractPipeline<F: SourceFetcher = HttpFetcher> {
    config: ExtractConfig,
    fetcher: F,
    provenance: Option<String>,
}

impl ExtractPipeline<HttpFetcher> {
    /// Pipeline that fetches over HTTP per `config`.
    pub fn from_config(config: ExtractConfig) -> ExtractResult<Self> {
        config.validate()?;
        let fetcher = HttpFetcher::from_config(&config)?;
        Ok(Self {
            config,
            fetcher,
            provenance: None,
        })
    }
}

impl<F: SourceFetcher> ExtractPipeline<F> {
    pub fn with_fetcher(config: ExtractConfig, fetcher: F) -> Self {
        Self {
            config,
            fetcher,
            provenance: None,
        }
    }

    /// Name the generated header after `source` instead of the configured
    /// URL, for text that did not come from that URL.
    pub fn with_provenance(mut self, source: impl Into<String>) -> Self {
        self.provenance = Some(source.into());
        self
    }

    /// Source named in the generated header.
    pub fn provenance(&self) -> &str {
        self.provenance
            .as_deref()
            .unwrap_or_else(|| self.config.effective_source_url())
    }

    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Fetch, extract and write the generated file.
    pub fn run(&self) -> ExtractResult<ExtractReport> {
        let source = self.fetch()?;
        self.run_from_source(&source)
    }

    /// Fetch and extract, returning the rendered file without writing it.
    pub fn render(&self) -> ExtractResult<Rendered> {
        let source = self.fetch()?;
        self.render_source(&source)
    }

    /// Extract from already-retrieved text and write the generated file.
    pub fn run_from_source(&self, source: &str) -> ExtractResult<ExtractReport> {
        let start = Instant::now();
        let rendered = self.render_source(source)?;

        let output_path = PathBuf::from(self.config.effective_output_path());
        write_atomically(&output_path, rendered.contents.as_bytes())?;

        let counts = rendered.table.counts();
        for (category, count) in &counts {
            info!(category = %category, count, "storing modifiers");
        }
        info!(
            path = %output_path.display(),
            bytes = rendered.contents.len(),
            "wrote schema table"
        );

        Ok(ExtractReport {
            output_path,
            bytes_written: rendered.contents.len(),
            counts,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Extract and render without touching the filesystem.
    pub fn render_source(&self, source: &str) -> ExtractResult<Rendered> {
        let table = extract_categorized_literals(source)?;
        if table.is_empty() {
            warn!("no modifier declarations found; the upstream layout may have changed");
        }
        let contents = codegen::render(&table, self.provenance());
        Ok(Rendered { table, contents })
    }

    fn fetch(&self) -> ExtractResult<String> {
        let url = self.config.effective_source_url();
        info!(url, "fetching modifier source");
        self.fetcher.fetch(url)
    }
}

/// Write `contents` to a sibling temp file, then rename over `path`.
fn write_atomically(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut staging = path.as_os_str().to_owned();
    staging.push(".tmp");
    let staging = PathBuf::from(staging);

    let result = std::fs::File::create(&staging)
        .and_then(|mut file| {
            file.write_all(contents)?;
            file.sync_all()
        })
        .and_then(|()| std::fs::rename(&staging, path));
    if result.is_err() {
        let _ = std::fs::remove_file(&staging);
    }
    result
}
