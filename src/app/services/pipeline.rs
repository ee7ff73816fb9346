//! Generation pipeline orchestration
//!
//! For every configured listing file, in order: fetch the bytes, parse them,
//! normalize the records, reject duplicate constant names, render the source
//! file and write it. Any failure aborts the whole run; a destination file is
//! only ever replaced by a complete render.

use chrono::{DateTime, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::app::models::ListingRecord;
use crate::app::services::listing_parser::{ListingParser, ParseStats};
use crate::app::services::listing_source::{ListingSource, source_from_config};
use crate::app::services::source_renderer::{RenderContext, SourceRenderer, renderer_for};
use crate::app::services::symbol_normalizer::{
    NormalizeStats, SymbolNormalizer, find_duplicate_symbols,
};
use crate::config::{Config, SourceConfig};
use crate::{Error, Result};

/// Outcome of processing one listing file
#[derive(Debug, Clone)]
pub struct SourceReport {
    /// Listing file name
    pub file_name: String,
    /// Generated package name
    pub package: String,
    /// Size of the fetched file
    pub bytes_fetched: usize,
    /// Parser statistics
    pub parse: ParseStats,
    /// Normalizer statistics
    pub normalize: NormalizeStats,
    /// Destination of the generated file
    pub output_path: PathBuf,
    /// Bytes written (zero in dry-run mode)
    pub bytes_written: u64,
}

/// Summary of a complete run
#[derive(Debug, Clone, Default)]
pub struct GenerationStats {
    /// One report per listing file, in processing order
    pub sources: Vec<SourceReport>,
    /// Wall-clock duration of the run
    pub processing_time: Duration,
    /// Whether writes were skipped
    pub dry_run: bool,
}

impl GenerationStats {
    /// Constants generated across all files
    pub fn total_listings(&self) -> usize {
        self.sources.iter().map(|s| s.normalize.kept).sum()
    }

    /// Bytes written across all files
    pub fn total_bytes_written(&self) -> u64 {
        self.sources.iter().map(|s| s.bytes_written).sum()
    }
}

/// Runs the fetch, parse, normalize, render and write stages
#[derive(Debug)]
pub struct ListingPipeline {
    config: Config,
    source: Arc<dyn ListingSource>,
    renderer: Box<dyn SourceRenderer>,
    normalizer: SymbolNormalizer,
    show_progress: bool,
}

impl ListingPipeline {
    /// Build a pipeline with the source and renderer selected by `config`
    pub fn new(config: Config) -> Self {
        let source = source_from_config(&config.transfer);
        let renderer = renderer_for(config.output.language);
        let normalizer = SymbolNormalizer::new(&config.normalization);
        Self {
            config,
            source,
            renderer,
            normalizer,
            show_progress: false,
        }
    }

    /// Replace the listing source
    pub fn with_source(mut self, source: Arc<dyn ListingSource>) -> Self {
        self.source = source;
        self
    }

    /// Show a spinner while each file is processed
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Process every configured listing file sequentially
    pub async fn run(&self) -> Result<GenerationStats> {
        let start_time = Instant::now();
        let generated_at = Utc::now();

        info!(
            "Generating {} package(s) from {}",
            self.config.sources.len(),
            self.source.describe()
        );

        let mut stats = GenerationStats {
            dry_run: self.config.output.dry_run,
            ..Default::default()
        };

        for source in &self.config.sources {
            let report = self.process_source(source, generated_at).await?;
            stats.sources.push(report);
        }

        stats.processing_time = start_time.elapsed();
        Ok(stats)
    }

    /// Run every stage for a single listing file
    pub async fn process_source(
        &self,
        source: &SourceConfig,
        generated_at: DateTime<Utc>,
    ) -> Result<SourceReport> {
        let progress = self.create_spinner(&source.file_name);

        set_message(&progress, format!("Fetching {}", source.file_name));
        let data = self.fetch(&source.file_name).await?;

        set_message(&progress, format!("Parsing {}", source.file_name));
        let parser = ListingParser::new(&source.file_name);
        let parsed = parser.parse_bytes::<ListingRecord>(&data)?;
        self.check_parse(parser.file_name(), &parsed.stats)?;

        set_message(&progress, format!("Normalizing {}", source.file_name));
        let normalized = self.normalizer.normalize(parsed.records);
        self.check_duplicates(&source.package, &normalized.listings)?;

        set_message(&progress, format!("Rendering package {}", source.package));
        let context = RenderContext {
            package: &source.package,
            source_file: &source.file_name,
            generated_at,
        };
        let rendered = self.renderer.render(&context, &normalized.listings)?;

        let output_path = self
            .renderer
            .output_path(&self.config.output.root(), &source.package);

        let bytes_written = if self.config.output.dry_run {
            info!(
                "Dry run: would write {} constants to {}",
                normalized.listing_count(),
                output_path.display()
            );
            0
        } else {
            set_message(&progress, format!("Writing {}", output_path.display()));
            write_output(&output_path, &rendered)?
        };

        if let Some(pb) = progress {
            pb.finish_and_clear();
        }

        info!(
            "Package {}: {} constants from {}",
            source.package,
            normalized.listing_count(),
            source.file_name
        );

        Ok(SourceReport {
            file_name: source.file_name.clone(),
            package: source.package.clone(),
            bytes_fetched: data.len(),
            parse: parsed.stats,
            normalize: normalized.stats,
            output_path,
            bytes_written,
        })
    }

    /// Fetch on the blocking pool; sources do synchronous network and file I/O
    async fn fetch(&self, file_name: &str) -> Result<Vec<u8>> {
        let source = Arc::clone(&self.source);
        let name = file_name.to_string();

        tokio::task::spawn_blocking(move || source.fetch(&name))
            .await
            .map_err(|e| Error::transfer(file_name, "complete the fetch task", e))?
    }

    fn check_parse(&self, file_name: &str, stats: &ParseStats) -> Result<()> {
        if !stats.is_clean() {
            let first = stats.errors.first().cloned().unwrap_or_default();
            return Err(Error::decode_failed(file_name, stats.rows_failed, first));
        }

        if self.config.normalization.strict_coercion {
            if let Some(first) = stats.coercion_issues.first() {
                return Err(Error::coercion_failed(
                    file_name,
                    stats.coercion_failures(),
                    first.to_string(),
                ));
            }
        }

        Ok(())
    }

    fn check_duplicates(&self, package: &str, listings: &[ListingRecord]) -> Result<()> {
        let duplicates = find_duplicate_symbols(listings);
        if duplicates.is_empty() {
            return Ok(());
        }

        for duplicate in &duplicates {
            warn!(
                "Package {}: constant {} is shared by {} listings ({})",
                package,
                duplicate.symbol,
                duplicate.count(),
                duplicate
                    .positions
                    .iter()
                    .map(|&i| listings[i].symbol.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }

        if self.config.normalization.allow_duplicates {
            return Ok(());
        }

        let first = &duplicates[0];
        Err(Error::duplicate_symbol(package, &first.symbol, first.count()))
    }

    fn create_spinner(&self, file_name: &str) -> Option<ProgressBar> {
        if !self.show_progress {
            return None;
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message(format!("Processing {}", file_name));
        Some(pb)
    }
}

fn set_message(progress: &Option<ProgressBar>, message: String) {
    debug!("{}", message);
    if let Some(pb) = progress {
        pb.set_message(message);
    }
}

/// Write a generated file in one step
///
/// The text goes to a temporary file next to the destination, which is then
/// renamed over it, so readers never observe a partially written file.
pub fn write_output(path: &Path, contents: &str) -> Result<u64> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    std::fs::create_dir_all(parent).map_err(|e| {
        Error::io(
            format!("Failed to create output directory {}", parent.display()),
            e,
        )
    })?;

    let mut temp_file = tempfile::NamedTempFile::new_in(parent).map_err(|e| {
        Error::io(
            format!("Failed to create temporary file in {}", parent.display()),
            e,
        )
    })?;

    temp_file
        .write_all(contents.as_bytes())
        .and_then(|_| temp_file.as_file().sync_all())
        .map_err(|e| Error::io(format!("Failed to write {}", path.display()), e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        temp_file
            .as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(|e| Error::io(format!("Failed to set permissions on {}", path.display()), e))?;
    }

    temp_file
        .persist(path)
        .map_err(|e| Error::io(format!("Failed to replace {}", path.display()), e.error))?;

    debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(contents.len() as u64)
}
