/*!
 * Batch import of plain-text files into paginated documents.
 *
 * Each file runs through decode, language detection and pagination on the
 * blocking thread pool. Files are processed concurrently up to the configured
 * limit and one failing file never aborts the rest of the batch.
 */

use bytes::Bytes;
use futures::stream::{self, StreamExt};
use log::{debug, info, warn};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use tokio::sync::Semaphore;

use crate::app_config::Config;
use crate::document::Document;
use crate::errors::ImportError;
use crate::file_utils::FileManager;
use crate::text::decoder;
use crate::text::detection::LanguageDetector;
use crate::text::pagination::Paginator;

/// Raw input for one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSource {
    /// Title given to the resulting document
    pub display_name: String,
    pub bytes: Bytes,
}

impl ImportSource {
    pub fn new(display_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            display_name: display_name.into(),
            bytes: bytes.into(),
        }
    }
}

/// A file of a batch that produced no document
#[derive(Debug)]
pub struct ImportFailure {
    /// Display name or path of the input
    pub name: String,
    pub error: ImportError,
}

/// Outcome of a batch, both lists in input order
#[derive(Debug, Default)]
pub struct ImportReport {
    pub documents: Vec<Document>,
    pub failures: Vec<ImportFailure>,
}

impl ImportReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn total(&self) -> usize {
        self.documents.len() + self.failures.len()
    }
}

enum ImportJob {
    Path(PathBuf),
    Source(ImportSource),
}

impl ImportJob {
    fn name(&self) -> String {
        match self {
            Self::Path(path) => path.display().to_string(),
            Self::Source(source) => source.display_name.clone(),
        }
    }
}

/// Import pipeline service
#[derive(Debug, Clone)]
pub struct ImportService {
    paginator: Paginator,
    detector: LanguageDetector,
    max_concurrent_imports: usize,
}

impl Default for ImportService {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl ImportService {
    pub fn new(paginator: Paginator, detector: LanguageDetector, max_concurrent_imports: usize) -> Self {
        Self {
            paginator,
            detector,
            max_concurrent_imports: max_concurrent_imports.max(1),
        }
    }

    /// Create a service from the pagination, detection and import settings
    pub fn from_config(config: &Config) -> Self {
        let target = usize::try_from(config.pagination.target_chars).unwrap_or(0);
        Self::new(
            Paginator::new(target),
            LanguageDetector::with_sample_chars(config.detection.sample_chars),
            config.import.max_concurrent_imports,
        )
    }

    pub fn max_concurrent_imports(&self) -> usize {
        self.max_concurrent_imports
    }

    /// Decode, detect and paginate one source synchronously
    pub fn build_document(&self, source: &ImportSource) -> Result<Document, ImportError> {
        let start_time = Instant::now();
        let decoded = decoder::decode(&source.bytes).map_err(|e| ImportError::Decode {
            name: source.display_name.clone(),
            source: e,
        })?;
        debug!("'{}': decoded as {}", source.display_name, decoded.encoding);

        let language = self.detector.dominant_language(&decoded.text);
        debug!("'{}': detected language {}", source.display_name, language);

        let pages = self.paginator.paginate(&decoded.text);
        debug!(
            "'{}': {} page(s) in {:?}",
            source.display_name,
            pages.len(),
            start_time.elapsed()
        );

        Ok(Document::new(source.display_name.clone(), &language, pages))
    }

    /// Import in-memory sources
    pub async fn import_sources(&self, sources: Vec<ImportSource>) -> ImportReport {
        self.import_sources_with_progress(sources, |_, _| {}).await
    }

    /// Import in-memory sources, reporting `(completed, total)` after each one
    pub async fn import_sources_with_progress(
        &self,
        sources: Vec<ImportSource>,
        progress_callback: impl Fn(usize, usize) + Clone + Send + 'static,
    ) -> ImportReport {
        let jobs = sources.into_iter().map(ImportJob::Source).collect();
        self.run_batch(jobs, progress_callback).await
    }

    /// Import files from disk, titled by file stem
    pub async fn import_paths(&self, paths: &[PathBuf]) -> ImportReport {
        self.import_paths_with_progress(paths, |_, _| {}).await
    }

    /// Import files from disk, reporting `(completed, total)` after each one
    pub async fn import_paths_with_progress(
        &self,
        paths: &[PathBuf],
        progress_callback: impl Fn(usize, usize) + Clone + Send + 'static,
    ) -> ImportReport {
        let jobs = paths.iter().cloned().map(ImportJob::Path).collect();
        self.run_batch(jobs, progress_callback).await
    }

    async fn run_batch(
        &self,
        jobs: Vec<ImportJob>,
        progress_callback: impl Fn(usize, usize) + Clone + Send + 'static,
    ) -> ImportReport {
        let start_time = Instant::now();
        let total = jobs.len();

        // Create a semaphore to limit concurrent imports
        let semaphore = Arc::new(Semaphore::new(self.max_concurrent_imports));
        let processed = Arc::new(AtomicUsize::new(0));

        let mut results = stream::iter(jobs.into_iter().enumerate())
            .map(|(index, job)| {
                let service = self.clone();
                let semaphore = semaphore.clone();
                let processed = processed.clone();
                let progress_callback = progress_callback.clone();

                async move {
                    let _permit = semaphore.acquire().await.ok();
                    let name = job.name();
                    let result = service.run_job(job).await;

                    let current = processed.fetch_add(1, Ordering::SeqCst) + 1;
                    progress_callback(current, total);

                    (index, name, result)
                }
            })
            .buffer_unordered(self.max_concurrent_imports)
            .collect::<Vec<_>>()
            .await;

        results.sort_by_key(|(index, _, _)| *index);

        let mut report = ImportReport::default();
        for (_, name, result) in results {
            match result {
                Ok(document) => report.documents.push(document),
                Err(error) => {
                    warn!("Skipping '{}': {}", name, error);
                    report.failures.push(ImportFailure { name, error });
                }
            }
        }

        info!(
            "Imported {} of {} file(s) in {:?}",
            report.documents.len(),
            total,
            start_time.elapsed()
        );
        report
    }

    async fn run_job(&self, job: ImportJob) -> Result<Document, ImportError> {
        let source = match job {
            ImportJob::Source(source) => source,
            ImportJob::Path(path) => {
                let bytes = tokio::fs::read(&path)
                    .await
                    .map_err(|source| ImportError::FileAccess { path: path.clone(), source })?;
                ImportSource::new(FileManager::title_from_path(&path), bytes)
            }
        };

        let name = source.display_name.clone();
        let service = self.clone();
        tokio::task::spawn_blocking(move || service.build_document(&source))
            .await
            .map_err(|e| ImportError::Task {
                name,
                message: e.to_string(),
            })?
    }
}
