use anyhow::{Context, Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::app_config::Config;
use crate::document::Document;
use crate::file_utils::FileManager;
use crate::import::{ImportReport, ImportService, ImportSource};
use crate::language_utils;
use crate::lookup;
use crate::reader::ReadingSession;
use crate::text::decoder;
use crate::text::detection::{LanguageDetector, LanguageHypothesis};
use crate::text::direction::{self, ReadingDirection};
use crate::text::tokenizer::Token;
use crate::word_actions::SpeechRequest;

// @module: Application controller for the command-line workflows

/// Result of the `detect` workflow
#[derive(Debug, Clone, Serialize)]
pub struct DetectionSummary {
    pub encoding: String,
    pub language_code: String,
    pub language_name: String,
    pub direction: ReadingDirection,
    pub hypotheses: Vec<LanguageHypothesis>,
}

/// Result of the `tap` workflow
#[derive(Debug, Clone, Serialize)]
pub struct TapOutcome {
    pub page_label: String,
    pub token: Token,
    pub lookup_url: Option<String>,
    pub lookup_error: Option<String>,
    pub speech: SpeechRequest,
}

/// Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Import pipeline built from the configuration
    service: ImportService,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        let service = ImportService::from_config(&config);
        Ok(Self { config, service })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Import files and directories with a progress bar
    pub async fn import(&self, inputs: &[PathBuf]) -> Result<ImportReport> {
        let start_time = std::time::Instant::now();
        let files = FileManager::collect_inputs(inputs, &self.config.import.extensions)?;
        if files.is_empty() {
            return Err(anyhow!("No text files found in {:?}", inputs));
        }
        info!("Importing {} file(s)", files.len());

        let progress_bar = ProgressBar::new(files.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%)"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("█▓▒░"));
        progress_bar.set_message("Importing");

        let bar = progress_bar.clone();
        let report = self
            .service
            .import_paths_with_progress(&files, move |done, _| bar.set_position(done as u64))
            .await;
        progress_bar.finish_and_clear();

        info!(
            "Import finished in {}: {} document(s), {} failure(s)",
            Self::format_duration(start_time.elapsed()),
            report.documents.len(),
            report.failures.len()
        );
        Ok(report)
    }

    /// Decode one file and report its encoding and language hypotheses
    pub fn detect(&self, path: &Path) -> Result<DetectionSummary> {
        let bytes = FileManager::read_bytes(path)?;
        let decoded = decoder::decode(&bytes).with_context(|| format!("Failed to decode {:?}", path))?;

        let detector = LanguageDetector::with_sample_chars(self.config.detection.sample_chars);
        let language_code = detector.dominant_language(&decoded.text);
        let hypotheses = detector.hypotheses(&decoded.text, self.config.detection.max_hypotheses);
        let language_code = language_utils::normalize_language_tag(&language_code);
        let language_name =
            language_utils::get_language_name(&language_code).unwrap_or_else(|_| "Undetermined".to_string());

        Ok(DetectionSummary {
            encoding: decoded.encoding.to_string(),
            direction: direction::resolve(&language_code),
            language_code,
            language_name,
            hypotheses,
        })
    }

    /// Import one file, optionally with a different page budget
    pub fn load_document(&self, path: &Path, target_chars: Option<i64>) -> Result<Document> {
        let service = match target_chars {
            Some(target) => {
                let mut config = self.config.clone();
                config.pagination.target_chars = target;
                ImportService::from_config(&config)
            }
            None => self.service.clone(),
        };

        let bytes = FileManager::read_bytes(path)?;
        let source = ImportSource::new(FileManager::title_from_path(path), bytes);
        let document = service.build_document(&source)?;
        debug!("Loaded {:?} with {} page(s)", path, document.page_count());
        Ok(document)
    }

    /// Split one file into pages
    pub fn paginate(&self, path: &Path, target_chars: Option<i64>) -> Result<Vec<String>> {
        Ok(self.load_document(path, target_chars)?.pages().to_vec())
    }

    /// Resolve the word at `offset` of a one-based `page` and route it
    pub fn tap(&self, path: &Path, page: usize, offset: usize) -> Result<Option<TapOutcome>> {
        let document = self.load_document(path, None)?;
        let mut session = ReadingSession::new(&document);
        let index = page.checked_sub(1).ok_or_else(|| anyhow!("Pages are numbered from 1"))?;
        if !session.go_to_page(index) {
            return Err(anyhow!(
                "Page {} is out of range, the document has {} page(s)",
                page,
                session.page_count()
            ));
        }

        if session.select(offset).is_none() {
            warn!("No word at offset {} of page {}", offset, page);
            return Ok(None);
        }

        let (Some(token), Some(selection)) = (session.highlight().cloned(), session.selection()) else {
            return Ok(None);
        };
        let (lookup_url, lookup_error) = match selection.lookup_url() {
            Ok(url) => (Some(url.to_string()), None),
            Err(e) => {
                warn!("{}", e);
                (None, Some(e.user_message().to_string()))
            }
        };

        Ok(Some(TapOutcome {
            page_label: session.page_label(),
            token,
            lookup_url,
            lookup_error,
            speech: selection.speech_request(),
        }))
    }

    /// Lookup URL for a word
    pub fn lookup(&self, word: &str, language_code: Option<&str>) -> Result<String> {
        let url = lookup::route(word, language_code).map_err(|e| anyhow!("{}: {}", e.user_message(), e))?;
        Ok(url.to_string())
    }

    // Format duration in a human-readable format
    pub fn format_duration(duration: Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
