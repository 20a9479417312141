use anyhow::{Context, Result, anyhow};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::text::detection::{DEFAULT_MAX_HYPOTHESES, DEFAULT_SAMPLE_CHARS};
use crate::text::pagination::DEFAULT_TARGET_CHARS;

/// Application configuration module
/// This module handles the reader configuration including loading,
/// validating and defaulting of the pipeline settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Page splitting settings
    #[serde(default)]
    pub pagination: PaginationConfig,

    /// Language detection settings
    #[serde(default)]
    pub detection: DetectionConfig,

    /// Batch import settings
    #[serde(default)]
    pub import: ImportConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Pagination configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PaginationConfig {
    // @field: Page budget in grapheme clusters, non-positive keeps one page
    #[serde(default = "default_target_chars")]
    pub target_chars: i64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            target_chars: default_target_chars(),
        }
    }
}

/// Language detection configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DetectionConfig {
    // @field: Characters of the text prefix inspected
    #[serde(default = "default_sample_chars")]
    pub sample_chars: usize,

    // @field: Hypotheses reported by `detect`
    #[serde(default = "default_max_hypotheses")]
    pub max_hypotheses: usize,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            sample_chars: default_sample_chars(),
            max_hypotheses: default_max_hypotheses(),
        }
    }
}

/// Import configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ImportConfig {
    // @field: Files decoded at the same time
    #[serde(default = "default_max_concurrent_imports")]
    pub max_concurrent_imports: usize,

    // @field: Extensions picked up when walking directories
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            max_concurrent_imports: default_max_concurrent_imports(),
            extensions: default_extensions(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching `log` filter
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

fn default_target_chars() -> i64 {
    DEFAULT_TARGET_CHARS as i64
}

fn default_sample_chars() -> usize {
    DEFAULT_SAMPLE_CHARS
}

fn default_max_hypotheses() -> usize {
    DEFAULT_MAX_HYPOTHESES
}

fn default_max_concurrent_imports() -> usize {
    4
}

fn default_extensions() -> Vec<String> {
    vec!["txt".to_string()]
}

impl Config {
    /// Load a configuration file, missing sections take their defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {:?}", path))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.detection.sample_chars == 0 {
            return Err(anyhow!("detection.sample_chars must be greater than zero"));
        }

        if self.import.max_concurrent_imports == 0 {
            return Err(anyhow!("import.max_concurrent_imports must be greater than zero"));
        }

        if self.import.extensions.iter().all(|ext| ext.trim_start_matches('.').is_empty()) {
            return Err(anyhow!("import.extensions must list at least one extension"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            pagination: PaginationConfig::default(),
            detection: DetectionConfig::default(),
            import: ImportConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
