// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, error, info};
use std::io::Write;
use std::path::PathBuf;

use lexireader::app_config::{self, Config};
use lexireader::app_controller::Controller;
use lexireader::import::ImportReport;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Import text files or directories of text files
    Import {
        /// Files or directories to import
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<PathBuf>,

        /// Print the imported documents as JSON
        #[arg(long)]
        json: bool,
    },

    /// Detect the encoding, language and reading direction of a file
    Detect {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Split a file into pages
    Paginate {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Page budget in characters, zero or less keeps a single page
        #[arg(long, allow_negative_numbers = true)]
        target_chars: Option<i64>,
    },

    /// Resolve the word at a character offset of a page
    Tap {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Page number, starting at 1
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Character offset within the page
        #[arg(long)]
        offset: usize,
    },

    /// Print the lookup URL for a word
    Lookup {
        word: String,

        /// Language code of the word (e.g., 'ja', 'fr', 'ga')
        #[arg(short = 'L', long = "lang")]
        lang: Option<String>,
    },

    /// Generate shell completions for lexireader
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// lexireader - plain-text reader toolkit
///
/// Imports plain-text books, splits them into pages, detects their language
/// and reading direction, and routes words to dictionary lookups.
#[derive(Parser, Debug)]
#[command(name = "lexireader")]
#[command(version)]
#[command(about = "Plain-text reader toolkit with one-tap word lookup")]
#[command(long_about = "lexireader imports plain-text books and prepares them for reading.

EXAMPLES:
    lexireader import books/                     # Import every .txt file under books/
    lexireader import --json novel.txt           # Print the document as JSON
    lexireader detect novel.txt                  # Show encoding and language
    lexireader paginate --target-chars 500 a.txt # Split into 500-character pages
    lexireader tap novel.txt --page 2 --offset 14
    lexireader lookup 猫 --lang ja               # Print the Jisho URL for 猫
    lexireader completions bash > lexireader.bash

CONFIGURATION:
    Defaults are compiled in. Pass --config with a JSON file to override
    pagination, detection or import settings.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true, env = "LEXIREADER_CONFIG")]
    config: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(LevelFilter::Trace));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // The level is adjusted once the config is known
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "lexireader", &mut std::io::stdout());
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(level) = cli.log_level {
        config.log_level = level.into();
    }
    log::set_max_level(config.log_level.to_level_filter());

    let controller = Controller::with_config(config)?;

    if let Err(e) = run(&controller, cli.command).await {
        error!("{:#}", e);
        std::process::exit(1);
    }
    Ok(())
}

async fn run(controller: &Controller, command: Commands) -> Result<()> {
    match command {
        Commands::Import { paths, json } => {
            let report = controller.import(&paths).await?;
            print_import_report(&report, json)?;
        }
        Commands::Detect { file } => {
            let summary = controller.detect(&file)?;
            println!("Encoding:  {}", summary.encoding);
            println!("Language:  {} ({})", summary.language_name, summary.language_code);
            println!("Direction: {}", summary.direction);
            for hypothesis in &summary.hypotheses {
                println!("  {:<4} {:.3}", hypothesis.code, hypothesis.confidence);
            }
        }
        Commands::Paginate { file, target_chars } => {
            let pages = controller.paginate(&file, target_chars)?;
            let total = pages.len();
            for (index, page) in pages.iter().enumerate() {
                println!("--- Page {} of {} ---", index + 1, total);
                println!("{}", page);
            }
        }
        Commands::Tap { file, page, offset } => match controller.tap(&file, page, offset)? {
            Some(outcome) => {
                println!("{}", outcome.page_label);
                println!("Word:   {} [{}..{}]", outcome.token.text, outcome.token.start, outcome.token.end);
                match (&outcome.lookup_url, &outcome.lookup_error) {
                    (Some(url), _) => println!("Lookup: {}", url),
                    (None, Some(message)) => println!("Lookup: {}", message),
                    (None, None) => {}
                }
                if let Some(voice) = &outcome.speech.voice_language {
                    println!("Voice:  {}", voice);
                }
            }
            None => info!("Nothing selectable at offset {}", offset),
        },
        Commands::Lookup { word, lang } => {
            println!("{}", controller.lookup(&word, lang.as_deref())?);
        }
        Commands::Completions { .. } => {}
    }

    Ok(())
}

fn print_import_report(report: &ImportReport, json: bool) -> Result<()> {
    if json {
        let output = serde_json::to_string_pretty(&report.documents)
            .context("Failed to serialize documents to JSON")?;
        println!("{}", output);
    } else {
        for document in &report.documents {
            println!(
                "{}  {} ({})  {}  {} page(s)",
                document.id(),
                document.title(),
                document.language_code(),
                document.reading_direction(),
                document.page_count()
            );
        }
    }

    for failure in &report.failures {
        error!("{}: {}", failure.name, failure.error);
    }
    Ok(())
}
