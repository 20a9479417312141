/*!
 * Common test utilities for the lexireader test suite
 */

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tempfile::TempDir;

static INIT_LOGGING: Once = Once::new();

/// Route `log` output through env_logger, controlled by RUST_LOG
pub fn init_logging() {
    INIT_LOGGING.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    create_test_bytes(dir, filename, content.as_bytes())
}

/// Creates a test file with raw bytes, for non UTF-8 encodings
pub fn create_test_bytes(dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, bytes)?;
    Ok(file_path)
}

/// English text of at least `chars` characters, one short sentence per line
pub fn english_prose(chars: usize) -> String {
    const LINE: &str = "The reader turned the page slowly.\n";
    let mut text = String::with_capacity(chars + LINE.len());
    while text.len() < chars {
        text.push_str(LINE);
    }
    text
}

pub const JAPANESE_SAMPLE: &str = "吾輩は猫である。名前はまだ無い。\nどこで生れたかとんと見当がつかぬ。\n何でも薄暗いじめじめした所でニャーニャー泣いていた事だけは記憶している。";

pub const FRENCH_SAMPLE: &str = "Il était une fois une petite fille qui vivait dans la forêt avec sa mère.\n\
Elle allait souvent chez sa grand-mère pour lui porter des gâteaux et du beurre.";
