/*!
 * Integration tests for batch import
 */

use anyhow::Result;
use encoding_rs::SHIFT_JIS;
use lexireader::app_config::Config;
use lexireader::errors::ImportError;
use lexireader::import::{ImportService, ImportSource};
use lexireader::text::direction::ReadingDirection;
use lexireader::text::pagination::grapheme_len;
use crate::common;

/// One unreadable path must not abort the batch
#[tokio::test]
async fn test_import_paths_withUnreadablePath_shouldImportTheRest() -> Result<()> {
    common::init_logging();
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path();
    let french = common::create_test_file(root, "conte.txt", common::FRENCH_SAMPLE)?;
    let (sjis, _, _) = SHIFT_JIS.encode(common::JAPANESE_SAMPLE);
    let japanese = common::create_test_bytes(root, "neko.txt", &sjis)?;
    let directory = root.join("not_a_file.txt");
    std::fs::create_dir(&directory)?;

    let report = ImportService::default()
        .import_paths(&[french, directory.clone(), japanese])
        .await;

    assert_eq!(report.total(), 3);
    assert!(!report.is_complete());
    let titles: Vec<&str> = report.documents.iter().map(|d| d.title()).collect();
    assert_eq!(titles, vec!["conte", "neko"]);

    assert_eq!(report.documents[0].language_code(), "fr");
    assert_eq!(report.documents[0].reading_direction(), ReadingDirection::LeftToRight);
    assert_eq!(report.documents[1].language_code(), "ja");
    assert_eq!(report.documents[1].reading_direction(), ReadingDirection::RightToLeft);
    assert!(report.documents[1].pages()[0].starts_with("吾輩は猫である"));

    assert_eq!(report.failures.len(), 1);
    assert!(matches!(report.failures[0].error, ImportError::FileAccess { .. }));
    Ok(())
}

/// Scenario: a 50,000 character file with the default page budget
#[tokio::test]
async fn test_import_sources_withLargeBook_shouldPaginateToBudget() {
    common::init_logging();
    let text = common::english_prose(50_000);
    let report = ImportService::default()
        .import_sources(vec![ImportSource::new("book", text.into_bytes())])
        .await;

    let document = &report.documents[0];
    assert_eq!(document.language_code(), "en");
    assert!((24..=26).contains(&document.page_count()));
    assert!(document.pages().iter().all(|p| grapheme_len(p) <= 2000));
}

#[tokio::test]
async fn test_import_sources_withConfig_shouldUseConfiguredBudget() {
    let mut config = Config::default();
    config.pagination.target_chars = 100;
    config.import.max_concurrent_imports = 1;
    let service = ImportService::from_config(&config);
    assert_eq!(service.max_concurrent_imports(), 1);

    let report = service
        .import_sources(vec![
            ImportSource::new("short", common::english_prose(60).into_bytes()),
            ImportSource::new("long", common::english_prose(1_000).into_bytes()),
        ])
        .await;

    assert!(report.is_complete());
    assert_eq!(report.documents[0].page_count(), 1);
    assert!(report.documents[1].page_count() >= 10);
}

#[tokio::test]
async fn test_import_sources_withEmptyBatch_shouldReturnEmptyReport() {
    let report = ImportService::default().import_sources(Vec::new()).await;
    assert_eq!(report.total(), 0);
    assert!(report.is_complete());
}
