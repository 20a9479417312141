/*!
 * Integration tests for the controller workflows behind the CLI
 */

use anyhow::Result;
use lexireader::app_config::Config;
use lexireader::app_controller::Controller;
use lexireader::text::direction::ReadingDirection;
use crate::common;

#[tokio::test]
async fn test_import_withDirectory_shouldFindTextFiles() -> Result<()> {
    common::init_logging();
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "a.txt", common::FRENCH_SAMPLE)?;
    common::create_test_file(temp_dir.path(), "sub/b.txt", &common::english_prose(300))?;
    common::create_test_file(temp_dir.path(), "ignored.md", "# not a book")?;

    let controller = Controller::with_config(Config::default())?;
    let report = controller.import(&[temp_dir.path().to_path_buf()]).await?;
    assert!(report.is_complete());
    let titles: Vec<&str> = report.documents.iter().map(|d| d.title()).collect();
    assert_eq!(titles, vec!["a", "b"]);
    Ok(())
}

#[tokio::test]
async fn test_import_withEmptyDirectory_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(Config::default())?;
    assert!(controller.import(&[temp_dir.path().to_path_buf()]).await.is_err());
    Ok(())
}

#[test]
fn test_detect_shouldReportEncodingAndDirection() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "neko.txt", common::JAPANESE_SAMPLE)?;

    let summary = Controller::with_config(Config::default())?.detect(&path)?;
    assert_eq!(summary.encoding, "UTF-8");
    assert_eq!(summary.language_code, "ja");
    assert_eq!(summary.language_name, "Japanese");
    assert_eq!(summary.direction, ReadingDirection::RightToLeft);
    assert!(summary.hypotheses.len() <= 3);
    Ok(())
}

#[test]
fn test_paginate_withTargetOverride() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "book.txt", &common::english_prose(1_000))?;
    let controller = Controller::with_config(Config::default())?;

    assert_eq!(controller.paginate(&path, None)?.len(), 1);
    assert!(controller.paginate(&path, Some(100))?.len() >= 10);
    assert_eq!(controller.paginate(&path, Some(0))?.len(), 1);
    Ok(())
}

#[test]
fn test_tap_shouldResolveWordAndLookup() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conte.txt", common::FRENCH_SAMPLE)?;
    let controller = Controller::with_config(Config::default())?;

    let outcome = controller.tap(&path, 1, 4)?.expect("a word at offset 4");
    assert_eq!(outcome.token.text, "était");
    assert_eq!(outcome.page_label, "Page 1 of 1");
    assert_eq!(
        outcome.lookup_url.as_deref(),
        Some("https://www.larousse.fr/dictionnaires/french-english/%C3%A9tait")
    );
    assert_eq!(outcome.speech.voice_language.as_deref(), Some("fr"));

    assert!(controller.tap(&path, 1, 2)?.is_none());
    assert!(controller.tap(&path, 2, 0).is_err());
    assert!(controller.tap(&path, 0, 0).is_err());
    Ok(())
}

#[test]
fn test_lookup_shouldReturnUrl() -> Result<()> {
    let controller = Controller::with_config(Config::default())?;
    assert_eq!(controller.lookup("猫", Some("ja"))?, "https://jisho.org/search/%E7%8C%AB");
    Ok(())
}
