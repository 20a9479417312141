/*!
 * Tests for configuration loading and validation
 */

use anyhow::Result;
use lexireader::app_config::{Config, LogLevel};
use crate::common;

#[test]
fn test_from_file_withPartialConfig_shouldUseDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{ "import": { "max_concurrent_imports": 2 }, "log_level": "warn" }"#,
    )?;

    let config = Config::from_file(&path)?;
    assert_eq!(config.import.max_concurrent_imports, 2);
    assert_eq!(config.import.extensions, vec!["txt".to_string()]);
    assert_eq!(config.pagination.target_chars, 2000);
    assert_eq!(config.log_level, LogLevel::Warn);
    config.validate()?;
    Ok(())
}

#[test]
fn test_from_file_withMissingFile_shouldFail() {
    assert!(Config::from_file("does/not/exist.json").is_err());
}

#[test]
fn test_from_file_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "bad.json", "{ not json")?;
    assert!(Config::from_file(&path).is_err());
    Ok(())
}

#[test]
fn test_serialize_shouldRoundTripDefaults() -> Result<()> {
    let json = serde_json::to_string_pretty(&Config::default())?;
    let config: Config = serde_json::from_str(&json)?;
    assert_eq!(config, Config::default());
    Ok(())
}
