/*!
 * Tests for file utility functions
 */

use anyhow::Result;
use lexireader::file_utils::FileManager;
use crate::common;

/// Test that find_files walks subdirectories and filters by extension
#[test]
fn test_find_files_withNestedDirs_shouldReturnSortedMatches() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path();
    common::create_test_file(root, "b.txt", "b")?;
    common::create_test_file(root, "a.TXT", "a")?;
    common::create_test_file(root, "notes.md", "skip")?;
    common::create_test_file(root, "nested/c.txt", "c")?;

    let files = FileManager::find_files(root, &["txt".to_string()])?;
    let names: Vec<String> = files.iter().map(|p| FileManager::title_from_path(p)).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
    Ok(())
}

/// Test that explicit files are kept regardless of extension
#[test]
fn test_collect_inputs_withFileAndDir_shouldExpandDirOnly() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path();
    let explicit = common::create_test_file(root, "readme.md", "x")?;
    common::create_test_file(root, "books/one.txt", "1")?;

    let files = FileManager::collect_inputs(&[explicit.clone(), root.join("books")], &["txt".to_string()])?;
    assert_eq!(files.len(), 2);
    assert_eq!(files[0], explicit);
    assert!(files[1].ends_with("books/one.txt"));
    Ok(())
}

#[test]
fn test_read_bytes_withMissingFile_shouldFail() {
    assert!(FileManager::read_bytes("non_existent_file.tmp").is_err());
    assert!(!FileManager::file_exists("non_existent_file.tmp"));
    assert!(FileManager::dir_exists("."));
}
