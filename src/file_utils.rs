use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().is_dir()
    }

    /// Find files with one of `extensions` under a directory, sorted by path
    pub fn find_files<P: AsRef<Path>>(dir: P, extensions: &[String]) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();

        for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() && Self::has_extension(path, extensions) {
                result.push(path.to_path_buf());
            }
        }

        result.sort();
        Ok(result)
    }

    /// Expand a list of files and directories into the files to import.
    /// Files given explicitly are kept whatever their extension.
    pub fn collect_inputs(inputs: &[PathBuf], extensions: &[String]) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for input in inputs {
            if Self::dir_exists(input) {
                files.extend(Self::find_files(input, extensions)?);
            } else {
                files.push(input.clone());
            }
        }
        Ok(files)
    }

    // @checks: Case-insensitive extension match, with or without a leading dot
    pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
        let Some(ext) = path.extension() else {
            return false;
        };
        let ext = ext.to_string_lossy();
        extensions
            .iter()
            .any(|wanted| ext.eq_ignore_ascii_case(wanted.trim_start_matches('.')))
    }

    /// Read a file to raw bytes
    pub fn read_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
        fs::read(&path).with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    // @returns: File name without its extension, used as document title
    pub fn title_from_path<P: AsRef<Path>>(path: P) -> String {
        let path = path.as_ref();
        path.file_stem()
            .or_else(|| path.file_name())
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string())
    }
}
