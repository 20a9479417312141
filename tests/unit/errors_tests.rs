/*!
 * Tests for error types
 */

use lexireader::errors::{AppError, DecodeError, ImportError, LookupError};
use std::error::Error;
use std::path::PathBuf;

#[test]
fn test_importError_fileAccess_shouldExposeSource() {
    let error = ImportError::FileAccess {
        path: PathBuf::from("missing.txt"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    };
    assert!(error.to_string().contains("missing.txt"));
    assert!(error.source().is_some());
}

#[test]
fn test_importError_decode_shouldWrapDecodeError() {
    let error = ImportError::Decode {
        name: "book".to_string(),
        source: DecodeError::Exhausted { byte_len: 7 },
    };
    assert!(error.to_string().contains("book"));
    assert!(error.source().unwrap().to_string().contains("7 bytes"));
}

#[test]
fn test_appError_conversions() {
    let app: AppError = LookupError::Unroutable {
        word: "w".to_string(),
        reason: "bad".to_string(),
    }
    .into();
    assert!(matches!(app, AppError::Lookup(_)));

    let app: AppError = anyhow::anyhow!("boom").into();
    assert_eq!(app.to_string(), "Unknown error: boom");

    let app: AppError = std::io::Error::other("disk").into();
    assert!(matches!(app, AppError::File(_)));
}
