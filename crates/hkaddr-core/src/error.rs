// crates/hkaddr-core/src/error.rs
use thiserror::Error;

/// Errors surfaced by the conversion pipeline.
///
/// Per-file read or parse failures are not reported through this type while
/// scanning a folder; those become [`crate::loader::SkippedFile`] entries so the
/// run can continue.
#[derive(Debug, Error)]
pub enum HkAddrError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, HkAddrError>;
