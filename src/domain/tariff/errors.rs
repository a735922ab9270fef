//! Tariff and file error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFound | 404 |
//! | FileNotFound | 404 |
//! | AlreadyExists | 409 |
//! | InvalidFileType | 400 |
//! | FileSizeExceeded | 413 |
//! | Storage | 500 |
//! | Infrastructure | 500 |

use thiserror::Error;

use crate::domain::foundation::{DomainError, FileId, TariffId};

/// Errors raised by tariff and file management.
#[derive(Debug, Clone, Error)]
pub enum TariffError {
    #[error("tariff not found: {0}")]
    NotFound(TariffId),

    #[error("file not found: {0}")]
    FileNotFound(FileId),

    /// Another tariff already uses this name.
    #[error("tariff already exists: {name}")]
    AlreadyExists { name: String },

    /// Only PDF uploads are accepted.
    #[error("invalid file type: {content_type}")]
    InvalidFileType { content_type: String },

    #[error("file size {size} exceeds limit {limit}")]
    FileSizeExceeded { size: u64, limit: u64 },

    /// Filesystem failure in the storage adapter.
    #[error("storage error: {0}")]
    Storage(String),

    #[error("tariff infrastructure error: {0}")]
    Infrastructure(String),
}

impl TariffError {
    pub fn already_exists(name: impl Into<String>) -> Self {
        TariffError::AlreadyExists { name: name.into() }
    }

    pub fn invalid_file_type(content_type: impl Into<String>) -> Self {
        TariffError::InvalidFileType {
            content_type: content_type.into(),
        }
    }
}

impl From<DomainError> for TariffError {
    fn from(err: DomainError) -> Self {
        TariffError::Infrastructure(err.to_string())
    }
}
