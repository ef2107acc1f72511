use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("serde_json error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("unsupported attachment content type. Expected: {expected}, Received: {received}")]
    UnsupportedContentType {
        expected: &'static str,
        received: String,
    },

    #[error("source object must not be null")]
    NullSource,

    #[error("failed to convert attachment model")]
    AttachmentConversion(#[source] Box<Error>),
}

impl Error {
    /// True for errors caused by the arguments a caller passed, as opposed to
    /// failures while re-encoding or reading data.
    pub fn is_usage_error(&self) -> bool {
        matches!(self, Error::UnsupportedContentType { .. } | Error::NullSource)
    }
}

pub type Result<T> = core::result::Result<T, Error>;
