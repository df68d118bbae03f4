//! Error types for xmr-export

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Chart error: {0}")]
    Chart(#[from] xmr_core::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, Error>;
