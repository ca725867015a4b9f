//! Единый тип ошибок публичного API.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BopError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML error: {0}")]
    Xml(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Item is not Net Trade: {found:?}")]
    TopicMismatch { found: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("non-finite balance of payments for {country} {year}")]
    NonFinite { country: String, year: i16 },
}

pub type Result<T> = std::result::Result<T, BopError>;
