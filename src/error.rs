use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Unknown column id: {0}")]
    UnknownColumn(String),

    #[error("Unknown arrhythmia type: {0}")]
    UnknownArrhythmia(String),

    #[error("Card source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Fetch error: {0}")]
    FetchError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
