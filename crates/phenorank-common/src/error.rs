use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhenorankError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Backend reported an error: {0}")]
    Backend(String),

    #[error("Unknown locale: {0}")]
    UnknownLocale(String),
}

pub type Result<T> = std::result::Result<T, PhenorankError>;
