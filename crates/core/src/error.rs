use thiserror::Error;

pub type LeadPulseResult<T> = Result<T, LeadPulseError>;

#[derive(Error, Debug)]
pub enum LeadPulseError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Lead store error: {0}")]
    Store(String),

    #[error("Invalid time window: {0}")]
    Window(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
