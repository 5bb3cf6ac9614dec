use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WalkError {
    #[error("browser error: {0}")]
    Browser(String),

    #[error("operation timed out after {0:?}")]
    Timeout(Duration),

    #[error("unexpected page payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WalkError>;
