use thiserror::Error;

pub type Result<T> = std::result::Result<T, HarnessError>;

/// Framework error types
#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("Deserialization failed: {0}")]
    DeserializeFailed(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Anchor error: {0}")]
    AnchorError(String),
}

impl From<anchor_lang::error::Error> for HarnessError {
    fn from(err: anchor_lang::error::Error) -> Self {
        HarnessError::AnchorError(err.to_string())
    }
}

impl From<serde_json::Error> for HarnessError {
    fn from(err: serde_json::Error) -> Self {
        HarnessError::DeserializeFailed(err.to_string())
    }
}
