use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocfindError {
    #[error("Index file not found: {0}")]
    IndexNotFound(String),

    #[error("Invalid index file: {0}")]
    InvalidIndex(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
