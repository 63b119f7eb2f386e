use thiserror::Error;

#[derive(Debug, Error)]
pub enum EsgError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, EsgError>;
