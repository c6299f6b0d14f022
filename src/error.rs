use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid detection: {0}")]
    InvalidDetection(String),

    #[error("unknown scene: {0}")]
    UnknownScene(String),

    #[error("detector failure: {0}")]
    Collaborator(String),
}

pub type Result<T> = std::result::Result<T, Error>;
