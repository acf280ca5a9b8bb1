use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeqCoverError {
    /// Rejected generator parameters or a malformed permutation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Propagated I/O error while writing or reading a suite.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed suite document.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SeqCoverError>;

impl SeqCoverError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        SeqCoverError::InvalidArgument(msg.into())
    }
}
