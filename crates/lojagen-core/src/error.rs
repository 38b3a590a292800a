use thiserror::Error;

/// Core error type shared across lojagen crates.
#[derive(Debug, Error)]
pub enum Error {
    /// Database error or adapter failure.
    #[error("database error: {0}")]
    Db(String),
    /// Orders were requested against an empty customer or product pool.
    #[error("insufficient reference data: {0}")]
    InsufficientReferenceData(String),
    /// A presence profile failed validation or parsing.
    #[error("invalid profile: {0}")]
    InvalidProfile(String),
    /// Catch-all error for unexpected failures.
    #[error("other error: {0}")]
    Other(String),
}

/// Convenience alias for results returned by lojagen crates.
pub type Result<T> = std::result::Result<T, Error>;
