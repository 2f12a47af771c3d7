// Error type for the word-ranking core.
//
// The core does no I/O, so the only way it can fail is a caller handing it
// an out-of-contract argument. Everything else (files, parsing, prompting)
// lives in the CLI and dataset layers and uses anyhow.

use thiserror::Error;

/// Result alias for core operations.
pub type Result<T> = std::result::Result<T, WordRankError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordRankError {
    /// The requested rank index was negative.
    #[error("invalid argument: N must be non-negative, got {n}")]
    InvalidArgument { n: i64 },
}
