//! Error types for the succinct dictionary.

use thiserror::Error;

/// Error variants for dictionary construction and parsing.
///
/// Query operations never fail; absence is reported through `Option` values
/// and empty result vectors.
#[derive(Debug, Error)]
pub enum Error {
    /// The builder could not assemble the dictionary. Reserved for internal
    /// failures; not reachable for any valid key list.
    #[error("build failed: {0}")]
    Build(String),

    /// A serialized buffer is truncated, inconsistent, or not this format.
    #[error("invalid format: {0}")]
    InvalidFormat(String),
}

/// A specialized Result type for dictionary operations.
pub type Result<T> = std::result::Result<T, Error>;
