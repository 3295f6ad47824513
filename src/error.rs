//! Crate-wide error type.
//!
//! Every failure is detected eagerly at construction or call time and
//! returned to the caller; no operation leaves partial state behind.

use thiserror::Error;

/// Errors produced by grid construction and surface sampling.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A node index referenced a position outside the grid.
    #[error("node index {index} out of range for grid of {len} nodes")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of nodes in the grid.
        len: usize,
    },

    /// A numeric parameter was outside its valid range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Parameter name as it appears in the API.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl Error {
    /// Shorthand for an `InvalidParameter` error.
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
