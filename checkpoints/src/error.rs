use common::difficulty::{Difficulty, ParseDifficultyError};
use crypto::Hash256;

/// Type alias for the Result returned from functions in this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for checkpoint operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Returned when a checkpoint hash is not a 64 character hex string
    #[error("Failed to parse checkpoint hash {text:?}: {source}")]
    InvalidHash {
        /// The rejected hash string
        text: String,
        /// Why it was rejected
        source: hex::FromHexError,
    },

    /// Returned when a checkpoint difficulty is not an unsigned integer
    #[error("Failed to parse difficulty checkpoint {text:?}: {source}")]
    InvalidDifficulty {
        /// The rejected difficulty string
        text: String,
        /// Why it was rejected
        source: ParseDifficultyError,
    },

    /// Returned when a height is already pinned to a different hash
    #[error("Checkpoint at height {height} already exists with hash {existing}, new hash {new} is different")]
    ConflictingHash {
        /// The contested height
        height: u64,
        /// The hash already pinned
        existing: Hash256,
        /// The hash that was refused
        new: Hash256,
    },

    /// Returned when a height is already pinned to a different cumulative difficulty
    #[error("Difficulty checkpoint at height {height} already exists with difficulty {existing}, new difficulty {new} is different")]
    ConflictingDifficulty {
        /// The contested height
        height: u64,
        /// The difficulty already pinned
        existing: Difficulty,
        /// The difficulty that was refused
        new: Difficulty,
    },

    /// Returned when a checkpoint file exists but cannot be read or written
    #[error("Checkpoint file error: {0}")]
    Io(#[from] std::io::Error),

    /// Returned when a checkpoint file is not a valid hashfile document
    #[error("Malformed checkpoint file: {0}")]
    Json(#[from] serde_json::Error),

    /// Returned by a resolver when a domain cannot be queried
    #[error("Failed to resolve TXT records for {domain}: {reason}")]
    Resolve {
        /// The queried domain
        domain: String,
        /// Resolver specific description of the failure
        reason: String,
    },
}

impl Error {
    /// Whether this error means two sources disagree about a pinned height, as opposed to
    /// one of them being malformed
    pub fn is_conflict(&self) -> bool {
        match self {
            Error::ConflictingHash { .. } | Error::ConflictingDifficulty { .. } => true,
            _ => false,
        }
    }
}
