//! Crate error type.
//!
//! Only genuinely invalid input surfaces as an error. Anomalies the game
//! recovers from (corrupt stored scores, flips while locked, stale reverts)
//! are logged and absorbed where they happen.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Identifier {identifier:?} appears more than once")]
    DuplicateIdentifier { identifier: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

pub type Result<T> = std::result::Result<T, MatchError>;
