//! Core engine types: RNG, configuration, errors.
//!
//! Everything else in the crate builds on these.

pub mod rng;
pub mod config;
pub mod error;

pub use rng::GameRng;
pub use config::MatchConfig;
pub use error::{MatchError, Result};
