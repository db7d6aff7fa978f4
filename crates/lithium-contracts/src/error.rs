//! Error types for Lithium-Validation.
//!
//! Scoring itself never fails: any input text produces a `ValidationResult`.
//! Errors only arise while building an engine (bad patterns, bad config) or
//! at the collaborator boundary (missing text, malformed tool arguments).

use thiserror::Error;

/// The unified error type for the Lithium-Validation crates.
#[derive(Debug, Error)]
pub enum LithiumError {
    /// A rule pattern failed to compile or a configuration value is out of range.
    ///
    /// Fatal at construction time: no engine is built.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// The caller supplied no text to validate.
    #[error("missing input: {reason}")]
    MissingInput { reason: String },

    /// A collaborator received an argument it cannot interpret.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// An input or rule file could not be read.
    #[error("i/o error: {reason}")]
    Io { reason: String },
}

impl LithiumError {
    /// Shorthand for building an `InvalidConfiguration` error.
    pub fn config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration { reason: reason.into() }
    }
}

/// Convenience alias used throughout the Lithium-Validation crates.
pub type LithiumResult<T> = Result<T, LithiumError>;
