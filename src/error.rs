//! Error types for the InHand engine.
//!
//! The calculation functions themselves are total and never fail. The errors
//! here cover loading regime configuration and looking regimes up by code.

use thiserror::Error;

/// The main error type for the InHand engine.
///
/// # Example
///
/// ```
/// use inhand_engine::error::EngineError;
///
/// let error = EngineError::RegimeNotFound {
///     code: "fy1999_00".to_string(),
/// };
/// assert_eq!(error.to_string(), "Tax regime not found: fy1999_00");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No regime with the requested code is loaded.
    #[error("Tax regime not found: {code}")]
    RegimeNotFound {
        /// The regime code that was requested.
        code: String,
    },

    /// A regime or slab table violates one of its invariants.
    #[error("Invalid tax regime '{code}': {message}")]
    InvalidRegime {
        /// The code of the offending regime.
        code: String,
        /// A description of the violated invariant.
        message: String,
    },

    /// A slab table is not a contiguous, progressive cover of `[0, ∞)`.
    #[error("Invalid slab table: {message}")]
    InvalidSlabTable {
        /// A description of the violated invariant.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
