//! CLI error type and result alias.

use mortgage_core::types::InvalidInputError;
use thiserror::Error;

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by the command-line front end.
#[derive(Error, Debug)]
pub enum CliError {
    /// Loan parameters violated the calculator's preconditions.
    #[error("invalid loan input: {0}")]
    Input(#[from] InvalidInputError),

    /// A flag value was outside the supported set.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON output could not be serialised.
    #[error("failed to serialise output: {0}")]
    Serialisation(#[from] serde_json::Error),
}
