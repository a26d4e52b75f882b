//! Error type for the hello flags demo.

use thiserror::Error;

/// Errors surfaced while running the demo.
#[derive(Debug, Error)]
pub enum HelloFlagsError {
    /// Command-line parsing failed.
    #[error(transparent)]
    Flags(#[from] tagflags::FlagError),
    /// Writing the greeting failed.
    #[error("failed to write greeting: {0}")]
    Io(#[from] std::io::Error),
    /// Nobody was left to greet.
    #[error("no recipients given; pass --recipient or positional names")]
    NoRecipients,
}

/// Result alias for demo operations.
pub type Result<T> = std::result::Result<T, HelloFlagsError>;
