//! Helpers for classifying parser errors.

use clap::{Error as ClapError, error::ErrorKind};

use super::FlagError;

/// Returns `true` when a [`clap::Error`] corresponds to `--help` or
/// `--version`.
///
/// Clap reports these requests as errors so that entry points can call
/// [`clap::Error::exit`] and keep the zero exit status.
#[must_use]
pub fn is_display_request(err: &ClapError) -> bool {
    matches!(
        err.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    )
}

impl FlagError {
    /// Returns `true` when parsing stopped because help was requested.
    #[must_use]
    pub fn is_display_request(&self) -> bool {
        match self {
            Self::CliParsing(err) => is_display_request(err),
            _ => false,
        }
    }
}
