//! Error types produced while converting tokens and parsing flags.

mod helpers;
mod types;

pub use helpers::is_display_request;
pub use types::{ConvertError, CsvError, FlagError};

#[cfg(test)]
mod tests;
