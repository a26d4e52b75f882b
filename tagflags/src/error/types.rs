//! Error enums for token conversion and flag parsing.

use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

/// Failures decoding a single CSV record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CsvError {
    /// The input held no record at all.
    #[error("no CSV record in input")]
    Empty,

    /// A quote appeared inside a field that did not start with a quote.
    #[error("bare \" in non-quoted-field at column {column}")]
    BareQuote {
        /// One-based character column of the offending quote.
        column: usize,
    },

    /// A quoted field was not terminated, or was followed by stray text.
    #[error("extraneous or missing \" in quoted-field at column {column}")]
    Quote {
        /// One-based character column where the problem was detected.
        column: usize,
    },
}

/// Failures converting one token into a typed value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConvertError {
    /// The token is not a valid integer for the target width.
    #[error("invalid integer '{value}': {source}")]
    Int {
        /// Token that failed to parse.
        value: String,
        /// Underlying parse failure.
        #[source]
        source: ParseIntError,
    },

    /// The token is not a valid floating point number.
    #[error("invalid float '{value}': {source}")]
    Float {
        /// Token that failed to parse.
        value: String,
        /// Underlying parse failure.
        #[source]
        source: ParseFloatError,
    },

    /// The token is not one of the accepted boolean spellings.
    #[error("invalid boolean '{value}'")]
    Bool {
        /// Token that failed to parse.
        value: String,
    },

    /// A sequence argument was not a well-formed CSV record.
    #[error("malformed list: {0}")]
    Csv(#[from] CsvError),

    /// A custom converter or self-parsing type rejected the token.
    #[error("invalid value '{value}': {message}")]
    Invalid {
        /// Token that failed to parse.
        value: String,
        /// Explanation supplied by the converter.
        message: String,
    },
}

impl ConvertError {
    /// Builds an [`ConvertError::Invalid`] from a token and a message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagflags::ConvertError;
    ///
    /// let err = ConvertError::invalid("blue", "expected a number");
    /// assert_eq!(err.to_string(), "invalid value 'blue': expected a number");
    /// ```
    #[must_use]
    pub fn invalid(value: &str, message: impl std::fmt::Display) -> Self {
        Self::Invalid {
            value: value.to_owned(),
            message: message.to_string(),
        }
    }
}

/// Errors surfaced while parsing command-line arguments into a flag set.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FlagError {
    /// The parser rejected the arguments (unknown flag, missing value, help).
    #[error("Failed to parse command-line arguments: {0}")]
    CliParsing(#[from] Box<clap::Error>),

    /// A flag's value could not be converted into the target field.
    #[error("invalid argument \"{value}\" for \"--{flag}\" flag: {source}")]
    InvalidArgument {
        /// Name of the flag as registered.
        flag: String,
        /// Raw token handed to the flag.
        value: String,
        /// Conversion failure reported by the adapter.
        #[source]
        source: ConvertError,
    },

    /// No flag or alias with this name exists in the set.
    #[error("no such flag -{name}")]
    UnknownFlag {
        /// Name that was looked up.
        name: String,
    },
}

impl From<clap::Error> for FlagError {
    fn from(err: clap::Error) -> Self {
        Self::CliParsing(Box::new(err))
    }
}
