//! Command-line flags generated from tagged configuration structs.
//!
//! Annotate a struct's fields with `#[tag(...)]`, derive [`Flags`], and
//! [`FlagsetBuilder`] registers one flag per tagged field. Parsing writes
//! straight into the struct:
//!
//! ```rust
//! use tagflags::{Flags, create_flagset};
//!
//! #[derive(Flags)]
//! struct Config {
//!     #[tag(flag = "alpha", description = "an int value")]
//!     alpha: i64,
//!     #[tag(flag = "beta", description = "some strings")]
//!     beta: Vec<String>,
//!     #[tag(flag = "gamma", hidden)]
//!     gamma: bool,
//! }
//!
//! let mut config = Config {
//!     alpha: 0,
//!     beta: vec!["defaultvalue".into()],
//!     gamma: false,
//! };
//! let mut flags = create_flagset(&mut config);
//! flags
//!     .parse(["--alpha", "10", "--beta", "b", "--beta", "b2", "--gamma"])
//!     .expect("arguments parse");
//! drop(flags);
//!
//! assert_eq!(config.alpha, 10);
//! assert_eq!(config.beta, ["b", "b2"]);
//! assert!(config.gamma);
//! ```
//!
//! Values are converted by a [`ConverterRegistry`]; types can also parse
//! themselves through [`FlagValue::self_parser`]. Sequence flags take one
//! CSV record per occurrence and accumulate across occurrences, dropping the
//! struct's default on the first one.

extern crate self as tagflags;

pub use tagflags_macros::Flags;

mod convert;
mod csv;
mod error;
mod flagset;
mod value;
mod walker;

pub use convert::{
    Converter, ConverterRegistry, FlagValue, bare_type_name, from_str_parser, resolve,
};
pub use error::{ConvertError, CsvError, FlagError, is_display_request};
pub use flagset::{Flag, FlagSet, SharedValue};
pub use value::{GenericValue, SEQUENCE_SUFFIX, Target, Value, type_name_of};
pub use walker::{
    ALIAS_SEPARATOR, ElementFilter, FieldInfo, FieldVisitor, FlagField, Flags, FlagsetBuilder,
    SKIP_NAME, TagKeys, Tags, Walker, create_flagset,
};
