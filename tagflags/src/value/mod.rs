//! The adapter between the flag parser and a configuration field.
//!
//! The parser only ever deals in raw tokens. [`GenericValue`] holds a
//! mutable borrow of the field it configures together with the converter
//! for the field's element type and applies each token to the field.

use std::fmt;

use crate::convert::{self, Converter, ConverterRegistry, FlagValue};
use crate::{ConvertError, csv};

/// Suffix appended to the type name of sequence-valued flags.
pub const SEQUENCE_SUFFIX: &str = "Slice";

/// Contract a flag's value must meet for the parser.
///
/// `Display` renders the current value for help output and diagnostics.
pub trait Value: fmt::Display {
    /// Apply one raw token from the command line.
    ///
    /// # Errors
    ///
    /// Returns a [`ConvertError`] when the token cannot be converted. The
    /// underlying value is left unchanged in that case.
    fn set(&mut self, raw: &str) -> Result<(), ConvertError>;

    /// Name of the value's type, shown as the placeholder in help output.
    fn type_name(&self) -> String;
}

/// Storage a [`GenericValue`] writes through to.
#[derive(Debug)]
pub enum Target<'a, T> {
    /// A single value, replaced on every set.
    Scalar(&'a mut T),
    /// A growable sequence that accumulates across sets.
    Sequence(&'a mut Vec<T>),
}

/// Type name for `T`, with the sequence suffix when `sequence` is set.
///
/// # Examples
///
/// ```rust
/// assert_eq!(tagflags::type_name_of::<u8>(false), "u8");
/// assert_eq!(tagflags::type_name_of::<String>(true), "StringSlice");
/// ```
#[must_use]
pub fn type_name_of<T: FlagValue>(sequence: bool) -> String {
    let base = T::type_name().unwrap_or_else(convert::bare_type_name::<T>);
    if sequence {
        format!("{base}{SEQUENCE_SUFFIX}")
    } else {
        base.to_owned()
    }
}

/// Type-erasing adapter over a scalar or sequence field.
///
/// The first successful [`Value::set`] on a sequence replaces whatever the
/// field held beforehand; later sets append.
pub struct GenericValue<'a, T: FlagValue> {
    target: Target<'a, T>,
    converter: Converter<T>,
    changed: bool,
}

impl<'a, T: FlagValue> GenericValue<'a, T> {
    /// Bind `target` using the converter resolved for `T`.
    ///
    /// # Panics
    ///
    /// Panics when `T` neither parses itself nor has a converter in
    /// `registry`. This is a configuration error in the calling program.
    #[must_use]
    pub fn new(target: Target<'a, T>, registry: &ConverterRegistry) -> Self {
        let Some(converter) = convert::resolve::<T>(registry) else {
            panic!(
                "no converter available for type {}",
                std::any::type_name::<T>()
            );
        };
        Self::with_converter(target, converter)
    }

    /// Bind `target` using an explicit converter.
    #[must_use]
    pub fn with_converter(target: Target<'a, T>, converter: Converter<T>) -> Self {
        Self {
            target,
            converter,
            changed: false,
        }
    }

    /// Bind a single value.
    ///
    /// # Panics
    ///
    /// See [`GenericValue::new`].
    #[must_use]
    pub fn scalar(target: &'a mut T, registry: &ConverterRegistry) -> Self {
        Self::new(Target::Scalar(target), registry)
    }

    /// Bind a sequence.
    ///
    /// # Panics
    ///
    /// See [`GenericValue::new`].
    #[must_use]
    pub fn sequence(target: &'a mut Vec<T>, registry: &ConverterRegistry) -> Self {
        Self::new(Target::Sequence(target), registry)
    }

    /// Returns `true` once a token has been applied successfully.
    #[must_use]
    pub const fn changed(&self) -> bool {
        self.changed
    }

    /// Returns `true` when the target is a sequence.
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self.target, Target::Sequence(_))
    }
}

/// Converts every field of one CSV record, failing on the first bad field.
fn convert_record<T>(converter: &Converter<T>, raw: &str) -> Result<Vec<T>, ConvertError> {
    csv::read_record(raw)?
        .iter()
        .map(|field| converter(field.as_str()))
        .collect()
}

impl<T: FlagValue> Value for GenericValue<'_, T> {
    fn set(&mut self, raw: &str) -> Result<(), ConvertError> {
        match &mut self.target {
            Target::Sequence(target) => {
                let mut values = convert_record(&self.converter, raw)?;
                if self.changed {
                    target.append(&mut values);
                } else {
                    **target = values;
                }
            }
            Target::Scalar(target) => **target = (self.converter)(raw)?,
        }
        self.changed = true;
        Ok(())
    }

    fn type_name(&self) -> String {
        type_name_of::<T>(self.is_sequence())
    }
}

impl<T: FlagValue> fmt::Display for GenericValue<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.target {
            Target::Scalar(value) => write!(f, "{value}"),
            Target::Sequence(values) => {
                let rendered = values.iter().map(ToString::to_string);
                write!(f, "[{}]", csv::write_record(rendered))
            }
        }
    }
}

impl<T: FlagValue> fmt::Debug for GenericValue<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenericValue")
            .field("type_name", &self.type_name())
            .field("value", &self.to_string())
            .field("changed", &self.changed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
