//! String-to-value converters and the registry that owns them.
//!
//! A [`ConverterRegistry`] maps a concrete type to the function that turns a
//! single command-line token into a value of that type. Types that know how
//! to parse themselves implement [`FlagValue::self_parser`] and bypass the
//! registry entirely.

mod builtins;

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::ConvertError;

/// Function converting one token into a `T`.
pub type Converter<T> = Arc<dyn Fn(&str) -> Result<T, ConvertError> + Send + Sync>;

/// Capabilities a type needs to back a flag.
///
/// Rendering uses [`fmt::Display`]. Both methods are optional: the defaults
/// defer parsing to the [`ConverterRegistry`] and derive the help type name
/// from the Rust type name.
///
/// # Examples
///
/// ```rust
/// use std::fmt;
/// use tagflags::{Converter, FlagValue, from_str_parser};
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Port(u16);
///
/// impl fmt::Display for Port {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         self.0.fmt(f)
///     }
/// }
///
/// impl std::str::FromStr for Port {
///     type Err = std::num::ParseIntError;
///     fn from_str(s: &str) -> Result<Self, Self::Err> {
///         s.parse().map(Port)
///     }
/// }
///
/// impl FlagValue for Port {
///     fn self_parser() -> Option<Converter<Self>> {
///         Some(from_str_parser())
///     }
///
///     fn type_name() -> Option<&'static str> {
///         Some("port")
///     }
/// }
/// ```
pub trait FlagValue: fmt::Display + Sized + 'static {
    /// Parser owned by the type itself. Takes precedence over any converter
    /// registered for the type.
    #[must_use]
    fn self_parser() -> Option<Converter<Self>> {
        None
    }

    /// Name shown for the flag's value in help output.
    #[must_use]
    fn type_name() -> Option<&'static str> {
        None
    }
}

/// Builds a converter from a type's [`FromStr`] implementation.
///
/// Parse failures become [`ConvertError::Invalid`] carrying the token and
/// the rendered `FromStr` error.
#[must_use]
pub fn from_str_parser<T>() -> Converter<T>
where
    T: FromStr + 'static,
    T::Err: fmt::Display,
{
    Arc::new(|raw: &str| raw.parse::<T>().map_err(|err| ConvertError::invalid(raw, err)))
}

/// Bare name of `T`: the last path segment with generic arguments removed.
///
/// # Examples
///
/// ```rust
/// assert_eq!(tagflags::bare_type_name::<String>(), "String");
/// assert_eq!(tagflags::bare_type_name::<u16>(), "u16");
/// ```
#[must_use]
pub fn bare_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let without_generics = full.split('<').next().unwrap_or(full);
    without_generics
        .rsplit("::")
        .next()
        .unwrap_or(without_generics)
}

/// Owned mapping from a type to the converter for that type.
///
/// Registration takes `&mut self`, so every converter must be in place
/// before the registry is shared with a [`crate::FlagsetBuilder`].
#[derive(Default)]
pub struct ConverterRegistry {
    converters: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl ConverterRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding converters for the integer, float,
    /// boolean, and string primitives.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        builtins::register_all(&mut registry);
        registry
    }

    /// Store `converter` for `T`, replacing any earlier registration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagflags::{ConvertError, ConverterRegistry};
    ///
    /// let mut registry = ConverterRegistry::with_builtins();
    /// registry.register::<char, _>(|raw| {
    ///     let mut chars = raw.chars();
    ///     match (chars.next(), chars.next()) {
    ///         (Some(c), None) => Ok(c),
    ///         _ => Err(ConvertError::invalid(raw, "expected one character")),
    ///     }
    /// });
    /// assert!(registry.contains::<char>());
    /// ```
    pub fn register<T, F>(&mut self, converter: F) -> &mut Self
    where
        T: 'static,
        F: Fn(&str) -> Result<T, ConvertError> + Send + Sync + 'static,
    {
        let converter: Converter<T> = Arc::new(converter);
        let previous = self
            .converters
            .insert(TypeId::of::<T>(), Box::new(converter));
        if previous.is_some() {
            tracing::debug!(
                type_name = std::any::type_name::<T>(),
                "replaced registered converter"
            );
        }
        self
    }

    /// Converter registered for `T`, if any.
    #[must_use]
    pub fn lookup<T: 'static>(&self) -> Option<Converter<T>> {
        self.converters
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.downcast_ref::<Converter<T>>())
            .cloned()
    }

    /// Returns `true` when a converter is registered for `T`.
    #[must_use]
    pub fn contains<T: 'static>(&self) -> bool {
        self.converters.contains_key(&TypeId::of::<T>())
    }

    /// Number of registered converters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.converters.len()
    }

    /// Returns `true` when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }
}

impl fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConverterRegistry")
            .field("converters", &self.converters.len())
            .finish()
    }
}

/// Converter for `T`: the type's own parser, else the registered one.
#[must_use]
pub fn resolve<T: FlagValue>(registry: &ConverterRegistry) -> Option<Converter<T>> {
    T::self_parser().or_else(|| registry.lookup::<T>())
}
