//! Builder that turns a tagged configuration struct into a [`FlagSet`].

use std::ffi::OsString;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use super::register::Registrar;
use super::{FieldInfo, FieldVisitor, Flags, TagKeys, Walker};
use crate::{ConverterRegistry, FlagError, FlagSet};

/// Predicate deciding whether a named field becomes a flag.
pub trait ElementFilter {
    /// Return `false` to leave `field` out of the flag set.
    fn filter(&self, field: &FieldInfo) -> bool;
}

impl<F> ElementFilter for F
where
    F: Fn(&FieldInfo) -> bool,
{
    fn filter(&self, field: &FieldInfo) -> bool {
        self(field)
    }
}

/// Walks configuration structs and registers one flag per tagged field.
///
/// # Examples
///
/// ```rust
/// use tagflags::{Flags, FlagsetBuilder};
///
/// #[derive(Default, Flags)]
/// struct Server {
///     #[tag(flag = "port", shorthand = 'p', description = "listen port")]
///     port: u16,
///     #[tag(flag = "verbose")]
///     verbose: bool,
/// }
///
/// let mut server = Server::default();
/// let rest = FlagsetBuilder::new()
///     .program_name("server")
///     .parse(&mut server, ["-p", "8080", "--verbose", "extra"])
///     .expect("arguments parse");
/// assert_eq!(server.port, 8080);
/// assert!(server.verbose);
/// assert_eq!(rest, ["extra"]);
/// ```
pub struct FlagsetBuilder {
    pub(super) keys: TagKeys,
    pub(super) filter: Option<Box<dyn ElementFilter>>,
    pub(super) registry: Arc<ConverterRegistry>,
    program_name: String,
}

impl Default for FlagsetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FlagsetBuilder {
    /// Builder using the default tag keys and the built-in converters.
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(ConverterRegistry::with_builtins())
    }

    /// Builder resolving converters through `registry`.
    #[must_use]
    pub fn with_registry(registry: impl Into<Arc<ConverterRegistry>>) -> Self {
        Self {
            keys: TagKeys::default(),
            filter: None,
            registry: registry.into(),
            program_name: String::new(),
        }
    }

    /// Skip fields for which `filter` returns `false`.
    #[must_use]
    pub fn set_filter(mut self, filter: impl ElementFilter + 'static) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }

    /// Keys tried, in order, for a field's flag name.
    #[must_use]
    pub fn set_name_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys.name = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Replace every tag key at once.
    #[must_use]
    pub fn tag_keys(mut self, keys: TagKeys) -> Self {
        self.keys = keys;
        self
    }

    /// Program name shown in help output.
    #[must_use]
    pub fn program_name(mut self, name: impl Into<String>) -> Self {
        self.program_name = name.into();
        self
    }

    /// Tag keys in use.
    #[must_use]
    pub const fn keys(&self) -> &TagKeys {
        &self.keys
    }

    /// Converter registry in use.
    #[must_use]
    pub fn registry(&self) -> &ConverterRegistry {
        &self.registry
    }

    /// Build a flag set bound to the fields of `config`.
    ///
    /// # Panics
    ///
    /// Panics on configuration errors in the struct's tags: a field type with
    /// no converter, a multi-character shorthand, a repeated flag name, or a
    /// recurse tag on a value field.
    #[must_use]
    pub fn build<'a, C: Flags>(&self, config: &'a mut C) -> FlagSet<'a> {
        let mut flags = FlagSet::new(&self.program_name);
        self.build_into(config, &mut flags);
        flags
    }

    /// Register the fields of `config` into an existing flag set.
    ///
    /// # Panics
    ///
    /// See [`FlagsetBuilder::build`].
    pub fn build_into<'a, C: Flags>(&self, config: &'a mut C, flags: &mut FlagSet<'a>) {
        let mut registrar = Registrar {
            builder: self,
            flags,
        };
        self.visit(config, &mut registrar);
    }

    /// Walk `config` and hand every field that resolves to a flag name to
    /// `visitor`, descending into nested structs tagged for recursion.
    ///
    /// Fields without a name, named `-`, or rejected by the filter are not
    /// visited.
    ///
    /// # Panics
    ///
    /// Panics on a recurse tag attached to a value field or on a named
    /// nested struct without one, and whenever `visitor` panics.
    pub fn visit<'a, C, V>(&self, config: &'a mut C, visitor: &mut V)
    where
        C: Flags,
        V: FieldVisitor<'a>,
    {
        let mut walker = Walker {
            builder: self,
            visitor,
            marker: PhantomData,
        };
        config.walk(&mut walker);
    }

    /// Build a flag set for `config`, parse `args` into it, and return the
    /// positional arguments.
    ///
    /// # Errors
    ///
    /// Returns the [`FlagError`] produced by [`FlagSet::parse`].
    ///
    /// # Panics
    ///
    /// See [`FlagsetBuilder::build`].
    pub fn parse<C, I, T>(&self, config: &mut C, args: I) -> Result<Vec<String>, FlagError>
    where
        C: Flags,
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut flags = self.build(config);
        flags.parse(args)?;
        Ok(flags.args().to_vec())
    }
}

impl fmt::Debug for FlagsetBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlagsetBuilder")
            .field("keys", &self.keys)
            .field("filter", &self.filter.is_some())
            .field("registry", &self.registry)
            .field("program_name", &self.program_name)
            .finish()
    }
}

/// Build a flag set for `config` with [`FlagsetBuilder::new`].
///
/// # Panics
///
/// See [`FlagsetBuilder::build`].
#[must_use]
pub fn create_flagset<C: Flags>(config: &mut C) -> FlagSet<'_> {
    FlagsetBuilder::new().build(config)
}
