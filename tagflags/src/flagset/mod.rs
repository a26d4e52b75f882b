//! The flag set: registered flags plus the bridge to `clap`.
//!
//! [`FlagSet::parse`] hands the arguments to clap, then replays every token
//! clap collected through the owning flag's adapter in command-line order,
//! so flags and aliases sharing one adapter observe a single ordered stream.

mod command;
mod flag;

use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::OsString;
use std::rc::Rc;

pub use flag::{Flag, SharedValue};

use crate::FlagError;
use crate::value::Value;

/// Flags bound to fields borrowed for `'a`.
///
/// Drop the flag set (or let it go out of scope) to read the configured
/// struct again.
pub struct FlagSet<'a> {
    name: String,
    flags: Vec<Flag<'a>>,
    index: HashMap<String, usize>,
    shorthands: HashMap<char, usize>,
    args: Vec<String>,
    parsed: bool,
}

impl<'a> FlagSet<'a> {
    /// Create an empty flag set; `name` is the program name shown in help.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            flags: Vec::new(),
            index: HashMap::new(),
            shorthands: HashMap::new(),
            args: Vec::new(),
            parsed: false,
        }
    }

    /// Program name shown in help output.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register `value` under `name`.
    ///
    /// # Panics
    ///
    /// Panics when `name` or `shorthand` is already taken.
    pub fn var<V: Value + 'a>(
        &mut self,
        value: V,
        name: &str,
        shorthand: Option<char>,
        usage: &str,
    ) -> &mut Flag<'a> {
        self.var_shared(Rc::new(RefCell::new(value)), name, shorthand, usage)
    }

    /// Register an adapter that may be shared with other flags.
    ///
    /// # Panics
    ///
    /// Panics when `name` or `shorthand` is already taken.
    pub fn var_shared(
        &mut self,
        value: SharedValue<'a>,
        name: &str,
        shorthand: Option<char>,
        usage: &str,
    ) -> &mut Flag<'a> {
        self.insert(Flag::new(value, name, shorthand, usage))
    }

    /// Register `alias` as a hidden flag sharing `primary`'s adapter and
    /// no-option default.
    ///
    /// # Panics
    ///
    /// Panics when `primary` is unknown or `alias` is already taken.
    pub fn alias(&mut self, primary: &str, alias: &str) -> &mut Flag<'a> {
        let Some(target) = self.lookup(primary) else {
            panic!("cannot alias unknown flag --{primary}");
        };
        let root = target.primary_name().to_owned();
        let no_opt_default = target.no_opt_default.clone();
        let mut record = Flag::new(target.shared_value(), alias, None, "");
        record.hidden = true;
        record.no_opt_default = no_opt_default;
        record.alias_of = Some(root);
        self.insert(record)
    }

    #[expect(
        clippy::indexing_slicing,
        reason = "position indexes the flag pushed just above"
    )]
    fn insert(&mut self, flag: Flag<'a>) -> &mut Flag<'a> {
        assert!(
            !self.index.contains_key(flag.name()),
            "flag redefined: {}",
            flag.name()
        );
        let position = self.flags.len();
        if let Some(short) = flag.shorthand() {
            assert!(
                !self.shorthands.contains_key(&short),
                "unable to redefine {short:?} shorthand: already used by another flag"
            );
            self.shorthands.insert(short, position);
        }
        tracing::debug!(
            flag = flag.name(),
            alias_of = flag.alias_of(),
            type_name = %flag.type_name(),
            "registered flag"
        );
        self.index.insert(flag.name().to_owned(), position);
        self.flags.push(flag);
        &mut self.flags[position]
    }

    /// Flag registered under `name`, including alias records.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Flag<'a>> {
        self.index.get(name).and_then(|&i| self.flags.get(i))
    }

    /// Mutable access to the flag registered under `name`.
    pub fn lookup_mut(&mut self, name: &str) -> Option<&mut Flag<'a>> {
        self.index.get(name).and_then(|&i| self.flags.get_mut(i))
    }

    /// Flag registered with `shorthand`.
    #[must_use]
    pub fn shorthand_lookup(&self, shorthand: char) -> Option<&Flag<'a>> {
        self.shorthands
            .get(&shorthand)
            .and_then(|&i| self.flags.get(i))
    }

    /// All flags, aliases included, in registration order.
    pub fn flags(&self) -> impl Iterator<Item = &Flag<'a>> {
        self.flags.iter()
    }

    /// Number of registered flags, aliases included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Returns `true` when no flags are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Apply `raw` to the flag called `name` as if it appeared on the
    /// command line.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::UnknownFlag`] for an unregistered name and
    /// [`FlagError::InvalidArgument`] when the adapter rejects `raw`.
    pub fn set(&mut self, name: &str, raw: &str) -> Result<(), FlagError> {
        let Some(flag) = self.lookup(name) else {
            return Err(FlagError::UnknownFlag {
                name: name.to_owned(),
            });
        };
        if let Some(message) = flag.deprecated() {
            tracing::warn!(flag = name, "Flag --{name} has been deprecated, {message}");
        }
        let primary = flag.primary_name().to_owned();
        flag.value
            .borrow_mut()
            .set(raw)
            .map_err(|source| FlagError::InvalidArgument {
                flag: name.to_owned(),
                value: raw.to_owned(),
                source,
            })?;
        self.mark_changed(&primary);
        Ok(())
    }

    fn mark_changed(&mut self, primary: &str) {
        for flag in self
            .flags
            .iter_mut()
            .filter(|flag| flag.primary_name() == primary)
        {
            flag.changed = true;
        }
    }

    /// Whether the flag called `name`, or one sharing its value, was set.
    #[must_use]
    pub fn changed(&self, name: &str) -> bool {
        self.lookup(name).is_some_and(Flag::changed)
    }

    /// Parse `args` (without the program name) and write every flag value
    /// through to its field.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::CliParsing`] when clap rejects the arguments or
    /// help was requested (see [`FlagError::is_display_request`]), and
    /// [`FlagError::InvalidArgument`] for the first token an adapter
    /// rejects.
    pub fn parse<I, T>(&mut self, args: I) -> Result<(), FlagError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self.command().try_get_matches_from(args)?;
        let mut occurrences: Vec<(usize, String, String)> = Vec::new();
        for flag in &self.flags {
            let (Some(values), Some(indices)) = (
                matches.get_many::<String>(flag.name()),
                matches.indices_of(flag.name()),
            ) else {
                continue;
            };
            occurrences.extend(
                indices
                    .zip(values)
                    .map(|(index, raw)| (index, flag.name().to_owned(), raw.clone())),
            );
        }
        occurrences.sort_by_key(|(index, _, _)| *index);
        for (_, name, raw) in occurrences {
            self.set(&name, &raw)?;
        }
        self.args = matches
            .get_many::<String>(command::POSITIONAL_ID)
            .map(|values| values.cloned().collect())
            .unwrap_or_default();
        self.parsed = true;
        Ok(())
    }

    /// Whether [`FlagSet::parse`] has completed successfully.
    #[must_use]
    pub const fn parsed(&self) -> bool {
        self.parsed
    }

    /// Positional arguments left over after parsing.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The clap command describing this flag set.
    #[must_use]
    pub fn command(&self) -> clap::Command {
        command::build(&self.name, &self.flags)
    }

    /// Rendered help text. Hidden and deprecated flags are omitted.
    #[must_use]
    pub fn usage(&self) -> String {
        self.command().render_help().to_string()
    }
}

impl std::fmt::Debug for FlagSet<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlagSet")
            .field("name", &self.name)
            .field("flags", &self.flags)
            .field("args", &self.args)
            .field("parsed", &self.parsed)
            .finish_non_exhaustive()
    }
}
