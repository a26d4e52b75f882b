//! A single registered flag.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::value::Value;

/// Adapter shared between a flag and its aliases.
pub type SharedValue<'a> = Rc<RefCell<dyn Value + 'a>>;

/// One named entry in a [`crate::FlagSet`].
///
/// Alias records share their primary's [`SharedValue`], so a token given
/// through either name lands in the same field.
pub struct Flag<'a> {
    pub(super) name: String,
    pub(super) shorthand: Option<char>,
    pub(super) usage: String,
    pub(super) value: SharedValue<'a>,
    pub(super) default_value: String,
    pub(super) no_opt_default: Option<String>,
    pub(super) hidden: bool,
    pub(super) deprecated: Option<String>,
    pub(super) alias_of: Option<String>,
    pub(super) changed: bool,
}

impl<'a> Flag<'a> {
    pub(super) fn new(
        value: SharedValue<'a>,
        name: &str,
        shorthand: Option<char>,
        usage: &str,
    ) -> Self {
        let default_value = value.borrow().to_string();
        Self {
            name: name.to_owned(),
            shorthand,
            usage: usage.to_owned(),
            value,
            default_value,
            no_opt_default: None,
            hidden: false,
            deprecated: None,
            alias_of: None,
            changed: false,
        }
    }

    /// Long name, used as `--name`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Single-character short name, used as `-c`.
    #[must_use]
    pub const fn shorthand(&self) -> Option<char> {
        self.shorthand
    }

    /// Help text.
    #[must_use]
    pub fn usage(&self) -> &str {
        &self.usage
    }

    /// Value rendered at registration time.
    #[must_use]
    pub fn default_value(&self) -> &str {
        &self.default_value
    }

    /// Current value rendered through the adapter.
    #[must_use]
    pub fn value_string(&self) -> String {
        self.value.borrow().to_string()
    }

    /// Type placeholder reported by the adapter.
    #[must_use]
    pub fn type_name(&self) -> String {
        self.value.borrow().type_name()
    }

    /// Adapter backing this flag.
    #[must_use]
    pub fn shared_value(&self) -> SharedValue<'a> {
        Rc::clone(&self.value)
    }

    /// Value used when the flag is given without one, e.g. `--verbose`.
    #[must_use]
    pub fn no_opt_default(&self) -> Option<&str> {
        self.no_opt_default.as_deref()
    }

    /// Whether the flag is left out of help output.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Deprecation message, when the flag is deprecated.
    #[must_use]
    pub fn deprecated(&self) -> Option<&str> {
        self.deprecated.as_deref()
    }

    /// Primary flag this record aliases, if it is an alias.
    #[must_use]
    pub fn alias_of(&self) -> Option<&str> {
        self.alias_of.as_deref()
    }

    /// Returns `true` for alias records.
    #[must_use]
    pub const fn is_alias(&self) -> bool {
        self.alias_of.is_some()
    }

    /// Name of the primary flag: this flag's own name unless it is an alias.
    #[must_use]
    pub fn primary_name(&self) -> &str {
        self.alias_of.as_deref().unwrap_or(&self.name)
    }

    /// Whether a token has been applied through this flag or one sharing its
    /// value.
    #[must_use]
    pub const fn changed(&self) -> bool {
        self.changed
    }

    /// Set the value used when the flag appears without one. An empty string
    /// clears it.
    pub fn set_no_opt_default(&mut self, value: Option<&str>) -> &mut Self {
        self.no_opt_default = value.filter(|v| !v.is_empty()).map(str::to_owned);
        self
    }

    /// Leave the flag out of help output.
    pub const fn set_hidden(&mut self, hidden: bool) -> &mut Self {
        self.hidden = hidden;
        self
    }

    /// Mark the flag deprecated. It keeps working, but each use logs
    /// `message` and the flag is hidden from help output.
    pub fn set_deprecated(&mut self, message: &str) -> &mut Self {
        self.deprecated = Some(message.to_owned());
        self
    }
}

impl fmt::Debug for Flag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flag")
            .field("name", &self.name)
            .field("shorthand", &self.shorthand)
            .field("type_name", &self.type_name())
            .field("value", &self.value_string())
            .field("default_value", &self.default_value)
            .field("no_opt_default", &self.no_opt_default)
            .field("hidden", &self.hidden)
            .field("deprecated", &self.deprecated)
            .field("alias_of", &self.alias_of)
            .field("changed", &self.changed)
            .finish_non_exhaustive()
    }
}
