//! Field metadata handed to the walker.

/// Separator between names in an alias tag.
pub const ALIAS_SEPARATOR: char = ',';

/// Name tag value that opts a field out of flag generation.
pub const SKIP_NAME: &str = "-";

/// Ordered `key = value` metadata attached to one field.
///
/// Presence-only keys carry an empty value. Lookups return the first entry
/// with a matching key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tags(&'static [(&'static str, &'static str)]);

impl Tags {
    /// Wrap a static list of entries.
    #[must_use]
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self(entries)
    }

    /// Value of the first entry named `key`.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        self.0
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, value)| *value)
    }

    /// Value of `key`, or the empty string when absent.
    #[must_use]
    pub fn get(&self, key: &str) -> &'static str {
        self.lookup(key).unwrap_or_default()
    }

    /// Returns `true` when `key` is present, whatever its value.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        self.0.iter().copied()
    }
}

/// A struct field as seen by the walker: its Rust name and its tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInfo {
    name: &'static str,
    tags: Tags,
}

impl FieldInfo {
    /// Describe the field `name` carrying `tags`.
    #[must_use]
    pub const fn new(name: &'static str, tags: &'static [(&'static str, &'static str)]) -> Self {
        Self {
            name,
            tags: Tags::new(tags),
        }
    }

    /// Rust identifier of the field.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Metadata attached to the field.
    #[must_use]
    pub const fn tags(&self) -> Tags {
        self.tags
    }
}

/// Tag keys the walker reads.
///
/// The defaults are `flag`, `description`, `shorthand`, `nooptdef`,
/// `alias`, `deprecated`, `hidden`, and `recurse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagKeys {
    /// Keys tried in order for the flag name; the first present value other
    /// than `-` wins.
    pub name: Vec<String>,
    /// Help text.
    pub description: String,
    /// Single-character short name.
    pub shorthand: String,
    /// Value used when the flag is given without one.
    pub no_opt_default: String,
    /// Comma-separated hidden alternative names.
    pub alias: String,
    /// Deprecation message.
    pub deprecated: String,
    /// Presence hides the flag from help output.
    pub hidden: String,
    /// Presence walks into a nested flag struct.
    pub recurse: String,
}

impl Default for TagKeys {
    fn default() -> Self {
        Self {
            name: vec!["flag".to_owned()],
            description: "description".to_owned(),
            shorthand: "shorthand".to_owned(),
            no_opt_default: "nooptdef".to_owned(),
            alias: "alias".to_owned(),
            deprecated: "deprecated".to_owned(),
            hidden: "hidden".to_owned(),
            recurse: "recurse".to_owned(),
        }
    }
}

impl TagKeys {
    /// Resolve the flag name of `tags`.
    ///
    /// Name keys are tried in order. A key whose value is `-` is passed
    /// over; an empty resolved name counts as no name.
    #[must_use]
    pub fn flag_name(&self, tags: Tags) -> Option<&'static str> {
        self.name
            .iter()
            .find_map(|key| tags.lookup(key).filter(|value| *value != SKIP_NAME))
            .filter(|name| !name.is_empty())
    }
}
