//! The visitor that turns eligible fields into flags.

use std::any::TypeId;
use std::cell::RefCell;
use std::rc::Rc;

use super::{ALIAS_SEPARATOR, FieldInfo, FieldVisitor, FlagsetBuilder};
use crate::convert::FlagValue;
use crate::flagset::{FlagSet, SharedValue};
use crate::value::GenericValue;

/// Registers each visited field, with its tag metadata, into a flag set.
pub(super) struct Registrar<'a, 'b> {
    pub(super) builder: &'b FlagsetBuilder,
    pub(super) flags: &'b mut FlagSet<'a>,
}

impl<'a> FieldVisitor<'a> for Registrar<'a, '_> {
    fn scalar<T: FlagValue>(&mut self, name: &'static str, field: &FieldInfo, target: &'a mut T) {
        let is_bool = TypeId::of::<T>() == TypeId::of::<bool>();
        let value = GenericValue::scalar(target, &self.builder.registry);
        self.register(field, name, Rc::new(RefCell::new(value)), is_bool);
    }

    fn sequence<T: FlagValue>(
        &mut self,
        name: &'static str,
        field: &FieldInfo,
        target: &'a mut Vec<T>,
    ) {
        let value = GenericValue::sequence(target, &self.builder.registry);
        self.register(field, name, Rc::new(RefCell::new(value)), false);
    }
}

impl<'a> Registrar<'a, '_> {
    fn register(&mut self, field: &FieldInfo, name: &str, value: SharedValue<'a>, is_bool: bool) {
        let keys = &self.builder.keys;
        let tags = field.tags();
        let shorthand = parse_shorthand(name, tags.get(&keys.shorthand));
        let flag = self
            .flags
            .var_shared(value, name, shorthand, tags.get(&keys.description));

        let no_opt_default = tags
            .lookup(&keys.no_opt_default)
            .or_else(|| is_bool.then_some("true"));
        flag.set_no_opt_default(no_opt_default);
        if tags.contains(&keys.hidden) {
            flag.set_hidden(true);
        }
        if let Some(message) = tags.lookup(&keys.deprecated) {
            flag.set_deprecated(message);
        }

        let aliases = tags.lookup(&keys.alias).unwrap_or_default();
        for alias in aliases
            .split(ALIAS_SEPARATOR)
            .map(str::trim)
            .filter(|alias| !alias.is_empty())
        {
            self.flags.alias(name, alias);
        }
    }
}

fn parse_shorthand(flag: &str, raw: &str) -> Option<char> {
    let mut chars = raw.chars();
    let first = chars.next()?;
    assert!(
        chars.next().is_none(),
        "{raw:?} shorthand of --{flag} is more than one character"
    );
    Some(first)
}
