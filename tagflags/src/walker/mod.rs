//! Walking tagged configuration structs.
//!
//! `#[derive(Flags)]` implements [`Flags`] by calling
//! [`FlagField::accept`] for every field that carries a `#[tag(...)]`
//! attribute. Dispatch on the field's type picks the [`Walker`] entry point:
//! values and vectors of values go to a [`FieldVisitor`], nested flag
//! structs are walked when they carry the recurse tag. Building a flag set
//! is one such visitor.

mod builder;
mod register;
mod tags;

use std::marker::PhantomData;

pub use builder::{ElementFilter, FlagsetBuilder, create_flagset};
pub use tags::{ALIAS_SEPARATOR, FieldInfo, SKIP_NAME, TagKeys, Tags};

use crate::convert::FlagValue;

/// A configuration struct whose fields can be registered as flags.
///
/// Usually derived with `#[derive(Flags)]`.
pub trait Flags {
    /// Offer every tagged field to `walker`, in declaration order.
    fn walk<'a, V: FieldVisitor<'a>>(&'a mut self, walker: &mut Walker<'a, '_, V>);
}

/// A field type the walker knows how to handle.
pub trait FlagField {
    /// Hand `self`, described by `field`, to the matching walker entry point.
    fn accept<'a, V: FieldVisitor<'a>>(
        &'a mut self,
        field: &FieldInfo,
        walker: &mut Walker<'a, '_, V>,
    );
}

impl<T: FlagValue> FlagField for T {
    fn accept<'a, V: FieldVisitor<'a>>(
        &'a mut self,
        field: &FieldInfo,
        walker: &mut Walker<'a, '_, V>,
    ) {
        walker.scalar(field, self);
    }
}

impl<T: FlagValue> FlagField for Vec<T> {
    fn accept<'a, V: FieldVisitor<'a>>(
        &'a mut self,
        field: &FieldInfo,
        walker: &mut Walker<'a, '_, V>,
    ) {
        walker.sequence(field, self);
    }
}

/// Receives every field that resolves to a flag name.
///
/// The walker has already resolved `name` from the name keys, applied the
/// element filter, and descended into nested structs tagged for recursion.
/// See [`FlagsetBuilder::visit`].
///
/// # Examples
///
/// ```rust
/// use tagflags::{FieldInfo, FieldVisitor, FlagValue, Flags, FlagsetBuilder};
///
/// #[derive(Default, Flags)]
/// struct Config {
///     #[tag(flag = "level")]
///     level: u8,
///     #[tag(flag = "tag")]
///     tags: Vec<String>,
/// }
///
/// #[derive(Default)]
/// struct Names(Vec<String>);
///
/// impl<'a> FieldVisitor<'a> for Names {
///     fn scalar<T: FlagValue>(&mut self, name: &'static str, _: &FieldInfo, _: &'a mut T) {
///         self.0.push(name.to_owned());
///     }
///
///     fn sequence<T: FlagValue>(&mut self, name: &'static str, _: &FieldInfo, _: &'a mut Vec<T>) {
///         self.0.push(format!("{name}..."));
///     }
/// }
///
/// let mut config = Config::default();
/// let mut names = Names::default();
/// FlagsetBuilder::new().visit(&mut config, &mut names);
/// assert_eq!(names.0, ["level", "tag..."]);
/// ```
pub trait FieldVisitor<'a> {
    /// A single-valued field named `name`.
    fn scalar<T: FlagValue>(&mut self, name: &'static str, field: &FieldInfo, target: &'a mut T);

    /// A sequence-valued field named `name`.
    fn sequence<T: FlagValue>(
        &mut self,
        name: &'static str,
        field: &FieldInfo,
        target: &'a mut Vec<T>,
    );
}

/// Traversal of one configuration struct, feeding eligible fields to a
/// [`FieldVisitor`].
pub struct Walker<'a, 'b, V> {
    builder: &'b FlagsetBuilder,
    visitor: &'b mut V,
    marker: PhantomData<&'a ()>,
}

impl<'a, V: FieldVisitor<'a>> Walker<'a, '_, V> {
    /// Offer a single-valued field to the visitor.
    ///
    /// # Panics
    ///
    /// Panics when the field carries the recurse tag, or when the visitor
    /// panics.
    pub fn scalar<T: FlagValue>(&mut self, field: &FieldInfo, target: &'a mut T) {
        self.reject_recursion(field);
        if let Some(name) = self.eligible_name(field) {
            self.visitor.scalar(name, field, target);
        }
    }

    /// Offer a sequence-valued field to the visitor.
    ///
    /// # Panics
    ///
    /// See [`Walker::scalar`].
    pub fn sequence<T: FlagValue>(&mut self, field: &FieldInfo, target: &'a mut Vec<T>) {
        self.reject_recursion(field);
        if let Some(name) = self.eligible_name(field) {
            self.visitor.sequence(name, field, target);
        }
    }

    /// Walk a nested flag struct when the field carries the recurse tag.
    ///
    /// # Panics
    ///
    /// Panics when the field is named as a flag without the recurse tag:
    /// a struct has no converter of its own.
    pub fn nested<C: Flags>(&mut self, field: &FieldInfo, target: &'a mut C) {
        if field.tags().contains(&self.builder.keys.recurse) {
            tracing::debug!(field = field.name(), "walking nested flags");
            target.walk(self);
            return;
        }
        assert!(
            self.eligible_name(field).is_none(),
            "no converter available for type {}; tag field `{}` with `{}` to walk it",
            std::any::type_name::<C>(),
            field.name(),
            self.builder.keys.recurse
        );
    }

    fn reject_recursion(&self, field: &FieldInfo) {
        assert!(
            !field.tags().contains(&self.builder.keys.recurse),
            "field `{}` is tagged `{}` but is not a flag struct",
            field.name(),
            self.builder.keys.recurse
        );
    }

    fn eligible_name(&self, field: &FieldInfo) -> Option<&'static str> {
        let Some(name) = self.builder.keys.flag_name(field.tags()) else {
            tracing::debug!(field = field.name(), "skipping field without a flag name");
            return None;
        };
        if let Some(filter) = &self.builder.filter
            && !filter.filter(field)
        {
            tracing::debug!(field = field.name(), flag = name, "field filtered out");
            return None;
        }
        Some(name)
    }
}
