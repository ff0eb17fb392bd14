// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Type identities for selector matching.
//!
//! Selectors name types (`Button`, `MyApp.CardView`). The host registers its
//! types, with an optional parent, so a `View` selector also matches a
//! `Button` that derives from it.

use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashMap;

/// A stable identifier for a target type.
///
/// Issued by [`TypeRegistry::register`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeTag(u32);

impl TypeTag {
    /// Returns the raw index of this tag.
    #[must_use]
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

/// Type-name normalization applied to module names before lookup.
pub type Normalizer = fn(&str) -> String;

/// Replaces `-` and spaces with `_`, the way module names are mangled.
#[must_use]
pub fn default_normalizer(name: &str) -> String {
    name.replace(['-', ' '], "_")
}

#[derive(Clone, Debug)]
struct TypeEntry {
    name: String,
    parent: Option<TypeTag>,
}

/// Registry of type names and their subtype relationships.
///
/// # Example
///
/// ```rust
/// use understory_property::TypeRegistry;
///
/// let mut types = TypeRegistry::new();
/// let view = types.register("View", None);
/// let button = types.register("Button", Some(view));
/// let card = types.register("My_App.Card", Some(view));
///
/// assert_eq!(types.lookup("Button"), Some(button));
/// assert_eq!(types.lookup_qualified("My-App", "Card"), Some(card));
/// assert!(types.is_kind_of(button, view));
/// assert!(!types.is_kind_of(view, button));
/// ```
#[derive(Clone, Debug)]
pub struct TypeRegistry {
    types: Vec<TypeEntry>,
    by_name: HashMap<String, TypeTag>,
    normalize: Normalizer,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self {
            types: Vec::new(),
            by_name: HashMap::new(),
            normalize: default_normalizer,
        }
    }
}

impl TypeRegistry {
    /// Creates an empty registry with [`default_normalizer`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the module-name normalizer.
    #[must_use]
    pub fn with_normalizer(mut self, normalize: Normalizer) -> Self {
        self.normalize = normalize;
        self
    }

    /// Registers a type name, optionally deriving from `parent`.
    ///
    /// # Panics
    ///
    /// Panics if the name is already registered, or if more than
    /// `u32::MAX` types are registered.
    pub fn register(&mut self, name: &str, parent: Option<TypeTag>) -> TypeTag {
        assert!(
            !self.by_name.contains_key(name),
            "Type '{name}' is already registered"
        );
        assert!(
            self.types.len() < u32::MAX as usize,
            "Too many types registered (max {})",
            u32::MAX
        );

        #[expect(clippy::cast_possible_truncation, reason = "checked above")]
        let tag = TypeTag(self.types.len() as u32);
        self.types.push(TypeEntry {
            name: name.into(),
            parent,
        });
        self.by_name.insert(name.into(), tag);
        tag
    }

    /// Returns the number of registered types.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if no types are registered.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Looks up a type by its exact name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<TypeTag> {
        self.by_name.get(name).copied()
    }

    /// Looks up `module.name` after normalizing `module`.
    #[must_use]
    pub fn lookup_qualified(&self, module: &str, name: &str) -> Option<TypeTag> {
        let mut qualified = (self.normalize)(module);
        qualified.push('.');
        qualified.push_str(name);
        self.lookup(&qualified)
    }

    /// Returns the registered name of a type.
    #[must_use]
    pub fn name(&self, tag: TypeTag) -> Option<&str> {
        self.types.get(tag.0 as usize).map(|t| t.name.as_str())
    }

    /// Returns the parent type.
    #[must_use]
    pub fn parent(&self, tag: TypeTag) -> Option<TypeTag> {
        self.types.get(tag.0 as usize).and_then(|t| t.parent)
    }

    /// Returns `true` if `actual` is `required` or derives from it.
    #[must_use]
    pub fn is_kind_of(&self, actual: TypeTag, required: TypeTag) -> bool {
        let mut current = Some(actual);
        while let Some(tag) = current {
            if tag == required {
                return true;
            }
            current = self.parent(tag);
        }
        false
    }
}
