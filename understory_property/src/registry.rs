// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property and relation registry.
//!
//! This module provides [`PropertyRegistry`] for registering the properties
//! and object relations that styles refer to by name.

use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::property::{StyleObject, StyleProperty};
use crate::target::Styleable;

/// A registry of named style properties and object relations.
///
/// Names are not unique: a name may be registered once per capability, and
/// lookups return the entries whose capability the target has, in
/// registration order.
///
/// # Example
///
/// ```rust
/// use understory_property::{
///     PropertyRegistry, PropertyValue, StyleProperty, Styleable, StyleableView,
/// };
///
/// fn view(target: &dyn Styleable) -> Option<&dyn StyleableView> {
///     target.as_view()
/// }
///
/// let mut registry = PropertyRegistry::new();
/// registry.register(StyleProperty::new("opacity", view, |view, value: PropertyValue<f64>| {
///     view.set_alpha(value.value);
/// }));
///
/// assert!(registry.contains_name("opacity"));
/// assert!(!registry.contains_name("alpha"));
/// assert_eq!(registry.len(), 1);
/// ```
#[derive(Default)]
pub struct PropertyRegistry {
    properties: Vec<StyleProperty>,
    by_name: HashMap<String, SmallVec<[usize; 2]>>,
    objects: Vec<StyleObject>,
}

impl PropertyRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a property.
    ///
    /// Later registrations under an existing name are applied after earlier
    /// ones when several accept the same target.
    pub fn register(&mut self, property: StyleProperty) {
        let index = self.properties.len();
        self.by_name
            .entry(property.name().into())
            .or_default()
            .push(index);
        self.properties.push(property);
    }

    /// Registers an object relation.
    pub fn register_object(&mut self, object: StyleObject) {
        self.objects.push(object);
    }

    /// Returns the number of registered properties.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns `true` if no properties or relations are registered.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.objects.is_empty()
    }

    /// Returns every property named `name` that accepts `target`.
    pub fn properties_for<'a>(
        &'a self,
        name: &str,
        target: &'a dyn Styleable,
    ) -> impl Iterator<Item = &'a StyleProperty> + use<'a> {
        self.by_name
            .get(name)
            .into_iter()
            .flatten()
            .map(|&index| &self.properties[index])
            .filter(move |property| property.supports(target))
    }

    /// Returns the first relation named `name` that accepts `target`.
    #[must_use]
    pub fn object_for(&self, name: &str, target: &dyn Styleable) -> Option<&StyleObject> {
        self.objects
            .iter()
            .find(|object| object.name() == name && object.supports(target))
    }

    /// Returns `true` if any property is registered under `name`.
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Returns `true` if any relation is registered under `name`.
    #[must_use]
    pub fn contains_object(&self, name: &str) -> bool {
        self.objects.iter().any(|object| object.name() == name)
    }

    /// Returns an iterator over all registered properties.
    pub fn iter(&self) -> impl Iterator<Item = &StyleProperty> {
        self.properties.iter()
    }

    /// Returns an iterator over all registered relations.
    pub fn objects(&self) -> impl Iterator<Item = &StyleObject> {
        self.objects.iter()
    }
}

impl core::fmt::Debug for PropertyRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PropertyRegistry")
            .field("count", &self.properties.len())
            .field(
                "properties",
                &self.properties.iter().map(StyleProperty::name).collect::<Vec<_>>(),
            )
            .field(
                "objects",
                &self.objects.iter().map(StyleObject::name).collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}
