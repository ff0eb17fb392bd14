// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared style definitions.
//!
//! This module provides [`Style`], a shared collection of property
//! assignments and sub-styles that many rules and targets can reference.

use std::rc::Rc;

use understory_property::PropertyContext;
use understory_style_value::RawValue;

/// A single `name: value` line of a style, with its key context.
///
/// The value stays raw until it is applied, where each matching property
/// parses it as its own value type. Two assignments are equal when their
/// names, contexts and stringified values are equal.
#[derive(Clone, Debug)]
pub struct PropertyAssignment {
    /// Property name.
    pub name: String,
    /// Unparsed value.
    pub value: RawValue,
    /// Filter and state from the key.
    pub context: PropertyContext,
}

impl PropertyAssignment {
    /// Creates an assignment with the default context.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<RawValue>) -> Self {
        Self::with_context(name, value, PropertyContext::default())
    }

    /// Creates an assignment with an explicit context.
    #[must_use]
    pub fn with_context(
        name: impl Into<String>,
        value: impl Into<RawValue>,
        context: PropertyContext,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            context,
        }
    }
}

impl PartialEq for PropertyAssignment {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.context == other.context
            && self.value.to_string() == other.value.to_string()
    }
}

/// A shared, immutable collection of property assignments and sub-styles.
///
/// Sub-styles are keyed by an object relation name such as `superview` or
/// `navigationBar` and are applied to the related object.
///
/// Styles are immutable after creation. Use [`StyleBuilder`] to construct
/// them. Cloning is cheap (`Rc`).
///
/// # Example
///
/// ```rust
/// use understory_style::StyleBuilder;
///
/// let bar = StyleBuilder::new().property("barTintColor", "black").build();
/// let style = StyleBuilder::new()
///     .property("backgroundColor", "white")
///     .property("cornerRadius", 4)
///     .sub_style("navigationBar", bar)
///     .build();
///
/// assert_eq!(style.len(), 2);
/// assert!(style.sub_style("navigationBar").is_some());
/// assert_eq!(style.clone(), style);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    inner: Rc<StyleData>,
}

#[derive(Debug, Default, PartialEq)]
struct StyleData {
    properties: Vec<PropertyAssignment>,
    sub_styles: Vec<(String, Style)>,
}

impl Style {
    /// Returns `true` if this style has no assignments and no sub-styles.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.properties.is_empty() && self.inner.sub_styles.is_empty()
    }

    /// Returns the number of property assignments.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.properties.len()
    }

    /// Returns assignments in declaration order.
    #[must_use]
    pub fn properties(&self) -> &[PropertyAssignment] {
        &self.inner.properties
    }

    /// Returns sub-styles in declaration order.
    pub fn sub_styles(&self) -> impl Iterator<Item = (&str, &Self)> + '_ {
        self.inner
            .sub_styles
            .iter()
            .map(|(name, style)| (name.as_str(), style))
    }

    /// Returns the sub-style for a relation name.
    #[must_use]
    pub fn sub_style(&self, relation: &str) -> Option<&Self> {
        self.inner
            .sub_styles
            .iter()
            .find_map(|(name, style)| (name == relation).then_some(style))
    }
}

/// Builder for constructing [`Style`] instances.
#[derive(Debug, Default)]
pub struct StyleBuilder {
    data: StyleData,
}

impl StyleBuilder {
    /// Creates a new empty style builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an assignment with the default context.
    #[must_use]
    pub fn property(self, name: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.assignment(PropertyAssignment::new(name, value))
    }

    /// Appends an assignment with an explicit context.
    #[must_use]
    pub fn property_with_context(
        self,
        name: impl Into<String>,
        value: impl Into<RawValue>,
        context: PropertyContext,
    ) -> Self {
        self.assignment(PropertyAssignment::with_context(name, value, context))
    }

    /// Appends a prepared assignment.
    #[must_use]
    pub fn assignment(mut self, assignment: PropertyAssignment) -> Self {
        self.data.properties.push(assignment);
        self
    }

    /// Sets the sub-style for a relation, replacing an earlier one.
    #[must_use]
    pub fn sub_style(mut self, relation: impl Into<String>, style: Style) -> Self {
        let relation = relation.into();
        match self.data.sub_styles.iter_mut().find(|(name, _)| *name == relation) {
            Some(slot) => slot.1 = style,
            None => self.data.sub_styles.push((relation, style)),
        }
        self
    }

    /// Builds the style.
    #[must_use]
    pub fn build(self) -> Style {
        Style {
            inner: Rc::new(self.data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_style_value::ControlState;

    #[test]
    fn style_empty() {
        let style = StyleBuilder::new().build();
        assert!(style.is_empty());
        assert_eq!(style.len(), 0);
    }

    #[test]
    fn assignments_keep_declaration_order() {
        let style = StyleBuilder::new()
            .property("b", "1")
            .property("a", "2")
            .property("b", "3")
            .build();
        let names: Vec<_> = style.properties().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["b", "a", "b"]);
    }

    #[test]
    fn assignment_equality_uses_stringified_value() {
        assert_eq!(
            PropertyAssignment::new("alpha", RawValue::Int(1)),
            PropertyAssignment::new("alpha", "1")
        );
        assert_ne!(
            PropertyAssignment::new("alpha", "1"),
            PropertyAssignment::new("alpha", "1.0")
        );
        let highlighted = PropertyContext {
            control_state: ControlState::Highlighted,
            ..PropertyContext::default()
        };
        assert_ne!(
            PropertyAssignment::new("textColor", "red"),
            PropertyAssignment::with_context("textColor", "red", highlighted)
        );
    }

    #[test]
    fn sub_style_replaces_by_relation() {
        let first = StyleBuilder::new().property("alpha", "0").build();
        let second = StyleBuilder::new().property("alpha", "1").build();
        let style = StyleBuilder::new()
            .sub_style("superview", first)
            .sub_style("superview", second.clone())
            .build();
        assert_eq!(style.sub_styles().count(), 1);
        assert_eq!(style.sub_style("superview"), Some(&second));
        assert!(style.sub_style("next").is_none());
        assert!(!style.is_empty());
    }

    #[test]
    fn style_clone_is_cheap() {
        let style = StyleBuilder::new().property("alpha", "0.5").build();
        let style2 = style.clone();
        assert!(Rc::ptr_eq(&style.inner, &style2.inner));
    }
}
