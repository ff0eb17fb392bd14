// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rule-based style selection.
//!
//! A [`StyleSheet`] is a collection of [`StyleRule`]s kept in application
//! order: ascending specificity, then selector text. Each rule combines a
//! [`Selector`] and a [`Style`] payload.

use std::rc::Rc;

use understory_property::{Styleable, TypeRegistry};

use crate::selector::Selector;
use crate::style::Style;

/// A single rule in a [`StyleSheet`].
#[derive(Clone, Debug, PartialEq)]
pub struct StyleRule {
    selector: Selector,
    style: Style,
}

impl StyleRule {
    /// Creates a rule.
    #[must_use]
    pub fn new(selector: Selector, style: Style) -> Self {
        Self { selector, style }
    }

    /// Returns the selector.
    #[must_use]
    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Returns the rule's style payload.
    #[must_use]
    pub fn style(&self) -> &Style {
        &self.style
    }
}

/// An ordered collection of style rules.
///
/// Rules are sorted stably, so rules with the same selector keep their
/// insertion order and the later one is applied last.
///
/// `StyleSheet` is immutable after creation and cheap to clone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleSheet {
    inner: Rc<Vec<StyleRule>>,
}

impl StyleSheet {
    /// Builds a sheet from rules in any order.
    #[must_use]
    pub fn from_rules(rules: impl IntoIterator<Item = StyleRule>) -> Self {
        let mut rules: Vec<_> = rules.into_iter().collect();
        rules.sort_by(|a, b| a.selector.cmp(&b.selector));
        Self {
            inner: Rc::new(rules),
        }
    }

    /// Merges several sheets into one, earlier sheets first on ties.
    #[must_use]
    pub fn merged<'a>(sheets: impl IntoIterator<Item = &'a Self>) -> Self {
        Self::from_rules(sheets.into_iter().flat_map(|sheet| sheet.rules().cloned()))
    }

    /// Returns the number of rules in this sheet.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if this sheet has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns an iterator over rules in application order.
    pub fn rules(&self) -> impl Iterator<Item = &StyleRule> + '_ {
        self.inner.iter()
    }

    /// Returns the rules whose selector matches `target`, in application
    /// order.
    pub fn matching<'a>(
        &'a self,
        target: &'a dyn Styleable,
        types: &'a TypeRegistry,
    ) -> impl Iterator<Item = &'a StyleRule> + 'a {
        self.rules()
            .filter(move |rule| rule.selector.matches(target, types))
    }
}
