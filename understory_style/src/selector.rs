// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hierarchical selectors.
//!
//! A selector is a space-separated chain of components. Each component is
//! `Type`, `tag`, `Type.tag`, `Module.Type` or `Module.Type.tag`. The
//! rightmost component matches the target itself; every component to its
//! left must match a strict ancestor, in order, nearest first.

use core::cmp::Ordering;
use core::fmt;

use smallvec::SmallVec;
use understory_property::{Styleable, Tag, TypeRegistry, TypeTag};

use crate::error::ThemeError;

/// Selector specificity: the number of type and tag criteria in a chain.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Specificity(pub u32);

/// One link of a selector chain.
///
/// At least one of the two criteria is present.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SelectorComponent {
    /// Required type, matched subtype-aware.
    pub type_tag: Option<TypeTag>,
    /// Required tag.
    pub tag: Option<Tag>,
}

impl SelectorComponent {
    /// Returns `true` if `target` satisfies every criterion.
    #[must_use]
    pub fn matches(&self, target: &dyn Styleable, types: &TypeRegistry) -> bool {
        if let Some(required) = self.type_tag
            && !types.is_kind_of(target.type_tag(), required)
        {
            return false;
        }
        self.tag
            .as_ref()
            .is_none_or(|tag| target.tag_store().contains(tag.as_str()))
    }

    fn parse(component: &str, selector: &str, types: &TypeRegistry) -> Result<Self, ThemeError> {
        let invalid = || ThemeError::InvalidStyleSelector(selector.into());
        let parts: SmallVec<[&str; 3]> = component.split('.').filter(|p| !p.is_empty()).collect();
        let lookup = |name: &str| types.lookup(name).ok_or_else(invalid);
        let qualified = |module: &str, name: &str| {
            types.lookup_qualified(module, name).ok_or_else(invalid)
        };

        let (type_tag, tag) = match parts.as_slice() {
            [tag] if starts_lowercase(tag) => (None, Some(Tag::new(tag))),
            [name] => (Some(lookup(name)?), None),
            [name, tag] if starts_lowercase(tag) => (Some(lookup(name)?), Some(Tag::new(tag))),
            [module, name] => (Some(qualified(module, name)?), None),
            [module, name, tag] => (Some(qualified(module, name)?), Some(Tag::new(tag))),
            _ => return Err(invalid()),
        };
        Ok(Self { type_tag, tag })
    }

    fn specificity(&self) -> u32 {
        u32::from(self.type_tag.is_some()) + u32::from(self.tag.is_some())
    }
}

fn starts_lowercase(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_lowercase)
}

/// A parsed selector chain together with its source text.
///
/// Selectors order by specificity, then by source text, which is the order
/// rules are applied in.
///
/// # Example
///
/// ```rust
/// use understory_style::{Selector, Specificity};
/// use understory_property::TypeRegistry;
///
/// let mut types = TypeRegistry::new();
/// let view = types.register("View", None);
/// types.register("Button", Some(view));
///
/// let selector = Selector::parse("View.card Button.primary", &types).unwrap();
/// assert_eq!(selector.len(), 2);
/// assert_eq!(selector.specificity(), Specificity(4));
/// assert!(Selector::parse("Missing", &types).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Selector {
    source: String,
    components: SmallVec<[SelectorComponent; 2]>,
}

impl Selector {
    /// Parses selector text, resolving type names through `types`.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidStyleSelector`] for an empty selector, a
    /// component with more than three parts, or an unknown type name.
    pub fn parse(text: &str, types: &TypeRegistry) -> Result<Self, ThemeError> {
        let components = text
            .split_whitespace()
            .map(|component| SelectorComponent::parse(component, text, types))
            .collect::<Result<SmallVec<_>, _>>()?;
        if components.is_empty() {
            return Err(ThemeError::InvalidStyleSelector(text.into()));
        }
        Ok(Self {
            source: text.into(),
            components,
        })
    }

    /// Returns the source text.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns the components, outermost first.
    #[must_use]
    #[inline]
    pub fn components(&self) -> &[SelectorComponent] {
        &self.components
    }

    /// Returns the number of components.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Always `false`; parsed selectors have at least one component.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns the count of type and tag criteria across all components.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        Specificity(self.components.iter().map(SelectorComponent::specificity).sum())
    }

    /// Returns `true` if the chain matches `target` and its ancestors.
    ///
    /// Remaining components are consumed right to left, each by searching
    /// upward from just above the previously matched node.
    #[must_use]
    pub fn matches(&self, target: &dyn Styleable, types: &TypeRegistry) -> bool {
        let Some((last, rest)) = self.components.split_last() else {
            return false;
        };
        if !last.matches(target, types) {
            return false;
        }
        let mut ancestors = target.ancestors();
        rest.iter()
            .rev()
            .all(|component| ancestors.any(|ancestor| component.matches(&*ancestor, types)))
    }
}

impl PartialOrd for Selector {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Selector {
    fn cmp(&self, other: &Self) -> Ordering {
        self.specificity()
            .cmp(&other.specificity())
            .then_with(|| self.source.cmp(&other.source))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
