// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style tags attached to targets.

use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

use smallvec::SmallVec;

/// An opaque style label, such as `primary` or `header`.
///
/// Cloning is cheap (`Rc<str>`).
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(Rc<str>);

impl Tag {
    /// Creates a tag.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(name.into())
    }

    /// Returns the tag text.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Tag {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered tags of a single target.
pub type TagSet = SmallVec<[Tag; 4]>;

/// Parses a comma-separated tag list such as `"header, primary"`.
///
/// Entries are trimmed and empty entries dropped.
#[must_use]
pub fn parse_tags(text: &str) -> TagSet {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Tag::new)
        .collect()
}

/// Interior-mutable tag storage embedded in a styleable target.
///
/// The first tag is significant, so insertion order is kept; duplicates are
/// removed on assignment.
///
/// # Example
///
/// ```rust
/// use understory_property::{Tag, TagStore};
///
/// let store = TagStore::default();
/// store.replace(["header", "primary", "header"].map(Tag::new));
/// assert_eq!(store.len(), 2);
/// assert!(store.contains("primary"));
/// assert_eq!(store.first().unwrap().as_str(), "header");
/// ```
#[derive(Debug, Default)]
pub struct TagStore {
    tags: RefCell<TagSet>,
}

impl TagStore {
    /// Creates a store with the given tags.
    #[must_use]
    pub fn with_tags(tags: impl IntoIterator<Item = Tag>) -> Self {
        let store = Self::default();
        store.replace(tags);
        store
    }

    /// Replaces all tags.
    ///
    /// This does not restyle the target. For a target known to a stylist,
    /// use `Stylist::set_tags` or `Stylist::set_tag_string` instead.
    pub fn replace(&self, tags: impl IntoIterator<Item = Tag>) {
        let mut deduped = TagSet::new();
        for tag in tags {
            if !deduped.contains(&tag) {
                deduped.push(tag);
            }
        }
        *self.tags.borrow_mut() = deduped;
    }

    /// Returns a copy of the current tags.
    #[must_use]
    pub fn get(&self) -> TagSet {
        self.tags.borrow().clone()
    }

    /// Returns `true` if the target carries `tag`.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.borrow().iter().any(|t| t.as_str() == tag)
    }

    /// Returns the first tag.
    #[must_use]
    pub fn first(&self) -> Option<Tag> {
        self.tags.borrow().first().cloned()
    }

    /// Returns the number of tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.borrow().len()
    }

    /// Returns `true` if there are no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.borrow().is_empty()
    }
}
