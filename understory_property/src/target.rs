// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Styleable`] target trait and hierarchy traversal.

use alloc::rc::Rc;
use core::any::Any;
use core::fmt;

use crate::capability::{
    StyleableBar, StyleableBarItem, StyleableButton, StyleableStack, StyleableText,
    StyleableView, StyleableViewController,
};
use crate::context::Traits;
use crate::tag::TagStore;
use crate::types::TypeTag;

/// An object that styles can be applied to.
///
/// Implementors expose their identity (type and tags), their place in the
/// hierarchy, and the capabilities styles can drive. Capability accessors
/// default to `None`; a target opts in by returning `Some(self)`.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use understory_property::{Styleable, StyleableView, TagStore, TypeRegistry, TypeTag};
///
/// struct Panel {
///     ty: TypeTag,
///     tags: TagStore,
///     alpha: Cell<f64>,
/// }
///
/// impl StyleableView for Panel {
///     fn set_alpha(&self, alpha: f64) {
///         self.alpha.set(alpha);
///     }
/// }
///
/// impl Styleable for Panel {
///     fn tag_store(&self) -> &TagStore { &self.tags }
///     fn type_tag(&self) -> TypeTag { self.ty }
///     fn as_view(&self) -> Option<&dyn StyleableView> { Some(self) }
/// }
///
/// let mut types = TypeRegistry::new();
/// let panel: Rc<dyn Styleable> = Rc::new(Panel {
///     ty: types.register("Panel", None),
///     tags: TagStore::default(),
///     alpha: Cell::new(1.0),
/// });
/// assert!(panel.as_view().is_some());
/// assert!(panel.as_button().is_none());
/// assert!(panel.downcast_ref::<Panel>().is_some());
/// ```
pub trait Styleable: Any {
    /// Returns the target's tag storage.
    fn tag_store(&self) -> &TagStore;

    /// Returns the target's type identity.
    fn type_tag(&self) -> TypeTag;

    /// Returns the next object up the hierarchy, used for ancestor selectors.
    fn parent(&self) -> Option<Rc<dyn Styleable>> {
        None
    }

    /// Returns the target's own environment traits.
    fn traits(&self) -> Traits {
        Traits::default()
    }

    /// View capability.
    fn as_view(&self) -> Option<&dyn StyleableView> {
        None
    }

    /// Button capability.
    fn as_button(&self) -> Option<&dyn StyleableButton> {
        None
    }

    /// Text capability.
    fn as_text(&self) -> Option<&dyn StyleableText> {
        None
    }

    /// Stack capability.
    fn as_stack(&self) -> Option<&dyn StyleableStack> {
        None
    }

    /// Bar capability.
    fn as_bar(&self) -> Option<&dyn StyleableBar> {
        None
    }

    /// Bar item capability.
    fn as_bar_item(&self) -> Option<&dyn StyleableBarItem> {
        None
    }

    /// View controller capability.
    fn as_view_controller(&self) -> Option<&dyn StyleableViewController> {
        None
    }
}

impl dyn Styleable {
    /// Downcasts to a concrete target type.
    #[must_use]
    pub fn downcast_ref<T: Styleable>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref()
    }

    /// Iterates over strict ancestors, nearest first.
    #[must_use]
    pub fn ancestors(&self) -> Ancestors {
        Ancestors {
            next: self.parent(),
        }
    }
}

/// Iterator over a target's ancestors, nearest first.
pub struct Ancestors {
    next: Option<Rc<dyn Styleable>>,
}

impl Iterator for Ancestors {
    type Item = Rc<dyn Styleable>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.parent();
        Some(current)
    }
}

impl fmt::Debug for Ancestors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ancestors")
            .field("exhausted", &self.next.is_none())
            .finish_non_exhaustive()
    }
}

/// Anything that can be handed to a resolver as a shared target.
pub trait StyleTarget {
    /// Returns the target as a shared trait object.
    fn to_target(&self) -> Rc<dyn Styleable>;
}

impl<T: Styleable> StyleTarget for Rc<T> {
    fn to_target(&self) -> Rc<dyn Styleable> {
        self.clone()
    }
}

impl StyleTarget for Rc<dyn Styleable> {
    fn to_target(&self) -> Rc<dyn Styleable> {
        self.clone()
    }
}

/// Returns `true` if both handles point at the same target.
#[must_use]
#[inline]
pub fn same_target(a: &dyn Styleable, b: &dyn Styleable) -> bool {
    core::ptr::addr_eq(a, b)
}
