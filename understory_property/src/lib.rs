// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Property: styleable targets and the style property registry.
//!
//! This crate is the seam between a style resolver and a host's widgets:
//!
//! - [`Styleable`] is implemented by host objects. It exposes a [`TagStore`],
//!   a [`TypeTag`] issued by a [`TypeRegistry`], an optional parent for
//!   ancestor matching, environment [`Traits`], and capability accessors.
//! - Capability traits ([`StyleableView`], [`StyleableButton`],
//!   [`StyleableText`], [`StyleableStack`], [`StyleableBar`],
//!   [`StyleableBarItem`], [`StyleableViewController`]) carry no-op default
//!   setters, so a host implements only what it supports.
//! - [`StyleProperty`] binds a theme property name to a capability and a
//!   value type; [`StyleObject`] binds a relation name used by sub-styles.
//! - [`PropertyRegistry`] holds both, and
//!   [`PropertyRegistry::with_defaults`] installs the standard table.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::cell::Cell;
//! use understory_property::{
//!     PropertyContext, PropertyRegistry, Styleable, StyleableView, Tag, TagStore, TypeRegistry,
//!     TypeTag,
//! };
//! use understory_style_value::{ParseCx, RawValue};
//!
//! struct Panel {
//!     ty: TypeTag,
//!     tags: TagStore,
//!     radius: Cell<f64>,
//! }
//!
//! impl StyleableView for Panel {
//!     fn set_corner_radius(&self, radius: f64) {
//!         self.radius.set(radius);
//!     }
//! }
//!
//! impl Styleable for Panel {
//!     fn tag_store(&self) -> &TagStore { &self.tags }
//!     fn type_tag(&self) -> TypeTag { self.ty }
//!     fn as_view(&self) -> Option<&dyn StyleableView> { Some(self) }
//! }
//!
//! let mut types = TypeRegistry::new();
//! let panel = Panel {
//!     ty: types.register("Panel", None),
//!     tags: TagStore::with_tags([Tag::new("card")]),
//!     radius: Cell::new(0.0),
//! };
//!
//! let registry = PropertyRegistry::with_defaults();
//! let cx = ParseCx::default();
//! for property in registry.properties_for("cornerRadius", &panel) {
//!     property
//!         .apply(&panel, &RawValue::from("8"), PropertyContext::default(), &cx)
//!         .unwrap();
//! }
//! assert_eq!(panel.radius.get(), 8.0);
//! assert!(panel.tag_store().contains("card"));
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod capability;
mod context;
mod defaults;
mod property;
mod registry;
mod tag;
mod target;
mod types;

pub use capability::{
    StyleableBar, StyleableBarItem, StyleableButton, StyleableStack, StyleableText,
    StyleableView, StyleableViewController,
};
pub use context::{PropertyContext, PropertyValue, StyleContext, Traits};
pub use property::{ApplyError, Capability, StyleObject, StyleProperty};
pub use registry::PropertyRegistry;
pub use tag::{Tag, TagSet, TagStore, parse_tags};
pub use target::{Ancestors, StyleTarget, Styleable, same_target};
pub use types::{Normalizer, TypeRegistry, TypeTag, default_normalizer};
