// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Style: selectors, themes and cascade resolution.
//!
//! This crate applies YAML themes to host objects that implement
//! [`understory_property::Styleable`]:
//!
//! - A [`Theme`] is parsed from a document with `variables` and `styles`.
//!   Style bodies may inherit from other styles, reference variables and
//!   nest sub-styles for related objects.
//! - Each style is keyed by a [`Selector`], a chain of `Type`, `tag` and
//!   `Type.tag` components matched against the target and its ancestors.
//!   Rules apply in ascending [`Specificity`], so more specific rules win.
//! - A [`Stylist`] owns the registries and the installed themes, remembers
//!   every target it styles and restyles them when themes change.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::cell::{Cell, RefCell};
//! use std::rc::Rc;
//! use understory_property::{
//!     Styleable, StyleableText, StyleableView, TagStore, TypeRegistry, TypeTag,
//! };
//! use understory_style::Stylist;
//! use understory_style_value::Color;
//!
//! struct Label {
//!     ty: TypeTag,
//!     tags: TagStore,
//!     alpha: Cell<f64>,
//!     color: RefCell<Option<Color>>,
//! }
//!
//! impl StyleableView for Label {
//!     fn set_alpha(&self, alpha: f64) {
//!         self.alpha.set(alpha);
//!     }
//! }
//!
//! impl StyleableText for Label {
//!     fn set_text_color(&self, color: Color) {
//!         *self.color.borrow_mut() = Some(color);
//!     }
//! }
//!
//! impl Styleable for Label {
//!     fn tag_store(&self) -> &TagStore { &self.tags }
//!     fn type_tag(&self) -> TypeTag { self.ty }
//!     fn as_view(&self) -> Option<&dyn StyleableView> { Some(self) }
//!     fn as_text(&self) -> Option<&dyn StyleableText> { Some(self) }
//! }
//!
//! let mut types = TypeRegistry::new();
//! let label_type = types.register("Label", None);
//!
//! let mut stylist = Stylist::builder().types(types).build();
//! stylist
//!     .add_theme_yaml(
//!         "
//! variables:
//!   accent: '#FF0000'
//! styles:
//!   Label:
//!     alpha: 0.5
//!   Label.title:
//!     textColor: $accent
//!     alpha: 1
//! ",
//!         "main",
//!     )
//!     .unwrap();
//!
//! let label = Rc::new(Label {
//!     ty: label_type,
//!     tags: TagStore::default(),
//!     alpha: Cell::new(0.0),
//!     color: RefCell::new(None),
//! });
//!
//! stylist.style(&label);
//! assert_eq!(label.alpha.get(), 0.5);
//! assert!(label.color.borrow().is_none());
//!
//! stylist.set_tag_string(&label, "title");
//! assert_eq!(label.alpha.get(), 1.0);
//! assert!(label.color.borrow().is_some());
//! ```
//!
//! ## Errors and diagnostics
//!
//! Structural theme problems are reported as [`ThemeError`] and nothing is
//! installed. Values that fail to parse for a property are isolated: the
//! failure is logged through `tracing` and collected in the
//! [`ApplyReport`], and every other property still applies.

mod error;
mod key;
mod selector;
mod style;
mod stylesheet;
mod stylist;
mod theme;
mod yaml;

pub use error::ThemeError;
pub use selector::{Selector, SelectorComponent, Specificity};
pub use style::{PropertyAssignment, Style, StyleBuilder};
pub use stylesheet::{StyleRule, StyleSheet};
pub use stylist::{ApplyReport, Stylist, StylistBuilder};
pub use theme::{Theme, ThemeBuilder};
pub use yaml::parse_yaml;
