// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Style Value: dynamic theme values and their typed parsers.
//!
//! Theme documents are loosely typed: a property may be written as a number,
//! a string with a small grammar of its own, or a list. This crate provides
//! the dynamic representation ([`RawValue`]) and the [`StyleValue`] trait
//! that turns it into concrete values such as [`Color`], [`Font`],
//! [`Insets`](kurbo::Insets) or a keyword enum.
//!
//! ## Parsing
//!
//! Every parser accepts the already-typed fast path (a number for numeric
//! values, a bool for booleans), a documented string form, and where it makes
//! sense a list form. Parsers never substitute defaults: an input that does
//! not fit the grammar yields `None`.
//!
//! ```rust
//! use kurbo::Insets;
//! use understory_style_value::{Color, ParseCx, RawValue, StyleValue};
//!
//! let cx = ParseCx::default();
//!
//! let color = Color::parse(&RawValue::from("blue:0.5"), &cx).unwrap();
//! assert_eq!(color.components[3], 0.5);
//!
//! // Two values are (horizontal, vertical).
//! let insets = Insets::parse(&RawValue::from("2, 4"), &cx).unwrap();
//! assert_eq!(insets, Insets::new(2.0, 4.0, 2.0, 4.0));
//!
//! assert_eq!(bool::parse(&RawValue::from("YES"), &cx), Some(true));
//! assert_eq!(f64::parse(&RawValue::from("abc"), &cx), None);
//! ```
//!
//! ## Resources
//!
//! Some lookups depend on the host platform: asset-catalog colors, installed
//! font names and the point size of a text style. These go through the
//! [`Resources`] trait carried by [`ParseCx`]. [`NoResources`] answers every
//! lookup negatively and uses the default text style sizes.
//!
//! ## Features
//!
//! - `std` (enabled by default): Use the Rust standard library.
//! - `libm`: Use floating point implementations from `libm` in `no_std` builds.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod anchor;
mod color;
mod font;
mod geometry;
mod keyword;
mod parse;
mod raw;

pub use anchor::{AspectRatioAnchor, LayoutAnchor, Relation};
pub use font::{Font, FontFace, FontWeight, TextStyle};
pub use keyword::{
    Axis, BarMetrics, BarStyle, ContentMode, ControlState, Device, LargeTitleDisplayMode,
    SizeClass, StackAlignment, StackDistribution, TextAlignment,
};
pub use parse::{NoResources, ParseCx, Resources, StyleValue};
pub use peniko::Color;
pub use raw::{RawMap, RawValue};
