// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry values backed by Kurbo types.
//!
//! Multi-component values are written either as a comma-separated string
//! (`"1, 2"`) or as a list (`[1, 2]`). Most types also take a single scalar
//! that fills every component.

use alloc::vec::Vec;

use kurbo::{Insets, Point, Rect, Size, Vec2};

use crate::parse::{ParseCx, StyleValue};
use crate::raw::RawValue;

/// Splits a multi-component value into numbers.
///
/// Returns `None` if any component fails to parse.
fn components(value: &RawValue, cx: &ParseCx<'_>) -> Option<Vec<f64>> {
    match value {
        RawValue::String(text) => text
            .split(',')
            .map(|part| f64::parse(&RawValue::from(part.trim()), cx))
            .collect(),
        RawValue::List(items) => items.iter().map(|item| f64::parse(item, cx)).collect(),
        _ => None,
    }
}

impl StyleValue for Insets {
    /// One value is uniform, two are `(horizontal, vertical)` and four are
    /// `(top, left, bottom, right)`.
    fn parse(value: &RawValue, cx: &ParseCx<'_>) -> Option<Self> {
        if let Some(uniform) = f64::parse(value, cx) {
            return Some(Self::uniform(uniform));
        }
        match components(value, cx)?.as_slice() {
            &[h, v] => Some(Self::new(h, v, h, v)),
            &[top, left, bottom, right] => Some(Self::new(left, top, right, bottom)),
            _ => None,
        }
    }
}

impl StyleValue for Size {
    fn parse(value: &RawValue, cx: &ParseCx<'_>) -> Option<Self> {
        if let Some(uniform) = f64::parse(value, cx) {
            return Some(Self::new(uniform, uniform));
        }
        match components(value, cx)?.as_slice() {
            &[width, height] => Some(Self::new(width, height)),
            _ => None,
        }
    }
}

impl StyleValue for Point {
    fn parse(value: &RawValue, cx: &ParseCx<'_>) -> Option<Self> {
        if let Some(uniform) = f64::parse(value, cx) {
            return Some(Self::new(uniform, uniform));
        }
        match components(value, cx)?.as_slice() {
            &[x, y] => Some(Self::new(x, y)),
            _ => None,
        }
    }
}

impl StyleValue for Vec2 {
    fn parse(value: &RawValue, cx: &ParseCx<'_>) -> Option<Self> {
        Point::parse(value, cx).map(Point::to_vec2)
    }
}

impl StyleValue for Rect {
    /// Exactly four values: `(x, y, width, height)`.
    fn parse(value: &RawValue, cx: &ParseCx<'_>) -> Option<Self> {
        match components(value, cx)?.as_slice() {
            &[x, y, width, height] => Some(Self::from_origin_size((x, y), (width, height))),
            _ => None,
        }
    }
}
