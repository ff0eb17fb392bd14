// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`StyleValue`] trait, its parse context, and scalar parsers.

use alloc::string::String;
use core::fmt;

use peniko::Color;

use crate::font::TextStyle;
use crate::raw::RawValue;

/// A value that can be parsed from a theme document.
///
/// Implementations return `None` for anything outside their grammar; callers
/// decide how to report the failure.
///
/// # Example
///
/// ```rust
/// use understory_style_value::{ParseCx, RawValue, StyleValue};
///
/// #[derive(Debug, PartialEq)]
/// struct Percent(f64);
///
/// impl StyleValue for Percent {
///     fn parse(value: &RawValue, cx: &ParseCx<'_>) -> Option<Self> {
///         let text = value.as_str()?.strip_suffix('%')?;
///         let number = f64::parse(&RawValue::from(text), cx)?;
///         Some(Self(number / 100.0))
///     }
/// }
///
/// let cx = ParseCx::default();
/// assert_eq!(Percent::parse(&"50%".into(), &cx), Some(Percent(0.5)));
/// assert_eq!(Percent::parse(&"50".into(), &cx), None);
/// ```
pub trait StyleValue: Sized {
    /// Parses `value`, returning `None` when it does not fit the grammar.
    fn parse(value: &RawValue, cx: &ParseCx<'_>) -> Option<Self>;
}

/// Platform lookups used by value parsers.
///
/// Every method has a default, so hosts only override what they support.
pub trait Resources {
    /// Looks up a color by asset name.
    fn named_color(&self, name: &str) -> Option<Color> {
        let _ = name;
        None
    }

    /// Returns `true` if a font with this exact name is installed.
    fn has_font(&self, name: &str) -> bool {
        let _ = name;
        false
    }

    /// Returns the preferred point size for a text style.
    fn text_style_size(&self, style: TextStyle) -> f64 {
        style.default_size()
    }
}

/// [`Resources`] with no assets, no fonts and default text style sizes.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoResources;

impl Resources for NoResources {}

/// Context handed to every [`StyleValue::parse`] call.
#[derive(Clone, Copy)]
pub struct ParseCx<'a> {
    resources: &'a dyn Resources,
}

impl<'a> ParseCx<'a> {
    /// Creates a parse context over the given resources.
    #[must_use]
    pub fn new(resources: &'a dyn Resources) -> Self {
        Self { resources }
    }

    /// Returns the platform resources.
    #[must_use]
    #[inline]
    pub fn resources(&self) -> &'a dyn Resources {
        self.resources
    }
}

impl Default for ParseCx<'static> {
    fn default() -> Self {
        Self::new(&NoResources)
    }
}

impl fmt::Debug for ParseCx<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseCx").finish_non_exhaustive()
    }
}

impl StyleValue for bool {
    fn parse(value: &RawValue, _cx: &ParseCx<'_>) -> Option<Self> {
        match value {
            RawValue::Bool(b) => Some(*b),
            RawValue::String(s) => match s.to_ascii_lowercase().as_str() {
                "yes" | "true" => Some(true),
                "no" | "false" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }
}

impl StyleValue for i64 {
    fn parse(value: &RawValue, _cx: &ParseCx<'_>) -> Option<Self> {
        match value {
            RawValue::Int(i) => Some(*i),
            RawValue::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}

impl StyleValue for f64 {
    fn parse(value: &RawValue, _cx: &ParseCx<'_>) -> Option<Self> {
        match value {
            RawValue::String(s) => s.parse().ok(),
            other => other.as_f64(),
        }
    }
}

impl StyleValue for f32 {
    #[expect(clippy::cast_possible_truncation, reason = "narrowing is the intent")]
    fn parse(value: &RawValue, cx: &ParseCx<'_>) -> Option<Self> {
        f64::parse(value, cx).map(|v| v as Self)
    }
}

impl StyleValue for String {
    fn parse(value: &RawValue, _cx: &ParseCx<'_>) -> Option<Self> {
        value.as_str().map(Into::into)
    }
}
