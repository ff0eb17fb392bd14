// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout constraint values.

use crate::parse::{ParseCx, StyleValue};
use crate::raw::RawValue;

/// Relation between a constrained dimension and its constant.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Relation {
    /// `==`
    #[default]
    Equal,
    /// `>=`
    GreaterThanOrEqual,
    /// `<=`
    LessThanOrEqual,
}

impl Relation {
    /// Prefix checking order.
    const ALL: [Self; 3] = [Self::Equal, Self::GreaterThanOrEqual, Self::LessThanOrEqual];

    /// The relation's operator symbol.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Equal => "==",
            Self::GreaterThanOrEqual => ">=",
            Self::LessThanOrEqual => "<=",
        }
    }
}

/// A dimension constraint such as `">= 44"`.
///
/// A bare number is an equality constraint.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutAnchor {
    /// Constant the dimension is related to.
    pub constant: f64,
    /// The relation.
    pub relation: Relation,
}

impl StyleValue for LayoutAnchor {
    fn parse(value: &RawValue, cx: &ParseCx<'_>) -> Option<Self> {
        if let Some(constant) = f64::parse(value, cx) {
            return Some(Self {
                constant,
                relation: Relation::Equal,
            });
        }
        let text = value.as_str()?;
        let (relation, rest) = Relation::ALL
            .iter()
            .find_map(|r| text.strip_prefix(r.symbol()).map(|rest| (*r, rest.trim())))
            .unwrap_or((Relation::Equal, text));
        let constant = f64::parse(&RawValue::from(rest), cx)?;
        Some(Self { constant, relation })
    }
}

/// A width-to-height ratio.
///
/// Accepts a number, `"A/B"` (ratio `A / B`) or `"A:B"`. The colon form
/// yields `B / A`, the inverse of the slash form.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AspectRatioAnchor {
    /// The ratio.
    pub ratio: f64,
}

impl StyleValue for AspectRatioAnchor {
    fn parse(value: &RawValue, cx: &ParseCx<'_>) -> Option<Self> {
        if let Some(ratio) = f64::parse(value, cx) {
            return Some(Self { ratio });
        }
        let text = value.as_str()?;
        let split = text.find([':', '/'])?;
        let symbol = &text[split..=split];
        let number = |s: &str| f64::parse(&RawValue::from(s.trim()), cx);
        let first = number(&text[..split])?;
        let second = number(&text[split + 1..])?;
        let (numerator, divisor) = if symbol == "/" {
            (first, second)
        } else {
            (second, first)
        };
        if divisor == 0.0 {
            return None;
        }
        Some(Self {
            ratio: numerator / divisor,
        })
    }
}
