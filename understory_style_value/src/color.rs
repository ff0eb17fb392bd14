// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color parsing.
//!
//! Accepted forms, after an optional `:alpha` suffix is split off:
//!
//! - a palette name (`red`, `light gray`, `clear`, ...), ignoring case and spaces
//! - a hex string with 3, 6 or 8 digits and an optional leading `#`; the
//!   8-digit form carries alpha in its last byte
//! - an asset name resolved through [`Resources::named_color`](crate::Resources::named_color)
//!
//! The alpha suffix only ever lowers the alpha of the parsed color.

use alloc::string::{String, ToString};

use peniko::Color;

use crate::parse::{ParseCx, StyleValue};
use crate::raw::RawValue;

const THIRD: f32 = 1.0 / 3.0;

const PALETTE: &[(&str, [f32; 4])] = &[
    ("red", [1.0, 0.0, 0.0, 1.0]),
    ("blue", [0.0, 0.0, 1.0, 1.0]),
    ("green", [0.0, 1.0, 0.0, 1.0]),
    ("purple", [0.5, 0.0, 0.5, 1.0]),
    ("yellow", [1.0, 1.0, 0.0, 1.0]),
    ("orange", [1.0, 0.5, 0.0, 1.0]),
    ("gray", [0.5, 0.5, 0.5, 1.0]),
    ("grey", [0.5, 0.5, 0.5, 1.0]),
    ("brown", [0.6, 0.4, 0.2, 1.0]),
    ("cyan", [0.0, 1.0, 1.0, 1.0]),
    ("magenta", [1.0, 0.0, 1.0, 1.0]),
    ("darkgray", [THIRD, THIRD, THIRD, 1.0]),
    ("darkgrey", [THIRD, THIRD, THIRD, 1.0]),
    ("lightgray", [2.0 * THIRD, 2.0 * THIRD, 2.0 * THIRD, 1.0]),
    ("lightgrey", [2.0 * THIRD, 2.0 * THIRD, 2.0 * THIRD, 1.0]),
    ("white", [1.0, 1.0, 1.0, 1.0]),
    ("black", [0.0, 0.0, 0.0, 1.0]),
    ("none", [0.0, 0.0, 0.0, 0.0]),
    ("transparent", [0.0, 0.0, 0.0, 0.0]),
    ("clear", [0.0, 0.0, 0.0, 0.0]),
];

impl StyleValue for Color {
    fn parse(value: &RawValue, cx: &ParseCx<'_>) -> Option<Self> {
        if !value.is_scalar() {
            return None;
        }
        let text = value.to_string();
        let mut parts = text.split(':');
        let (name, alpha) = match (parts.next(), parts.next(), parts.next()) {
            (Some(name), Some(alpha), None) => (name, alpha.trim().parse::<f32>().ok()),
            _ => (text.as_str(), None),
        };

        let color = palette(name)
            .or_else(|| parse_hex(name))
            .or_else(|| cx.resources().named_color(name))?;

        Some(match alpha {
            Some(alpha) if alpha < 1.0 => color.multiply_alpha(alpha),
            _ => color,
        })
    }
}

fn palette(name: &str) -> Option<Color> {
    let key: String = name
        .chars()
        .filter(|c| *c != ' ')
        .flat_map(char::to_lowercase)
        .collect();
    PALETTE
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, components)| Color::new(*components))
}

fn parse_hex(text: &str) -> Option<Color> {
    let hex = text.strip_prefix('#').unwrap_or(text);
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    match hex.len() {
        3 => {
            let nibble = |i: usize| u8::from_str_radix(hex.get(i..=i)?, 16).ok().map(|v| v * 17);
            Some(Color::from_rgb8(nibble(0)?, nibble(1)?, nibble(2)?))
        }
        6 => Some(Color::from_rgb8(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color::from_rgba8(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}
