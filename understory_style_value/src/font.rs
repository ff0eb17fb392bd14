// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font descriptions.

use alloc::string::{String, ToString};

use crate::parse::{ParseCx, StyleValue};
use crate::raw::RawValue;

/// A dynamic-type text style.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextStyle {
    /// Large title.
    Title1,
    /// Second-level title.
    Title2,
    /// Third-level title.
    Title3,
    /// Headline.
    Headline,
    /// Subheadline.
    Subheadline,
    /// Body text.
    Body,
    /// Callout.
    Callout,
    /// Footnote.
    Footnote,
    /// Standard caption.
    Caption1,
    /// Alternate caption.
    Caption2,
}

impl TextStyle {
    /// Parses a text style keyword, ignoring case and spaces.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let key: String = keyword
            .chars()
            .filter(|c| *c != ' ')
            .flat_map(char::to_lowercase)
            .collect();
        Some(match key.as_str() {
            "title1" => Self::Title1,
            "title2" => Self::Title2,
            "title3" => Self::Title3,
            "headline" => Self::Headline,
            "subheadline" => Self::Subheadline,
            "body" => Self::Body,
            "callout" => Self::Callout,
            "footnote" => Self::Footnote,
            "caption1" => Self::Caption1,
            "caption2" => Self::Caption2,
            _ => return None,
        })
    }

    /// Point size at the default content size category.
    #[must_use]
    pub fn default_size(self) -> f64 {
        match self {
            Self::Title1 => 28.0,
            Self::Title2 => 22.0,
            Self::Title3 => 20.0,
            Self::Headline | Self::Body => 17.0,
            Self::Subheadline => 15.0,
            Self::Callout => 16.0,
            Self::Footnote => 13.0,
            Self::Caption1 => 12.0,
            Self::Caption2 => 11.0,
        }
    }
}

/// Weight of a system font.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FontWeight {
    /// Ultra light.
    UltraLight,
    /// Thin.
    Thin,
    /// Light.
    Light,
    /// Regular.
    #[default]
    Regular,
    /// Medium.
    Medium,
    /// Semibold.
    Semibold,
    /// Bold.
    Bold,
    /// Heavy.
    Heavy,
    /// Black.
    Black,
}

/// Which face a [`Font`] uses.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFace {
    /// The platform system font.
    System {
        /// Weight of the face.
        weight: FontWeight,
        /// Whether the italic variant is used.
        italic: bool,
    },
    /// An installed font, by name.
    Named(String),
    /// The platform's preferred font for a text style.
    Preferred(TextStyle),
}

/// A font face at a point size.
///
/// String forms:
///
/// - `"17"`: system font at 17pt
/// - `"headline"`: preferred font for a text style
/// - `"Avenir:14"`: an installed font (see [`Resources::has_font`](crate::Resources::has_font))
/// - `"system:14"`, `"systemBold:14"`: system font with an optional weight
/// - `"Avenir:body"`, `"systemBold:headline"`: a named or system font at a
///   text style's point size
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    /// The face.
    pub face: FontFace,
    /// Point size.
    pub size: f64,
}

impl Font {
    /// A regular system font.
    #[must_use]
    pub fn system(size: f64) -> Self {
        Self::system_weight(size, FontWeight::Regular)
    }

    /// A system font of the given weight.
    #[must_use]
    pub fn system_weight(size: f64, weight: FontWeight) -> Self {
        Self {
            face: FontFace::System {
                weight,
                italic: false,
            },
            size,
        }
    }

    fn named_or_system(name: &str, size: f64, cx: &ParseCx<'_>) -> Option<Self> {
        if cx.resources().has_font(name) {
            return Some(Self {
                face: FontFace::Named(name.to_string()),
                size,
            });
        }
        if name == "system" {
            return Some(Self::system(size));
        }
        if !name.contains("system") {
            return None;
        }
        let weight = name.replace("system", "").to_lowercase();
        let face = match weight.as_str() {
            "ultralight" => FontWeight::UltraLight,
            "thin" => FontWeight::Thin,
            "light" => FontWeight::Light,
            "medium" => FontWeight::Medium,
            "semibold" => FontWeight::Semibold,
            "bold" => FontWeight::Bold,
            "heavy" => FontWeight::Heavy,
            "black" => FontWeight::Black,
            "italic" => {
                return Some(Self {
                    face: FontFace::System {
                        weight: FontWeight::Regular,
                        italic: true,
                    },
                    size,
                });
            }
            _ => return None,
        };
        Some(Self::system_weight(size, face))
    }
}

impl StyleValue for Font {
    fn parse(value: &RawValue, cx: &ParseCx<'_>) -> Option<Self> {
        if let Some(size) = value.as_f64() {
            return Some(Self::system(size));
        }
        let text = value.as_str()?;
        let parts: alloc::vec::Vec<&str> = text.split(':').collect();
        match parts.as_slice() {
            [single] => {
                if let Some(style) = TextStyle::from_keyword(single) {
                    return Some(Self {
                        face: FontFace::Preferred(style),
                        size: cx.resources().text_style_size(style),
                    });
                }
                single.parse().ok().map(Self::system)
            }
            [name, size] => {
                if let Ok(size) = size.parse::<f64>() {
                    return Self::named_or_system(name, size, cx);
                }
                let style = TextStyle::from_keyword(size)?;
                Self::named_or_system(name, cx.resources().text_style_size(style), cx)
            }
            _ => None,
        }
    }
}
