// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyword enums.
//!
//! Each type parses from a string by matching a fixed keyword table after
//! removing whitespace and lowercasing.

use alloc::string::String;

use crate::parse::{ParseCx, StyleValue};
use crate::raw::RawValue;

fn normalize(keyword: &str) -> String {
    keyword
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

macro_rules! keywords {
    ($ty:ident { $($pat:pat => $variant:ident),+ $(,)? }) => {
        impl $ty {
            /// Parses a keyword, ignoring case and whitespace.
            #[must_use]
            pub fn from_keyword(keyword: &str) -> Option<Self> {
                match normalize(keyword).as_str() {
                    $($pat => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl StyleValue for $ty {
            fn parse(value: &RawValue, _cx: &ParseCx<'_>) -> Option<Self> {
                value.as_str().and_then(Self::from_keyword)
            }
        }
    };
}

/// Cross-axis alignment of a stack's children.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StackAlignment {
    /// Stretch to fill.
    Fill,
    /// Leading edge.
    Leading,
    /// Top edge.
    Top,
    /// First text baseline.
    FirstBaseline,
    /// Centered.
    Center,
    /// Trailing edge.
    Trailing,
    /// Bottom edge.
    Bottom,
    /// Last text baseline.
    LastBaseline,
}

keywords!(StackAlignment {
    "fill" => Fill,
    "leading" => Leading,
    "top" => Top,
    "firstbaseline" => FirstBaseline,
    "center" => Center,
    "trailing" => Trailing,
    "bottom" => Bottom,
    "lastbaseline" => LastBaseline,
});

/// Main-axis distribution of a stack's children.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StackDistribution {
    /// Fill the available space.
    Fill,
    /// Equal sizes.
    FillEqually,
    /// Sizes proportional to intrinsic sizes.
    FillProportionally,
    /// Equal gaps between children.
    EqualSpacing,
    /// Equal distance between child centers.
    EqualCentering,
}

keywords!(StackDistribution {
    "fill" => Fill,
    "fillequally" => FillEqually,
    "fillproportionally" => FillProportionally,
    "equalspacing" => EqualSpacing,
    "equalcentering" => EqualCentering,
});

/// Layout axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
}

keywords!(Axis {
    "horizontal" => Horizontal,
    "vertical" => Vertical,
});

/// How content is laid out when its size differs from the view's bounds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ContentMode {
    /// Stretch to the bounds, ignoring aspect ratio.
    ScaleToFill,
    /// Scale to fit inside the bounds.
    ScaleAspectFit,
    /// Scale to cover the bounds.
    ScaleAspectFill,
    /// Redisplay on bounds change.
    Redraw,
    /// Centered, unscaled.
    Center,
    /// Top edge, unscaled.
    Top,
    /// Bottom edge, unscaled.
    Bottom,
    /// Left edge, unscaled.
    Left,
    /// Right edge, unscaled.
    Right,
    /// Top left corner, unscaled.
    TopLeft,
    /// Top right corner, unscaled.
    TopRight,
    /// Bottom left corner, unscaled.
    BottomLeft,
    /// Bottom right corner, unscaled.
    BottomRight,
}

keywords!(ContentMode {
    "scaletofill" => ScaleToFill,
    "scaleaspectfit" => ScaleAspectFit,
    "scaleaspectfill" => ScaleAspectFill,
    "redraw" => Redraw,
    "center" => Center,
    "top" => Top,
    "bottom" => Bottom,
    "left" => Left,
    "right" => Right,
    "topleft" => TopLeft,
    "topright" => TopRight,
    "bottomleft" => BottomLeft,
    "bottomright" => BottomRight,
});

/// Appearance of a navigation or tool bar.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BarStyle {
    /// Platform default.
    #[default]
    Default,
    /// Dark bar.
    Black,
    /// Dark translucent bar.
    BlackTranslucent,
}

keywords!(BarStyle {
    "default" => Default,
    "black" => Black,
    "blacktranslucent" => BlackTranslucent,
});

/// Horizontal text alignment.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlignment {
    /// Left aligned.
    Left,
    /// Centered.
    Center,
    /// Right aligned.
    Right,
    /// Both edges aligned.
    Justified,
    /// Follows the script's direction.
    #[default]
    Natural,
}

keywords!(TextAlignment {
    "left" => Left,
    "center" => Center,
    "right" => Right,
    "justified" => Justified,
    "natural" => Natural,
});

/// Coarse size class of a layout dimension.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SizeClass {
    /// Not specified; matches any size class.
    #[default]
    Unspecified,
    /// Constrained space.
    Compact,
    /// Expansive space.
    Regular,
}

keywords!(SizeClass {
    "compact" => Compact,
    "regular" => Regular,
});

/// Device idiom.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Device {
    /// Not specified; matches any device.
    #[default]
    Unspecified,
    /// Phone.
    Phone,
    /// Tablet.
    Pad,
    /// Television.
    Tv,
}

keywords!(Device {
    "phone" | "iphone" => Phone,
    "pad" | "ipad" => Pad,
    "tv" => Tv,
});

/// Interaction state of a control.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ControlState {
    /// Idle.
    #[default]
    Normal,
    /// Being touched.
    Highlighted,
    /// Not interactive.
    Disabled,
    /// Selected.
    Selected,
    /// Has focus.
    Focused,
    /// Application-defined state.
    Application,
    /// Reserved for framework use.
    Reserved,
}

keywords!(ControlState {
    "normal" => Normal,
    "highlighted" => Highlighted,
    "disabled" => Disabled,
    "selected" => Selected,
    "focused" => Focused,
    "application" => Application,
    "reserved" => Reserved,
});

/// Bar height variant a metric applies to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BarMetrics {
    /// Regular height.
    #[default]
    Default,
    /// Regular height with a prompt.
    DefaultPrompt,
    /// Compact height.
    Compact,
    /// Compact height with a prompt.
    CompactPrompt,
}

keywords!(BarMetrics {
    "default" => Default,
    "defaultprompt" => DefaultPrompt,
    "compact" => Compact,
    "compactprompt" => CompactPrompt,
});

/// When a navigation item shows a large title.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LargeTitleDisplayMode {
    /// Inherit from the previous item.
    #[default]
    Automatic,
    /// Always large.
    Always,
    /// Never large.
    Never,
}

keywords!(LargeTitleDisplayMode {
    "automatic" => Automatic,
    "always" => Always,
    "never" => Never,
});
