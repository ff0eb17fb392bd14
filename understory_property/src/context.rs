// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Environment traits and the context attached to property assignments.

use understory_style_value::{BarMetrics, ControlState, Device, SizeClass};

/// The environment a target currently lives in.
///
/// Unspecified dimensions fall back to the environment configured on the
/// resolver, see [`Traits::or`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Traits {
    /// Device idiom.
    pub device: Device,
    /// Horizontal size class.
    pub horizontal: SizeClass,
    /// Vertical size class.
    pub vertical: SizeClass,
}

impl Traits {
    /// Fills unspecified dimensions from `fallback`.
    #[must_use]
    pub fn or(self, fallback: Self) -> Self {
        Self {
            device: if self.device == Device::Unspecified {
                fallback.device
            } else {
                self.device
            },
            horizontal: if self.horizontal == SizeClass::Unspecified {
                fallback.horizontal
            } else {
                self.horizontal
            },
            vertical: if self.vertical == SizeClass::Unspecified {
                fallback.vertical
            } else {
                self.vertical
            },
        }
    }
}

/// Coarse environment filter of a property assignment.
///
/// Written as `name(device:pad, h:compact)` in theme keys.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StyleContext {
    /// Required device, or unspecified for any.
    pub device: Device,
    /// Required horizontal size class, or unspecified for any.
    pub horizontal: SizeClass,
    /// Required vertical size class, or unspecified for any.
    pub vertical: SizeClass,
}

impl StyleContext {
    /// Returns `true` if every specified dimension equals the target's trait.
    #[must_use]
    pub fn targets(&self, traits: &Traits) -> bool {
        (self.device == Device::Unspecified || self.device == traits.device)
            && (self.horizontal == SizeClass::Unspecified || self.horizontal == traits.horizontal)
            && (self.vertical == SizeClass::Unspecified || self.vertical == traits.vertical)
    }
}

/// Full context of a property assignment.
///
/// The style context filters; control state and bar metrics are passed to
/// the applier.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PropertyContext {
    /// Environment filter.
    pub style_context: StyleContext,
    /// Control state the value applies to.
    pub control_state: ControlState,
    /// Bar metrics the value applies to.
    pub bar_metrics: BarMetrics,
}

impl PropertyContext {
    /// Returns `true` if the assignment applies under `traits`.
    #[must_use]
    #[inline]
    pub fn targets(&self, traits: &Traits) -> bool {
        self.style_context.targets(traits)
    }
}

/// A parsed value together with its assignment context.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyValue<T> {
    /// The parsed value.
    pub value: T,
    /// Context from the theme key.
    pub context: PropertyContext,
}

impl<T> PropertyValue<T> {
    /// Control state the value applies to.
    #[must_use]
    #[inline]
    pub fn control_state(&self) -> ControlState {
        self.context.control_state
    }

    /// Bar metrics the value applies to.
    #[must_use]
    #[inline]
    pub fn bar_metrics(&self) -> BarMetrics {
        self.context.bar_metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unspecified_context_targets_everything() {
        let context = StyleContext::default();
        assert!(context.targets(&Traits::default()));
        assert!(context.targets(&Traits {
            device: Device::Tv,
            horizontal: SizeClass::Compact,
            vertical: SizeClass::Regular,
        }));
    }

    #[test]
    fn specified_dimensions_must_match() {
        let context = StyleContext {
            device: Device::Pad,
            horizontal: SizeClass::Compact,
            ..StyleContext::default()
        };
        let pad_compact = Traits {
            device: Device::Pad,
            horizontal: SizeClass::Compact,
            vertical: SizeClass::Regular,
        };
        assert!(context.targets(&pad_compact));
        assert!(!context.targets(&Traits {
            horizontal: SizeClass::Regular,
            ..pad_compact
        }));
        assert!(!context.targets(&Traits {
            device: Device::Phone,
            ..pad_compact
        }));
    }

    #[test]
    fn traits_fall_back_per_dimension() {
        let own = Traits {
            horizontal: SizeClass::Compact,
            ..Traits::default()
        };
        let env = Traits {
            device: Device::Phone,
            horizontal: SizeClass::Regular,
            vertical: SizeClass::Regular,
        };
        let merged = own.or(env);
        assert_eq!(merged.device, Device::Phone);
        assert_eq!(merged.horizontal, SizeClass::Compact);
        assert_eq!(merged.vertical, SizeClass::Regular);
    }
}
