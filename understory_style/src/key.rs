// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property key grammar: `name[:state][(key:value, ...)]`.

use understory_property::{PropertyContext, StyleContext};
use understory_style_value::{BarMetrics, ControlState, Device, SizeClass};

use crate::error::ThemeError;

/// A parsed property key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PropertyKey {
    pub(crate) name: String,
    pub(crate) context: PropertyContext,
}

impl PropertyKey {
    /// Parses a key such as `textColor:selected(device:pad, h:compact)`.
    pub(crate) fn parse(key: &str) -> Result<Self, ThemeError> {
        let (head, context) = match key.strip_suffix(')').and_then(|k| k.rsplit_once('(')) {
            Some((head, context)) => (head, Some(context)),
            None => (key, None),
        };

        let (name, state) = match head.split_once(':') {
            Some((name, state)) => (name.trim(), Some(state)),
            None => (head.trim(), None),
        };

        let style_context = match context {
            Some(context) => parse_context(key, name, context)?,
            None => StyleContext::default(),
        };

        let mut property = PropertyContext {
            style_context,
            ..PropertyContext::default()
        };
        if let Some(state) = state {
            if let Some(control_state) = ControlState::from_keyword(state) {
                property.control_state = control_state;
            } else if let Some(bar_metrics) = BarMetrics::from_keyword(state) {
                property.bar_metrics = bar_metrics;
            } else {
                return Err(ThemeError::InvalidPropertyState {
                    name: name.into(),
                    state: state.into(),
                });
            }
        }

        Ok(Self {
            name: name.into(),
            context: property,
        })
    }
}

fn parse_context(key: &str, name: &str, context: &str) -> Result<StyleContext, ThemeError> {
    let invalid = || ThemeError::InvalidStyleContext(key.into());
    let mut device = None;
    let mut horizontal = None;
    let mut vertical = None;

    for entry in context.split(',') {
        let Some((dimension, value)) = entry.split_once(':') else {
            return Err(invalid());
        };
        let (dimension, value) = (dimension.trim(), value.trim());
        if value.contains(':') {
            return Err(invalid());
        }
        let size_class = || {
            SizeClass::from_keyword(value).ok_or_else(|| ThemeError::InvalidSizeClass {
                name: name.into(),
                size_class: value.into(),
            })
        };
        let slot_taken = match dimension {
            "device" => device
                .replace(Device::from_keyword(value).ok_or_else(|| ThemeError::InvalidDevice {
                    name: name.into(),
                    device: value.into(),
                })?)
                .is_some(),
            "h" | "horizontal" => horizontal.replace(size_class()?).is_some(),
            "v" | "vertical" => vertical.replace(size_class()?).is_some(),
            _ => return Err(invalid()),
        };
        if slot_taken {
            return Err(invalid());
        }
    }

    Ok(StyleContext {
        device: device.unwrap_or_default(),
        horizontal: horizontal.unwrap_or_default(),
        vertical: vertical.unwrap_or_default(),
    })
}
