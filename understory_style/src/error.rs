// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Theme loading errors.

use thiserror::Error;

/// Errors that abort loading a theme.
///
/// A theme that fails to load is never partially applied.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// The document is not valid YAML or does not have the theme shape.
    #[error("theme decoding failed: {0}")]
    Decoding(String),

    /// A property value references an undefined variable.
    #[error("property `{name}` references undefined variable `${variable}`")]
    InvalidVariable {
        /// The property key.
        name: String,
        /// The variable name, without `$`.
        variable: String,
    },

    /// A `styles:` inheritance list names a missing or non-mapping style.
    #[error("style `{style}` inherits from unknown style `{reference}`")]
    InvalidStyleReference {
        /// The style declaring the reference.
        style: String,
        /// The referenced name.
        reference: String,
    },

    /// Style inheritance loops back on itself.
    #[error("style inheritance cycle: {}", cycle.join(" -> "))]
    StyleReferenceCycle {
        /// The names along the cycle, starting and ending with the same name.
        cycle: Vec<String>,
    },

    /// A selector has a malformed component or names an unknown type.
    #[error("invalid style selector `{0}`")]
    InvalidStyleSelector(String),

    /// A style body is not a mapping.
    #[error("style `{0}` must be a mapping")]
    InvalidStyleBody(String),

    /// A property key carries an unknown control state or bar metrics.
    #[error("property `{name}` has invalid state `{state}`")]
    InvalidPropertyState {
        /// The property name.
        name: String,
        /// The state text.
        state: String,
    },

    /// A property context names an unknown device.
    #[error("property `{name}` has invalid device `{device}`")]
    InvalidDevice {
        /// The property name.
        name: String,
        /// The device text.
        device: String,
    },

    /// A property context names an unknown size class.
    #[error("property `{name}` has invalid size class `{size_class}`")]
    InvalidSizeClass {
        /// The property name.
        name: String,
        /// The size class text.
        size_class: String,
    },

    /// A property context is malformed or uses an unknown key.
    #[error("invalid style context in `{0}`")]
    InvalidStyleContext(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let cycle = ThemeError::StyleReferenceCycle {
            cycle: vec!["a".into(), "b".into(), "a".into()],
        };
        assert_eq!(cycle.to_string(), "style inheritance cycle: a -> b -> a");

        let variable = ThemeError::InvalidVariable {
            name: "prop".into(),
            variable: "primary".into(),
        };
        assert_eq!(
            variable.to_string(),
            "property `prop` references undefined variable `$primary`"
        );
    }
}
