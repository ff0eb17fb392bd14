// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Themes: variables plus a sorted rule set.
//!
//! A theme document has an optional `variables` mapping and a `styles`
//! mapping from selector text to style bodies:
//!
//! ```yaml
//! variables:
//!   primary: blue
//! styles:
//!   main:
//!     tintColor: $primary
//!   Button.header:
//!     styles: [main]
//!     textColor:highlighted(device:pad): $primary:0.5
//!     superview:
//!       backgroundColor: white
//! ```
//!
//! Bodies inherit keys from the styles named in their `styles` list, values
//! of the form `$name` or `$name:suffix` are replaced by variables, keys are
//! parsed as `name[:state][(context)]` and nested mappings become sub-styles.

use std::rc::Rc;

use understory_property::TypeRegistry;
use understory_style_value::{RawMap, RawValue};

use crate::error::ThemeError;
use crate::key::PropertyKey;
use crate::selector::Selector;
use crate::style::{PropertyAssignment, Style, StyleBuilder};
use crate::stylesheet::{StyleRule, StyleSheet};
use crate::yaml::parse_yaml;

/// The key that lists inherited styles in a style body.
const INHERIT_KEY: &str = "styles";

/// A parsed theme.
///
/// Themes are immutable after creation and cheap to clone. Two themes are
/// equal when their variables and sorted rules are equal.
///
/// # Example
///
/// ```rust
/// use understory_property::TypeRegistry;
/// use understory_style::Theme;
///
/// let mut types = TypeRegistry::new();
/// types.register("Button", None);
///
/// let theme = Theme::from_yaml(
///     "
/// variables:
///   primary: blue
/// styles:
///   Button.primary:
///     backgroundColor: $primary:0.5
///   primary:
///     cornerRadius: 4
/// ",
///     &types,
/// )
/// .unwrap();
///
/// let selectors: Vec<_> = theme.rules().map(|rule| rule.selector().as_str()).collect();
/// assert_eq!(selectors, ["primary", "Button.primary"]);
/// let style = theme.style("Button.primary").unwrap();
/// assert_eq!(style.properties()[0].value.to_string(), "blue:0.5");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Theme {
    inner: Rc<ThemeData>,
}

#[derive(Debug, Default, PartialEq)]
struct ThemeData {
    variables: RawMap,
    sheet: StyleSheet,
}

impl Theme {
    /// Parses a theme from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Decoding`] for invalid YAML, and otherwise the
    /// errors of [`Theme::parse`].
    pub fn from_yaml(text: &str, types: &TypeRegistry) -> Result<Self, ThemeError> {
        Self::parse(&parse_yaml(text)?, types)
    }

    /// Parses a theme from a decoded document.
    ///
    /// # Errors
    ///
    /// Returns a [`ThemeError`] describing the first structural problem. No
    /// partial theme is produced.
    pub fn parse(document: &RawValue, types: &TypeRegistry) -> Result<Self, ThemeError> {
        let root = document
            .as_map()
            .ok_or_else(|| decoding("theme root must be a mapping"))?;
        let variables = match root.get("variables") {
            None | Some(RawValue::Null) => RawMap::new(),
            Some(RawValue::Map(variables)) => variables.clone(),
            Some(_) => return Err(decoding("`variables` must be a mapping")),
        };
        let styles = match root.get("styles") {
            Some(RawValue::Map(styles)) => styles,
            Some(_) => return Err(decoding("`styles` must be a mapping")),
            None => return Err(decoding("missing `styles` mapping")),
        };

        let parser = Parser {
            styles,
            variables: &variables,
        };
        let mut rules = Vec::with_capacity(styles.len());
        for (selector, body) in styles.iter() {
            let body = body
                .as_map()
                .ok_or_else(|| ThemeError::InvalidStyleBody(selector.into()))?;
            let mut chain = vec![String::from(selector)];
            let style = parser.style(selector, body, &mut chain)?;
            let selector = Selector::parse(selector, types)?;
            if !style.is_empty() {
                rules.push(StyleRule::new(selector, style));
            }
        }

        Ok(Self {
            inner: Rc::new(ThemeData {
                variables,
                sheet: StyleSheet::from_rules(rules),
            }),
        })
    }

    /// Returns the variables.
    #[must_use]
    pub fn variables(&self) -> &RawMap {
        &self.inner.variables
    }

    /// Returns the rules as a sheet.
    #[must_use]
    pub fn sheet(&self) -> &StyleSheet {
        &self.inner.sheet
    }

    /// Returns the rules in application order.
    pub fn rules(&self) -> impl Iterator<Item = &StyleRule> + '_ {
        self.inner.sheet.rules()
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.sheet.len()
    }

    /// Returns `true` if the theme has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.sheet.is_empty()
    }

    /// Returns the style of the last rule with exactly this selector text.
    #[must_use]
    pub fn style(&self, selector: &str) -> Option<&Style> {
        self.rules()
            .filter(|rule| rule.selector().as_str() == selector)
            .last()
            .map(StyleRule::style)
    }
}

fn decoding(message: &str) -> ThemeError {
    ThemeError::Decoding(message.into())
}

struct Parser<'a> {
    styles: &'a RawMap,
    variables: &'a RawMap,
}

impl Parser<'_> {
    /// Builds a style from a body. `chain` holds the inheritance path.
    fn style(
        &self,
        name: &str,
        body: &RawMap,
        chain: &mut Vec<String>,
    ) -> Result<Style, ThemeError> {
        let body = self.inherit(name, body, chain)?;
        let mut builder = StyleBuilder::new();
        for (key, value) in body.iter() {
            if let RawValue::Map(nested) = value {
                builder = builder.sub_style(key, self.style(name, nested, chain)?);
                continue;
            }
            let value = self.substitute(key, value)?;
            let PropertyKey { name: property, context } = PropertyKey::parse(key)?;
            builder =
                builder.assignment(PropertyAssignment::with_context(property, value, context));
        }
        Ok(builder.build())
    }

    /// Returns `body` without its inheritance key, with inherited keys added
    /// where absent. Earlier references win over later ones.
    fn inherit(
        &self,
        name: &str,
        body: &RawMap,
        chain: &mut Vec<String>,
    ) -> Result<RawMap, ThemeError> {
        let mut resolved: RawMap = body
            .iter()
            .filter(|(key, _)| *key != INHERIT_KEY)
            .map(|(key, value)| (key, value.clone()))
            .collect();
        let Some(references) = body.get(INHERIT_KEY) else {
            return Ok(resolved);
        };

        for reference in references_of(name, references)? {
            if let Some(start) = chain.iter().position(|seen| seen == reference) {
                let mut cycle = chain[start..].to_vec();
                cycle.push(reference.into());
                return Err(ThemeError::StyleReferenceCycle { cycle });
            }
            let referenced = self
                .styles
                .get(reference)
                .and_then(RawValue::as_map)
                .ok_or_else(|| ThemeError::InvalidStyleReference {
                    style: name.into(),
                    reference: reference.into(),
                })?;

            chain.push(reference.into());
            let inherited = self.inherit(reference, referenced, chain)?;
            chain.pop();

            for (key, value) in inherited {
                if !resolved.contains_key(&key) {
                    resolved.insert(key, value);
                }
            }
        }
        Ok(resolved)
    }

    /// Replaces `$name` and `$name:suffix` values with the variable.
    fn substitute(&self, key: &str, value: &RawValue) -> Result<RawValue, ThemeError> {
        let Some(reference) = value.as_str().and_then(|text| text.strip_prefix('$')) else {
            return Ok(value.clone());
        };
        let reference = reference.trim_start_matches('$');
        let (variable, suffix) = match reference.split_once(':') {
            Some((variable, suffix)) => (variable, Some(suffix)),
            None => (reference, None),
        };
        let found = self
            .variables
            .get(variable)
            .ok_or_else(|| ThemeError::InvalidVariable {
                name: key.into(),
                variable: variable.into(),
            })?;
        Ok(match suffix {
            Some(suffix) => RawValue::String(format!("{found}:{suffix}")),
            None => found.clone(),
        })
    }
}

/// Returns the names listed by an inheritance key: a list or a single name.
fn references_of<'v>(style: &str, references: &'v RawValue) -> Result<Vec<&'v str>, ThemeError> {
    let invalid = |reference: &RawValue| ThemeError::InvalidStyleReference {
        style: style.into(),
        reference: reference.to_string(),
    };
    match references {
        RawValue::String(name) => Ok(vec![name.as_str()]),
        RawValue::List(items) => items
            .iter()
            .map(|item| item.as_str().ok_or_else(|| invalid(item)))
            .collect(),
        other => Err(invalid(other)),
    }
}

/// Builder for constructing [`Theme`] instances programmatically.
///
/// # Example
///
/// ```rust
/// use understory_property::TypeRegistry;
/// use understory_style::{Selector, StyleBuilder, ThemeBuilder};
///
/// let types = TypeRegistry::new();
/// let theme = ThemeBuilder::new()
///     .variable("primary", "blue")
///     .rule(
///         Selector::parse("header", &types).unwrap(),
///         StyleBuilder::new().property("textColor", "blue").build(),
///     )
///     .build();
///
/// assert_eq!(theme.len(), 1);
/// assert!(theme.variables().contains_key("primary"));
/// ```
#[derive(Debug, Default)]
pub struct ThemeBuilder {
    variables: RawMap,
    rules: Vec<StyleRule>,
}

impl ThemeBuilder {
    /// Creates a new empty theme builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a variable, replacing an earlier value.
    #[must_use]
    pub fn variable(mut self, name: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.variables.insert(name, value.into());
        self
    }

    /// Adds a rule.
    #[must_use]
    pub fn rule(mut self, selector: Selector, style: Style) -> Self {
        self.rules.push(StyleRule::new(selector, style));
        self
    }

    /// Builds the theme, sorting its rules.
    #[must_use]
    pub fn build(self) -> Theme {
        Theme {
            inner: Rc::new(ThemeData {
                variables: self.variables,
                sheet: StyleSheet::from_rules(self.rules),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_property::{PropertyContext, StyleContext};
    use understory_style_value::{ControlState, Device};

    fn parse(text: &str) -> Result<Theme, ThemeError> {
        let mut types = TypeRegistry::new();
        types.register("Button", None);
        Theme::from_yaml(text, &types)
    }

    fn properties(theme: &Theme, selector: &str) -> Vec<(String, String)> {
        theme
            .style(selector)
            .unwrap()
            .properties()
            .iter()
            .map(|p| (p.name.clone(), p.value.to_string()))
            .collect()
    }

    #[test]
    fn variable_substitution() {
        let theme = parse(
            "
variables:
  primaryColor: blue
styles:
  header:
    textColor: $primaryColor:0.5
",
        )
        .unwrap();

        let expected = ThemeBuilder::new()
            .variable("primaryColor", "blue")
            .rule(
                Selector::parse("header", &TypeRegistry::new()).unwrap(),
                StyleBuilder::new().property("textColor", "blue:0.5").build(),
            )
            .build();
        assert_eq!(theme, expected);
    }

    #[test]
    fn whole_value_variable_keeps_its_type() {
        let theme = parse("variables:\n  radius: 4\nstyles:\n  card:\n    cornerRadius: $radius\n")
            .unwrap();
        let style = theme.style("card").unwrap();
        assert_eq!(style.properties()[0].value, RawValue::Int(4));
    }

    #[test]
    fn key_state_and_context() {
        let theme = parse(
            "
styles:
  header:
    textColor:selected(device:ipad): red
",
        )
        .unwrap();
        let assignment = &theme.style("header").unwrap().properties()[0];
        assert_eq!(
            *assignment,
            PropertyAssignment::with_context(
                "textColor",
                "red",
                PropertyContext {
                    style_context: StyleContext {
                        device: Device::Pad,
                        ..StyleContext::default()
                    },
                    control_state: ControlState::Selected,
                    ..PropertyContext::default()
                },
            )
        );
    }

    #[test]
    fn inheritance_fills_only_absent_keys() {
        let theme = parse(
            "
styles:
  header:
    styles: [main]
    textColor: blue
  main:
    styles: [primary]
    color: green
    textColor: black
  primary:
    tintColor: red
    color: purple
",
        )
        .unwrap();
        assert_eq!(
            properties(&theme, "header"),
            [
                ("textColor".into(), "blue".into()),
                ("color".into(), "green".into()),
                ("tintColor".into(), "red".into()),
            ]
        );
    }

    #[test]
    fn earlier_references_win() {
        let theme = parse(
            "
styles:
  a:
    color: red
  b:
    color: blue
    alpha: 0.5
  c:
    styles: [a, b]
  d:
    styles: b
",
        )
        .unwrap();
        assert_eq!(
            properties(&theme, "c"),
            [("color".into(), "red".into()), ("alpha".into(), "0.5".into())]
        );
        assert_eq!(properties(&theme, "d").len(), 2);
    }

    #[test]
    fn inheritance_cycles_are_rejected() {
        let err = parse(
            "
styles:
  a:
    styles: [b]
  b:
    styles: [a]
",
        )
        .unwrap_err();
        assert_eq!(
            err,
            ThemeError::StyleReferenceCycle {
                cycle: vec!["a".into(), "b".into(), "a".into()],
            }
        );

        let err = parse("styles:\n  a:\n    styles: [a]\n").unwrap_err();
        assert!(matches!(err, ThemeError::StyleReferenceCycle { .. }));
    }

    #[test]
    fn diamond_inheritance_is_not_a_cycle() {
        let theme = parse(
            "
styles:
  base:
    alpha: 1
  left:
    styles: [base]
  right:
    styles: [base]
  both:
    styles: [left, right]
",
        )
        .unwrap();
        assert_eq!(properties(&theme, "both"), [("alpha".into(), "1".into())]);
    }

    #[test]
    fn sub_styles_are_nested_mappings() {
        let theme = parse(
            "
styles:
  Button:
    alpha: 1
    superview:
      backgroundColor: $missing
",
        );
        assert_eq!(
            theme.unwrap_err(),
            ThemeError::InvalidVariable {
                name: "backgroundColor".into(),
                variable: "missing".into(),
            }
        );

        let theme = parse(
            "
variables:
  dark: black
styles:
  Button:
    alpha: 1
    superview:
      backgroundColor: $dark
      parent:
        alpha: 0.5
",
        )
        .unwrap();
        let style = theme.style("Button").unwrap();
        assert_eq!(style.len(), 1);
        let superview = style.sub_style("superview").unwrap();
        assert_eq!(superview.properties()[0].value.to_string(), "black");
        assert_eq!(superview.sub_style("parent").unwrap().len(), 1);
    }

    #[test]
    fn decoding_errors() {
        let errors = [
            ("just a string", "theme root must be a mapping"),
            ("variables: {}\n", "missing `styles` mapping"),
            ("styles: [a]\n", "`styles` must be a mapping"),
            ("variables: 1\nstyles: {}\n", "`variables` must be a mapping"),
        ];
        for (text, message) in errors {
            assert_eq!(parse(text), Err(decoding(message)), "{text}");
        }
        assert!(matches!(parse("styles: {a: [1"), Err(ThemeError::Decoding(_))));
    }

    #[test]
    fn structural_errors() {
        let style = |property: &str| parse(&format!("styles:\n  testStyle:\n    {property}\n"));
        assert_eq!(
            style("prop: $variable"),
            Err(ThemeError::InvalidVariable {
                name: "prop".into(),
                variable: "variable".into(),
            })
        );
        assert_eq!(
            style("styles: [invalid]"),
            Err(ThemeError::InvalidStyleReference {
                style: "testStyle".into(),
                reference: "invalid".into(),
            })
        );
        assert_eq!(
            style("color:invalid: red"),
            Err(ThemeError::InvalidPropertyState {
                name: "color".into(),
                state: "invalid".into(),
            })
        );
        assert_eq!(
            style("color(device:invalid): red"),
            Err(ThemeError::InvalidDevice {
                name: "color".into(),
                device: "invalid".into(),
            })
        );
        assert_eq!(
            parse("styles:\n  Missing.tag:\n    alpha: 1\n"),
            Err(ThemeError::InvalidStyleSelector("Missing.tag".into()))
        );
        assert_eq!(
            parse("styles:\n  card: red\n"),
            Err(ThemeError::InvalidStyleBody("card".into()))
        );
    }

    #[test]
    fn rules_are_sorted_and_empty_styles_skipped() {
        let theme = parse(
            "
styles:
  Button.tag nested:
    alpha: 1
  nested:
    alpha: 2
  Button nested:
    alpha: 3
  empty: {}
",
        )
        .unwrap();
        let selectors: Vec<_> = theme.rules().map(|rule| rule.selector().as_str()).collect();
        assert_eq!(selectors, ["nested", "Button nested", "Button.tag nested"]);
        assert!(theme.style("empty").is_none());
    }

    #[test]
    fn equal_documents_make_equal_themes() {
        let text = "variables:\n  a: 1\nstyles:\n  card:\n    alpha: $a\n";
        assert_eq!(parse(text).unwrap(), parse(text).unwrap());
        assert_ne!(parse(text).unwrap(), Theme::default());
    }
}
