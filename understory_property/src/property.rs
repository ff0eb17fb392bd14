// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named style properties and object relations.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::{String, ToString};
use core::fmt;

use understory_style_value::{ParseCx, RawValue, StyleValue};

use crate::context::{PropertyContext, PropertyValue};
use crate::target::Styleable;

/// Accessor from a target to one of its capabilities.
pub type Capability<C> = fn(&dyn Styleable) -> Option<&C>;

/// Failure to apply a single property.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApplyError {
    /// The raw value did not parse as the property's value type.
    #[error("invalid value `{value}` for property `{property}`, expected {expected}")]
    InvalidValue {
        /// Property name.
        property: String,
        /// Name of the expected value type.
        expected: &'static str,
        /// The raw value, stringified.
        value: String,
    },
    /// The target lacks the capability this property drives.
    #[error("property `{property}` does not apply to this target")]
    Unsupported {
        /// Property name.
        property: String,
    },
}

type SupportsFn = dyn Fn(&dyn Styleable) -> bool;

type ApplyFn =
    dyn Fn(&dyn Styleable, &RawValue, PropertyContext, &ParseCx<'_>) -> Result<(), ApplyError>;

/// A named property bound to a target capability.
///
/// Several properties may share a name when they drive different
/// capabilities, such as `font` on buttons and on labels.
///
/// # Example
///
/// ```rust
/// use understory_property::{PropertyValue, StyleProperty, Styleable, StyleableView};
///
/// fn view(target: &dyn Styleable) -> Option<&dyn StyleableView> {
///     target.as_view()
/// }
///
/// let opacity = StyleProperty::new("opacity", view, |view, value: PropertyValue<f64>| {
///     view.set_alpha(value.value);
/// });
/// assert_eq!(opacity.name(), "opacity");
/// assert_eq!(opacity.value_type(), "f64");
/// ```
pub struct StyleProperty {
    name: String,
    value_type: &'static str,
    supports: Box<SupportsFn>,
    apply: Box<ApplyFn>,
}

impl StyleProperty {
    /// Creates a property that parses values as `T` and applies them through
    /// capability `C`.
    pub fn new<C, T, F>(name: impl Into<String>, capability: Capability<C>, apply: F) -> Self
    where
        C: ?Sized + 'static,
        T: StyleValue + 'static,
        F: Fn(&C, PropertyValue<T>) + 'static,
    {
        let name = name.into();
        let property = name.clone();
        Self {
            name,
            value_type: core::any::type_name::<T>(),
            supports: Box::new(move |target: &dyn Styleable| capability(target).is_some()),
            apply: Box::new(
                move |target: &dyn Styleable,
                      raw: &RawValue,
                      context: PropertyContext,
                      cx: &ParseCx<'_>| {
                    let Some(capability) = capability(target) else {
                        return Err(ApplyError::Unsupported {
                            property: property.clone(),
                        });
                    };
                    let value = T::parse(raw, cx).ok_or_else(|| ApplyError::InvalidValue {
                        property: property.clone(),
                        expected: core::any::type_name::<T>(),
                        value: raw.to_string(),
                    })?;
                    apply(capability, PropertyValue { value, context });
                    Ok(())
                },
            ),
        }
    }

    /// Creates a property for one concrete target type.
    pub fn for_type<V, T, F>(name: impl Into<String>, apply: F) -> Self
    where
        V: Styleable,
        T: StyleValue + 'static,
        F: Fn(&V, PropertyValue<T>) + 'static,
    {
        Self::new(name, downcast::<V>, apply)
    }

    /// Returns the property name.
    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the name of the value type.
    #[must_use]
    #[inline]
    pub fn value_type(&self) -> &'static str {
        self.value_type
    }

    /// Returns `true` if the target has the capability this property drives.
    #[must_use]
    pub fn supports(&self, target: &dyn Styleable) -> bool {
        (self.supports)(target)
    }

    /// Parses `raw` and applies it to `target`.
    pub fn apply(
        &self,
        target: &dyn Styleable,
        raw: &RawValue,
        context: PropertyContext,
        cx: &ParseCx<'_>,
    ) -> Result<(), ApplyError> {
        (self.apply)(target, raw, context, cx)
    }
}

impl fmt::Debug for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleProperty")
            .field("name", &self.name)
            .field("value_type", &self.value_type)
            .finish_non_exhaustive()
    }
}

type RelateFn = dyn Fn(&dyn Styleable) -> Option<Rc<dyn Styleable>>;

/// A named relation from a target to another styleable object.
///
/// Sub-styles are applied through relations: in a theme, `navigationBar:`
/// nested under a view controller style styles that controller's bar.
pub struct StyleObject {
    name: String,
    supports: Box<SupportsFn>,
    relate: Box<RelateFn>,
}

impl StyleObject {
    /// Creates a relation through capability `C`.
    ///
    /// `relate` receives the target and its capability.
    pub fn new<C, F>(name: impl Into<String>, capability: Capability<C>, relate: F) -> Self
    where
        C: ?Sized + 'static,
        F: Fn(&dyn Styleable, &C) -> Option<Rc<dyn Styleable>> + 'static,
    {
        Self {
            name: name.into(),
            supports: Box::new(move |target: &dyn Styleable| capability(target).is_some()),
            relate: Box::new(move |target: &dyn Styleable| relate(target, capability(target)?)),
        }
    }

    /// Returns the relation name.
    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if the relation is defined for `target`.
    #[must_use]
    pub fn supports(&self, target: &dyn Styleable) -> bool {
        (self.supports)(target)
    }

    /// Returns the related object, if any.
    #[must_use]
    pub fn related(&self, target: &dyn Styleable) -> Option<Rc<dyn Styleable>> {
        (self.relate)(target)
    }
}

impl fmt::Debug for StyleObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleObject")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

fn downcast<V: Styleable>(target: &dyn Styleable) -> Option<&V> {
    target.downcast_ref()
}
