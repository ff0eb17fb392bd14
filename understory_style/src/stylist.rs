// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The cascade resolver.
//!
//! A [`Stylist`] owns the property and type registries, the installed
//! themes and a weak list of every target it has styled. Installing or
//! removing a theme restyles the live targets.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use hashbrown::HashSet;
use tracing::{debug, trace, warn};
use understory_property::{
    ApplyError, PropertyRegistry, StyleObject, StyleProperty, StyleTarget, Styleable, Tag,
    Traits, TypeRegistry, parse_tags, same_target,
};
use understory_style_value::{NoResources, ParseCx, Resources};

use crate::error::ThemeError;
use crate::style::Style;
use crate::stylesheet::StyleSheet;
use crate::theme::Theme;

/// Outcome of applying styles to one or more targets.
///
/// Failures never abort application; every other property is still applied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Number of successful property applications.
    pub applied: usize,
    /// Failed applications, in application order.
    pub failures: Vec<ApplyError>,
}

impl ApplyReport {
    /// Returns `true` if nothing failed.
    #[must_use]
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    fn merge(&mut self, other: Self) {
        self.applied += other.applied;
        self.failures.extend(other.failures);
    }
}

/// Applies theme rules to styleable targets.
///
/// Themes are kept by name in insertion order and merged into one sorted
/// rule set. Targets are held weakly, so a dropped target is forgotten.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use understory_property::{Styleable, StyleableView, TagStore, TypeRegistry, TypeTag};
/// use understory_style::Stylist;
///
/// struct Panel {
///     ty: TypeTag,
///     tags: TagStore,
///     alpha: Cell<f64>,
/// }
///
/// impl StyleableView for Panel {
///     fn set_alpha(&self, alpha: f64) {
///         self.alpha.set(alpha);
///     }
/// }
///
/// impl Styleable for Panel {
///     fn tag_store(&self) -> &TagStore { &self.tags }
///     fn type_tag(&self) -> TypeTag { self.ty }
///     fn as_view(&self) -> Option<&dyn StyleableView> { Some(self) }
/// }
///
/// let mut types = TypeRegistry::new();
/// let panel_type = types.register("Panel", None);
/// let mut stylist = Stylist::builder().types(types).build();
///
/// let panel = Rc::new(Panel { ty: panel_type, tags: TagStore::default(), alpha: Cell::new(1.0) });
/// stylist.style(&panel);
///
/// let theme = stylist.parse_theme("styles:\n  Panel:\n    alpha: 0.5\n").unwrap();
/// let report = stylist.add_theme(theme, "base");
/// assert_eq!(report.applied, 1);
/// assert_eq!(panel.alpha.get(), 0.5);
/// ```
pub struct Stylist {
    types: TypeRegistry,
    properties: PropertyRegistry,
    resources: Box<dyn Resources>,
    environment: Traits,
    use_defaults: bool,
    themes: Vec<(String, Theme)>,
    rules: StyleSheet,
    targets: RefCell<Vec<Weak<dyn Styleable>>>,
}

impl Stylist {
    /// Creates a stylist with the default properties and an empty type
    /// registry.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Returns a builder for configuring a stylist.
    #[must_use]
    pub fn builder() -> StylistBuilder {
        StylistBuilder::new()
    }

    /// Parses YAML theme text against this stylist's type registry.
    ///
    /// # Errors
    ///
    /// See [`Theme::from_yaml`].
    pub fn parse_theme(&self, text: &str) -> Result<Theme, ThemeError> {
        Theme::from_yaml(text, &self.types)
    }

    /// Installs a theme under `name`, replacing a theme of the same name.
    ///
    /// Only this theme's matching rules are applied to the live targets.
    /// Property names the registry does not know are logged once.
    pub fn add_theme(&mut self, theme: Theme, name: impl Into<String>) -> ApplyReport {
        let name = name.into();
        match self.themes.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = theme.clone(),
            None => self.themes.push((name.clone(), theme.clone())),
        }
        self.rebuild();

        let targets = self.targets();
        debug!(theme = %name, rules = theme.len(), targets = targets.len(), "added theme");
        let mut report = ApplyReport::default();
        for target in &targets {
            report.merge(self.apply_rules(theme.sheet(), &**target));
        }

        for property in self.unknown_properties(&theme) {
            warn!(theme = %name, property = %property, "unknown style property");
        }
        report
    }

    /// Parses and installs a YAML theme.
    ///
    /// # Errors
    ///
    /// Returns the parse error; the installed themes are left unchanged.
    pub fn add_theme_yaml(
        &mut self,
        text: &str,
        name: impl Into<String>,
    ) -> Result<ApplyReport, ThemeError> {
        let theme = self.parse_theme(text)?;
        Ok(self.add_theme(theme, name))
    }

    /// Removes a theme and restyles every live target with the rest.
    pub fn remove_theme(&mut self, name: &str) -> Option<Theme> {
        let index = self.themes.iter().position(|(existing, _)| existing == name)?;
        let (_, theme) = self.themes.remove(index);
        self.rebuild();
        let report = self.restyle();
        debug!(
            theme = name,
            rules = theme.len(),
            applied = report.applied,
            "removed theme"
        );
        Some(theme)
    }

    /// Returns the installed themes in insertion order.
    pub fn themes(&self) -> impl Iterator<Item = (&str, &Theme)> + '_ {
        self.themes.iter().map(|(name, theme)| (name.as_str(), theme))
    }

    /// Returns the theme installed under `name`.
    #[must_use]
    pub fn theme(&self, name: &str) -> Option<&Theme> {
        self.themes
            .iter()
            .find_map(|(existing, theme)| (existing == name).then_some(theme))
    }

    /// Returns the merged rules of all themes.
    #[must_use]
    pub fn rules(&self) -> &StyleSheet {
        &self.rules
    }

    /// Registers a property.
    pub fn register_property(&mut self, property: StyleProperty) {
        self.properties.register(property);
    }

    /// Registers an object relation for sub-styles.
    pub fn register_object(&mut self, object: StyleObject) {
        self.properties.register_object(object);
    }

    /// Returns the property registry.
    #[must_use]
    pub fn properties(&self) -> &PropertyRegistry {
        &self.properties
    }

    /// Returns the type registry.
    #[must_use]
    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    /// Returns the type registry for registering more types.
    ///
    /// Installed themes keep the types they were parsed with.
    pub fn types_mut(&mut self) -> &mut TypeRegistry {
        &mut self.types
    }

    /// Returns the environment used for unspecified target traits.
    #[must_use]
    pub fn environment(&self) -> Traits {
        self.environment
    }

    /// Sets the environment and restyles every live target.
    pub fn set_environment(&mut self, environment: Traits) -> ApplyReport {
        self.environment = environment;
        self.restyle()
    }

    /// Registers `target` and applies every matching rule to it.
    ///
    /// Targets are held weakly and registered once, however often they are
    /// styled.
    pub fn style(&self, target: &impl StyleTarget) -> ApplyReport {
        let target = target.to_target();
        self.register(&target);
        self.apply_rules(&self.rules, &*target)
    }

    /// Styles a target that was just attached to its hierarchy.
    ///
    /// Hosts call this once the target's parent chain is in place, so that
    /// ancestor selectors see it.
    pub fn on_attach(&self, target: &impl StyleTarget) -> ApplyReport {
        self.style(target)
    }

    /// Replaces the target's tags and restyles it.
    pub fn set_tags(
        &self,
        target: &impl StyleTarget,
        tags: impl IntoIterator<Item = Tag>,
    ) -> ApplyReport {
        let target = target.to_target();
        target.tag_store().replace(tags);
        self.style(&target)
    }

    /// Replaces the target's tags from a comma-separated list and restyles
    /// it.
    pub fn set_tag_string(&self, target: &impl StyleTarget, tags: &str) -> ApplyReport {
        self.set_tags(target, parse_tags(tags))
    }

    /// Applies the merged rules to every live target.
    pub fn restyle(&self) -> ApplyReport {
        let mut report = ApplyReport::default();
        for target in self.targets() {
            report.merge(self.apply_rules(&self.rules, &*target));
        }
        report
    }

    /// Applies one style to a target, then its sub-styles to the related
    /// objects.
    ///
    /// Assignments whose context excludes the target's traits are skipped.
    /// Every registered property of the assignment's name that supports the
    /// target is applied.
    pub fn apply_style(&self, style: &Style, target: &dyn Styleable) -> ApplyReport {
        let mut report = ApplyReport::default();
        let traits = target.traits().or(self.environment);
        let cx = ParseCx::new(&*self.resources);

        for assignment in style.properties() {
            if !assignment.context.targets(&traits) {
                continue;
            }
            for property in self.properties.properties_for(&assignment.name, target) {
                match property.apply(target, &assignment.value, assignment.context, &cx) {
                    Ok(()) => report.applied += 1,
                    Err(error) => {
                        warn!(
                            property = %assignment.name,
                            %error,
                            "failed to apply style property"
                        );
                        report.failures.push(error);
                    }
                }
            }
        }

        for (relation, sub_style) in style.sub_styles() {
            let Some(related) = self
                .properties
                .object_for(relation, target)
                .and_then(|object| object.related(target))
            else {
                trace!(relation, "no related object");
                continue;
            };
            report.merge(self.apply_style(sub_style, &*related));
        }
        report
    }

    /// Returns names in `theme` that match no registered property or
    /// relation, without duplicates.
    #[must_use]
    pub fn unknown_properties(&self, theme: &Theme) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut unknown = Vec::new();
        for rule in theme.rules() {
            self.collect_unknown(rule.style(), &mut seen, &mut unknown);
        }
        unknown
    }

    /// Returns the live targets.
    #[must_use]
    pub fn targets(&self) -> Vec<Rc<dyn Styleable>> {
        self.targets
            .borrow()
            .iter()
            .filter_map(Weak::upgrade)
            .collect()
    }

    /// Drops every theme and target and restores the default properties.
    ///
    /// Properties and relations registered after construction are dropped
    /// too.
    pub fn clear(&mut self) {
        self.themes.clear();
        self.rules = StyleSheet::default();
        self.targets.get_mut().clear();
        self.properties = if self.use_defaults {
            PropertyRegistry::with_defaults()
        } else {
            PropertyRegistry::new()
        };
    }

    fn rebuild(&mut self) {
        self.rules = StyleSheet::merged(self.themes.iter().map(|(_, theme)| theme.sheet()));
    }

    fn register(&self, target: &Rc<dyn Styleable>) {
        let mut targets = self.targets.borrow_mut();
        targets.retain(|weak| weak.strong_count() > 0);
        let known = targets.iter().any(|weak| {
            weak.upgrade()
                .is_some_and(|live| same_target(&*live, &**target))
        });
        if !known {
            targets.push(Rc::downgrade(target));
        }
    }

    fn apply_rules(&self, sheet: &StyleSheet, target: &dyn Styleable) -> ApplyReport {
        let mut report = ApplyReport::default();
        for rule in sheet.matching(target, &self.types) {
            trace!(selector = rule.selector().as_str(), "applying rule");
            report.merge(self.apply_style(rule.style(), target));
        }
        report
    }

    fn collect_unknown<'t>(
        &self,
        style: &'t Style,
        seen: &mut HashSet<&'t str>,
        unknown: &mut Vec<String>,
    ) {
        for assignment in style.properties() {
            let name = assignment.name.as_str();
            if !self.properties.contains_name(name) && seen.insert(name) {
                unknown.push(name.into());
            }
        }
        for (relation, sub_style) in style.sub_styles() {
            if !self.properties.contains_object(relation) && seen.insert(relation) {
                unknown.push(relation.into());
            }
            self.collect_unknown(sub_style, seen, unknown);
        }
    }
}

impl Default for Stylist {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Stylist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let themes: Vec<_> = self.themes.iter().map(|(name, _)| name.as_str()).collect();
        f.debug_struct("Stylist")
            .field("themes", &themes)
            .field("rules", &self.rules.len())
            .field("targets", &self.targets.borrow().len())
            .field("environment", &self.environment)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Stylist`].
pub struct StylistBuilder {
    types: TypeRegistry,
    properties: Vec<StyleProperty>,
    objects: Vec<StyleObject>,
    use_defaults: bool,
    resources: Box<dyn Resources>,
    environment: Traits,
}

impl StylistBuilder {
    /// Creates a builder with default properties, no resources and an
    /// unspecified environment.
    #[must_use]
    pub fn new() -> Self {
        Self {
            types: TypeRegistry::new(),
            properties: Vec::new(),
            objects: Vec::new(),
            use_defaults: true,
            resources: Box::new(NoResources),
            environment: Traits::default(),
        }
    }

    /// Sets the type registry used to resolve selectors.
    #[must_use]
    pub fn types(mut self, types: TypeRegistry) -> Self {
        self.types = types;
        self
    }

    /// Adds a property, registered after the defaults.
    #[must_use]
    pub fn property(mut self, property: StyleProperty) -> Self {
        self.properties.push(property);
        self
    }

    /// Adds an object relation, registered after the defaults.
    #[must_use]
    pub fn object(mut self, object: StyleObject) -> Self {
        self.objects.push(object);
        self
    }

    /// Skips the default properties and relations.
    #[must_use]
    pub fn without_defaults(mut self) -> Self {
        self.use_defaults = false;
        self
    }

    /// Sets the platform lookups used by value parsers.
    #[must_use]
    pub fn resources(mut self, resources: impl Resources + 'static) -> Self {
        self.resources = Box::new(resources);
        self
    }

    /// Sets the traits used when a target leaves a dimension unspecified.
    #[must_use]
    pub fn environment(mut self, environment: Traits) -> Self {
        self.environment = environment;
        self
    }

    /// Builds the stylist.
    #[must_use]
    pub fn build(self) -> Stylist {
        let mut properties = if self.use_defaults {
            PropertyRegistry::with_defaults()
        } else {
            PropertyRegistry::new()
        };
        for property in self.properties {
            properties.register(property);
        }
        for object in self.objects {
            properties.register_object(object);
        }
        Stylist {
            types: self.types,
            properties,
            resources: self.resources,
            environment: self.environment,
            use_defaults: self.use_defaults,
            themes: Vec::new(),
            rules: StyleSheet::default(),
            targets: RefCell::new(Vec::new()),
        }
    }
}

impl Default for StylistBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StylistBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StylistBuilder")
            .field("types", &self.types.len())
            .field("properties", &self.properties.len())
            .field("use_defaults", &self.use_defaults)
            .field("environment", &self.environment)
            .finish_non_exhaustive()
    }
}
