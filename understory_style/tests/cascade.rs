// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end tests for `understory_style`.
//!
//! These drive a [`Stylist`] against the mock hierarchy in `common`, covering
//! rule order, theme parsing features, hierarchy matching and the lifecycle
//! of themes and targets.

mod common;

use common::{MockView, Types, rgba8};
use understory_property::{
    PropertyValue, StyleObject, StyleProperty, Styleable, StyleableView, Traits, parse_tags,
    same_target,
};
use understory_style::{ApplyReport, Stylist, ThemeError};
use understory_style_value::{ControlState, SizeClass};

fn view(target: &dyn Styleable) -> Option<&dyn StyleableView> {
    target.as_view()
}

fn install(stylist: &mut Stylist, name: &str, yaml: &str) -> ApplyReport {
    stylist.add_theme_yaml(yaml, name).unwrap()
}

#[test]
fn more_specific_rules_apply_last() {
    let types = Types::new();
    let mut stylist = types.stylist();
    install(
        &mut stylist,
        "main",
        "
styles:
  Button.primary:
    alpha: 0.2
  primary:
    alpha: 0.3
  Button:
    alpha: 0.1
",
    );

    let button = types.button("primary");
    stylist.style(&button);
    assert_eq!(button.alpha.get(), 0.2);

    let plain = types.button("");
    stylist.style(&plain);
    assert_eq!(plain.alpha.get(), 0.1);
}

#[test]
fn equal_specificity_orders_by_selector_text() {
    let types = Types::new();
    let mut stylist = types.stylist();
    install(
        &mut stylist,
        "main",
        "
styles:
  View:
    alpha: 0.5
  Button:
    alpha: 0.25
",
    );

    // `Button` sorts before `View`, so the supertype rule is applied last.
    let button = types.button("");
    stylist.style(&button);
    assert_eq!(button.alpha.get(), 0.5);
}

#[test]
fn variables_with_alpha_suffix() {
    let types = Types::new();
    let mut stylist = types.stylist();
    install(
        &mut stylist,
        "main",
        "
variables:
  primary: blue
  radius: 6
styles:
  card:
    backgroundColor: $primary:0.5
    cornerRadius: $radius
",
    );

    let card = types.view("card");
    let report = stylist.style(&card);
    assert!(report.is_clean());
    let [r, g, b, a] = rgba8(card.background.get().unwrap());
    assert_eq!([r, g, b], [0, 0, 255]);
    assert!((127..=128).contains(&a), "alpha was {a}");
    assert_eq!(card.corner_radius.get(), 6.0);
}

#[test]
fn inherited_properties_apply() {
    let types = Types::new();
    let mut stylist = types.stylist();
    install(
        &mut stylist,
        "main",
        "
styles:
  rounded:
    cornerRadius: 8
    alpha: 0.9
  Label.title:
    styles: [rounded]
    alpha: 0.75
",
    );

    let label = types.label("title");
    stylist.style(&label);
    assert_eq!(label.corner_radius.get(), 8.0);
    assert_eq!(label.alpha.get(), 0.75);
}

#[test]
fn broken_themes_are_not_installed() {
    let types = Types::new();
    let mut stylist = types.stylist();
    let err = stylist
        .add_theme_yaml(
            "
styles:
  a:
    styles: [b]
    alpha: 1
  b:
    styles: [a]
",
            "broken",
        )
        .unwrap_err();
    assert_eq!(err.to_string(), "style inheritance cycle: a -> b -> a");
    assert_eq!(stylist.themes().count(), 0);

    let err = stylist
        .add_theme_yaml("styles:\n  Unknown:\n    alpha: 1\n", "broken")
        .unwrap_err();
    assert_eq!(err, ThemeError::InvalidStyleSelector("Unknown".into()));
    assert!(stylist.rules().is_empty());
}

#[test]
fn ancestor_chains_match_in_order() {
    let types = Types::new();
    let mut stylist = types.stylist();
    install(
        &mut stylist,
        "main",
        "
styles:
  container custom child:
    alpha: 0.5
  custom container child:
    cornerRadius: 9
  Stack child:
    spacing: 3
",
    );

    let container = types.stack("container");
    let custom = types.view("custom");
    let middle = types.view("");
    let child = types.label("child");
    container.add_child(&custom);
    custom.add_child(&middle);
    middle.add_child(&child);

    stylist.on_attach(&child);
    assert_eq!(child.alpha.get(), 0.5);
    assert_eq!(child.corner_radius.get(), 0.0);
    // `spacing` is a stack property and the child is a label.
    assert_eq!(child.spacing.get(), 0.0);
}

#[test]
fn invalid_values_do_not_block_other_properties() {
    let types = Types::new();
    let mut stylist = types.stylist();
    install(
        &mut stylist,
        "main",
        "
styles:
  Button:
    alpha: opaque
    cornerRadius: 4
    textColor: notacolor
    backgroundColor: red
",
    );

    let button = types.button("");
    let report = stylist.style(&button);
    assert_eq!(report.applied, 2);
    assert_eq!(report.failures.len(), 2);
    assert_eq!(button.alpha.get(), 1.0);
    assert_eq!(button.corner_radius.get(), 4.0);
    assert_eq!(rgba8(button.background.get().unwrap()), [255, 0, 0, 255]);
    assert!(button.title_colors.borrow().is_empty());
}

#[test]
fn styling_twice_is_idempotent() {
    let types = Types::new();
    let mut stylist = types.stylist();
    install(
        &mut stylist,
        "main",
        "styles:\n  Label:\n    alpha: 0.5\n    textColor: green\n",
    );

    let label = types.label("");
    let first = stylist.style(&label);
    let state = (label.alpha.get(), label.text_color.get());
    let second = stylist.style(&label);
    assert_eq!(first, second);
    assert_eq!((label.alpha.get(), label.text_color.get()), state);
    assert_eq!(stylist.targets().len(), 1);
}

#[test]
fn size_class_context_filters_assignments() {
    let types = Types::new();
    let mut stylist = Stylist::builder()
        .types(types.registry.clone())
        .environment(Traits {
            horizontal: SizeClass::Compact,
            ..Traits::default()
        })
        .build();
    install(
        &mut stylist,
        "main",
        "
styles:
  View:
    alpha(h:compact): 0.5
    cornerRadius(horizontal:regular): 12
",
    );

    let inherits = types.view("");
    stylist.style(&inherits);
    assert_eq!(inherits.alpha.get(), 0.5);
    assert_eq!(inherits.corner_radius.get(), 0.0);

    let regular = types.view("");
    regular.traits.set(Traits {
        horizontal: SizeClass::Regular,
        ..Traits::default()
    });
    stylist.style(&regular);
    assert_eq!(regular.alpha.get(), 1.0);
    assert_eq!(regular.corner_radius.get(), 12.0);
}

#[test]
fn replacing_a_theme_restyles_live_targets() {
    let types = Types::new();
    let mut stylist = types.stylist();
    let button = types.button("");
    stylist.style(&button);

    install(&mut stylist, "main", "styles:\n  Button:\n    alpha: 0.5\n");
    assert_eq!(button.alpha.get(), 0.5);

    let report = install(&mut stylist, "main", "styles:\n  Button:\n    alpha: 0.25\n");
    assert_eq!(report.applied, 1);
    assert_eq!(button.alpha.get(), 0.25);
    assert_eq!(stylist.themes().count(), 1);
    assert_eq!(stylist.rules().len(), 1);
}

#[test]
fn removing_a_theme_reapplies_the_rest() {
    let types = Types::new();
    let mut stylist = types.stylist();
    let button = types.button("");
    stylist.style(&button);

    install(&mut stylist, "base", "styles:\n  Button:\n    alpha: 0.5\n");
    install(&mut stylist, "accent", "styles:\n  Button:\n    alpha: 0.25\n");
    assert_eq!(button.alpha.get(), 0.25);

    let removed = stylist.remove_theme("accent").unwrap();
    assert_eq!(removed.len(), 1);
    assert_eq!(button.alpha.get(), 0.5);
    assert!(stylist.remove_theme("accent").is_none());
}

#[test]
fn later_themes_win_ties() {
    let types = Types::new();
    let mut stylist = types.stylist();
    install(&mut stylist, "first", "styles:\n  Button:\n    alpha: 0.5\n");
    install(&mut stylist, "second", "styles:\n  Button:\n    alpha: 0.25\n");

    let button = types.button("");
    stylist.style(&button);
    assert_eq!(button.alpha.get(), 0.25);
}

#[test]
fn sub_styles_reach_related_views() {
    let types = Types::new();
    let mut stylist = types.stylist();
    install(
        &mut stylist,
        "main",
        "
styles:
  Button.save:
    alpha: 0.5
    superview:
      backgroundColor: red
    next:
      cornerRadius: 3
    previous:
      cornerRadius: 7
    viewController:
      alpha: 0.1
",
    );

    let row = types.stack("");
    let before = types.label("");
    let save = types.button("save");
    let after = types.label("");
    row.add_child(&before);
    row.add_child(&save);
    row.add_child(&after);

    let report = stylist.style(&save);
    assert_eq!(report.applied, 4);
    assert_eq!(rgba8(row.background.get().unwrap()), [255, 0, 0, 255]);
    assert_eq!(after.corner_radius.get(), 3.0);
    assert_eq!(before.corner_radius.get(), 7.0);
    assert_eq!(row.alpha.get(), 1.0);
}

#[test]
fn custom_properties_and_relations() {
    let types = Types::new();
    let mut stylist = types.stylist();
    stylist.register_property(StyleProperty::for_type::<MockView, f64, _>(
        "padding",
        |view, value: PropertyValue<f64>| view.spacing.set(value.value),
    ));
    stylist.register_object(StyleObject::new("firstChild", view, |_, view| {
        view.subviews().into_iter().next()
    }));

    install(
        &mut stylist,
        "main",
        "
styles:
  row:
    padding: 5
    firstChild:
      padding: 2
",
    );

    let row = types.view("row");
    let child = types.view("");
    row.add_child(&child);
    stylist.style(&row);
    assert_eq!(row.spacing.get(), 5.0);
    assert_eq!(child.spacing.get(), 2.0);
}

#[test]
fn aspect_ratio_forms_are_asymmetric() {
    let types = Types::new();
    let mut stylist = types.stylist();
    install(
        &mut stylist,
        "main",
        "
styles:
  slash:
    aspectRatioAnchor: 1/2
  colon:
    aspectRatioAnchor: '1:2'
  number:
    aspectRatioAnchor: 1.5
",
    );

    let slash = types.view("slash");
    let colon = types.view("colon");
    let number = types.view("number");
    for view in [&slash, &colon, &number] {
        stylist.style(view);
    }
    assert_eq!(slash.aspect_ratio.get(), Some(0.5));
    assert_eq!(colon.aspect_ratio.get(), Some(2.0));
    assert_eq!(number.aspect_ratio.get(), Some(1.5));
}

#[test]
fn dropped_targets_are_forgotten() {
    let types = Types::new();
    let mut stylist = types.stylist();
    let kept = types.view("");
    let dropped = types.view("");
    stylist.style(&kept);
    stylist.style(&dropped);
    assert_eq!(stylist.targets().len(), 2);

    drop(dropped);
    let report = install(&mut stylist, "main", "styles:\n  View:\n    alpha: 0.5\n");
    assert_eq!(report.applied, 1);
    assert_eq!(stylist.targets().len(), 1);
    assert!(same_target(&*stylist.targets()[0], &*kept));
}

#[test]
fn control_state_reaches_button_titles() {
    let types = Types::new();
    let mut stylist = types.stylist();
    install(
        &mut stylist,
        "main",
        "
styles:
  Button:
    textColor: white
    titleColor:highlighted: red
",
    );

    let button = types.button("");
    stylist.style(&button);
    let titles: Vec<_> = button
        .title_colors
        .borrow()
        .iter()
        .map(|(color, state)| (rgba8(*color), *state))
        .collect();
    assert_eq!(
        titles,
        [
            ([255, 255, 255, 255], ControlState::Normal),
            ([255, 0, 0, 255], ControlState::Highlighted),
        ]
    );
}

#[test]
fn qualified_and_subtype_selectors() {
    let types = Types::new();
    let mut stylist = types.stylist();
    install(
        &mut stylist,
        "main",
        "
styles:
  Button:
    cornerRadius: 2
  Demo-App.CustomButton:
    alpha: 0.5
",
    );

    let custom = types.custom_button("");
    let button = types.button("");
    stylist.style(&custom);
    stylist.style(&button);
    assert_eq!(custom.corner_radius.get(), 2.0);
    assert_eq!(custom.alpha.get(), 0.5);
    assert_eq!(button.alpha.get(), 1.0);
}

#[test]
fn retagging_restyles() {
    let types = Types::new();
    let mut stylist = types.stylist();
    install(
        &mut stylist,
        "main",
        "
styles:
  hidden:
    visible: false
  shown:
    visible: true
",
    );

    let view = types.view("");
    stylist.set_tag_string(&view, "hidden");
    assert!(view.hidden.get());
    stylist.set_tag_string(&view, "shown, extra");
    assert!(!view.hidden.get());
    assert_eq!(view.tag_store().len(), 2);
}

#[test]
fn direct_tag_writes_wait_for_a_restyle() {
    let types = Types::new();
    let mut stylist = types.stylist();
    install(&mut stylist, "main", "styles:\n  hidden:\n    visible: false\n");

    let view = types.view("");
    stylist.style(&view);
    view.tag_store().replace(parse_tags("hidden"));
    assert!(!view.hidden.get());

    stylist.restyle();
    assert!(view.hidden.get());
}

#[test]
fn clear_forgets_everything() {
    let types = Types::new();
    let mut stylist = types.stylist();
    let view = types.view("");
    stylist.style(&view);
    install(&mut stylist, "main", "styles:\n  View:\n    alpha: 0.5\n");

    stylist.clear();
    assert!(stylist.targets().is_empty());
    assert!(stylist.rules().is_empty());
    assert_eq!(stylist.style(&view), ApplyReport::default());
}
