// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The standard property and relation table.
//!
//! [`PropertyRegistry::with_defaults`] binds the common theme property names
//! to capability traits such as [`StyleableView`].

use alloc::rc::Rc;
use alloc::string::String;

use kurbo::{Insets, Point, Rect, Size, Vec2};
use understory_style_value::{
    AspectRatioAnchor, Axis, BarStyle, Color, ContentMode, Font, LargeTitleDisplayMode,
    LayoutAnchor, StackAlignment, StackDistribution, StyleValue, TextAlignment,
};

use crate::capability::{
    StyleableBar, StyleableBarItem, StyleableButton, StyleableStack, StyleableText,
    StyleableView, StyleableViewController,
};
use crate::context::PropertyValue;
use crate::property::{Capability, StyleObject, StyleProperty};
use crate::registry::PropertyRegistry;
use crate::target::{Styleable, same_target};

fn view(target: &dyn Styleable) -> Option<&dyn StyleableView> {
    target.as_view()
}

fn button(target: &dyn Styleable) -> Option<&dyn StyleableButton> {
    target.as_button()
}

fn text(target: &dyn Styleable) -> Option<&dyn StyleableText> {
    target.as_text()
}

fn stack(target: &dyn Styleable) -> Option<&dyn StyleableStack> {
    target.as_stack()
}

fn bar(target: &dyn Styleable) -> Option<&dyn StyleableBar> {
    target.as_bar()
}

fn bar_item(target: &dyn Styleable) -> Option<&dyn StyleableBarItem> {
    target.as_bar_item()
}

fn view_controller(target: &dyn Styleable) -> Option<&dyn StyleableViewController> {
    target.as_view_controller()
}

/// A property that ignores the assignment context.
fn plain<C, T>(
    name: &str,
    capability: Capability<C>,
    set: impl Fn(&C, T) + 'static,
) -> StyleProperty
where
    C: ?Sized + 'static,
    T: StyleValue + 'static,
{
    StyleProperty::new(name, capability, move |target: &C, value: PropertyValue<T>| {
        set(target, value.value);
    })
}

/// A relation to a sibling at `offset` within the superview's subviews.
fn sibling(
    target: &dyn Styleable,
    view: &dyn StyleableView,
    offset: isize,
) -> Option<Rc<dyn Styleable>> {
    let superview = view.superview()?;
    let siblings = superview.as_view()?.subviews();
    let index = siblings
        .iter()
        .position(|child| same_target(&**child, target))?;
    siblings.get(index.checked_add_signed(offset)?).cloned()
}

impl PropertyRegistry {
    /// Creates a registry holding the standard properties and relations.
    ///
    /// | Capability | Properties |
    /// |------------|------------|
    /// | view | `backgroundColor`, `tintColor`, `alpha`, `borderColor`, `borderWidth`, `cornerRadius`, `clipsToBounds`, `shadowOpacity`, `shadowColor`, `shadowOffset`, `shadowRadius`, `contentMode`, `visible`, `hidden`, `layoutMargins`, `position`, `origin`, `size`, `frame`, `widthAnchor`, `heightAnchor`, `aspectRatioAnchor` |
    /// | button | `textColor`, `titleColor`, `font`, `titleFont`, `imageEdgeInsets`, `titleEdgeInsets`, `contentEdgeInsets` |
    /// | text | `textColor`, `font`, `text`, `textAlignment`, `numberOfLines` |
    /// | stack | `axis`, `alignment`, `distribution`, `spacing` |
    /// | bar | `barTintColor`, `barStyle`, `translucent`, `titleColor`, `titleFont`, `prefersLargeTitles` |
    /// | bar item | `tintColor`, `titlePositionAdjustment`, `badgeColor` |
    /// | view controller | `largeTitleDisplayMode` |
    ///
    /// Views relate to `superview`, `parent`, `next`, `previous` and
    /// `viewController`; view controllers to `view`, `parent`,
    /// `navigationController`, `navigationBar`, `tabBarController`, `tabBar`
    /// and `toolbar` (also spelled `toolBar`).
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_defaults();
        registry
    }

    /// Adds the standard properties and relations to this registry.
    pub fn register_defaults(&mut self) {
        self.register_view();
        self.register_button();
        self.register_text();
        self.register_stack();
        self.register_bar();
        self.register_view_controller();
    }

    fn register_view(&mut self) {
        self.register(plain("backgroundColor", view, |v, c: Color| v.set_background_color(c)));
        self.register(plain("tintColor", view, |v, c: Color| v.set_tint_color(c)));
        self.register(plain("alpha", view, |v, a: f64| v.set_alpha(a)));
        self.register(plain("borderColor", view, |v, c: Color| v.set_border_color(c)));
        self.register(plain("borderWidth", view, |v, w: f64| v.set_border_width(w)));
        self.register(plain("cornerRadius", view, |v, r: f64| v.set_corner_radius(r)));
        self.register(plain("clipsToBounds", view, |v, b: bool| v.set_clips_to_bounds(b)));
        self.register(plain("shadowOpacity", view, |v, o: f32| v.set_shadow_opacity(o)));
        self.register(plain("shadowColor", view, |v, c: Color| v.set_shadow_color(c)));
        self.register(plain("shadowOffset", view, |v, s: Size| v.set_shadow_offset(s)));
        self.register(plain("shadowRadius", view, |v, r: f64| v.set_shadow_radius(r)));
        self.register(plain("contentMode", view, |v, m: ContentMode| v.set_content_mode(m)));
        self.register(plain("visible", view, |v, b: bool| v.set_hidden(!b)));
        self.register(plain("hidden", view, |v, b: bool| v.set_hidden(b)));
        self.register(plain("layoutMargins", view, |v, i: Insets| v.set_layout_margins(i)));
        self.register(plain("position", view, |v, p: Point| v.set_origin(p)));
        self.register(plain("origin", view, |v, p: Point| v.set_origin(p)));
        self.register(plain("size", view, |v, s: Size| v.set_size(s)));
        self.register(plain("frame", view, |v, r: Rect| v.set_frame(r)));
        self.register(plain("widthAnchor", view, |v, a: LayoutAnchor| v.set_width_anchor(a)));
        self.register(plain("heightAnchor", view, |v, a: LayoutAnchor| v.set_height_anchor(a)));
        self.register(plain("aspectRatioAnchor", view, |v, a: AspectRatioAnchor| {
            v.set_aspect_ratio_anchor(a);
        }));

        self.register_object(StyleObject::new("superview", view, |_, v| v.superview()));
        self.register_object(StyleObject::new("parent", view, |_, v| v.superview()));
        self.register_object(StyleObject::new("next", view, |t, v| sibling(t, v, 1)));
        self.register_object(StyleObject::new("previous", view, |t, v| sibling(t, v, -1)));
        self.register_object(StyleObject::new("viewController", view, |_, v| {
            v.view_controller()
        }));
    }

    fn register_button(&mut self) {
        for name in ["textColor", "titleColor"] {
            self.register(StyleProperty::new(name, button, |b, value: PropertyValue<Color>| {
                b.set_title_color(value.value, value.control_state());
            }));
        }
        self.register(plain("font", button, |b, f: Font| b.set_title_font(f)));
        self.register(plain("titleFont", button, |b, f: Font| b.set_title_font(f)));
        self.register(plain("imageEdgeInsets", button, |b, i: Insets| {
            b.set_image_edge_insets(i);
        }));
        self.register(plain("titleEdgeInsets", button, |b, i: Insets| {
            b.set_title_edge_insets(i);
        }));
        self.register(plain("contentEdgeInsets", button, |b, i: Insets| {
            b.set_content_edge_insets(i);
        }));
    }

    fn register_text(&mut self) {
        self.register(plain("textColor", text, |t, c: Color| t.set_text_color(c)));
        self.register(plain("font", text, |t, f: Font| t.set_font(f)));
        self.register(plain("text", text, |t, s: String| t.set_text(s)));
        self.register(plain("textAlignment", text, |t, a: TextAlignment| {
            t.set_text_alignment(a);
        }));
        self.register(plain("numberOfLines", text, |t, n: i64| t.set_number_of_lines(n)));
    }

    fn register_stack(&mut self) {
        self.register(plain("axis", stack, |s, a: Axis| s.set_axis(a)));
        self.register(plain("alignment", stack, |s, a: StackAlignment| s.set_alignment(a)));
        self.register(plain("distribution", stack, |s, d: StackDistribution| {
            s.set_distribution(d);
        }));
        self.register(plain("spacing", stack, |s, n: f64| s.set_spacing(n)));
    }

    fn register_bar(&mut self) {
        self.register(plain("barTintColor", bar, |b, c: Color| b.set_bar_tint_color(c)));
        self.register(plain("barStyle", bar, |b, s: BarStyle| b.set_bar_style(s)));
        self.register(plain("translucent", bar, |b, t: bool| b.set_translucent(t)));
        self.register(plain("titleColor", bar, |b, c: Color| b.set_title_color(c)));
        self.register(plain("titleFont", bar, |b, f: Font| b.set_title_font(f)));
        self.register(plain("prefersLargeTitles", bar, |b, p: bool| {
            b.set_prefers_large_titles(p);
        }));

        self.register(plain("tintColor", bar_item, |i, c: Color| i.set_tint_color(c)));
        self.register(plain("titlePositionAdjustment", bar_item, |i, o: Vec2| {
            i.set_title_position_adjustment(o);
        }));
        self.register(plain("badgeColor", bar_item, |i, c: Color| i.set_badge_color(c)));
    }

    fn register_view_controller(&mut self) {
        self.register(plain(
            "largeTitleDisplayMode",
            view_controller,
            |c, m: LargeTitleDisplayMode| c.set_large_title_display_mode(m),
        ));

        self.register_object(StyleObject::new("view", view_controller, |_, c| c.view()));
        self.register_object(StyleObject::new("parent", view_controller, |_, c| {
            c.parent_controller()
        }));
        self.register_object(StyleObject::new("navigationController", view_controller, |_, c| {
            c.navigation_controller()
        }));
        self.register_object(StyleObject::new("navigationBar", view_controller, |_, c| {
            c.navigation_bar()
        }));
        self.register_object(StyleObject::new("tabBarController", view_controller, |_, c| {
            c.tab_bar_controller()
        }));
        self.register_object(StyleObject::new("tabBar", view_controller, |_, c| c.tab_bar()));
        for name in ["toolbar", "toolBar"] {
            self.register_object(StyleObject::new(name, view_controller, |_, c| c.toolbar()));
        }
    }
}
