// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capability traits that the default properties drive.
//!
//! A target exposes a capability through the matching `Styleable::as_*`
//! accessor. Every setter defaults to doing nothing, so hosts implement only
//! what their widgets support. Relation methods return related targets for
//! sub-styles and default to `None`.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Insets, Point, Rect, Size, Vec2};
use understory_style_value::{
    AspectRatioAnchor, Axis, BarStyle, Color, ContentMode, ControlState, Font,
    LargeTitleDisplayMode, LayoutAnchor, StackAlignment, StackDistribution, TextAlignment,
};

use crate::target::Styleable;

/// A rectangular view in a hierarchy.
pub trait StyleableView: 'static {
    /// Sets the background fill.
    fn set_background_color(&self, _color: Color) {}
    /// Sets the tint propagated to subviews.
    fn set_tint_color(&self, _color: Color) {}
    /// Sets opacity.
    fn set_alpha(&self, _alpha: f64) {}
    /// Sets the border color.
    fn set_border_color(&self, _color: Color) {}
    /// Sets the border width.
    fn set_border_width(&self, _width: f64) {}
    /// Sets the corner radius.
    fn set_corner_radius(&self, _radius: f64) {}
    /// Sets whether content is clipped to bounds.
    fn set_clips_to_bounds(&self, _clips: bool) {}
    /// Sets shadow opacity.
    fn set_shadow_opacity(&self, _opacity: f32) {}
    /// Sets shadow color.
    fn set_shadow_color(&self, _color: Color) {}
    /// Sets shadow offset.
    fn set_shadow_offset(&self, _offset: Size) {}
    /// Sets shadow blur radius.
    fn set_shadow_radius(&self, _radius: f64) {}
    /// Sets how content fills the bounds.
    fn set_content_mode(&self, _mode: ContentMode) {}
    /// Shows or hides the view.
    fn set_hidden(&self, _hidden: bool) {}
    /// Sets layout margins.
    fn set_layout_margins(&self, _margins: Insets) {}
    /// Moves the frame origin.
    fn set_origin(&self, _origin: Point) {}
    /// Resizes the frame.
    fn set_size(&self, _size: Size) {}
    /// Sets the whole frame.
    fn set_frame(&self, _frame: Rect) {}
    /// Replaces the width constraint.
    fn set_width_anchor(&self, _anchor: LayoutAnchor) {}
    /// Replaces the height constraint.
    fn set_height_anchor(&self, _anchor: LayoutAnchor) {}
    /// Replaces the width-to-height constraint.
    fn set_aspect_ratio_anchor(&self, _anchor: AspectRatioAnchor) {}

    /// The containing view.
    fn superview(&self) -> Option<Rc<dyn Styleable>> {
        None
    }
    /// Child views in order.
    fn subviews(&self) -> Vec<Rc<dyn Styleable>> {
        Vec::new()
    }
    /// The controller owning this view.
    fn view_controller(&self) -> Option<Rc<dyn Styleable>> {
        None
    }
}

/// A button with per-state titles.
pub trait StyleableButton: 'static {
    /// Sets the title color for a control state.
    fn set_title_color(&self, _color: Color, _state: ControlState) {}
    /// Sets the title font.
    fn set_title_font(&self, _font: Font) {}
    /// Sets image insets.
    fn set_image_edge_insets(&self, _insets: Insets) {}
    /// Sets title insets.
    fn set_title_edge_insets(&self, _insets: Insets) {}
    /// Sets content insets.
    fn set_content_edge_insets(&self, _insets: Insets) {}
}

/// A label or text field.
pub trait StyleableText: 'static {
    /// Sets the text color.
    fn set_text_color(&self, _color: Color) {}
    /// Sets the font.
    fn set_font(&self, _font: Font) {}
    /// Sets the displayed text.
    fn set_text(&self, _text: String) {}
    /// Sets text alignment.
    fn set_text_alignment(&self, _alignment: TextAlignment) {}
    /// Sets the maximum line count, `0` for unlimited.
    fn set_number_of_lines(&self, _lines: i64) {}
}

/// A stack of arranged children.
pub trait StyleableStack: 'static {
    /// Sets the stacking axis.
    fn set_axis(&self, _axis: Axis) {}
    /// Sets cross-axis alignment.
    fn set_alignment(&self, _alignment: StackAlignment) {}
    /// Sets main-axis distribution.
    fn set_distribution(&self, _distribution: StackDistribution) {}
    /// Sets the gap between children.
    fn set_spacing(&self, _spacing: f64) {}
}

/// A navigation, tab or tool bar.
pub trait StyleableBar: 'static {
    /// Sets the bar background tint.
    fn set_bar_tint_color(&self, _color: Color) {}
    /// Sets the bar style.
    fn set_bar_style(&self, _style: BarStyle) {}
    /// Sets translucency.
    fn set_translucent(&self, _translucent: bool) {}
    /// Sets the title color.
    fn set_title_color(&self, _color: Color) {}
    /// Sets the title font.
    fn set_title_font(&self, _font: Font) {}
    /// Sets whether large titles are preferred.
    fn set_prefers_large_titles(&self, _prefers: bool) {}
}

/// An item shown in a bar.
pub trait StyleableBarItem: 'static {
    /// Sets the item tint.
    fn set_tint_color(&self, _color: Color) {}
    /// Offsets the item title.
    fn set_title_position_adjustment(&self, _offset: Vec2) {}
    /// Sets the badge color.
    fn set_badge_color(&self, _color: Color) {}
}

/// A controller that owns a view and sits in a container hierarchy.
pub trait StyleableViewController: 'static {
    /// Sets how the navigation item shows its title.
    fn set_large_title_display_mode(&self, _mode: LargeTitleDisplayMode) {}

    /// The controller's root view.
    fn view(&self) -> Option<Rc<dyn Styleable>> {
        None
    }
    /// The containing controller.
    fn parent_controller(&self) -> Option<Rc<dyn Styleable>> {
        None
    }
    /// The enclosing navigation controller.
    fn navigation_controller(&self) -> Option<Rc<dyn Styleable>> {
        None
    }
    /// The navigation bar of the enclosing navigation controller.
    fn navigation_bar(&self) -> Option<Rc<dyn Styleable>> {
        None
    }
    /// The enclosing tab bar controller.
    fn tab_bar_controller(&self) -> Option<Rc<dyn Styleable>> {
        None
    }
    /// The tab bar of the enclosing tab bar controller.
    fn tab_bar(&self) -> Option<Rc<dyn Styleable>> {
        None
    }
    /// The toolbar of the enclosing navigation controller.
    fn toolbar(&self) -> Option<Rc<dyn Styleable>> {
        None
    }
}
