// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small mock view hierarchy shared by the integration tests.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use understory_property::{
    Styleable, StyleableButton, StyleableStack, StyleableText, StyleableView, TagStore, Traits,
    TypeRegistry, TypeTag, parse_tags,
};
use understory_style::Stylist;
use understory_style_value::{AspectRatioAnchor, Color, ControlState};

/// Which capabilities a mock exposes besides the view.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Kind {
    View,
    Button,
    Label,
    Stack,
}

/// Type tags of the mock classes.
pub(crate) struct Types {
    pub(crate) registry: TypeRegistry,
    pub(crate) view: TypeTag,
    pub(crate) button: TypeTag,
    pub(crate) custom_button: TypeTag,
    pub(crate) label: TypeTag,
    pub(crate) stack: TypeTag,
}

impl Types {
    pub(crate) fn new() -> Self {
        let mut registry = TypeRegistry::new();
        let view = registry.register("View", None);
        let button = registry.register("Button", Some(view));
        let custom_button = registry.register("Demo_App.CustomButton", Some(button));
        let label = registry.register("Label", Some(view));
        let stack = registry.register("Stack", Some(view));
        Self {
            registry,
            view,
            button,
            custom_button,
            label,
            stack,
        }
    }

    /// Returns a stylist with the default properties and these types.
    pub(crate) fn stylist(&self) -> Stylist {
        Stylist::builder().types(self.registry.clone()).build()
    }

    pub(crate) fn view(&self, tags: &str) -> Rc<MockView> {
        MockView::new(Kind::View, self.view, tags)
    }

    pub(crate) fn button(&self, tags: &str) -> Rc<MockView> {
        MockView::new(Kind::Button, self.button, tags)
    }

    pub(crate) fn custom_button(&self, tags: &str) -> Rc<MockView> {
        MockView::new(Kind::Button, self.custom_button, tags)
    }

    pub(crate) fn label(&self, tags: &str) -> Rc<MockView> {
        MockView::new(Kind::Label, self.label, tags)
    }

    pub(crate) fn stack(&self, tags: &str) -> Rc<MockView> {
        MockView::new(Kind::Stack, self.stack, tags)
    }
}

/// A view that records what styles set on it.
pub(crate) struct MockView {
    kind: Kind,
    ty: TypeTag,
    tags: TagStore,
    pub(crate) traits: Cell<Traits>,
    parent: RefCell<Weak<MockView>>,
    children: RefCell<Vec<Rc<MockView>>>,

    pub(crate) alpha: Cell<f64>,
    pub(crate) corner_radius: Cell<f64>,
    pub(crate) hidden: Cell<bool>,
    pub(crate) spacing: Cell<f64>,
    pub(crate) aspect_ratio: Cell<Option<f64>>,
    pub(crate) background: Cell<Option<Color>>,
    pub(crate) text_color: Cell<Option<Color>>,
    pub(crate) title_colors: RefCell<Vec<(Color, ControlState)>>,
    pub(crate) writes: Cell<usize>,
}

impl MockView {
    pub(crate) fn new(kind: Kind, ty: TypeTag, tags: &str) -> Rc<Self> {
        Rc::new(Self {
            kind,
            ty,
            tags: TagStore::with_tags(parse_tags(tags)),
            traits: Cell::new(Traits::default()),
            parent: RefCell::new(Weak::new()),
            children: RefCell::new(Vec::new()),
            alpha: Cell::new(1.0),
            corner_radius: Cell::new(0.0),
            hidden: Cell::new(false),
            spacing: Cell::new(0.0),
            aspect_ratio: Cell::new(None),
            background: Cell::new(None),
            text_color: Cell::new(None),
            title_colors: RefCell::new(Vec::new()),
            writes: Cell::new(0),
        })
    }

    /// Appends `child` to this view's subviews.
    pub(crate) fn add_child(self: &Rc<Self>, child: &Rc<Self>) {
        *child.parent.borrow_mut() = Rc::downgrade(self);
        self.children.borrow_mut().push(child.clone());
    }

    fn wrote(&self) {
        self.writes.set(self.writes.get() + 1);
    }
}

impl StyleableView for MockView {
    fn set_background_color(&self, color: Color) {
        self.wrote();
        self.background.set(Some(color));
    }

    fn set_alpha(&self, alpha: f64) {
        self.wrote();
        self.alpha.set(alpha);
    }

    fn set_corner_radius(&self, radius: f64) {
        self.wrote();
        self.corner_radius.set(radius);
    }

    fn set_hidden(&self, hidden: bool) {
        self.wrote();
        self.hidden.set(hidden);
    }

    fn set_aspect_ratio_anchor(&self, anchor: AspectRatioAnchor) {
        self.wrote();
        self.aspect_ratio.set(Some(anchor.ratio));
    }

    fn superview(&self) -> Option<Rc<dyn Styleable>> {
        self.parent()
    }

    fn subviews(&self) -> Vec<Rc<dyn Styleable>> {
        self.children
            .borrow()
            .iter()
            .map(|child| child.clone() as Rc<dyn Styleable>)
            .collect()
    }
}

impl StyleableButton for MockView {
    fn set_title_color(&self, color: Color, state: ControlState) {
        self.wrote();
        self.title_colors.borrow_mut().push((color, state));
    }
}

impl StyleableText for MockView {
    fn set_text_color(&self, color: Color) {
        self.wrote();
        self.text_color.set(Some(color));
    }
}

impl StyleableStack for MockView {
    fn set_spacing(&self, spacing: f64) {
        self.wrote();
        self.spacing.set(spacing);
    }
}

impl Styleable for MockView {
    fn tag_store(&self) -> &TagStore {
        &self.tags
    }

    fn type_tag(&self) -> TypeTag {
        self.ty
    }

    fn parent(&self) -> Option<Rc<dyn Styleable>> {
        self.parent
            .borrow()
            .upgrade()
            .map(|parent| parent as Rc<dyn Styleable>)
    }

    fn traits(&self) -> Traits {
        self.traits.get()
    }

    fn as_view(&self) -> Option<&dyn StyleableView> {
        Some(self)
    }

    fn as_button(&self) -> Option<&dyn StyleableButton> {
        (self.kind == Kind::Button).then_some(self as &dyn StyleableButton)
    }

    fn as_text(&self) -> Option<&dyn StyleableText> {
        (self.kind == Kind::Label).then_some(self as &dyn StyleableText)
    }

    fn as_stack(&self) -> Option<&dyn StyleableStack> {
        (self.kind == Kind::Stack).then_some(self as &dyn StyleableStack)
    }
}

/// Returns a color as 8-bit RGBA.
pub(crate) fn rgba8(color: Color) -> [u8; 4] {
    let c = color.to_rgba8();
    [c.r, c.g, c.b, c.a]
}
