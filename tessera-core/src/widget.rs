// SPDX-License-Identifier: MIT OR Apache-2.0

use std::cell::Cell;
use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};

use tessera_theme::id::WidgetId;

use crate::app::context::AppContext;
use crate::geometry::{Position, Size};

/// Identifies one widget instance, e.g. in the canvas dirty set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetKey(u64);

impl WidgetKey {
    /// Allocate a fresh key.
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl Display for WidgetKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The state every widget carries: identity, visibility and cached geometry.
///
/// All fields use interior mutability so widgets can be shared through `Rc`
/// and still be shown, hidden, moved and resized.
pub struct WidgetBase {
    key: WidgetKey,
    context: AppContext,
    visible: Cell<bool>,
    size: Cell<Size>,
    position: Cell<Position>,
}

impl WidgetBase {
    /// Create the state of a visible, zero-sized widget at the origin.
    pub fn new(context: &AppContext) -> Self {
        Self {
            key: WidgetKey::next(),
            context: context.clone(),
            visible: Cell::new(true),
            size: Cell::new(Size::zeros()),
            position: Cell::new(Position::zeros()),
        }
    }

    /// The instance key.
    pub fn key(&self) -> WidgetKey {
        self.key
    }

    /// The context the widget was created in.
    pub fn context(&self) -> &AppContext {
        &self.context
    }

    /// Returns the visibility flag.
    pub fn visible(&self) -> bool {
        self.visible.get()
    }

    /// Set the visibility flag. Returns true if it changed.
    pub fn set_visible(&self, visible: bool) -> bool {
        self.visible.replace(visible) != visible
    }

    /// The cached size.
    pub fn size(&self) -> Size {
        self.size.get()
    }

    /// Store a new size without triggering any layout.
    pub fn set_size(&self, size: Size) {
        self.size.set(size);
    }

    /// The cached position.
    pub fn position(&self) -> Position {
        self.position.get()
    }

    /// Store a new position.
    pub fn set_position(&self, position: Position) {
        self.position.set(position);
    }
}

/// The base trait for all widgets.
///
/// Only [base](Widget::base), [widget_id](Widget::widget_id) and
/// [min_size](Widget::min_size) are required; everything else works on the
/// shared [WidgetBase] state. Widgets with a renderer override
/// [resize](Widget::resize) and [refresh](Widget::refresh) to route through it.
pub trait Widget {
    /// The widget's shared state.
    fn base(&self) -> &WidgetBase;

    /// Return the widget type id.
    fn widget_id(&self) -> WidgetId;

    /// The smallest size the widget can be displayed at.
    fn min_size(&self) -> Size;

    /// The current size.
    fn size(&self) -> Size {
        self.base().size()
    }

    /// The current position relative to the parent.
    fn position(&self) -> Position {
        self.base().position()
    }

    /// Resize the widget.
    fn resize(&self, size: Size) {
        self.base().set_size(size);
    }

    /// Move the widget.
    fn move_to(&self, position: Position) {
        self.base().set_position(position);
    }

    /// Returns true if the widget is shown.
    fn visible(&self) -> bool {
        self.base().visible()
    }

    /// Show the widget and request a repaint.
    fn show(&self) {
        if self.base().set_visible(true) {
            self.refresh();
        }
    }

    /// Hide the widget and request a repaint.
    fn hide(&self) {
        if self.base().set_visible(false) {
            self.refresh();
        }
    }

    /// Request a repaint.
    fn refresh(&self) {
        let base = self.base();
        base.context().canvas().refresh(base.key());
    }
}

/// A pointer event in the coordinate space of the receiving widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointEvent {
    /// Where the pointer is, relative to the widget.
    pub position: Position,
}

impl PointEvent {
    /// Create a point event at the given position.
    pub fn new(position: Position) -> Self {
        Self { position }
    }
}

/// Widgets that react to taps/clicks.
pub trait Tappable {
    /// Called when the widget was tapped.
    fn tapped(&self, event: &PointEvent);
}

/// Widgets that react to the pointer entering and leaving them.
pub trait Hoverable {
    /// The pointer entered the widget.
    fn mouse_in(&self, event: &PointEvent);

    /// The pointer left the widget.
    fn mouse_out(&self);
}
