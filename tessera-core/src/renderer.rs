// SPDX-License-Identifier: MIT OR Apache-2.0

use std::rc::Rc;

use crate::geometry::Size;
use crate::widget::Widget;

/// The visual delegate of a composite widget.
///
/// A renderer owns the objects a widget is drawn with, knows how big they
/// need to be and positions them when the widget is resized.
pub trait WidgetRenderer {
    /// Position the objects inside the given size.
    fn layout(&self, size: Size);

    /// The minimum size needed to display every object.
    fn min_size(&self) -> Size;

    /// Request a repaint of the owning widget.
    fn refresh(&self);

    /// The objects to draw, back to front.
    fn objects(&self) -> Vec<Rc<dyn Widget>>;
}
