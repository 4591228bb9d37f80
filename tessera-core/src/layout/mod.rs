// SPDX-License-Identifier: MIT OR Apache-2.0

use std::rc::Rc;

use crate::geometry::Size;
use crate::widget::Widget;

mod vbox;

pub use vbox::VBoxLayout;

/// Arranges the objects of a container.
pub trait Layout {
    /// The smallest size that fits every visible object.
    fn min_size(&self, objects: &[Rc<dyn Widget>]) -> Size;

    /// Resize and move the objects to fill `size`.
    fn layout(&self, objects: &[Rc<dyn Widget>], size: Size);
}
