// SPDX-License-Identifier: MIT OR Apache-2.0

use std::rc::Rc;

use crate::geometry::{Position, Size};
use crate::layout::Layout;
use crate::widget::Widget;

/// Stacks objects top to bottom.
///
/// Every visible object gets the full width and its minimum height, with
/// `spacing` between consecutive objects. Hidden objects take no space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VBoxLayout {
    spacing: f32,
}

impl VBoxLayout {
    /// Create a vertical layout with the given spacing between objects.
    pub fn new(spacing: f32) -> Self {
        Self { spacing }
    }
}

impl Layout for VBoxLayout {
    fn min_size(&self, objects: &[Rc<dyn Widget>]) -> Size {
        let mut min = Size::zeros();
        let mut count = 0;

        for object in objects.iter().filter(|object| object.visible()) {
            let child = object.min_size();
            min.x = min.x.max(child.x);
            min.y += child.y;
            count += 1;
        }

        if count > 1 {
            min.y += self.spacing * (count - 1) as f32;
        }

        min
    }

    fn layout(&self, objects: &[Rc<dyn Widget>], size: Size) {
        let mut y = 0.0;

        for object in objects.iter().filter(|object| object.visible()) {
            let height = object.min_size().y;
            object.move_to(Position::new(0.0, y));
            object.resize(Size::new(size.x, height));
            y += height + self.spacing;
        }
    }
}
