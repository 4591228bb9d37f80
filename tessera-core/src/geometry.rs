// SPDX-License-Identifier: MIT OR Apache-2.0

use nalgebra::Vector2;

/// A width/height pair in device independent pixels.
pub type Size = Vector2<f32>;

/// A position relative to the parent's origin.
pub type Position = Vector2<f32>;

/// An axis aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top left corner.
    pub origin: Position,
    /// Extent of the rectangle.
    pub size: Size,
}

impl Rect {
    /// Create a rectangle from its origin and size.
    pub fn new(origin: Position, size: Size) -> Self {
        Self { origin, size }
    }

    /// Returns true if the point lies inside the rectangle (edges inclusive).
    pub fn contains(&self, point: Position) -> bool {
        let end = self.origin + self.size;
        point.x >= self.origin.x && point.y >= self.origin.y && point.x <= end.x && point.y <= end.y
    }

    /// Grow the rectangle by `amount` on every side.
    pub fn inflate(&self, amount: f32) -> Self {
        Self {
            origin: self.origin - Vector2::repeat(amount),
            size: self.size + Vector2::repeat(amount * 2.0),
        }
    }
}
