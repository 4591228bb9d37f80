// SPDX-License-Identifier: MIT OR Apache-2.0

//! Overlay management.
//!
//! Pop-ups and menus are shown above the window content by pushing them
//! onto the [Overlays] stack. The last added overlay is on top.

use std::cell::RefCell;
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

use log::debug;

use crate::widget::Widget;

/// Unique identifier for overlays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlayId(pub u32);

#[derive(Default)]
struct OverlayStack {
    layers: Vec<(OverlayId, Rc<dyn Widget>)>,
    next_id: u32,
}

/// The stack of overlay widgets of a window.
///
/// Cloning yields another handle to the same stack.
#[derive(Clone, Default)]
pub struct Overlays {
    stack: Rc<RefCell<OverlayStack>>,
}

impl Overlays {
    /// Create an empty overlay stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a widget on top of the stack.
    pub fn add(&self, widget: Rc<dyn Widget>) -> OverlayId {
        let mut stack = self.stack.borrow_mut();
        stack.next_id += 1;
        let id = OverlayId(stack.next_id);
        debug!("Adding overlay {:?} ({})", id, widget.widget_id());
        stack.layers.push((id, widget));
        id
    }

    /// Remove an overlay. Returns the removed widget, or [None] if the id is unknown.
    pub fn remove(&self, id: OverlayId) -> Option<Rc<dyn Widget>> {
        let mut stack = self.stack.borrow_mut();
        let index = stack.layers.iter().position(|(layer, _)| *layer == id)?;
        debug!("Removing overlay {:?}", id);
        Some(stack.layers.remove(index).1)
    }

    /// The top-most overlay.
    pub fn top(&self) -> Option<Rc<dyn Widget>> {
        self.stack
            .borrow()
            .layers
            .last()
            .map(|(_, widget)| widget.clone())
    }

    /// Returns true if the overlay is still on the stack.
    pub fn contains(&self, id: OverlayId) -> bool {
        self.stack.borrow().layers.iter().any(|(layer, _)| *layer == id)
    }

    /// Number of overlays.
    pub fn len(&self) -> usize {
        self.stack.borrow().layers.len()
    }

    /// Returns true if there are no overlays.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Debug for Overlays {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Overlays").field("len", &self.len()).finish()
    }
}
