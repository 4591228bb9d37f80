// SPDX-License-Identifier: MIT OR Apache-2.0

//! Repaint scheduling.
//!
//! Widgets never draw directly. They mark themselves dirty on the
//! [Canvas], and the host drains the dirty set once per frame.

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexSet;
use log::trace;

use crate::widget::WidgetKey;

/// Collects widgets that need to be redrawn.
///
/// Cloning a canvas yields another handle to the same dirty set.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    dirty: Rc<RefCell<IndexSet<WidgetKey>>>,
}

impl Canvas {
    /// Create an empty canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a widget for redraw. Marking an already dirty widget is a no-op.
    pub fn refresh(&self, key: WidgetKey) {
        if self.dirty.borrow_mut().insert(key) {
            trace!("Widget {} marked dirty", key);
        }
    }

    /// Returns true if the widget is waiting for a redraw.
    pub fn is_dirty(&self, key: WidgetKey) -> bool {
        self.dirty.borrow().contains(&key)
    }

    /// Number of widgets waiting for a redraw.
    pub fn dirty_count(&self) -> usize {
        self.dirty.borrow().len()
    }

    /// Drain the dirty set, in the order widgets were first marked.
    pub fn take_dirty(&self) -> Vec<WidgetKey> {
        let dirty = std::mem::take(&mut *self.dirty.borrow_mut());
        dirty.into_iter().collect()
    }
}
