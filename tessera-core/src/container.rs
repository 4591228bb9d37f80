// SPDX-License-Identifier: MIT OR Apache-2.0

use std::rc::Rc;

use tessera_theme::id::WidgetId;

use crate::app::context::AppContext;
use crate::geometry::Size;
use crate::layout::Layout;
use crate::widget::{Widget, WidgetBase};

/// A widget that arranges a fixed list of objects with a [Layout].
pub struct Container {
    base: WidgetBase,
    layout: Box<dyn Layout>,
    objects: Vec<Rc<dyn Widget>>,
}

impl Container {
    /// Create a container.
    pub fn new(
        context: &AppContext,
        layout: impl Layout + 'static,
        objects: Vec<Rc<dyn Widget>>,
    ) -> Self {
        Self {
            base: WidgetBase::new(context),
            layout: Box::new(layout),
            objects,
        }
    }

    /// The contained objects, in layout order.
    pub fn objects(&self) -> &[Rc<dyn Widget>] {
        &self.objects
    }
}

impl Widget for Container {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_id(&self) -> WidgetId {
        WidgetId::new("tessera-core", "Container")
    }

    fn min_size(&self) -> Size {
        self.layout.min_size(&self.objects)
    }

    fn resize(&self, size: Size) {
        self.base.set_size(size);
        self.layout.layout(&self.objects, size);
    }
}
