// SPDX-License-Identifier: MIT OR Apache-2.0

//! Elevation shadows.
//!
//! A [Shadow] occupies the rectangle of the element it decorates; the
//! drawing backend paints a gradient from that rectangle out to
//! [Shadow::outer_bounds].

use std::rc::Rc;

use tessera_core::app::context::AppContext;
use tessera_core::geometry::{Position, Rect, Size};
use tessera_core::widget::{Widget, WidgetBase};
use tessera_theme::id::WidgetId;
use tessera_theme::theme::ElevationLevel;

/// A shadow cast by an element at some elevation.
pub struct Shadow {
    base: WidgetBase,
    level: ElevationLevel,
}

impl Shadow {
    /// Create a shadow for the given level.
    pub fn new(context: &AppContext, level: ElevationLevel) -> Self {
        Self {
            base: WidgetBase::new(context),
            level,
        }
    }

    /// The elevation level.
    pub fn level(&self) -> ElevationLevel {
        self.level
    }

    /// How far the shadow reaches beyond the decorated rectangle.
    pub fn spread(&self) -> f32 {
        self.base.context().theme().elevation(self.level)
    }

    /// The decorated rectangle grown by the spread.
    pub fn outer_bounds(&self) -> Rect {
        Rect::new(self.position(), self.size()).inflate(self.spread())
    }
}

impl Widget for Shadow {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_id(&self) -> WidgetId {
        WidgetId::new("tessera-widgets", "Shadow")
    }

    fn min_size(&self) -> Size {
        Size::zeros()
    }
}

/// Renderer building block: content objects with a shadow behind them.
pub struct ShadowingRenderer {
    shadow: Rc<Shadow>,
    objects: Vec<Rc<dyn Widget>>,
}

impl ShadowingRenderer {
    /// Wrap `objects` with a shadow at `level`.
    pub fn new(context: &AppContext, objects: Vec<Rc<dyn Widget>>, level: ElevationLevel) -> Self {
        Self {
            shadow: Rc::new(Shadow::new(context, level)),
            objects,
        }
    }

    /// Place the shadow under the content rectangle.
    pub fn layout_shadow(&self, size: Size, position: Position) {
        self.shadow.resize(size);
        self.shadow.move_to(position);
    }

    /// The shadow.
    pub fn shadow(&self) -> &Shadow {
        &self.shadow
    }

    /// The shadow followed by the content objects.
    pub fn objects(&self) -> Vec<Rc<dyn Widget>> {
        let mut objects: Vec<Rc<dyn Widget>> = Vec::with_capacity(self.objects.len() + 1);
        objects.push(self.shadow.clone());
        objects.extend(self.objects.iter().cloned());
        objects
    }
}
