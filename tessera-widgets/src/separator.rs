// SPDX-License-Identifier: MIT OR Apache-2.0

use log::trace;
use tessera_core::app::context::AppContext;
use tessera_core::geometry::Size;
use tessera_core::widget::{PointEvent, Tappable, Widget, WidgetBase};
use tessera_theme::id::WidgetId;

/// A horizontal divider between menu items.
pub struct Separator {
    base: WidgetBase,
}

impl Separator {
    /// Create a separator.
    pub fn new(context: &AppContext) -> Self {
        Self {
            base: WidgetBase::new(context),
        }
    }
}

impl Widget for Separator {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_id(&self) -> WidgetId {
        WidgetId::new("tessera-widgets", "Separator")
    }

    fn min_size(&self) -> Size {
        let theme = self.base.context().theme();
        Size::new(theme.padding(), theme.separator_thickness())
    }
}

impl Tappable for Separator {
    fn tapped(&self, _event: &PointEvent) {
        trace!("Separator {} absorbed a tap", self.base.key());
    }
}
