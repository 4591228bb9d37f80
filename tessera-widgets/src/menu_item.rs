// SPDX-License-Identifier: MIT OR Apache-2.0

use std::cell::Cell;

use log::debug;
use tessera_core::app::context::AppContext;
use tessera_core::geometry::{Position, Size};
use tessera_core::menu::{MenuAction, MenuTemplate};
use tessera_core::widget::{Hoverable, PointEvent, Tappable, Widget, WidgetBase};
use tessera_theme::id::WidgetId;
use tessera_theme::theme::ElevationLevel;

use crate::menu::{Menu, WeakMenu};

/// Estimated glyph advance as a fraction of the text size.
const CHAR_WIDTH_FACTOR: f32 = 0.5;

/// A row of a [Menu] that runs an action or opens a sub-menu.
pub struct MenuItem {
    base: WidgetBase,
    label: String,
    action: Option<MenuAction>,
    child: Option<Menu>,
    parent: WeakMenu,
    hovered: Cell<bool>,
}

impl MenuItem {
    pub(crate) fn new(
        label: &str,
        action: Option<MenuAction>,
        submenu: Option<&MenuTemplate>,
        parent: WeakMenu,
        context: &AppContext,
    ) -> Self {
        let child = submenu.map(|template| {
            let child = Menu::build(template, parent.clone(), ElevationLevel::Submenu, context);
            child.base().set_visible(false);
            child
        });

        Self {
            base: WidgetBase::new(context),
            label: label.to_string(),
            action,
            child,
            parent,
            hovered: Cell::new(false),
        }
    }

    /// The display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The sub-menu opened by this item.
    pub fn child(&self) -> Option<&Menu> {
        self.child.as_ref()
    }

    /// Returns true if choosing the item runs a callback.
    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    /// Returns true while the pointer is over the item.
    pub fn is_hovered(&self) -> bool {
        self.hovered.get()
    }

    /// The menu this item belongs to.
    pub fn parent(&self) -> Option<Menu> {
        self.parent.upgrade()
    }

    /// Open the sub-menu next to this item, collapsing any open sibling.
    fn activate_child(&self) {
        let (Some(child), Some(parent)) = (&self.child, self.parent.upgrade()) else {
            return;
        };

        if parent
            .active_child()
            .is_some_and(|active| active.ptr_eq(child))
        {
            return;
        }

        parent.deactivate_child();
        // Sub-menus are drawn by the parent menu, so place them in its coordinates.
        let padding = self.base.context().theme().padding();
        let origin = parent.renderer().container().position() + self.position();
        child.move_to(origin + Position::new(self.size().x, -padding));
        child.show();
        parent.set_active_child(child);
    }
}

impl Widget for MenuItem {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_id(&self) -> WidgetId {
        WidgetId::new("tessera-widgets", "MenuItem")
    }

    fn min_size(&self) -> Size {
        let theme = self.base.context().theme();
        let padding = theme.padding();

        let text_width = self.label.chars().count() as f32 * theme.text_size() * CHAR_WIDTH_FACTOR;
        let mut width = text_width + padding * 4.0;
        if self.child.is_some() {
            width += theme.icon_inline_size();
        }

        Size::new(width, theme.text_size() + padding * 2.0)
    }
}

impl Tappable for MenuItem {
    fn tapped(&self, _event: &PointEvent) {
        if self.child.is_some() {
            self.activate_child();
            return;
        }

        let action = self.action.clone();
        if let Some(parent) = self.parent.upgrade() {
            debug!("Menu item '{}' chosen, closing menus", self.label);
            parent.root().dismiss();
        }
        if let Some(action) = action {
            action();
        }
    }
}

impl Hoverable for MenuItem {
    fn mouse_in(&self, _event: &PointEvent) {
        self.hovered.set(true);
        if self.child.is_some() {
            self.activate_child();
        } else if let Some(parent) = self.parent.upgrade() {
            parent.deactivate_child();
        }
        self.refresh();
    }

    fn mouse_out(&self) {
        self.hovered.set(false);
        self.refresh();
    }
}
