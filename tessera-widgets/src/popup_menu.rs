// SPDX-License-Identifier: MIT OR Apache-2.0

//! Menus shown above the window content.
//!
//! A [PopUpMenu] puts a [Menu] on the window's overlay stack and takes it
//! off again when the menu is dismissed.

use std::cell::Cell;
use std::rc::Rc;

use log::debug;
use tessera_core::app::context::AppContext;
use tessera_core::app::overlay::OverlayId;
use tessera_core::geometry::{Position, Size};
use tessera_core::menu::MenuTemplate;
use tessera_core::widget::Widget;

use crate::menu::Menu;

/// A context menu / dropdown hosted in an overlay.
pub struct PopUpMenu {
    menu: Menu,
    overlay: Rc<Cell<Option<OverlayId>>>,
    context: AppContext,
}

impl PopUpMenu {
    /// Create a hidden pop-up menu.
    pub fn new(template: &MenuTemplate, context: &AppContext) -> Self {
        let menu = Menu::new(template, context);
        menu.base().set_visible(false);

        let overlay = Rc::new(Cell::new(None));
        let slot = overlay.clone();
        let overlays = context.overlays().clone();
        let weak = menu.downgrade();
        menu.set_dismiss_action(move || {
            if let Some(id) = slot.take() {
                overlays.remove(id);
            }
            if let Some(menu) = weak.upgrade() {
                menu.hide();
            }
        });

        Self {
            menu,
            overlay,
            context: context.clone(),
        }
    }

    /// The hosted menu.
    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// The overlay currently holding the menu.
    pub fn overlay(&self) -> Option<OverlayId> {
        self.overlay.get()
    }

    /// Returns true while the menu is on the overlay stack.
    pub fn is_shown(&self) -> bool {
        self.overlay.get().is_some()
    }

    /// Show the menu with its top left corner at `position`.
    pub fn show_at(&self, position: Position) {
        if let Some(id) = self.overlay.take() {
            self.context.overlays().remove(id);
        }

        self.menu.move_to(position);
        let id = self
            .context
            .overlays()
            .add(Rc::new(self.menu.clone()) as Rc<dyn Widget>);
        self.overlay.set(Some(id));
        debug!("Pop-up menu shown at {:?} in overlay {:?}", position, id);
        self.menu.show();
    }

    /// Close the menu and every open sub-menu.
    pub fn dismiss(&self) {
        self.menu.dismiss();
    }

    /// Give the menu an explicit size; it still never shrinks below its minimum.
    pub fn resize(&self, size: Size) {
        self.menu.set_custom_sized(true);
        self.menu.resize(size);
    }
}

impl Drop for PopUpMenu {
    fn drop(&mut self) {
        if let Some(id) = self.overlay.take() {
            debug!("Pop-up menu dropped, removing overlay {:?}", id);
            self.context.overlays().remove(id);
        }
    }
}
