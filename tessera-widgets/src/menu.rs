// SPDX-License-Identifier: MIT OR Apache-2.0

//! The menu widget.
//!
//! A [Menu] is a vertical list of [MenuItem]s and [Separator]s built from a
//! [MenuTemplate]. Items with a sub-menu own a nested [Menu]; at most one of
//! them is the *active child* of a menu at any time.
//!
//! Dismissing a menu tears down the whole open chain below it:
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use tessera_core::app::context::AppContext;
//! use tessera_core::menu::{MenuTemplate, MenuTemplateItem};
//! use tessera_widgets::menu::Menu;
//!
//! let context = AppContext::default();
//! let template = MenuTemplate::new("File").with_items([
//!     MenuTemplateItem::new("Open"),
//!     MenuTemplateItem::separator(),
//!     MenuTemplateItem::new("Quit"),
//! ]);
//!
//! let menu = Menu::new(&template, &context);
//! let closed = Rc::new(RefCell::new(false));
//! let flag = closed.clone();
//! menu.set_dismiss_action(move || *flag.borrow_mut() = true);
//!
//! menu.dismiss();
//! assert!(*closed.borrow());
//! ```

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::{debug, trace, warn};
use tessera_core::app::context::AppContext;
use tessera_core::geometry::Size;
use tessera_core::menu::{MenuAction, MenuTemplate, MenuTemplateItem};
use tessera_core::renderer::WidgetRenderer;
use tessera_core::widget::{PointEvent, Tappable, Widget, WidgetBase, WidgetKey};
use tessera_theme::id::WidgetId;
use tessera_theme::theme::ElevationLevel;

use crate::menu_item::MenuItem;
use crate::separator::Separator;

mod renderer;

pub use renderer::MenuRenderer;

/// One visual row of a menu.
#[derive(Clone)]
pub enum MenuElement {
    /// A clickable entry.
    Item(Rc<MenuItem>),
    /// A divider.
    Separator(Rc<Separator>),
}

impl MenuElement {
    /// The row as a generic widget.
    pub fn as_widget(&self) -> Rc<dyn Widget> {
        match self {
            Self::Item(item) => item.clone() as Rc<dyn Widget>,
            Self::Separator(separator) => separator.clone() as Rc<dyn Widget>,
        }
    }

    /// The row as a menu item, or [None] for separators.
    pub fn as_item(&self) -> Option<&Rc<MenuItem>> {
        match self {
            Self::Item(item) => Some(item),
            Self::Separator(_) => None,
        }
    }

    /// Check if this is a separator
    pub fn is_separator(&self) -> bool {
        matches!(self, Self::Separator(_))
    }
}

struct MenuState {
    base: WidgetBase,
    elements: Vec<MenuElement>,
    active_child: RefCell<Option<WeakMenu>>,
    dismiss_action: RefCell<Option<MenuAction>>,
    custom_sized: Cell<bool>,
    parent: WeakMenu,
    renderer: MenuRenderer,
}

/// A menu: a handle to shared menu state.
///
/// Cloning the handle does not copy the menu.
#[derive(Clone)]
pub struct Menu {
    state: Rc<MenuState>,
}

/// A non-owning reference to a [Menu].
#[derive(Clone, Default)]
pub struct WeakMenu {
    state: Weak<MenuState>,
}

impl WeakMenu {
    /// A reference that never upgrades.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the menu back if it is still alive.
    pub fn upgrade(&self) -> Option<Menu> {
        self.state.upgrade().map(|state| Menu { state })
    }
}

impl Menu {
    /// Build a menu, and all of its sub-menus, from a template.
    pub fn new(template: &MenuTemplate, context: &AppContext) -> Self {
        Self::build(template, WeakMenu::new(), ElevationLevel::Menu, context)
    }

    pub(crate) fn build(
        template: &MenuTemplate,
        parent: WeakMenu,
        level: ElevationLevel,
        context: &AppContext,
    ) -> Self {
        let state = Rc::new_cyclic(|this: &Weak<MenuState>| {
            let this = WeakMenu {
                state: this.clone(),
            };

            let elements: Vec<MenuElement> = template
                .items
                .iter()
                .map(|entry| match entry {
                    MenuTemplateItem::Separator => {
                        MenuElement::Separator(Rc::new(Separator::new(context)))
                    },
                    MenuTemplateItem::Action {
                        label,
                        action,
                        submenu,
                    } => MenuElement::Item(Rc::new(MenuItem::new(
                        label,
                        action.clone(),
                        submenu.as_ref(),
                        this.clone(),
                        context,
                    ))),
                })
                .collect();

            let renderer = MenuRenderer::new(this, &elements, level, context);

            MenuState {
                base: WidgetBase::new(context),
                elements,
                active_child: RefCell::new(None),
                dismiss_action: RefCell::new(None),
                custom_sized: Cell::new(false),
                parent,
                renderer,
            }
        });

        debug!(
            "Built menu {} '{}' with {} entries",
            state.base.key(),
            template.label,
            state.elements.len()
        );

        Self { state }
    }

    /// The rows of the menu, in display order.
    pub fn items(&self) -> &[MenuElement] {
        &self.state.elements
    }

    /// The currently expanded sub-menu.
    pub fn active_child(&self) -> Option<Menu> {
        self.state
            .active_child
            .borrow()
            .as_ref()
            .and_then(WeakMenu::upgrade)
    }

    /// Hide the expanded sub-menu, if any, and forget it.
    ///
    /// Only the direct child is affected; its own open sub-menus and its
    /// dismiss action are left alone.
    pub fn deactivate_child(&self) {
        let child = self.state.active_child.take().and_then(|weak| weak.upgrade());
        if let Some(child) = child {
            debug!("Menu {} deactivating child {}", self.key(), child.key());
            child.hide();
        }
    }

    /// Close this menu's open chain and run the dismiss action.
    ///
    /// The active child is hidden and unlinked before its own `dismiss`
    /// runs, so every level's action fires exactly once, innermost first.
    pub fn dismiss(&self) {
        let child = self.state.active_child.take().and_then(|weak| weak.upgrade());
        if let Some(child) = child {
            debug!("Menu {} dismissing child {}", self.key(), child.key());
            child.hide();
            child.dismiss();
        }

        let action = self.state.dismiss_action.borrow().clone();
        if let Some(action) = action {
            action();
        }
    }

    /// Set the callback run when the menu is dismissed.
    pub fn set_dismiss_action(&self, action: impl Fn() + 'static) {
        self.state.dismiss_action.replace(Some(Rc::new(action)));
    }

    /// Remove the dismiss callback.
    pub fn clear_dismiss_action(&self) {
        self.state.dismiss_action.take();
    }

    /// Whether an externally imposed size is honoured (as a floor).
    pub fn is_custom_sized(&self) -> bool {
        self.state.custom_sized.get()
    }

    /// Accept externally imposed sizes instead of always collapsing to the minimum.
    pub fn set_custom_sized(&self, custom_sized: bool) {
        self.state.custom_sized.set(custom_sized);
    }

    /// The renderer of this menu.
    pub fn renderer(&self) -> &MenuRenderer {
        &self.state.renderer
    }

    /// The menu containing the item that opens this one.
    pub fn parent(&self) -> Option<Menu> {
        self.state.parent.upgrade()
    }

    /// The outermost menu of the hierarchy.
    pub fn root(&self) -> Menu {
        let mut menu = self.clone();
        while let Some(parent) = menu.parent() {
            menu = parent;
        }
        menu
    }

    /// A non-owning reference to this menu.
    pub fn downgrade(&self) -> WeakMenu {
        WeakMenu {
            state: Rc::downgrade(&self.state),
        }
    }

    /// Returns true if both handles refer to the same menu.
    pub fn ptr_eq(&self, other: &Menu) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    /// Record `child` as the expanded sub-menu.
    ///
    /// Menus that are not opened by one of this menu's items are rejected.
    pub(crate) fn set_active_child(&self, child: &Menu) {
        if !self.owns_submenu(child) {
            warn!(
                "Menu {} refused to activate foreign menu {}",
                self.key(),
                child.key()
            );
            return;
        }

        debug!("Menu {} activating child {}", self.key(), child.key());
        self.state.active_child.replace(Some(child.downgrade()));
    }

    fn owns_submenu(&self, menu: &Menu) -> bool {
        self.state
            .elements
            .iter()
            .filter_map(MenuElement::as_item)
            .filter_map(|item| item.child())
            .any(|child| child.ptr_eq(menu))
    }

    fn key(&self) -> WidgetKey {
        self.state.base.key()
    }
}

impl Widget for Menu {
    fn base(&self) -> &WidgetBase {
        &self.state.base
    }

    fn widget_id(&self) -> WidgetId {
        WidgetId::new("tessera-widgets", "Menu")
    }

    fn min_size(&self) -> Size {
        self.state.renderer.min_size()
    }

    /// Menus settle on their natural size unless custom sized; the renderer decides.
    fn resize(&self, size: Size) {
        self.state.base.set_size(size);
        self.state.renderer.layout(size);
    }

    fn show(&self) {
        if self.state.base.set_visible(true) {
            self.state.renderer.layout(self.size());
            self.refresh();
        }
    }

    fn refresh(&self) {
        self.state.renderer.refresh();
    }
}

impl Tappable for Menu {
    fn tapped(&self, _event: &PointEvent) {
        // Hit a separator or padding -> do nothing.
        trace!("Menu {} absorbed a tap", self.key());
    }
}
