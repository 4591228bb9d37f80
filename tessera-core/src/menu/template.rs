// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt::{Debug, Formatter};
use std::rc::Rc;

/// Callback run when a menu entry is activated or a menu is dismissed.
pub type MenuAction = Rc<dyn Fn()>;

/// A menu description: a label and an ordered list of entries.
#[derive(Clone, Debug, Default)]
pub struct MenuTemplate {
    /// Label of the menu (shown e.g. in a menu bar).
    pub label: String,
    /// Entries in display order.
    pub items: Vec<MenuTemplateItem>,
}

impl MenuTemplate {
    /// Create an empty menu template.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            items: Vec::new(),
        }
    }

    /// Add an entry.
    pub fn with_item(mut self, item: MenuTemplateItem) -> Self {
        self.items.push(item);
        self
    }

    /// Add multiple entries.
    pub fn with_items(mut self, items: impl IntoIterator<Item = MenuTemplateItem>) -> Self {
        self.items.extend(items);
        self
    }
}

/// One entry of a [MenuTemplate].
#[derive(Clone)]
pub enum MenuTemplateItem {
    /// A visual divider.
    Separator,
    /// A labelled entry, optionally running an action or opening a sub-menu.
    Action {
        /// Display label.
        label: String,
        /// Callback run when the entry is chosen.
        action: Option<MenuAction>,
        /// Nested menu opened by this entry.
        submenu: Option<MenuTemplate>,
    },
}

impl MenuTemplateItem {
    /// Create a labelled entry without action or sub-menu.
    pub fn new(label: impl Into<String>) -> Self {
        Self::Action {
            label: label.into(),
            action: None,
            submenu: None,
        }
    }

    /// Create a separator.
    pub fn separator() -> Self {
        Self::Separator
    }

    /// Set the action callback. Has no effect on separators.
    pub fn with_action(mut self, callback: impl Fn() + 'static) -> Self {
        if let Self::Action { action, .. } = &mut self {
            *action = Some(Rc::new(callback));
        }
        self
    }

    /// Set the sub-menu. Has no effect on separators.
    pub fn with_submenu(mut self, template: MenuTemplate) -> Self {
        if let Self::Action { submenu, .. } = &mut self {
            *submenu = Some(template);
        }
        self
    }

    /// Check if this is a separator
    pub fn is_separator(&self) -> bool {
        matches!(self, Self::Separator)
    }

    /// The label, or [None] for separators.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Separator => None,
            Self::Action { label, .. } => Some(label),
        }
    }

    /// Check if this entry opens a sub-menu
    pub fn has_submenu(&self) -> bool {
        matches!(self, Self::Action { submenu: Some(_), .. })
    }
}

impl Debug for MenuTemplateItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Separator => f.write_str("Separator"),
            Self::Action {
                label,
                action,
                submenu,
            } => f
                .debug_struct("Action")
                .field("label", label)
                .field("action", &action.is_some())
                .field("submenu", submenu)
                .finish(),
        }
    }
}
