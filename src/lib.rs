#![warn(missing_docs)]

//! Cascading menus for Rust UIs.
//!
//! Build a [Menu](widgets::menu::Menu) from a
//! [MenuTemplate](core::menu::MenuTemplate), let it lay itself out, and
//! dismiss the whole open chain of sub-menus with a single call.

pub use nalgebra as math;

pub use tessera_core as core;
pub use tessera_theme as theme;
pub use tessera_widgets as widgets;

/// A "prelude" for users of the tessera toolkit.
///
/// Importing this module brings into scope the most common types
/// needed to build and show a menu.
///
/// ```rust
/// use tessera::prelude::*;
///
/// let context = AppContext::default();
/// let menu = Menu::new(
///     &MenuTemplate::new("File").with_item(MenuTemplateItem::new("Quit")),
///     &context,
/// );
/// menu.resize(Size::zeros());
/// assert_eq!(menu.size(), menu.min_size());
/// ```
pub mod prelude {
    pub use crate::core::app::context::AppContext;
    pub use crate::core::geometry::{Position, Rect, Size};
    pub use crate::core::layout::*;
    pub use crate::core::menu::{MenuAction, MenuTemplate, MenuTemplateItem};
    pub use crate::core::renderer::WidgetRenderer;
    pub use crate::core::widget::{Hoverable, PointEvent, Tappable, Widget};

    // Theme
    pub use crate::theme::config::ThemeConfig;
    pub use crate::theme::theme::{DefaultTheme, ElevationLevel, Theme};

    // Math
    pub use nalgebra::Vector2;

    // Widgets
    pub use crate::widgets::menu::{Menu, MenuElement, WeakMenu};
    pub use crate::widgets::menu_item::MenuItem;
    pub use crate::widgets::popup_menu::PopUpMenu;
    pub use crate::widgets::separator::Separator;
    pub use crate::widgets::shadow::Shadow;
}
