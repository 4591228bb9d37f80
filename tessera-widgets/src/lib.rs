// SPDX-License-Identifier: MIT OR Apache-2.0
#![warn(missing_docs)]

//! Widgets for tessera => See `tessera` crate.
//!
//! Contains the menu widget family and its decorations.

/// Contains the [Menu](menu::Menu) widget and its renderer.
pub mod menu;

/// Contains the [MenuItem](menu_item::MenuItem) widget.
pub mod menu_item;

/// Contains the [PopUpMenu](popup_menu::PopUpMenu) host for menus.
pub mod popup_menu;

/// Contains the [Separator](separator::Separator) widget.
pub mod separator;

/// Contains shadow decoration.
pub mod shadow;
