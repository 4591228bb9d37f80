// SPDX-License-Identifier: MIT OR Apache-2.0

//! Declarative menu descriptions.
//!
//! A [MenuTemplate] describes what a menu contains; the menu widget in
//! `tessera-widgets` is built from it.

mod template;

pub use template::{MenuAction, MenuTemplate, MenuTemplateItem};
