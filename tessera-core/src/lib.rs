// SPDX-License-Identifier: MIT OR Apache-2.0
#![warn(missing_docs)]

//! Core library for tessera => See `tessera` crate.
//!
//! Contains the widget traits, the repaint scheduler, overlays, layouts
//! and the declarative menu description.

/// Contains app-level services shared by widgets.
pub mod app;

/// Contains the repaint scheduler.
pub mod canvas;

/// Contains the [Container](container::Container) widget.
pub mod container;

/// Contains geometry types.
pub mod geometry;

/// Contains layout algorithms.
pub mod layout;

/// Contains the declarative menu description.
pub mod menu;

/// Contains the [WidgetRenderer](renderer::WidgetRenderer) trait.
pub mod renderer;

/// Contains the core widget functionalities
pub mod widget;
