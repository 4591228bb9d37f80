// SPDX-License-Identifier: MIT OR Apache-2.0
#![warn(missing_docs)]

//! # tessera Theming
//!
//! Theme metrics for the tessera GUI toolkit. Widgets never hard-code
//! spacing: they ask the active [Theme](theme::Theme) for padding, text
//! size, separator thickness and shadow elevation.
//!
//! ## Overview
//!
//! - **[Theme](theme::Theme)**: the trait every theme implements
//! - **[DefaultTheme](theme::DefaultTheme)**: metrics-backed implementation
//! - **[ThemeConfig](config::ThemeConfig)**: TOML / environment configuration
//! - **[WidgetId](id::WidgetId)**: identifies widget types
//!
//! ## Quick Start
//!
//! ```rust
//! use tessera_theme::config::ThemeConfig;
//! use tessera_theme::theme::Theme;
//!
//! let config = ThemeConfig::from_toml_str("[theme.metrics]\npadding = 2.0\n").unwrap();
//! let theme = config.resolve_theme().unwrap();
//! assert_eq!(theme.padding(), 2.0);
//! ```
//!
//! ### Environment Variables
//!
//! ```bash
//! export TESSERA_THEME_CONFIG=./theme.toml
//! ```

/// Contains the [ThemeConfig](config::ThemeConfig) struct.
pub mod config;

/// Theme error types.
pub mod error;

/// Contains the [WidgetId](id::WidgetId) type.
pub mod id;

/// Contains the [Theme](theme::Theme) trait and built-in theme.
pub mod theme;
