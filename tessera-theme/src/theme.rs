// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Theme System
//!
//! The [Theme] trait exposes the scalar metrics widgets use for sizing and
//! decoration. [DefaultTheme] implements it on top of a plain
//! [ThemeMetrics] value, which is what the configuration layer produces.
//!
//! ```rust
//! use tessera_theme::theme::{DefaultTheme, ElevationLevel, Theme};
//!
//! let theme = DefaultTheme::new();
//! assert_eq!(theme.padding(), 4.0);
//! assert_eq!(theme.elevation(ElevationLevel::Menu), 4.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ThemeError, ThemeResult};

/// Base trait for all themes.
pub trait Theme {
    /// Name of the theme, used in diagnostics.
    fn name(&self) -> &str;

    /// The standard padding unit between and around widgets.
    fn padding(&self) -> f32;

    /// Font size for regular text.
    fn text_size(&self) -> f32;

    /// Size of icons drawn inline with text (e.g. sub-menu arrows).
    fn icon_inline_size(&self) -> f32;

    /// Thickness of separator lines.
    fn separator_thickness(&self) -> f32;

    /// How far a shadow spreads around an element at the given level.
    fn elevation(&self, level: ElevationLevel) -> f32;
}

/// Stacking levels used for shadow decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ElevationLevel {
    /// Flat content.
    Base,
    /// Cards and panels.
    Card,
    /// Buttons.
    Button,
    /// Menus.
    Menu,
    /// Pop-ups.
    PopUp,
    /// Sub-menus opened from another menu.
    Submenu,
    /// Modal dialogs.
    Dialog,
}

impl ElevationLevel {
    /// The nominal depth of this level in device independent pixels.
    pub fn depth(self) -> u8 {
        match self {
            Self::Base => 0,
            Self::Card => 1,
            Self::Button => 2,
            Self::Menu => 4,
            Self::PopUp => 8,
            Self::Submenu => 16,
            Self::Dialog => 24,
        }
    }
}

/// Raw metric values of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeMetrics {
    /// See [Theme::padding].
    pub padding: f32,
    /// See [Theme::text_size].
    pub text_size: f32,
    /// See [Theme::icon_inline_size].
    pub icon_inline_size: f32,
    /// See [Theme::separator_thickness].
    pub separator_thickness: f32,
    /// Multiplier applied to [ElevationLevel::depth].
    pub shadow_scale: f32,
}

impl Default for ThemeMetrics {
    fn default() -> Self {
        Self {
            padding: 4.0,
            text_size: 14.0,
            icon_inline_size: 20.0,
            separator_thickness: 1.0,
            shadow_scale: 1.0,
        }
    }
}

impl ThemeMetrics {
    /// Check that every metric is a finite, non-negative number.
    pub fn validate(&self) -> ThemeResult<()> {
        let metrics = [
            ("padding", self.padding),
            ("text_size", self.text_size),
            ("icon_inline_size", self.icon_inline_size),
            ("separator_thickness", self.separator_thickness),
            ("shadow_scale", self.shadow_scale),
        ];

        for (metric, value) in metrics {
            if !value.is_finite() || value < 0.0 {
                return Err(ThemeError::invalid_metric(metric, value));
            }
        }

        Ok(())
    }
}

/// The built-in theme, driven entirely by [ThemeMetrics].
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultTheme {
    name: String,
    metrics: ThemeMetrics,
}

impl DefaultTheme {
    /// Create the default theme with default metrics.
    pub fn new() -> Self {
        Self::with_metrics("default", ThemeMetrics::default())
    }

    /// Create a named theme with custom metrics.
    pub fn with_metrics(name: impl Into<String>, metrics: ThemeMetrics) -> Self {
        Self {
            name: name.into(),
            metrics,
        }
    }

    /// The metrics backing this theme.
    pub fn metrics(&self) -> &ThemeMetrics {
        &self.metrics
    }
}

impl Default for DefaultTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for DefaultTheme {
    fn name(&self) -> &str {
        &self.name
    }

    fn padding(&self) -> f32 {
        self.metrics.padding
    }

    fn text_size(&self) -> f32 {
        self.metrics.text_size
    }

    fn icon_inline_size(&self) -> f32 {
        self.metrics.icon_inline_size
    }

    fn separator_thickness(&self) -> f32 {
        self.metrics.separator_thickness
    }

    fn elevation(&self, level: ElevationLevel) -> f32 {
        f32::from(level.depth()) * self.metrics.shadow_scale
    }
}
