// SPDX-License-Identifier: MIT OR Apache-2.0

use std::rc::Rc;

use tessera_theme::config::ThemeConfig;
use tessera_theme::error::ThemeResult;
use tessera_theme::theme::{DefaultTheme, Theme};

use crate::app::overlay::Overlays;
use crate::canvas::Canvas;

/// Services shared by every widget of one window.
///
/// Cheap to clone; all clones refer to the same canvas, overlays and theme.
#[derive(Clone)]
pub struct AppContext {
    canvas: Canvas,
    overlays: Overlays,
    theme: Rc<dyn Theme>,
}

impl AppContext {
    /// Create a new context using the given theme.
    pub fn new(theme: impl Theme + 'static) -> Self {
        Self {
            canvas: Canvas::new(),
            overlays: Overlays::new(),
            theme: Rc::new(theme),
        }
    }

    /// Create a new context from a theme configuration.
    pub fn from_config(config: &ThemeConfig) -> ThemeResult<Self> {
        Ok(Self::new(config.resolve_theme()?))
    }

    /// The repaint scheduler.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// The overlay stack of the window.
    pub fn overlays(&self) -> &Overlays {
        &self.overlays
    }

    /// The active theme.
    pub fn theme(&self) -> &dyn Theme {
        self.theme.as_ref()
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(DefaultTheme::new())
    }
}
