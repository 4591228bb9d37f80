// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Theme Configuration
//!
//! Themes are configured from TOML, either inline, from a file, or from the
//! file named by the `TESSERA_THEME_CONFIG` environment variable.
//!
//! ```toml
//! [theme]
//! name = "compact"
//!
//! [theme.metrics]
//! padding = 2.0
//! text_size = 12.0
//! ```
//!
//! Every key is optional; missing metrics take their default value.

use std::env;
use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{ThemeError, ThemeResult};
use crate::theme::{DefaultTheme, ThemeMetrics};

/// Environment variable holding the path of a theme configuration file.
pub const THEME_CONFIG_ENV: &str = "TESSERA_THEME_CONFIG";

/// A theme configuration that can be loaded from various sources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// The `[theme]` table.
    #[serde(default)]
    pub theme: ThemeSection,
}

/// Contents of the `[theme]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSection {
    /// Display name of the theme.
    pub name: String,
    /// Metric overrides.
    pub metrics: ThemeMetrics,
}

impl Default for ThemeSection {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            metrics: ThemeMetrics::default(),
        }
    }
}

impl ThemeConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the theme name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.theme.name = name.into();
        self
    }

    /// Set the theme metrics.
    pub fn with_metrics(mut self, metrics: ThemeMetrics) -> Self {
        self.theme.metrics = metrics;
        self
    }

    /// Parse a configuration from a TOML string.
    pub fn from_toml_str(source: &str) -> ThemeResult<Self> {
        toml::from_str(source).map_err(|err| ThemeError::parse_error(None, err.to_string()))
    }

    /// Load a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ThemeResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ThemeError::file_not_found(path));
        }

        let source = fs::read_to_string(path)?;
        let config = toml::from_str(&source)
            .map_err(|err| ThemeError::parse_error(Some(path.to_path_buf()), err.to_string()))?;

        debug!("Loaded theme config from {:?}", path);
        Ok(config)
    }

    /// Load the configuration named by `TESSERA_THEME_CONFIG`, falling back to the default.
    ///
    /// A broken configuration file is reported and ignored.
    pub fn from_env_or_default() -> Self {
        let Ok(path) = env::var(THEME_CONFIG_ENV) else {
            return Self::default();
        };

        match Self::from_file(&path) {
            Ok(config) => config,
            Err(err) => {
                warn!("Ignoring theme config from {}: {}", THEME_CONFIG_ENV, err);
                Self::default()
            },
        }
    }

    /// Validate the metrics and build the theme.
    pub fn resolve_theme(&self) -> ThemeResult<DefaultTheme> {
        self.theme.metrics.validate()?;
        Ok(DefaultTheme::with_metrics(
            self.theme.name.clone(),
            self.theme.metrics,
        ))
    }
}
