// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Widget Identifiers
//!
//! A [WidgetId] names a widget *type*, not an instance. It is made of a
//! namespace (the crate name) and the type name, and is used for theme
//! lookups and diagnostics.
//!
//! ```rust
//! use tessera_theme::id::WidgetId;
//!
//! let menu_id = WidgetId::new("tessera-widgets", "Menu");
//! assert_eq!(menu_id.to_string(), "tessera-widgets:Menu");
//! ```

use std::fmt::{Debug, Display, Formatter};

/// An identifier for a widget type in the theming system.
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct WidgetId {
    namespace: String,
    id: String,
}

impl WidgetId {
    /// Create a new widget id by a namespace and custom id.
    /// The namespace should be the crate name and the id should be the widget type name.
    pub fn new(namespace: impl ToString, id: impl ToString) -> Self {
        Self {
            namespace: namespace.to_string(),
            id: id.to_string(),
        }
    }

    /// Returns the namespace of the widget id.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the actual widget id.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Display for WidgetId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.namespace, self.id)
    }
}
