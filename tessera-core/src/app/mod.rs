// SPDX-License-Identifier: MIT OR Apache-2.0

/// Contains the [AppContext](context::AppContext).
pub mod context;

/// Contains the overlay stack.
pub mod overlay;
