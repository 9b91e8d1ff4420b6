//! UI components built with Leptos.
//!
//! - [`browser`] - Library browse view (toolbar, shortcuts, listing)
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod browser;
pub mod icons;
