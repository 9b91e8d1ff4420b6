//! Library browse UI components.
//!
//! Components:
//! - [`Browser`] - Main browse view
//! - [`Toolbar`] - Paging, search and sort controls
//! - [`DirList`] - Listing rows
//! - [`SourcePanel`] - Bookmark shortcuts
//!
//! [`SignalTarget`] is the render target the controller writes into.

#[allow(clippy::module_inception)]
mod browser;
mod dir_list;
mod source_panel;
mod target;
mod toolbar;

pub use browser::Browser;
pub use dir_list::DirList;
pub use source_panel::SourcePanel;
pub use target::{ListingView, SignalTarget};
pub use toolbar::Toolbar;
