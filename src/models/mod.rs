//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`NavState`], [`SortOrder`], [`ListingRequest`], [`LoadState`] - Navigation parameters
//! - [`ListingPayload`], [`Entry`], [`RawEntry`] - Server listing shape
//! - [`DisplayItem`], [`ItemKind`], [`ReadState`] - Render-ready rows

mod listing;
mod nav;

pub use listing::{
    DirectoryInfo, DisplayItem, Entry, ItemKind, ListingPayload, RawEntry, ReadState,
};
pub use nav::{ListingRequest, LoadState, NavState, SortOrder, UnknownSortOrder};
