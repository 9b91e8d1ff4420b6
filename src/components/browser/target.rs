//! Signal-backed render target.
//!
//! The controller writes into these signals; the browse components read
//! them. Every write replaces a whole value, so a listing swap is a single
//! reactive update.

use leptos::prelude::*;

use crate::core::{FetchError, RenderTarget};
use crate::models::DisplayItem;

/// What the listing area currently shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ListingView {
    /// Cleared, e.g. while a fetch is in flight
    #[default]
    Empty,
    /// Rendered rows
    Items(Vec<DisplayItem>),
    /// Raw failure text from the server
    Failure(String),
}

#[derive(Clone, Copy)]
pub struct SignalTarget {
    pub listing: RwSignal<ListingView>,
    pub path_label: RwSignal<String>,
    pub page_label: RwSignal<u32>,
    pub shortcuts: RwSignal<Vec<String>>,
    pub delete_enabled: RwSignal<bool>,
}

impl SignalTarget {
    pub fn new() -> Self {
        Self {
            listing: RwSignal::new(ListingView::Empty),
            path_label: RwSignal::new(String::new()),
            page_label: RwSignal::new(1),
            shortcuts: RwSignal::new(Vec::new()),
            delete_enabled: RwSignal::new(false),
        }
    }
}

impl Default for SignalTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderTarget for SignalTarget {
    fn clear(&self) {
        self.listing.set(ListingView::Empty);
        self.delete_enabled.set(false);
    }

    fn replace_content(&self, items: Vec<DisplayItem>) {
        self.listing.set(ListingView::Items(items));
    }

    fn show_failure(&self, error: &FetchError) {
        self.listing.set(ListingView::Failure(error.failure_text()));
    }

    fn set_path_label(&self, path: &str) {
        self.path_label.set(path.to_string());
    }

    fn set_page_label(&self, page: u32) {
        self.page_label.set(page);
    }

    fn enable_delete(&self) {
        self.delete_enabled.set(true);
    }

    fn replace_shortcuts(&self, sources: &[String]) {
        self.shortcuts.set(sources.to_vec());
    }
}
