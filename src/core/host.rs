//! Capabilities the navigator needs from its host.
//!
//! The engine never touches the browser directly. The web build plugs in
//! [`crate::utils::HttpTransport`], [`crate::utils::BrowserMirror`]
//! and [`crate::components::browser::SignalTarget`]; tests plug in the
//! in-memory doubles from `core::mock`.

use std::future::Future;

use crate::core::error::FetchError;
use crate::models::DisplayItem;

/// One-shot GET exchange with the listing server.
pub trait Transport {
    /// Fetch `path` with `params` as the query string and return the body.
    ///
    /// 200 and 304 are success; any other status is [`FetchError::Http`].
    fn get(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> impl Future<Output = Result<String, FetchError>>;
}

/// External stores that mirror navigation state.
pub trait NavMirror {
    /// Read a tab-scoped session value.
    fn session_get(&self, key: &str) -> Option<String>;

    /// Write a tab-scoped session value.
    fn session_set(&self, key: &str, value: &str);

    /// Current URL fragment, with or without the leading `#`.
    fn fragment(&self) -> String;

    /// Replace the URL fragment without creating a history entry.
    fn replace_fragment(&self, fragment: &str);
}

/// Where listings and shortcuts are drawn.
pub trait RenderTarget {
    /// Remove the current listing.
    fn clear(&self);

    /// Replace the listing with `items` in one step.
    fn replace_content(&self, items: Vec<DisplayItem>);

    /// Replace the listing with a transport failure.
    fn show_failure(&self, error: &FetchError);

    /// Update the directory label shown to the user.
    fn set_path_label(&self, path: &str);

    /// Update the page number shown to the user.
    fn set_page_label(&self, page: u32);

    /// Turn on delete affordances for the rendered items.
    fn enable_delete(&self);

    /// Replace the bookmark shortcut panel, one shortcut per source index.
    fn replace_shortcuts(&self, sources: &[String]);
}
