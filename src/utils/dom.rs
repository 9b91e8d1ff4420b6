//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error
//! handling, and [`BrowserMirror`], the session-storage and URL-fragment
//! backed [`NavMirror`].

use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, Storage, Window};

use crate::config::{cookie, session};
use crate::core::NavMirror;
use crate::utils::url::encode_component;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get sessionStorage.
#[inline]
pub fn session_storage() -> Option<Storage> {
    window()?.session_storage().ok()?
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current URL hash, including the '#' prefix when present.
pub fn get_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Replace the URL hash without adding to browser history.
///
/// The hash should include the '#' prefix.
pub fn replace_hash(hash: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(hash));
    }
}

// =============================================================================
// Cookies
// =============================================================================

/// Set a cookie whose name is prefixed with the page's port, e.g.
/// `8080.order_by`, so servers on different ports on one host keep
/// separate values.
pub fn set_port_cookie(name: &str, value: &str) {
    let Some(window) = window() else {
        return;
    };
    let port = window
        .location()
        .port()
        .ok()
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| cookie::DEFAULT_PORT.to_string());

    if let Some(document) = window.document()
        && let Ok(html) = document.dyn_into::<HtmlDocument>()
    {
        let line = format!(
            "{}.{}={}; max-age={}",
            port,
            name,
            encode_component(value),
            cookie::MAX_AGE_SECS
        );
        let _ = html.set_cookie(&line);
    }
}

// =============================================================================
// Navigation Mirror
// =============================================================================

/// Navigation mirror backed by `window.sessionStorage` and the URL hash.
///
/// Writing the sort order also refreshes the port-prefixed `order_by`
/// cookie, which is how the listing server learns the ordering.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserMirror;

impl NavMirror for BrowserMirror {
    fn session_get(&self, key: &str) -> Option<String> {
        session_storage()?.get_item(key).ok()?
    }

    fn session_set(&self, key: &str, value: &str) {
        if let Some(storage) = session_storage() {
            let _ = storage.set_item(key, value);
        }
        if key == session::ORDER_BY {
            set_port_cookie(cookie::ORDER_BY, value);
        }
    }

    fn fragment(&self) -> String {
        get_hash()
    }

    fn replace_fragment(&self, fragment: &str) {
        replace_hash(fragment);
    }
}
