//! Utility modules for web and URL operations.
//!
//! Provides:
//! - [`HttpTransport`] - Fetch API transport with timeout
//! - [`BrowserMirror`] - sessionStorage and URL-hash navigation mirror
//! - [`url`] - Percent encoding and fragment parameters

pub mod dom;
mod fetch;
pub mod url;

pub use dom::BrowserMirror;
pub use fetch::HttpTransport;
