//! Paged library browser.
//!
//! The [`core`] module holds the navigation controller and the listing
//! transform; it talks to the page only through the capability traits in
//! [`core::host`], so it runs and tests natively. [`app`] and
//! [`components`] wire it to Leptos and the browser.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;
