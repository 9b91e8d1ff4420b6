//! Core navigation engine.
//!
//! This module provides:
//! - [`ListingController`] navigation orchestration over the host capabilities
//! - [`transform`] and [`parse_listing`] for turning listing bodies into rows
//! - [`SourceList`] bookmark roots and [`ListingCache`] last-fetched listing
//! - [`nav`] persistence of navigation state in the URL and session mirrors

pub mod cache;
mod controller;
pub mod error;
pub mod host;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod nav;
mod sources;
mod transform;

pub use cache::{CachedListing, ListingCache};
pub use controller::{FetchPolicy, ListingController, NavOutcome, Refusal, parent_path};
pub use error::{FetchError, ListingError};
pub use host::{NavMirror, RenderTarget, Transport};
pub use sources::SourceList;
pub use transform::{listing_from_value, parse_listing, read_state_bucket, reader_href, transform};
