//! Bookmark source roots.
//!
//! The server exposes the directory roots a user may browse. The list is
//! fetched once, kept for the session, and drawn as a shortcut panel. It
//! also bounds how far "go up" may climb.

use std::cell::RefCell;

use leptos::logging::warn;

use crate::config::api;
use crate::core::error::FetchError;
use crate::core::host::{RenderTarget, Transport};

#[derive(Debug, Default)]
pub struct SourceList {
    paths: RefCell<Option<Vec<String>>>,
}

impl SourceList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached roots, or `None` before the first successful load.
    pub fn cached(&self) -> Option<Vec<String>> {
        self.paths.borrow().clone()
    }

    pub fn get(&self, index: usize) -> Option<String> {
        self.paths.borrow().as_ref()?.get(index).cloned()
    }

    pub fn replace(&self, paths: Vec<String>) {
        *self.paths.borrow_mut() = Some(paths);
    }

    /// First root that occurs anywhere inside `path`.
    ///
    /// This is a plain substring test, not a prefix or segment-boundary
    /// check, and the first configured root that matches wins.
    pub fn root_containing(&self, path: &str) -> Option<String> {
        self.paths
            .borrow()
            .as_ref()?
            .iter()
            .find(|root| path.contains(root.as_str()))
            .cloned()
    }

    /// Draw the shortcut panel, fetching the roots first when needed.
    ///
    /// With a populated cache and `force_refresh == false` no request is
    /// made. On failure the previous list and panel are kept.
    pub async fn load<T, R>(
        &self,
        transport: &T,
        target: &R,
        force_refresh: bool,
    ) -> Result<Vec<String>, FetchError>
    where
        T: Transport,
        R: RenderTarget,
    {
        if !force_refresh && let Some(paths) = self.cached() {
            target.replace_shortcuts(&paths);
            return Ok(paths);
        }

        let body = transport.get(api::LIST_SOURCES, &[]).await?;
        let paths: Vec<String> = serde_json::from_str(&body).map_err(|e| {
            warn!("source list is not a JSON string array: {e}");
            FetchError::Decode(e.to_string())
        })?;

        self.replace(paths.clone());
        target.replace_shortcuts(&paths);
        Ok(paths)
    }
}
