//! Listing controller.
//!
//! Owns the navigation state and listing cache, decides between re-rendering
//! from cache and fetching, keeps the URL and session mirrors in step, and
//! hands transformed rows to the render target.
//!
//! # Concurrency
//!
//! All operations take `&self` and run on a single-threaded executor, so two
//! navigations may be in flight at once. Each network navigation is stamped
//! with a generation number; when a response arrives after a newer navigation
//! was issued it is dropped ([`NavOutcome::Stale`]) and neither the cache nor
//! the view is touched. Mirrors are published when a navigation is issued,
//! not when it completes, and are not rolled back on failure.

use std::cell::{Cell, RefCell};

use leptos::logging::{error, warn};

use crate::config::api;
use crate::core::cache::{CachedListing, ListingCache};
use crate::core::error::FetchError;
use crate::core::host::{NavMirror, RenderTarget, Transport};
use crate::core::nav;
use crate::core::sources::SourceList;
use crate::core::transform::{parse_listing, transform};
use crate::models::{ListingRequest, LoadState, NavState, SortOrder};

/// Whether a navigation may reuse the cached listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FetchPolicy {
    /// Publish mirrors and fetch from the server.
    #[default]
    Network,
    /// Re-render the cached listing; no request, no mirror writes.
    FromCache,
}

/// Why an operation did nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Refusal {
    /// No directory has been listed yet.
    NoDirectory,
    /// Already on page 1.
    FirstPage,
    /// The last listing had no entries to page past.
    NothingMore,
    /// The parent directory is not under any source root.
    OutsideSources,
    /// No source at this index.
    NoSuchSource(usize),
    /// Not one of `name`, `size`, `date`.
    InvalidSortOrder,
    /// Nothing cached to re-render.
    EmptyCache,
}

/// Result of a navigation operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    /// A listing was rendered.
    Rendered,
    /// The fetch failed and the failure is shown.
    Failed,
    /// The body was not a listing; the view was left as it was.
    Malformed,
    /// A newer navigation superseded this one.
    Stale,
    /// Nothing happened.
    Refused(Refusal),
}

impl NavOutcome {
    pub fn is_refused(self) -> bool {
        matches!(self, Self::Refused(_))
    }
}

pub struct ListingController<T, M, R> {
    transport: T,
    mirror: M,
    target: R,
    nav: RefCell<NavState>,
    cache: RefCell<ListingCache>,
    sources: SourceList,
    generation: Cell<u64>,
    load_state: Cell<LoadState>,
    delete_mode: Cell<bool>,
}

impl<T, M, R> ListingController<T, M, R>
where
    T: Transport,
    M: NavMirror,
    R: RenderTarget,
{
    /// Create an idle controller.
    pub fn new(transport: T, mirror: M, target: R) -> Self {
        let nav = NavState {
            sort_order: nav::resolve_sort_order(&mirror),
            ..NavState::idle()
        };
        Self {
            transport,
            mirror,
            target,
            nav: RefCell::new(nav),
            cache: RefCell::new(ListingCache::new()),
            sources: SourceList::new(),
            generation: Cell::new(0),
            load_state: Cell::new(LoadState::Idle),
            delete_mode: Cell::new(false),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn nav_state(&self) -> NavState {
        self.nav.borrow().clone()
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state.get()
    }

    pub fn cached(&self) -> Option<CachedListing> {
        self.cache.borrow().get().cloned()
    }

    pub fn sources(&self) -> &SourceList {
        &self.sources
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn mirror(&self) -> &M {
        &self.mirror
    }

    pub fn target(&self) -> &R {
        &self.target
    }

    pub fn delete_mode(&self) -> bool {
        self.delete_mode.get()
    }

    /// Toggle delete mode; affects listings rendered from now on.
    pub fn set_delete_mode(&self, enabled: bool) {
        self.delete_mode.set(enabled);
    }

    // =========================================================================
    // Startup
    // =========================================================================

    /// Restore state on page load and list the restored directory.
    pub async fn resume(&self) -> NavOutcome {
        let restored = nav::restore(&self.mirror);
        *self.nav.borrow_mut() = restored.clone();

        if let Err(err) = self.load_sources(false).await {
            warn!("source list unavailable: {err}");
        }

        match restored.directory {
            Some(directory) => {
                self.navigate_to(&directory, "", restored.page, FetchPolicy::Network)
                    .await
            }
            None => NavOutcome::Refused(Refusal::NoDirectory),
        }
    }

    /// Draw the shortcut panel, fetching the source roots when needed.
    pub async fn load_sources(&self, force_refresh: bool) -> Result<Vec<String>, FetchError> {
        self.sources
            .load(&self.transport, &self.target, force_refresh)
            .await
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// List `path` at `page` filtered by `keyword`.
    pub async fn navigate_to(
        &self,
        path: &str,
        keyword: &str,
        page: u32,
        policy: FetchPolicy,
    ) -> NavOutcome {
        match policy {
            FetchPolicy::FromCache => self.render_from_cache(path),
            FetchPolicy::Network => {
                self.fetch_and_render(ListingRequest::new(path, keyword, page))
                    .await
            }
        }
    }

    /// Re-render the current directory from cache.
    pub fn rerender(&self) -> NavOutcome {
        let directory = self.nav.borrow().directory.clone();
        match directory {
            Some(directory) => self.render_from_cache(&directory),
            None => NavOutcome::Refused(Refusal::NoDirectory),
        }
    }

    pub async fn next_page(&self) -> NavOutcome {
        let state = self.nav_state();
        let Some(directory) = state.directory else {
            return NavOutcome::Refused(Refusal::NoDirectory);
        };
        if self.cache.borrow().payload_len() <= 1 {
            return NavOutcome::Refused(Refusal::NothingMore);
        }

        self.navigate_to(
            &directory,
            &state.keyword,
            state.page.saturating_add(1),
            FetchPolicy::Network,
        )
        .await
    }

    pub async fn prev_page(&self) -> NavOutcome {
        let state = self.nav_state();
        let Some(directory) = state.directory else {
            return NavOutcome::Refused(Refusal::NoDirectory);
        };
        if state.page <= 1 {
            return NavOutcome::Refused(Refusal::FirstPage);
        }

        self.navigate_to(
            &directory,
            &state.keyword,
            state.page - 1,
            FetchPolicy::Network,
        )
        .await
    }

    /// List the parent directory, if it is still inside a source root.
    pub async fn go_up(&self) -> NavOutcome {
        let Some(directory) = self.nav.borrow().directory.clone() else {
            return NavOutcome::Refused(Refusal::NoDirectory);
        };

        let parent = parent_path(&directory);
        if self.sources.root_containing(parent).is_none() {
            return NavOutcome::Refused(Refusal::OutsideSources);
        }

        self.navigate_to(parent, "", 1, FetchPolicy::Network).await
    }

    /// List the source root at `index`, page 1, no keyword.
    pub async fn select_source(&self, index: usize) -> NavOutcome {
        let Some(root) = self.sources.get(index) else {
            return NavOutcome::Refused(Refusal::NoSuchSource(index));
        };
        self.navigate_to(&root, "", 1, FetchPolicy::Network).await
    }

    /// List a directory picked from the listing, page 1, no keyword.
    pub async fn open_directory(&self, path: &str) -> NavOutcome {
        self.navigate_to(path, "", 1, FetchPolicy::Network).await
    }

    /// Re-list the current directory from page 1 filtered by `keyword`.
    pub async fn search(&self, keyword: &str) -> NavOutcome {
        let Some(directory) = self.nav.borrow().directory.clone() else {
            return NavOutcome::Refused(Refusal::NoDirectory);
        };
        self.navigate_to(&directory, keyword, 1, FetchPolicy::Network)
            .await
    }

    /// Change the sort order and re-list the current page.
    ///
    /// The order reaches the server through the session mirror, not as a
    /// request parameter.
    pub async fn set_sort_order(&self, order: &str) -> NavOutcome {
        let Ok(order) = order.parse::<SortOrder>() else {
            return NavOutcome::Refused(Refusal::InvalidSortOrder);
        };
        let state = self.nav_state();
        let Some(directory) = state.directory else {
            return NavOutcome::Refused(Refusal::NoDirectory);
        };

        nav::persist_sort_order(&self.mirror, order);
        self.navigate_to(&directory, &state.keyword, state.page, FetchPolicy::Network)
            .await
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn render_from_cache(&self, path: &str) -> NavOutcome {
        self.target.set_path_label(path);

        let items = match self.cache.borrow().get() {
            Some(cached) => transform(&cached.payload),
            None => return NavOutcome::Refused(Refusal::EmptyCache),
        };
        self.target.replace_content(items);
        NavOutcome::Rendered
    }

    async fn fetch_and_render(&self, request: ListingRequest) -> NavOutcome {
        let sort_order = nav::resolve_sort_order(&self.mirror);
        nav::persist_sort_order(&self.mirror, sort_order);
        nav::publish(&self.mirror, &request.directory, request.page);

        *self.nav.borrow_mut() = NavState {
            directory: Some(request.directory.clone()),
            page: request.page,
            keyword: request.keyword.clone(),
            sort_order,
        };
        self.target.set_page_label(request.page);
        self.target.clear();

        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        self.load_state.set(LoadState::Loading);

        let result = self.transport.get(api::LIST_DIR, &request.query()).await;

        if self.generation.get() != generation {
            warn!(
                "dropping stale listing for {} page {}",
                request.directory, request.page
            );
            return NavOutcome::Stale;
        }

        let body = match result {
            Ok(body) => body,
            Err(err) => {
                error!("listing {} failed: {err}", request.directory);
                self.target.show_failure(&err);
                self.load_state.set(LoadState::Error);
                return NavOutcome::Failed;
            }
        };

        let payload = match parse_listing(&body) {
            Ok(payload) => payload,
            Err(err) => {
                warn!("listing {} rejected: {err}", request.directory);
                self.load_state.set(LoadState::Error);
                return NavOutcome::Malformed;
            }
        };

        let items = transform(&payload);
        self.target.set_path_label(&request.directory);
        self.cache.borrow_mut().set(payload, request);
        self.target.replace_content(items);
        if self.delete_mode.get() {
            self.target.enable_delete();
        }
        self.load_state.set(LoadState::Loaded);
        NavOutcome::Rendered
    }
}

/// Drop the last path segment: `/a/b` becomes `/a`, `/a` becomes ``.
pub fn parent_path(path: &str) -> &str {
    path.rsplit_once('/').map_or("", |(parent, _)| parent)
}
