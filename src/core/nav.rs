//! Navigation state persistence.
//!
//! The active [`NavState`] is mirrored in two places: the URL fragment
//! (directory and page, shareable as a link) and session storage (directory,
//! page and sort order, surviving reloads within the tab). Session storage is
//! the only source of the sort order.

use crate::config::{fragment, session};
use crate::core::host::NavMirror;
use crate::models::{NavState, SortOrder};
use crate::utils::url::FragmentParams;

/// Sort order from the session mirror, falling back to [`SortOrder::Name`].
pub fn resolve_sort_order<M: NavMirror>(mirror: &M) -> SortOrder {
    mirror
        .session_get(session::ORDER_BY)
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}

/// Persist `order` to the session mirror.
pub fn persist_sort_order<M: NavMirror>(mirror: &M, order: SortOrder) {
    mirror.session_set(session::ORDER_BY, order.as_str());
}

/// Write `directory` and `page` to both mirrors.
///
/// The fragment is replaced, never pushed, so listing changes do not pile up
/// in the browser history. Other fragment parameters are kept.
pub fn publish<M: NavMirror>(mirror: &M, directory: &str, page: u32) {
    let page = page.to_string();

    mirror.session_set(session::LAST_PATH, directory);
    mirror.session_set(session::LAST_PAGE, &page);

    let mut params = FragmentParams::parse(&mirror.fragment());
    params.set(fragment::DIR, directory);
    params.set(fragment::PAGE, &page);
    mirror.replace_fragment(&params.to_hash());
}

/// Rebuild navigation state on page load.
///
/// The fragment wins over the session mirror; with neither present the
/// state is idle.
pub fn restore<M: NavMirror>(mirror: &M) -> NavState {
    let sort_order = resolve_sort_order(mirror);
    let params = FragmentParams::parse(&mirror.fragment());

    let located = match params.get(fragment::DIR).filter(|dir| !dir.is_empty()) {
        Some(dir) => Some((dir.to_string(), parse_page(params.get(fragment::PAGE)))),
        None => mirror
            .session_get(session::LAST_PATH)
            .filter(|dir| !dir.is_empty())
            .map(|dir| {
                let page = mirror.session_get(session::LAST_PAGE);
                (dir, parse_page(page.as_deref()))
            }),
    };

    match located {
        Some((directory, page)) => NavState {
            sort_order,
            ..NavState::at(directory, page)
        },
        None => NavState {
            sort_order,
            ..NavState::idle()
        },
    }
}

/// Positive page number, or 1 for anything else.
fn parse_page(raw: Option<&str>) -> u32 {
    raw.and_then(|p| p.trim().parse::<u32>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1)
}
