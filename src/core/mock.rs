//! In-memory host capabilities for tests.
//!
//! [`MockTransport`] serves scripted bodies and records every request,
//! [`MemoryMirror`] stands in for session storage and the URL fragment, and
//! [`RecordingTarget`] keeps what would be on screen plus an event log.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use crate::core::error::FetchError;
use crate::core::host::{NavMirror, RenderTarget, Transport};
use crate::models::DisplayItem;

// =============================================================================
// Transport
// =============================================================================

#[derive(Clone, Debug)]
struct Scripted {
    result: Result<String, FetchError>,
    /// Executor turns to wait before resolving.
    delay: usize,
}

/// A request seen by [`MockTransport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedRequest {
    pub path: String,
    pub params: Vec<(String, String)>,
}

impl RecordedRequest {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Scripted transport.
///
/// Queued one-shot responses for a path are served first, then the standing
/// response. Unscripted paths answer 404.
#[derive(Debug, Default)]
pub struct MockTransport {
    standing: RefCell<HashMap<String, Scripted>>,
    queued: RefCell<HashMap<String, VecDeque<Scripted>>>,
    requests: RefCell<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every request to `path` with `body`.
    pub fn respond(&self, path: &str, body: &str) {
        self.standing.borrow_mut().insert(
            path.to_string(),
            Scripted {
                result: Ok(body.to_string()),
                delay: 0,
            },
        );
    }

    /// Answer every request to `path` with `error`.
    pub fn fail(&self, path: &str, error: FetchError) {
        self.standing.borrow_mut().insert(
            path.to_string(),
            Scripted {
                result: Err(error),
                delay: 0,
            },
        );
    }

    /// Answer the next unanswered request to `path` after `delay` executor turns.
    pub fn enqueue(&self, path: &str, result: Result<String, FetchError>, delay: usize) {
        self.queued
            .borrow_mut()
            .entry(path.to_string())
            .or_default()
            .push_back(Scripted { result, delay });
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.borrow().last().cloned()
    }

    fn next_response(&self, path: &str) -> Scripted {
        let queued = self
            .queued
            .borrow_mut()
            .get_mut(path)
            .and_then(VecDeque::pop_front);

        queued
            .or_else(|| self.standing.borrow().get(path).cloned())
            .unwrap_or_else(|| Scripted {
                result: Err(FetchError::Http {
                    status: 404,
                    body: "404 page not found".to_string(),
                }),
                delay: 0,
            })
    }
}

impl Transport for MockTransport {
    fn get(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> impl Future<Output = Result<String, FetchError>> {
        self.requests.borrow_mut().push(RecordedRequest {
            path: path.to_string(),
            params: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        });
        let Scripted { result, delay } = self.next_response(path);

        async move {
            for _ in 0..delay {
                YieldNow::default().await;
            }
            result
        }
    }
}

/// Gives up one executor turn.
#[derive(Default)]
struct YieldNow {
    yielded: bool,
}

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            return Poll::Ready(());
        }
        self.yielded = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

// =============================================================================
// Mirrors
// =============================================================================

/// Session storage and URL fragment held in memory.
#[derive(Debug, Default)]
pub struct MemoryMirror {
    session: RefCell<HashMap<String, String>>,
    fragment: RefCell<String>,
    fragment_writes: Cell<usize>,
}

impl MemoryMirror {
    pub fn with_fragment(fragment: &str) -> Self {
        let mirror = Self::default();
        *mirror.fragment.borrow_mut() = fragment.to_string();
        mirror
    }

    /// Number of fragment replacements so far.
    pub fn fragment_writes(&self) -> usize {
        self.fragment_writes.get()
    }
}

impl NavMirror for MemoryMirror {
    fn session_get(&self, key: &str) -> Option<String> {
        self.session.borrow().get(key).cloned()
    }

    fn session_set(&self, key: &str, value: &str) {
        self.session
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn fragment(&self) -> String {
        self.fragment.borrow().clone()
    }

    fn replace_fragment(&self, fragment: &str) {
        *self.fragment.borrow_mut() = fragment.to_string();
        self.fragment_writes.set(self.fragment_writes.get() + 1);
    }
}

// =============================================================================
// Render target
// =============================================================================

/// Calls received by [`RecordingTarget`], in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderEvent {
    Clear,
    Content(Vec<DisplayItem>),
    Failure(FetchError),
    PathLabel(String),
    PageLabel(u32),
    EnableDelete,
    Shortcuts(Vec<String>),
}

#[derive(Debug, Default)]
pub struct RecordingTarget {
    events: RefCell<Vec<RenderEvent>>,
}

impl RecordingTarget {
    pub fn events(&self) -> Vec<RenderEvent> {
        self.events.borrow().clone()
    }

    /// Items currently shown, if the last listing change was a render.
    pub fn items(&self) -> Option<Vec<DisplayItem>> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            RenderEvent::Content(items) => Some(Some(items.clone())),
            RenderEvent::Clear | RenderEvent::Failure(_) => Some(None),
            _ => None,
        })?
    }

    /// Failure currently shown, if the last listing change was a failure.
    pub fn failure(&self) -> Option<FetchError> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            RenderEvent::Failure(err) => Some(Some(err.clone())),
            RenderEvent::Clear | RenderEvent::Content(_) => Some(None),
            _ => None,
        })?
    }

    pub fn path_label(&self) -> Option<String> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            RenderEvent::PathLabel(path) => Some(path.clone()),
            _ => None,
        })
    }

    pub fn page_label(&self) -> Option<u32> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            RenderEvent::PageLabel(page) => Some(*page),
            _ => None,
        })
    }

    pub fn shortcuts(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .rev()
            .find_map(|e| match e {
                RenderEvent::Shortcuts(paths) => Some(paths.clone()),
                _ => None,
            })
            .unwrap_or_default()
    }

    pub fn content_renders(&self) -> usize {
        self.count(|e| matches!(e, RenderEvent::Content(_)))
    }

    pub fn shortcut_renders(&self) -> usize {
        self.count(|e| matches!(e, RenderEvent::Shortcuts(_)))
    }

    pub fn delete_enables(&self) -> usize {
        self.count(|e| matches!(e, RenderEvent::EnableDelete))
    }

    fn count(&self, pred: impl Fn(&RenderEvent) -> bool) -> usize {
        self.events.borrow().iter().filter(|e| pred(e)).count()
    }

    fn push(&self, event: RenderEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl RenderTarget for RecordingTarget {
    fn clear(&self) {
        self.push(RenderEvent::Clear);
    }

    fn replace_content(&self, items: Vec<DisplayItem>) {
        self.push(RenderEvent::Content(items));
    }

    fn show_failure(&self, error: &FetchError) {
        self.push(RenderEvent::Failure(error.clone()));
    }

    fn set_path_label(&self, path: &str) {
        self.push(RenderEvent::PathLabel(path.to_string()));
    }

    fn set_page_label(&self, page: u32) {
        self.push(RenderEvent::PageLabel(page));
    }

    fn enable_delete(&self) {
        self.push(RenderEvent::EnableDelete);
    }

    fn replace_shortcuts(&self, sources: &[String]) {
        self.push(RenderEvent::Shortcuts(sources.to_vec()));
    }
}
