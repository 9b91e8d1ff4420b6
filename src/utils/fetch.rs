//! Network fetching with timeout support.
//!
//! [`HttpTransport`] is the browser [`Transport`]: a single GET per call,
//! aborted through an `AbortController` once the timeout elapses.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use web_sys::AbortController;

use crate::config::{FETCH_TIMEOUT_MS, REQUESTED_WITH};
use crate::core::{FetchError, Transport};
use crate::utils::url::query_string;

/// Fetch API transport.
#[derive(Debug, Clone, Copy)]
pub struct HttpTransport {
    timeout_ms: u32,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::with_timeout(FETCH_TIMEOUT_MS)
    }

    pub fn with_timeout(timeout_ms: u32) -> Self {
        Self { timeout_ms }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    fn get(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> impl Future<Output = Result<String, FetchError>> {
        let url = if params.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, query_string(params))
        };
        let timeout_ms = self.timeout_ms;

        async move { fetch_text(&url, timeout_ms).await }
    }
}

/// GET `url` and return its body.
///
/// 200 and 304 count as success. Other statuses return
/// [`FetchError::Http`] carrying the body so it can be shown verbatim.
async fn fetch_text(url: &str, timeout_ms: u32) -> Result<String, FetchError> {
    let controller = AbortController::new().map_err(|_| FetchError::RequestCreationFailed)?;
    let timed_out = Rc::new(Cell::new(false));

    // Dropped (and so cancelled) when this function returns.
    let _timer = {
        let controller = controller.clone();
        let timed_out = Rc::clone(&timed_out);
        Timeout::new(timeout_ms, move || {
            timed_out.set(true);
            controller.abort();
        })
    };

    let (header, value) = REQUESTED_WITH;
    let signal = controller.signal();
    let response = match Request::get(url)
        .header(header, value)
        .abort_signal(Some(&signal))
        .send()
        .await
    {
        Ok(response) => response,
        Err(_) if timed_out.get() => return Err(FetchError::Timeout),
        Err(err) => return Err(FetchError::Network(err.to_string())),
    };

    let status = response.status();
    let body = response.text().await.map_err(|_| {
        if timed_out.get() {
            FetchError::Timeout
        } else {
            FetchError::ResponseReadFailed
        }
    })?;

    if status != 200 && status != 304 {
        return Err(FetchError::Http { status, body });
    }
    Ok(body)
}
