//! Root application module.
//!
//! Contains the main App component and [`BrowseContext`], which owns the
//! listing controller wired to the browser capabilities.

use std::future::Future;
use std::rc::Rc;

use leptos::logging::log;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::browser::{Browser, SignalTarget};
use crate::core::{ListingController, NavOutcome};
use crate::utils::{BrowserMirror, HttpTransport};

/// Controller type used by the web build.
pub type WebController = ListingController<HttpTransport, BrowserMirror, SignalTarget>;

// ============================================================================
// BrowseContext
// ============================================================================

/// Application-wide browse context.
///
/// Provided at the root of the component tree and read with
/// `use_context::<BrowseContext>()`. The controller is not `Send`, so it
/// lives in local storage; the render signals are exposed directly.
#[derive(Clone, Copy)]
pub struct BrowseContext {
    pub controller: StoredValue<Rc<WebController>, LocalStorage>,
    pub target: SignalTarget,
    pub delete_mode: RwSignal<bool>,
}

impl BrowseContext {
    pub fn new() -> Self {
        let target = SignalTarget::new();
        let controller =
            ListingController::new(HttpTransport::new(), BrowserMirror, target);
        Self {
            controller: StoredValue::new_local(Rc::new(controller)),
            target,
            delete_mode: RwSignal::new(false),
        }
    }

    /// Run a navigation on the event loop.
    ///
    /// Refusals are expected user-facing no-ops and are only logged.
    pub fn dispatch<F, Fut>(&self, op: F)
    where
        F: FnOnce(Rc<WebController>) -> Fut + 'static,
        Fut: Future<Output = NavOutcome> + 'static,
    {
        let controller = self.controller.get_value();
        spawn_local(async move {
            let outcome = op(controller).await;
            if outcome.is_refused() {
                log!("navigation ignored: {outcome:?}");
            }
        });
    }

    /// Refetch the bookmark sources and redraw the shortcut panel.
    pub fn reload_sources(&self) {
        let controller = self.controller.get_value();
        spawn_local(async move {
            if let Err(err) = controller.load_sources(true).await {
                log!("source reload failed: {err}");
            }
        });
    }

    /// Toggle delete mode and update the current listing to match.
    pub fn set_delete_mode(&self, enabled: bool) {
        self.delete_mode.set(enabled);
        self.controller.with_value(|c| c.set_delete_mode(enabled));
        self.target.delete_enabled.set(enabled);
    }
}

impl Default for BrowseContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// Creates and provides the [`BrowseContext`], then renders the browser.
#[component]
pub fn App() -> impl IntoView {
    let ctx = BrowseContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="padding: 2rem; font-family: sans-serif;">
                    <h1>"Something went wrong"</h1>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }>
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <Browser />
        </ErrorBoundary>
    }
}
