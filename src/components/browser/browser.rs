//! Main browse view.
//!
//! Toolbar on top, bookmark shortcuts beside the listing. The restored
//! directory is listed once on mount.

use leptos::prelude::*;

use super::{DirList, SourcePanel, Toolbar};
use crate::app::BrowseContext;

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

#[component]
pub fn Browser() -> impl IntoView {
    let ctx = use_context::<BrowseContext>().expect("BrowseContext must be provided");

    // Restore from the URL or session once, on first mount.
    Effect::new(move |resumed: Option<()>| {
        if resumed.is_none() {
            ctx.dispatch(|ctl| async move { ctl.resume().await });
        }
    });

    view! {
        <div class=css::browser>
            <Toolbar />
            <div class=css::body>
                <SourcePanel />
                <DirList />
            </div>
        </div>
    }
}
