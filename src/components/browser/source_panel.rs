//! Bookmark shortcut panel.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::BrowseContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/browser/source_panel.module.css");

/// One link per source root; each remembers its index for dispatch.
#[component]
pub fn SourcePanel() -> impl IntoView {
    let ctx = use_context::<BrowseContext>().expect("BrowseContext must be provided");
    let shortcuts = ctx.target.shortcuts;

    view! {
        <nav class=css::sources aria-label="Bookmarks">
            <button
                class=css::refresh
                title="Reload bookmarks"
                on:click=move |_| ctx.reload_sources()
            >
                <Icon icon=ic::REFRESH />
            </button>
            {move || {
                shortcuts
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, path)| {
                        let on_click = move |ev: MouseEvent| {
                            ev.prevent_default();
                            ctx.dispatch(move |ctl| async move { ctl.select_source(index).await });
                        };
                        view! {
                            <a class=css::source href="#" data-src-num=index on:click=on_click>
                                <Icon icon=ic::BOOKMARK />
                                {path}
                            </a>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}
