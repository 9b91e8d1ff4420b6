//! Browse toolbar.
//!
//! Paging, go-up, search, sort order and delete-mode controls, plus the
//! current directory and page labels.

use leptos::ev::{Event, KeyboardEvent};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::BrowseContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::models::SortOrder;

stylance::import_crate_style!(css, "src/components/browser/toolbar.module.css");

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_context::<BrowseContext>().expect("BrowseContext must be provided");
    let target = ctx.target;

    let (keyword, set_keyword) = signal(String::new());
    let initial_order = ctx.controller.with_value(|c| c.nav_state().sort_order);

    let run_search = move || {
        let kw = keyword.get_untracked();
        ctx.dispatch(move |ctl| async move { ctl.search(&kw).await });
    };

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Enter" {
            run_search();
        }
    };

    let on_sort = move |ev: Event| {
        let order = event_target_value(&ev);
        ctx.dispatch(move |ctl| async move { ctl.set_sort_order(&order).await });
    };

    view! {
        <header class=css::toolbar>
            <span class=css::title>{APP_NAME}</span>

            <button
                class=css::navButton
                title="Previous page"
                on:click=move |_| ctx.dispatch(|ctl| async move { ctl.prev_page().await })
            >
                <Icon icon=ic::CHEVRON_LEFT />
            </button>
            <span class=css::page>{move || target.page_label.get()}</span>
            <button
                class=css::navButton
                title="Next page"
                on:click=move |_| ctx.dispatch(|ctl| async move { ctl.next_page().await })
            >
                <Icon icon=ic::CHEVRON_RIGHT />
            </button>
            <button
                class=css::navButton
                title="Parent directory"
                on:click=move |_| ctx.dispatch(|ctl| async move { ctl.go_up().await })
            >
                <Icon icon=ic::ARROW_UP />
            </button>

            <span class=css::path>{move || target.path_label.get()}</span>

            <div class=css::search>
                <input
                    type="search"
                    placeholder="Search"
                    prop:value=keyword
                    on:input=move |ev| set_keyword.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class=css::navButton title="Search" on:click=move |_| run_search()>
                    <Icon icon=ic::SEARCH />
                </button>
            </div>

            <select class=css::sort on:change=on_sort>
                {SortOrder::ALL
                    .into_iter()
                    .map(|order| {
                        view! {
                            <option value={order.as_str()} selected={order == initial_order}>
                                {order.as_str()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>

            <label class=css::deleteToggle title="Delete mode">
                <input
                    type="checkbox"
                    prop:checked=ctx.delete_mode
                    on:change=move |ev| ctx.set_delete_mode(event_target_checked(&ev))
                />
                <Icon icon=ic::TRASH />
            </label>
        </header>
    }
}
