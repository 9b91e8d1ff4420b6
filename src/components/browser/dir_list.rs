//! Directory listing component.
//!
//! Draws whatever the controller last put in [`ListingView`]: rows, a raw
//! failure, or nothing while a fetch is in flight.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use super::ListingView;
use crate::app::BrowseContext;
use crate::models::{DisplayItem, ItemKind};

stylance::import_crate_style!(css, "src/components/browser/dir_list.module.css");

#[component]
pub fn DirList() -> impl IntoView {
    let ctx = use_context::<BrowseContext>().expect("BrowseContext must be provided");
    let listing = ctx.target.listing;

    view! {
        <div class=css::list>
            {move || match listing.get() {
                ListingView::Empty => ().into_any(),
                ListingView::Failure(text) => {
                    view! { <pre class=css::failure>{text}</pre> }.into_any()
                }
                ListingView::Items(items) => items
                    .into_iter()
                    .map(|item| view! { <ListItem item=item /> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}

#[component]
fn ListItem(item: DisplayItem) -> impl IntoView {
    let ctx = use_context::<BrowseContext>().expect("BrowseContext must be provided");
    let deletable = ctx.target.delete_enabled;

    let DisplayItem {
        kind,
        label,
        href,
        icon,
        read_state,
    } = item;
    let href = href.unwrap_or_default();
    let icon = icon.unwrap_or_default();

    match kind {
        ItemKind::Directory { path } => {
            // Same-page navigation; the fragment is rewritten by the controller.
            let on_click = move |ev: MouseEvent| {
                ev.prevent_default();
                let path = path.clone();
                ctx.dispatch(move |ctl| async move { ctl.open_directory(&path).await });
            };

            view! {
                <div class=css::directory>
                    <a href=href on:click=on_click>
                        <img src=icon alt="folder" />
                        <div class=css::text>{label}</div>
                    </a>
                </div>
            }
            .into_any()
        }
        ItemKind::File { pages, .. } => {
            let text_class = format!(
                "{} {}",
                css::text,
                read_state.unwrap_or_default().class_name()
            );
            let item_class = move || {
                if deletable.get() {
                    format!("{} {}", css::file, css::deletable)
                } else {
                    css::file.to_string()
                }
            };

            view! {
                <div class=item_class>
                    <a href=href>
                        <img src=icon alt="book" />
                        <div class=text_class>{label}</div>
                        <span class=css::bookPages>{pages}</span>
                    </a>
                </div>
            }
            .into_any()
        }
        ItemKind::More | ItemKind::Eof => view! {
            <div class=css::directory>
                <div class=css::text>{label}</div>
            </div>
        }
        .into_any(),
    }
}
