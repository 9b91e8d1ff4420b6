//! Browser-backed mirror checks; run with `wasm-pack test --headless`.

#![cfg(target_arch = "wasm32")]

use shelfnav::core::NavMirror;
use shelfnav::core::nav::{publish, restore};
use shelfnav::utils::BrowserMirror;
use shelfnav::utils::url::FragmentParams;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_publish_then_restore() {
    let mirror = BrowserMirror;
    mirror.replace_fragment("#view=grid");

    publish(&mirror, "/lib/manga vol 1", 3);

    let params = FragmentParams::parse(&mirror.fragment());
    assert_eq!(params.get("view"), Some("grid"));
    assert_eq!(params.get("dir"), Some("/lib/manga vol 1"));

    let state = restore(&mirror);
    assert_eq!(state.directory.as_deref(), Some("/lib/manga vol 1"));
    assert_eq!(state.page, 3);
}

#[wasm_bindgen_test]
fn test_sort_order_sets_cookie() {
    let mirror = BrowserMirror;
    mirror.session_set("orderBy", "size");

    assert_eq!(mirror.session_get("orderBy").as_deref(), Some("size"));

    let document = web_sys::window().unwrap().document().unwrap();
    let cookies = wasm_bindgen::JsCast::dyn_into::<web_sys::HtmlDocument>(document)
        .unwrap()
        .cookie()
        .unwrap();
    assert!(cookies.contains(".order_by=size"));
}
