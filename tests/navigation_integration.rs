//! End-to-end browse sessions against the in-memory host.

use shelfnav::config::api;
use shelfnav::core::mock::{MemoryMirror, MockTransport, RecordingTarget};
use shelfnav::core::{FetchError, ListingController, NavMirror, NavOutcome, Refusal};
use shelfnav::models::{LoadState, ReadState, SortOrder};
use shelfnav::utils::url::FragmentParams;

type TestController = ListingController<MockTransport, MemoryMirror, RecordingTarget>;

const SOURCES: &str = r#"["/lib", "/archive"]"#;

fn listing(path: &str, names: &[&str]) -> String {
    let mut entries = vec![format!(r#"{{"path":"{path}"}}"#)];
    entries.extend(names.iter().enumerate().map(|(i, name)| {
        format!(r#"{{"name":"{name}","is_dir":false,"id":"{i}","pages":100,"page":{}}}"#, i * 30)
    }));
    format!("[{}]", entries.join(","))
}

fn fragment_for(dir: &str, page: u32) -> String {
    let mut params = FragmentParams::default();
    params.set("dir", dir);
    params.set("page", &page.to_string());
    params.to_hash()
}

fn controller(fragment: &str) -> TestController {
    let transport = MockTransport::new();
    transport.respond(api::LIST_SOURCES, SOURCES);
    ListingController::new(
        transport,
        MemoryMirror::with_fragment(fragment),
        RecordingTarget::default(),
    )
}

fn queue_listing(ctl: &TestController, path: &str, names: &[&str]) {
    ctl.transport()
        .enqueue(api::LIST_DIR, Ok(listing(path, names)), 0);
}

fn last_listing_param(ctl: &TestController, key: &str) -> Option<String> {
    ctl.transport()
        .requests()
        .into_iter()
        .rev()
        .find(|r| r.path == api::LIST_DIR)
        .and_then(|r| r.param(key).map(str::to_string))
}

#[tokio::test(flavor = "current_thread")]
async fn test_browse_session() {
    let ctl = controller(&fragment_for("/lib/comics", 2));
    queue_listing(&ctl, "/lib/comics", &["a", "b"]);

    // Resume from the shared link
    assert_eq!(ctl.resume().await, NavOutcome::Rendered);
    assert_eq!(ctl.target().shortcuts(), vec!["/lib", "/archive"]);
    assert_eq!(ctl.target().path_label().as_deref(), Some("/lib/comics"));
    assert_eq!(ctl.target().page_label(), Some(2));
    assert_eq!(last_listing_param(&ctl, "dir").as_deref(), Some("/lib/comics"));
    assert_eq!(last_listing_param(&ctl, "page").as_deref(), Some("2"));
    assert_eq!(last_listing_param(&ctl, "keyword").as_deref(), Some(""));
    assert_eq!(ctl.load_state(), LoadState::Loaded);

    // Page forward and back
    queue_listing(&ctl, "/lib/comics", &["c"]);
    assert_eq!(ctl.next_page().await, NavOutcome::Rendered);
    assert_eq!(last_listing_param(&ctl, "page").as_deref(), Some("3"));

    queue_listing(&ctl, "/lib/comics", &["a", "b"]);
    assert_eq!(ctl.prev_page().await, NavOutcome::Rendered);
    assert_eq!(last_listing_param(&ctl, "page").as_deref(), Some("2"));

    // Climb to the root, then no further
    queue_listing(&ctl, "/lib", &["comics"]);
    assert_eq!(ctl.go_up().await, NavOutcome::Rendered);
    assert_eq!(last_listing_param(&ctl, "dir").as_deref(), Some("/lib"));
    assert_eq!(last_listing_param(&ctl, "page").as_deref(), Some("1"));

    let requests = ctl.transport().request_count();
    assert_eq!(
        ctl.go_up().await,
        NavOutcome::Refused(Refusal::OutsideSources)
    );
    assert_eq!(ctl.transport().request_count(), requests);

    // Jump to another source
    queue_listing(&ctl, "/archive", &["old"]);
    assert_eq!(ctl.select_source(1).await, NavOutcome::Rendered);
    assert_eq!(ctl.nav_state().directory.as_deref(), Some("/archive"));
    assert_eq!(
        ctl.select_source(5).await,
        NavOutcome::Refused(Refusal::NoSuchSource(5))
    );

    // Sort order travels through the session mirror only
    queue_listing(&ctl, "/archive", &["old"]);
    assert_eq!(ctl.set_sort_order("date").await, NavOutcome::Rendered);
    assert_eq!(ctl.nav_state().sort_order, SortOrder::Date);
    assert_eq!(ctl.mirror().session_get("orderBy").as_deref(), Some("date"));
    assert_eq!(last_listing_param(&ctl, "orderBy"), None);
    assert_eq!(
        ctl.set_sort_order("bogus").await,
        NavOutcome::Refused(Refusal::InvalidSortOrder)
    );

    // Both mirrors point at the last listing
    let fragment = FragmentParams::parse(&ctl.mirror().fragment());
    assert_eq!(fragment.get("dir"), Some("/archive"));
    assert_eq!(fragment.get("page"), Some("1"));
    assert_eq!(ctl.mirror().session_get("lastPath").as_deref(), Some("/archive"));
    assert_eq!(ctl.mirror().session_get("lastPage").as_deref(), Some("1"));
}

#[tokio::test(flavor = "current_thread")]
async fn test_single_book_listing() {
    let ctl = controller("");
    ctl.transport().respond(
        api::LIST_DIR,
        r#"[{"path":"/lib"},{"name":"Intro","isDir":false,"id":"b1"}]"#,
    );

    assert_eq!(
        ctl.navigate_to("/lib", "", 1, Default::default()).await,
        NavOutcome::Rendered
    );

    let items = ctl.target().items().expect("listing rendered");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].label, "Intro");
    assert_eq!(items[0].href.as_deref(), Some("/read.html?book=b1"));
    assert_eq!(items[0].read_state, Some(ReadState::UNREAD));
    assert!(!items.iter().any(|item| item.is_eof()));
}

#[tokio::test(flavor = "current_thread")]
async fn test_empty_page_ends_paging() {
    let ctl = controller(&fragment_for("/lib", 4));
    ctl.transport().respond(api::LIST_DIR, r#"[{"path":"/lib"}]"#);

    assert_eq!(ctl.resume().await, NavOutcome::Rendered);
    let items = ctl.target().items().expect("listing rendered");
    assert_eq!(items.len(), 1);
    assert!(items[0].is_eof());

    assert_eq!(
        ctl.next_page().await,
        NavOutcome::Refused(Refusal::NothingMore)
    );
    assert_eq!(ctl.nav_state().page, 4);
}

#[tokio::test(flavor = "current_thread")]
async fn test_failure_is_shown_and_recoverable() {
    let ctl = controller("");
    ctl.transport().enqueue(
        api::LIST_DIR,
        Err(FetchError::Http {
            status: 500,
            body: "disk on fire".to_string(),
        }),
        0,
    );

    assert_eq!(
        ctl.open_directory("/lib/broken").await,
        NavOutcome::Failed
    );
    let failure = ctl.target().failure().expect("failure shown");
    assert_eq!(failure.failure_text(), "disk on fire");
    assert_eq!(ctl.load_state(), LoadState::Error);
    assert!(ctl.cached().is_none());

    // The mirrors already moved, so a reload retries the same directory
    assert_eq!(ctl.mirror().session_get("lastPath").as_deref(), Some("/lib/broken"));

    queue_listing(&ctl, "/lib/broken", &["fixed"]);
    assert_eq!(ctl.search("").await, NavOutcome::Rendered);
    assert_eq!(ctl.target().failure(), None);
    assert_eq!(ctl.target().items().map(|items| items.len()), Some(1));
}

#[tokio::test(flavor = "current_thread")]
async fn test_fresh_tab_lists_nothing() {
    let ctl = controller("");

    assert_eq!(
        ctl.resume().await,
        NavOutcome::Refused(Refusal::NoDirectory)
    );
    assert_eq!(ctl.target().shortcuts().len(), 2);
    assert_eq!(ctl.transport().request_count(), 1);
    assert_eq!(ctl.load_state(), LoadState::Idle);
}
