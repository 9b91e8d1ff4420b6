//! Listing transformation.
//!
//! [`parse_listing`] validates a raw response body into a [`ListingPayload`];
//! [`transform`] turns a payload into the rows the view renders. Both are
//! pure: a failed parse produces no items, so the caller can keep whatever
//! is currently on screen.

use leptos::logging::warn;
use serde_json::Value;

use crate::config::{FOLDER_ICON, READER_PATH, api, labels, read_state};
use crate::core::error::ListingError;
use crate::models::{
    DirectoryInfo, DisplayItem, Entry, ItemKind, ListingPayload, RawEntry, ReadState,
};
use crate::utils::url::{directory_href, encode_component};

/// Parse and validate a listing response body.
pub fn parse_listing(body: &str) -> Result<ListingPayload, ListingError> {
    let value: Value = serde_json::from_str(body)?;
    listing_from_value(value)
}

/// Validate an already-decoded listing.
pub fn listing_from_value(value: Value) -> Result<ListingPayload, ListingError> {
    let Value::Array(items) = value else {
        return Err(ListingError::NotAnArray);
    };

    let mut items = items.into_iter();
    let header = items.next().ok_or(ListingError::Empty)?;
    let info: DirectoryInfo =
        serde_json::from_value(header).map_err(|_| ListingError::MissingDirectoryInfo)?;

    // A bad entry is kept as `Other` so the page length stays faithful.
    let entries = items
        .enumerate()
        .map(|(index, item)| match serde_json::from_value::<RawEntry>(item) {
            Ok(raw) => Entry::from(raw),
            Err(err) => {
                warn!("skipping listing entry {} of {}: {err}", index + 1, info.path);
                Entry::Other
            }
        })
        .collect();

    Ok(ListingPayload { info, entries })
}

/// Build display rows for a listing.
///
/// Hidden entries and unrecognized shapes are skipped. A page holding only
/// the directory header renders a single EOF row.
pub fn transform(payload: &ListingPayload) -> Vec<DisplayItem> {
    let parent = payload.info.path.as_str();

    let mut items: Vec<DisplayItem> = payload
        .entries
        .iter()
        .filter(|entry| !entry.is_hidden())
        .filter_map(|entry| display_item(parent, entry))
        .collect();

    if payload.is_empty() {
        items.push(DisplayItem {
            kind: ItemKind::Eof,
            label: labels::EOF.to_string(),
            href: None,
            icon: None,
            read_state: None,
        });
    }

    items
}

fn display_item(parent: &str, entry: &Entry) -> Option<DisplayItem> {
    let item = match entry {
        Entry::Directory { name } => {
            let path = format!("{parent}/{name}");
            DisplayItem {
                href: Some(directory_href(&path, 1)),
                kind: ItemKind::Directory { path },
                label: name.clone(),
                icon: Some(FOLDER_ICON.to_string()),
                read_state: None,
            }
        }
        Entry::File {
            name,
            id,
            pages,
            page,
        } => {
            let progress = match (pages, page) {
                (Some(pages), Some(page)) if *pages > 0 && *page > 0 => Some((*pages, *page)),
                _ => None,
            };
            DisplayItem {
                href: Some(reader_href(id, progress.map(|(_, page)| page))),
                icon: Some(format!("{}{}", api::THUMBNAIL_PREFIX, encode_component(id))),
                read_state: Some(progress.map_or(ReadState::UNREAD, |(pages, page)| {
                    read_state_bucket(pages, page)
                })),
                kind: ItemKind::File {
                    id: id.clone(),
                    pages: *pages,
                },
                label: name.clone(),
            }
        }
        Entry::More => DisplayItem {
            kind: ItemKind::More,
            label: labels::MORE.to_string(),
            href: None,
            icon: None,
            read_state: None,
        },
        Entry::Other => return None,
    };
    Some(item)
}

/// Bucket read progress into a multiple of 10, with 5 for "just started".
///
/// `pages` and `page` must both be nonzero.
pub fn read_state_bucket(pages: u32, page: u32) -> ReadState {
    let percent = u64::from(page) * 100 / u64::from(pages);
    let step = u64::from(read_state::STEP);
    let bucket = (percent / step * step).min(u64::from(read_state::MAX)) as u8;

    if bucket == 0 {
        ReadState(read_state::MIN_STARTED)
    } else {
        ReadState(bucket)
    }
}

/// Reader link for a book, resuming at `page` when known.
pub fn reader_href(id: &str, page: Option<u32>) -> String {
    let book = encode_component(id);
    match page {
        Some(page) => format!("{READER_PATH}?book={book}&page={page}"),
        None => format!("{READER_PATH}?book={book}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, id: &str, pages: Option<u32>, page: Option<u32>) -> Entry {
        Entry::File {
            name: name.to_string(),
            id: id.to_string(),
            pages,
            page,
        }
    }

    fn dir(name: &str) -> Entry {
        Entry::Directory {
            name: name.to_string(),
        }
    }

    #[test]
    fn test_header_only_yields_single_eof() {
        let items = transform(&ListingPayload::new("/lib", vec![]));
        assert_eq!(items.len(), 1);
        assert!(items[0].is_eof());
        assert_eq!(items[0].label, "EOF");
    }

    #[test]
    fn test_only_hidden_entries_yield_nothing() {
        // Length is 2, so no EOF even though nothing is visible.
        let items = transform(&ListingPayload::new("/lib", vec![dir(".trash")]));
        assert!(items.is_empty());
    }

    #[test]
    fn test_read_state_buckets() {
        assert_eq!(read_state_bucket(40, 18), ReadState(40));
        assert_eq!(read_state_bucket(40, 1), ReadState(5));
        assert_eq!(read_state_bucket(40, 4), ReadState(10));
        assert_eq!(read_state_bucket(40, 40), ReadState(100));
        assert_eq!(read_state_bucket(10, 25), ReadState(100));
    }

    #[test]
    fn test_file_items() {
        let payload = ListingPayload::new(
            "/lib",
            vec![
                file("Half", "b1", Some(40), Some(18)),
                file("Started", "b2", Some(40), Some(1)),
                file("Fresh", "b3", None, None),
                file("Zero", "b4", Some(40), Some(0)),
            ],
        );
        let items = transform(&payload);
        let buckets: Vec<_> = items.iter().map(|i| i.read_state).collect();
        assert_eq!(
            buckets,
            vec![
                Some(ReadState(40)),
                Some(ReadState(5)),
                Some(ReadState::UNREAD),
                Some(ReadState::UNREAD),
            ]
        );

        assert_eq!(items[0].href.as_deref(), Some("/read.html?book=b1&page=18"));
        assert_eq!(items[2].href.as_deref(), Some("/read.html?book=b3"));
        assert_eq!(items[3].href.as_deref(), Some("/read.html?book=b4"));
        assert_eq!(items[0].icon.as_deref(), Some("/api/thumbnail/b1"));
        assert_eq!(
            items[0].kind,
            ItemKind::File {
                id: "b1".to_string(),
                pages: Some(40),
            }
        );
    }

    #[test]
    fn test_directory_items_reset_page() {
        let items = transform(&ListingPayload::new("/lib", vec![dir("Sci Fi")]));
        assert_eq!(items.len(), 1);
        assert_eq!(
            items[0].kind,
            ItemKind::Directory {
                path: "/lib/Sci Fi".to_string()
            }
        );
        assert_eq!(items[0].href.as_deref(), Some("#dir=%2Flib%2FSci%20Fi&page=1"));
        assert_eq!(items[0].icon.as_deref(), Some("/images/folder-mini.png"));
        assert_eq!(items[0].read_state, None);
    }

    #[test]
    fn test_hidden_entries_never_rendered() {
        let payload = ListingPayload::new(
            "/lib",
            vec![
                dir(".git"),
                file(".cover", "b0", Some(1), Some(1)),
                dir("Comics"),
                file("Intro", "b1", None, None),
                Entry::More,
                Entry::Other,
            ],
        );
        let labels: Vec<_> = transform(&payload).into_iter().map(|i| i.label).collect();
        assert_eq!(labels, vec!["Comics", "Intro", "More..."]);
    }

    #[test]
    fn test_transform_does_not_mutate_input() {
        let payload = ListingPayload::new("/lib", vec![dir("a"), Entry::More]);
        let before = payload.clone();
        let _ = transform(&payload);
        assert_eq!(payload, before);
    }

    #[test]
    fn test_parse_listing() {
        let payload =
            parse_listing(r#"[{"path":"/lib"},{"name":"Intro","isDir":false,"id":"b1"}]"#)
                .unwrap();
        assert_eq!(payload.info.path, "/lib");
        assert_eq!(payload.len(), 2);

        let items = transform(&payload);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].href.as_deref(), Some("/read.html?book=b1"));
        assert_eq!(items[0].read_state, Some(ReadState::UNREAD));
        assert!(!items.iter().any(DisplayItem::is_eof));
    }

    #[test]
    fn test_parse_listing_rejects_bad_shapes() {
        assert_eq!(
            parse_listing(r#"{"path":"/lib"}"#),
            Err(ListingError::NotAnArray)
        );
        assert_eq!(parse_listing("[]"), Err(ListingError::Empty));
        assert_eq!(
            parse_listing(r#"[{"name":"x"}]"#),
            Err(ListingError::MissingDirectoryInfo)
        );
        assert!(matches!(parse_listing("oops"), Err(ListingError::Json(_))));
    }

    #[test]
    fn test_bad_entry_does_not_drop_listing() {
        let payload = parse_listing(
            r#"[{"path":"/lib"},
                {"name":"Good","isDir":false,"id":"b1"},
                {"name":"Odd","isDir":false,"id":"b2","pages":"40","page":18},
                {"name":"Broken","isDir":"yes"},
                7]"#,
        )
        .unwrap();
        assert_eq!(payload.len(), 5);
        assert_eq!(payload.entries[2], Entry::Other);
        assert_eq!(payload.entries[3], Entry::Other);

        let items = transform(&payload);
        let labels: Vec<_> = items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["Good", "Odd"]);
        assert_eq!(items[1].read_state, Some(ReadState(40)));
    }

    #[test]
    fn test_bad_page_keeps_book_unread() {
        let payload = parse_listing(
            r#"[{"path":"/lib"},{"name":"Odd","isDir":false,"id":"b2","pages":40,"page":-1}]"#,
        )
        .unwrap();
        let items = transform(&payload);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].read_state, Some(ReadState::UNREAD));
        assert_eq!(items[0].href.as_deref(), Some("/read.html?book=b2"));
    }
}
