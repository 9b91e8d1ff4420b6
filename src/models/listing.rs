//! Listing payload and display item types.
//!
//! The server answers a listing request with a JSON array whose first
//! element describes the listed directory and whose remaining elements are
//! entries. Entries have no explicit tag; [`RawEntry`] captures the wire
//! shape and is classified into an [`Entry`] at the boundary.

use serde::{Deserialize, Deserializer};

/// Header record at index 0 of a listing payload.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct DirectoryInfo {
    pub path: String,
}

/// Wire shape of a listing entry.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "isDir")]
    pub is_dir: bool,
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub pages: Option<u32>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub page: Option<u32>,
    #[serde(default)]
    pub more: bool,
}

/// Book ids are opaque; accept them as JSON strings or numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Page counts arrive as numbers or numeric strings. Anything that is not a
/// non-negative count reads as unknown.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Some(serde_json::Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// A classified listing entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    Directory {
        name: String,
    },
    File {
        name: String,
        id: String,
        pages: Option<u32>,
        page: Option<u32>,
    },
    /// More pages exist beyond this one.
    More,
    /// Shape not recognized; kept so the payload length stays faithful.
    Other,
}

impl Entry {
    /// Name of a directory or file entry.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Directory { name } | Self::File { name, .. } => Some(name),
            Self::More | Self::Other => None,
        }
    }

    /// Dot-prefixed entries are never rendered.
    pub fn is_hidden(&self) -> bool {
        self.name().is_some_and(|n| n.starts_with('.'))
    }
}

impl From<RawEntry> for Entry {
    fn from(raw: RawEntry) -> Self {
        match raw.name.filter(|name| !name.is_empty()) {
            Some(name) if raw.is_dir => Self::Directory { name },
            Some(name) => Self::File {
                name,
                id: raw.id.unwrap_or_default(),
                pages: raw.pages,
                page: raw.page,
            },
            None if raw.more => Self::More,
            None => Self::Other,
        }
    }
}

/// A validated listing: the directory header plus its entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingPayload {
    pub info: DirectoryInfo,
    pub entries: Vec<Entry>,
}

impl ListingPayload {
    pub fn new(path: impl Into<String>, entries: Vec<Entry>) -> Self {
        Self {
            info: DirectoryInfo { path: path.into() },
            entries,
        }
    }

    /// Length of the wire array, header included.
    pub fn len(&self) -> usize {
        self.entries.len() + 1
    }

    /// True when the page holds nothing but the header.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Read-progress classification of a book.
///
/// Buckets are multiples of 10 up to 100, with 5 standing for "started but
/// under 10%" and 0 for unread.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReadState(pub u8);

impl ReadState {
    pub const UNREAD: ReadState = ReadState(0);

    /// CSS class name, e.g. `read40`.
    pub fn class_name(self) -> String {
        format!("read{}", self.0)
    }
}

/// What a display item represents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemKind {
    /// Subdirectory; `path` is the full path to list on click.
    Directory { path: String },
    /// Book; `pages` is the total page count when known.
    File { id: String, pages: Option<u32> },
    /// More pages exist.
    More,
    /// The page is empty.
    Eof,
}

/// A render-ready listing row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayItem {
    pub kind: ItemKind,
    pub label: String,
    pub href: Option<String>,
    /// Folder icon for directories, thumbnail URL for books.
    pub icon: Option<String>,
    /// Present for books only.
    pub read_state: Option<ReadState>,
}

impl DisplayItem {
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, ItemKind::Eof)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(json: &str) -> Entry {
        serde_json::from_str::<RawEntry>(json).unwrap().into()
    }

    #[test]
    fn test_entry_classification() {
        assert_eq!(
            classify(r#"{"name":"Comics","is_dir":true}"#),
            Entry::Directory { name: "Comics".to_string() }
        );
        assert_eq!(
            classify(r#"{"name":"Comics","isDir":true}"#),
            Entry::Directory { name: "Comics".to_string() }
        );
        assert_eq!(
            classify(r#"{"name":"Intro","isDir":false,"id":"b1","pages":40,"page":18}"#),
            Entry::File {
                name: "Intro".to_string(),
                id: "b1".to_string(),
                pages: Some(40),
                page: Some(18),
            }
        );
        assert_eq!(classify(r#"{"more":true}"#), Entry::More);
        assert_eq!(classify(r#"{"more":false}"#), Entry::Other);
        assert_eq!(classify(r#"{}"#), Entry::Other);
    }

    #[test]
    fn test_empty_name_is_unnamed() {
        assert_eq!(classify(r#"{"name":"","isDir":false,"id":"b1"}"#), Entry::Other);
        assert_eq!(classify(r#"{"name":"","more":true}"#), Entry::More);
    }

    #[test]
    fn test_page_counts_are_lenient() {
        assert_eq!(
            classify(r#"{"name":"Odd","id":"b2","pages":"40","page":18}"#),
            Entry::File {
                name: "Odd".to_string(),
                id: "b2".to_string(),
                pages: Some(40),
                page: Some(18),
            }
        );
        assert_eq!(
            classify(r#"{"name":"Odd","id":"b2","pages":40,"page":-1}"#),
            Entry::File {
                name: "Odd".to_string(),
                id: "b2".to_string(),
                pages: Some(40),
                page: None,
            }
        );
        assert_eq!(
            classify(r#"{"name":"Odd","id":"b2","pages":"many","page":2.5}"#),
            Entry::File {
                name: "Odd".to_string(),
                id: "b2".to_string(),
                pages: None,
                page: None,
            }
        );
    }

    #[test]
    fn test_numeric_id_accepted() {
        assert_eq!(
            classify(r#"{"name":"Intro","id":42}"#),
            Entry::File {
                name: "Intro".to_string(),
                id: "42".to_string(),
                pages: None,
                page: None,
            }
        );
    }

    #[test]
    fn test_hidden_entries() {
        assert!(Entry::Directory { name: ".git".to_string() }.is_hidden());
        assert!(
            Entry::File {
                name: ".DS_Store".to_string(),
                id: String::new(),
                pages: None,
                page: None,
            }
            .is_hidden()
        );
        assert!(!Entry::More.is_hidden());
        assert!(!Entry::Directory { name: "a.b".to_string() }.is_hidden());
    }

    #[test]
    fn test_payload_length_counts_header() {
        let payload = ListingPayload::new("/lib", vec![]);
        assert_eq!(payload.len(), 1);
        assert!(payload.is_empty());

        let payload = ListingPayload::new("/lib", vec![Entry::More]);
        assert_eq!(payload.len(), 2);
        assert!(!payload.is_empty());
    }

    #[test]
    fn test_read_state_class_name() {
        assert_eq!(ReadState(40).class_name(), "read40");
        assert_eq!(ReadState::UNREAD.class_name(), "read0");
    }
}
