//! Navigation state types shared by the controller and its mirrors.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Server-side ordering of a listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Alphabetical by name (default)
    #[default]
    Name,
    /// By file size
    Size,
    /// By modification date
    Date,
}

impl SortOrder {
    /// Wire name stored in the session mirror.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Size => "size",
            Self::Date => "date",
        }
    }

    /// All orders, in menu order.
    pub const ALL: [SortOrder; 3] = [Self::Name, Self::Size, Self::Date];
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the known sort orders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort order: {0}")]
pub struct UnknownSortOrder(pub String);

impl FromStr for SortOrder {
    type Err = UnknownSortOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "size" => Ok(Self::Size),
            "date" => Ok(Self::Date),
            other => Err(UnknownSortOrder(other.to_string())),
        }
    }
}

/// The currently active listing parameters.
///
/// `directory == None` is the idle state: nothing has been listed yet and
/// paging operations are refused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavState {
    pub directory: Option<String>,
    pub page: u32,
    pub keyword: String,
    pub sort_order: SortOrder,
}

impl NavState {
    /// Idle state with no directory.
    pub fn idle() -> Self {
        Self {
            directory: None,
            page: 1,
            keyword: String::new(),
            sort_order: SortOrder::default(),
        }
    }

    /// State pointing at `directory`, with the page clamped to at least 1.
    pub fn at(directory: impl Into<String>, page: u32) -> Self {
        Self {
            directory: Some(directory.into()),
            page: page.max(1),
            ..Self::idle()
        }
    }

    pub fn is_idle(&self) -> bool {
        self.directory.is_none()
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::idle()
    }
}

/// Parameters of a single listing fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingRequest {
    pub directory: String,
    pub page: u32,
    pub keyword: String,
}

impl ListingRequest {
    pub fn new(directory: impl Into<String>, keyword: impl Into<String>, page: u32) -> Self {
        Self {
            directory: directory.into(),
            page: page.max(1),
            keyword: keyword.into(),
        }
    }

    /// Query parameters for the listing endpoint, in wire order.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("dir", self.directory.clone()),
            ("page", self.page.to_string()),
            ("keyword", self.keyword.clone()),
        ]
    }
}

/// Lifecycle of the listing view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    /// No directory established yet
    #[default]
    Idle,
    /// A fetch is in flight and the view is cleared
    Loading,
    /// The last fetch was rendered
    Loaded,
    /// The last fetch failed and its error is shown
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_order_parsing() {
        assert_eq!("name".parse(), Ok(SortOrder::Name));
        assert_eq!("size".parse(), Ok(SortOrder::Size));
        assert_eq!("date".parse(), Ok(SortOrder::Date));
        assert!("Name".parse::<SortOrder>().is_err());
        assert!("bogus".parse::<SortOrder>().is_err());
        assert!("".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_nav_state_page_is_positive() {
        assert_eq!(NavState::at("/lib", 0).page, 1);
        assert_eq!(NavState::at("/lib", 3).page, 3);
        assert!(NavState::idle().is_idle());
        assert!(!NavState::at("/lib", 1).is_idle());
    }

    #[test]
    fn test_listing_request_query() {
        let req = ListingRequest::new("/lib/comics", "bat", 2);
        assert_eq!(
            req.query(),
            vec![
                ("dir", "/lib/comics".to_string()),
                ("page", "2".to_string()),
                ("keyword", "bat".to_string()),
            ]
        );
    }
}
