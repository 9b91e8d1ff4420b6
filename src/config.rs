//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application:
//! server endpoints, browser storage keys, and listing labels.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the browse header.
pub const APP_NAME: &str = "shelfnav";

// =============================================================================
// Server Endpoints
// =============================================================================

/// Server API paths.
pub mod api {
    /// Paginated directory listing (`dir`, `page`, `keyword` query params).
    pub const LIST_DIR: &str = "/api/lists_dir";
    /// Configured bookmark source roots (JSON array of paths).
    pub const LIST_SOURCES: &str = "/api/list_sources";
    /// Thumbnail image prefix; the book id is appended.
    pub const THUMBNAIL_PREFIX: &str = "/api/thumbnail/";
}

/// Reader page that opens a single book.
pub const READER_PATH: &str = "/read.html";

/// Icon shown for directory items.
pub const FOLDER_ICON: &str = "/images/folder-mini.png";

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: u32 = 10000;

/// Header sent with every request so the server can tell API calls apart.
pub const REQUESTED_WITH: (&str, &str) = ("X-Requested-With", "XMLHttpRequest");

// =============================================================================
// Navigation Mirrors
// =============================================================================

/// sessionStorage keys for the tab-scoped navigation mirror.
pub mod session {
    /// Last listed directory path.
    pub const LAST_PATH: &str = "lastPath";
    /// Last listed page number.
    pub const LAST_PAGE: &str = "lastPage";
    /// Active sort order (`name`, `size`, or `date`).
    pub const ORDER_BY: &str = "orderBy";
}

/// URL fragment keys for the shareable navigation mirror.
pub mod fragment {
    pub const DIR: &str = "dir";
    pub const PAGE: &str = "page";
}

/// Cookie mirror of the sort order, read by the listing server.
pub mod cookie {
    /// Cookie name suffix; the full name is `<port>.order_by`.
    pub const ORDER_BY: &str = "order_by";
    /// Port used in the cookie prefix when the page URL has none.
    pub const DEFAULT_PORT: &str = "80";
    /// One year, in seconds.
    pub const MAX_AGE_SECS: u32 = 31_536_000;
}

// =============================================================================
// Listing Display
// =============================================================================

/// Labels for listing sentinels.
pub mod labels {
    /// Shown when the server reports more pages.
    pub const MORE: &str = "More...";
    /// Shown when a page holds no entries.
    pub const EOF: &str = "EOF";
}

/// Read-progress bucket bounds.
pub mod read_state {
    /// Bucket width in percent.
    pub const STEP: u32 = 10;
    /// Smallest bucket shown for any nonzero progress.
    pub const MIN_STARTED: u8 = 5;
    /// Upper bound for a finished book.
    pub const MAX: u8 = 100;
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
