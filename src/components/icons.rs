//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowUp as ArrowUp, LuBookmark as Bookmark, LuChevronLeft as ChevronLeft,
        LuChevronRight as ChevronRight, LuRefreshCw as Refresh,
        LuSearch as Search, LuTrash2 as Trash,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowClockwise as Refresh, BsArrowUp as ArrowUp, BsBookmark as Bookmark,
        BsChevronLeft as ChevronLeft, BsChevronRight as ChevronRight,
        BsSearch as Search, BsTrash as Trash,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(ARROW_UP, ArrowUp);
themed_icon!(SEARCH, Search);
themed_icon!(TRASH, Trash);
themed_icon!(REFRESH, Refresh);
themed_icon!(BOOKMARK, Bookmark);
