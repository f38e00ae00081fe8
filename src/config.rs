//! Application Constants
//!
//! Everything here is fixed at compile time; the app reads no runtime config.

use log::LevelFilter;

/// localStorage key holding the JSON-encoded todo array
pub const STORAGE_KEY: &str = "todos";

/// How long a freshly added row stays highlighted
pub const HIGHLIGHT_MS: u32 = 1000;

/// Delay between hiding a notice and removing it
pub const NOTICE_HIDE_MS: u32 = 500;

pub const EMPTY_TODO_MESSAGE: &str = "Please enter a todo content";
pub const REMOVED_MESSAGE: &str = "Todo removed successfully";

// ========================
// Markup
// ========================

pub const ROW_CLASS: &str = "list-group-item d-flex justify-content-between align-items-center";
pub const HIGHLIGHT_CLASS: &str = "bg-success text-white";
pub const HIDDEN_STYLE: &str = "display:none!important";

/// `data-action` value marking a row's delete control
pub const DELETE_ACTION: &str = "delete";

/// Attribute carrying the render-side row id on each `<li>`
pub const ROW_ID_ATTR: &str = "data-row";

pub const LOG_LEVEL: LevelFilter = if cfg!(debug_assertions) {
    LevelFilter::Debug
} else {
    LevelFilter::Info
};
