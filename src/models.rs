//! Frontend Models
//!
//! Rows, notices and the deferred actions the board schedules.

use std::fmt;

use crate::config::{HIDDEN_STYLE, HIGHLIGHT_CLASS, HIGHLIGHT_MS, NOTICE_HIDE_MS, ROW_CLASS};

/// A rendered todo row.
///
/// `id` is session-local and only identifies the row in the view; storage
/// knows nothing but the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRow {
    pub id: u64,
    pub text: String,
    pub highlighted: bool,
    pub hidden: bool,
}

impl TodoRow {
    pub fn new(id: u64, text: impl Into<String>, highlighted: bool) -> Self {
        Self {
            id,
            text: text.into(),
            highlighted,
            hidden: false,
        }
    }

    /// Key for keyed rendering; changes whenever the row's look changes
    pub fn render_key(&self) -> (u64, bool, bool) {
        (self.id, self.highlighted, self.hidden)
    }

    pub fn css_class(&self) -> String {
        if self.highlighted {
            format!("{} {}", ROW_CLASS, HIGHLIGHT_CLASS)
        } else {
            ROW_CLASS.to_string()
        }
    }

    pub fn style(&self) -> &'static str {
        if self.hidden { HIDDEN_STYLE } else { "" }
    }
}

/// Bootstrap alert flavours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
    Light,
    Dark,
}

impl NoticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::Primary => "primary",
            NoticeKind::Secondary => "secondary",
            NoticeKind::Success => "success",
            NoticeKind::Danger => "danger",
            NoticeKind::Warning => "warning",
            NoticeKind::Info => "info",
            NoticeKind::Light => "light",
            NoticeKind::Dark => "dark",
        }
    }

    pub fn css_class(&self) -> String {
        format!("alert alert-{}", self.as_str())
    }
}

impl fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// Work to run after a fixed delay.
///
/// Handlers return these instead of touching timers so they stay testable
/// off the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    /// Clear the highlight from every highlighted row
    Unhighlight,
    /// Remove the notice with this id, if it is still the one shown
    DismissNotice(u64),
}

impl Deferred {
    pub fn delay_ms(&self) -> u32 {
        match self {
            Deferred::Unhighlight => HIGHLIGHT_MS,
            Deferred::DismissNotice(_) => NOTICE_HIDE_MS,
        }
    }
}
