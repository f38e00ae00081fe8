//! Board State
//!
//! What the page shows: the rows, the single notice slot and the todo input.
//! Plain data so the event handlers can be exercised without a browser; the
//! Leptos context wraps it in a signal.

use crate::filter;
use crate::models::{Deferred, Notice, NoticeKind, TodoRow};

#[derive(Debug, Clone, Default)]
pub struct BoardState {
    rows: Vec<TodoRow>,
    notice: Option<Notice>,
    input: String,
    next_row_id: u64,
    next_notice_id: u64,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[TodoRow] {
        &self.rows
    }

    /// Row texts in display order
    #[cfg(test)]
    pub fn texts(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.text.clone()).collect()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    // ========================
    // Rows
    // ========================

    /// Add a row at the end. Also clears the input and hides the notice.
    pub fn append(&mut self, text: &str, highlight: bool) -> Vec<Deferred> {
        let id = self.next_row_id;
        self.next_row_id += 1;
        self.rows.push(TodoRow::new(id, text, highlight));
        self.input.clear();

        let mut deferred = Vec::new();
        if let Some(hide) = self.hide_notice() {
            deferred.push(hide);
        }
        if highlight {
            deferred.push(Deferred::Unhighlight);
        }
        deferred
    }

    pub fn clear_all(&mut self) {
        self.rows.clear();
    }

    /// Remove one row by id; unknown ids are ignored
    pub fn remove_row(&mut self, id: u64) -> Option<TodoRow> {
        let index = self.rows.iter().position(|row| row.id == id)?;
        Some(self.rows.remove(index))
    }

    /// Clears the highlight from every row, not only the newest one
    pub fn unhighlight_all(&mut self) {
        for row in self.rows.iter_mut().filter(|row| row.highlighted) {
            row.highlighted = false;
        }
    }

    /// Hide rows whose text does not contain `value`
    pub fn apply_filter(&mut self, value: &str) {
        for row in &mut self.rows {
            row.hidden = !filter::is_visible(&row.text, value);
        }
    }

    // ========================
    // Notice
    // ========================

    /// Show a notice unless one is already up. Returns whether it was shown.
    pub fn show_notice(&mut self, kind: NoticeKind, message: &str) -> bool {
        if self.notice.is_some() {
            return false;
        }
        let id = self.next_notice_id;
        self.next_notice_id += 1;
        self.notice = Some(Notice {
            id,
            kind,
            message: message.to_string(),
        });
        true
    }

    /// Schedule removal of the visible notice. The notice stays up until the
    /// returned action runs.
    pub fn hide_notice(&self) -> Option<Deferred> {
        self.notice
            .as_ref()
            .map(|notice| Deferred::DismissNotice(notice.id))
    }

    /// Remove the notice if it is still the one with `id`
    pub fn dismiss_notice(&mut self, id: u64) {
        if self.notice.as_ref().is_some_and(|notice| notice.id == id) {
            self.notice = None;
        }
    }

    pub fn run_deferred(&mut self, action: Deferred) {
        match action {
            Deferred::Unhighlight => self.unhighlight_all(),
            Deferred::DismissNotice(id) => self.dismiss_notice(id),
        }
    }
}
