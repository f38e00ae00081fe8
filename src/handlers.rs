//! Event Handlers
//!
//! One function per user intent. Each mutates the board and the store and
//! hands back the delayed work it wants scheduled. Storage write failures are
//! logged and do not stop the view from updating.

use crate::board::BoardState;
use crate::config::{EMPTY_TODO_MESSAGE, REMOVED_MESSAGE};
use crate::error::StorageResult;
use crate::models::{Deferred, NoticeKind};
use crate::storage::{StorageBackend, TodoStore};

fn log_failure<T>(action: &str, result: StorageResult<T>) -> Option<T> {
    result
        .map_err(|err| log::error!(target: "todo", "failed to {}: {}", action, err))
        .ok()
}

/// Form submit: add the trimmed input, or complain when it is empty
pub fn submit<B: StorageBackend>(board: &mut BoardState, store: &mut TodoStore<B>) -> Vec<Deferred> {
    let todo = board.input().trim().to_string();

    if todo.is_empty() {
        board.show_notice(NoticeKind::Danger, EMPTY_TODO_MESSAGE);
        return Vec::new();
    }

    let deferred = board.append(&todo, true);
    log_failure("save todo", store.push(&todo));
    log::debug!(target: "todo", "added '{}'", todo);
    deferred
}

/// Delete click on a row. The row itself goes away; in storage the first
/// entry with the same text is removed.
pub fn delete_row<B: StorageBackend>(
    board: &mut BoardState,
    store: &mut TodoStore<B>,
    row_id: u64,
) -> Vec<Deferred> {
    let Some(row) = board.remove_row(row_id) else {
        log::debug!(target: "todo", "row {} already gone", row_id);
        return Vec::new();
    };

    if log_failure("remove todo", store.remove_first(&row.text)) == Some(false) {
        log::warn!(target: "todo", "'{}' was not in storage", row.text);
    }
    board.show_notice(NoticeKind::Info, REMOVED_MESSAGE);
    Vec::new()
}

/// Clear-all: empty the list and drop the storage key
pub fn clear_all<B: StorageBackend>(board: &mut BoardState, store: &mut TodoStore<B>) -> Vec<Deferred> {
    board.clear_all();
    log_failure("clear todos", store.clear());
    Vec::new()
}

/// Initial load: render every stored todo without highlight
pub fn load<B: StorageBackend>(board: &mut BoardState, store: &mut TodoStore<B>) -> Vec<Deferred> {
    let todos = store.load();
    log::info!(target: "todo", "loaded {} todos", todos.len());

    let mut deferred = Vec::new();
    for todo in &todos {
        deferred.extend(board.append(todo, false));
    }
    deferred
}

/// Filter keystroke
pub fn filter(board: &mut BoardState, value: &str) {
    board.apply_filter(value);
}
