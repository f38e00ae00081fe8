//! Todo List Component
//!
//! Rows are keyed by their render state, so a highlight or visibility change
//! re-creates just that row. Delete clicks are handled once on the `<ul>`:
//! only targets marked `data-action="delete"` count, and the row is found
//! through the enclosing `<li data-row>`.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::{DELETE_ACTION, ROW_ID_ATTR};
use crate::context::use_todo_context;
use crate::models::TodoRow;

/// Row to delete, given the click target's `data-action` and the
/// enclosing row's `data-row`
fn row_to_delete(action: Option<&str>, row_attr: Option<&str>) -> Option<u64> {
    if action != Some(DELETE_ACTION) {
        return None;
    }
    row_attr?.parse().ok()
}

/// Row id of the `<li>` enclosing a delete control, if `target` is one
fn delete_target_row(target: &web_sys::HtmlElement) -> Option<u64> {
    let action = target.dataset().get("action");
    let row_attr = target
        .closest("li")
        .ok()
        .flatten()
        .and_then(|row| row.get_attribute(ROW_ID_ATTR));
    row_to_delete(action.as_deref(), row_attr.as_deref())
}

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_todo_context();
    let board = ctx.board();
    let rows = Memo::new(move |_| board.with(|b| b.rows().to_vec()));

    let on_click = move |ev: web_sys::MouseEvent| {
        let Some(target) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return;
        };
        if let Some(row_id) = delete_target_row(&target) {
            ctx.delete(row_id);
        }
    };

    view! {
        <ul id="todo-list" class="list-group" on:click=on_click>
            <For
                each=move || rows.get()
                key=|row| row.render_key()
                children=move |row| view! { <TodoRowView row=row /> }
            />
        </ul>
    }
}

#[component]
fn TodoRowView(row: TodoRow) -> impl IntoView {
    view! {
        <li class=row.css_class() style=row.style() data-row=row.id.to_string()>
            <span>{row.text.clone()}</span>
            <button class="delete-item btn btn-danger btn-sm" data-action=DELETE_ACTION>
                "Remove"
            </button>
        </li>
    }
}
