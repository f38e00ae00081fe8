//! Clear All Button Component

use leptos::prelude::*;

use crate::context::use_todo_context;

#[component]
pub fn ClearButton() -> impl IntoView {
    let ctx = use_todo_context();

    view! {
        <button
            id="todo-clear"
            type="button"
            class="btn btn-outline-danger w-100 mt-3"
            on:click=move |_| ctx.clear_all()
        >
            "Clear Todos"
        </button>
    }
}
