//! Todo Filter Component

use leptos::prelude::*;

use crate::context::use_todo_context;

#[component]
pub fn TodoFilter() -> impl IntoView {
    let ctx = use_todo_context();

    view! {
        <input
            id="todo-filter"
            type="text"
            class="form-control mb-3"
            placeholder="Filter todos..."
            on:keyup=move |ev: web_sys::KeyboardEvent| ctx.filter(event_target_value(&ev))
        />
    }
}
