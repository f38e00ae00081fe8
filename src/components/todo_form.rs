//! Todo Form Component

use leptos::prelude::*;

use crate::context::use_todo_context;

#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_todo_context();
    let board = ctx.board();
    let value = Memo::new(move |_| board.with(|b| b.input().to_string()));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    view! {
        <form id="todo-form" on:submit=on_submit>
            <div class="input-group mb-3">
                <input
                    id="todo-input"
                    type="text"
                    class="form-control"
                    placeholder="New todo..."
                    prop:value=move || value.get()
                    on:input=move |ev| ctx.set_input(event_target_value(&ev))
                />
                <button type="submit" class="btn btn-primary">"Add"</button>
            </div>
        </form>
    }
}
