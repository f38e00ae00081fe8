//! Todo List App
//!
//! Single-card layout: notice slot, add form, filter, list, clear button.

use leptos::prelude::*;

use crate::components::{ClearButton, NoticeArea, TodoFilter, TodoForm, TodoList};
use crate::context::TodoContext;

#[component]
pub fn App() -> impl IntoView {
    let ctx = TodoContext::new();
    provide_context(ctx);

    // Load stored todos on mount
    Effect::new(move |_| {
        ctx.load();
    });

    view! {
        <div class="container">
            <div class="row">
                <div class="col-md-8 mx-auto">
                    <div id="todo-area" class="card card-body mt-5">
                        <NoticeArea />
                        <h3 class="mb-3">"Todo List"</h3>
                        <TodoForm />
                        <TodoFilter />
                        <TodoList />
                        <ClearButton />
                    </div>
                </div>
            </div>
        </div>
    }
}
