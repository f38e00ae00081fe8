//! Notice Area Component
//!
//! Renders the single notice slot, if occupied.

use leptos::prelude::*;

use crate::context::use_todo_context;

#[component]
pub fn NoticeArea() -> impl IntoView {
    let board = use_todo_context().board();
    let notice = Memo::new(move |_| board.with(|b| b.notice().cloned()));

    move || {
        notice.get().map(|notice| view! {
            <div class=notice.kind.css_class() role="alert">{notice.message}</div>
        })
    }
}
