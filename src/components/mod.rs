//! UI Components
//!
//! Leptos views over the shared `TodoContext`.

mod clear_button;
mod notice_area;
mod todo_filter;
mod todo_form;
mod todo_list;

pub use clear_button::ClearButton;
pub use notice_area::NoticeArea;
pub use todo_filter::TodoFilter;
pub use todo_form::TodoForm;
pub use todo_list::TodoList;
