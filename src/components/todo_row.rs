//! Todo Row Component
//!
//! Individual row in the todo list.

use leptos::prelude::*;

use crate::context::use_todo_context;
use crate::models::Todo;

/// A single todo row: click the text to toggle, the × button to delete
#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let ctx = use_todo_context();

    let id = todo.id;
    let completed = todo.completed;
    let text = todo.text.clone();

    view! {
        <li class=move || if completed { "todo-row completed" } else { "todo-row" }>
            <span
                class="todo-text"
                on:click=move |_| ctx.toggle_todo(id)
            >
                {text}
            </span>
            <button
                class="delete-btn"
                on:click=move |ev| {
                    ev.stop_propagation();
                    ctx.delete_todo(id);
                }
            >
                "×"
            </button>
        </li>
    }
}
