//! Todo List View Component
//!
//! Displays the todos in insertion order, with a placeholder when empty.

use leptos::prelude::*;

use crate::context::use_todo_context;
use crate::components::TodoRow;

/// The todo list, one row per todo
#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_todo_context();

    let todos = move || ctx.store.get().todos;

    view! {
        <ul class="todo-list">
            <Show when=move || ctx.store.get().is_empty()>
                <li class="empty-placeholder">"No todos yet!"</li>
            </Show>
            <For
                each=todos
                // Key on the mutable field too so a toggle re-renders the row
                key=|todo| (todo.id, todo.completed)
                children=move |todo| {
                    view! { <TodoRow todo=todo /> }
                }
            />
        </ul>
    }
}
