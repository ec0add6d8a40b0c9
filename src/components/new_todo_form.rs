//! New Todo Form Component
//!
//! Text entry for composing a new todo.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_todo_context;

/// Form for committing the draft as a new todo
///
/// Submitting (Enter or the Add button) commits the draft; a whitespace-only
/// draft commits nothing and stays in the input.
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_todo_context();

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.add_todo();
    };

    view! {
        <form class="new-todo-form" on:submit=add_todo>
            <input
                type="text"
                placeholder="Add a new todo..."
                prop:value=move || ctx.store.get().draft
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    ctx.set_draft(input.value());
                }
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
