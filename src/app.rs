//! Todo App Root Component
//!
//! Owns the store signal for the lifetime of the mount.

use leptos::prelude::*;

use crate::components::{NewTodoForm, TodoList};
use crate::context::TodoContext;
use crate::store::TodoStore;

#[component]
pub fn App() -> impl IntoView {
    // State: created empty on mount, discarded on unmount
    let (store, set_store) = signal(TodoStore::new());

    // Provide context to all children
    provide_context(TodoContext::new((store, set_store)));

    // Log every published snapshot
    Effect::new(move |_| {
        let snapshot = store.get();
        web_sys::console::log_1(
            &format!(
                "[APP] {} todos, draft {:?}",
                snapshot.todos.len(),
                snapshot.draft
            )
            .into(),
        );
    });

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"Todo App"</h1>

                <NewTodoForm />

                <TodoList />

                <p class="item-count">{move || format!("{} todos", store.get().todos.len())}</p>
            </main>
        </div>
    }
}
