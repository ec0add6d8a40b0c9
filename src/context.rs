//! Application Context
//!
//! The todo store signal, provided via Leptos Context API.

use leptos::prelude::*;

use crate::store::TodoStore;

/// App-wide handle to the todo store signal
///
/// The write half stays private; components mutate the store only through the
/// operation methods below. Each call publishes a whole new `(todos, draft)`
/// snapshot, which re-runs every subscribed view.
#[derive(Clone, Copy)]
pub struct TodoContext {
    /// Current store snapshot - read
    pub store: ReadSignal<TodoStore>,
    /// Current store snapshot - write
    set_store: WriteSignal<TodoStore>,
}

impl TodoContext {
    pub fn new(store: (ReadSignal<TodoStore>, WriteSignal<TodoStore>)) -> Self {
        Self {
            store: store.0,
            set_store: store.1,
        }
    }

    /// Replace the draft text
    pub fn set_draft(&self, text: String) {
        self.set_store.update(|store| store.set_draft(text));
    }

    /// Commit the current draft as a new todo
    pub fn add_todo(&self) {
        self.set_store.update(|store| store.add_todo());
    }

    /// Toggle completion of the todo with this id
    pub fn toggle_todo(&self, id: u64) {
        self.set_store.update(|store| store.toggle_todo(id));
    }

    /// Delete the todo with this id
    pub fn delete_todo(&self, id: u64) {
        self.set_store.update(|store| store.delete_todo(id));
    }
}

/// Get the todo context from Leptos context
pub fn use_todo_context() -> TodoContext {
    expect_context::<TodoContext>()
}
