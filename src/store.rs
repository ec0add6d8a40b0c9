//! Todo List Store
//!
//! Owns the ordered todo collection and the draft buffer. Every operation is a
//! total function over `(todos, draft)` with no failure path, so the whole
//! store is unit-testable without a rendering environment.

use crate::models::Todo;

/// In-memory todo list state plus the uncommitted entry text
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoStore {
    /// All todos, in insertion order (new todos append at the end)
    pub todos: Vec<Todo>,
    /// Text not yet committed as a todo
    pub draft: String,
    /// Next id to hand out; monotonic, so ids stay unique however fast
    /// todos are added
    next_id: u64,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the draft verbatim. Trimming happens only at commit time.
    pub fn set_draft(&mut self, text: String) {
        self.draft = text;
    }

    /// Commit the draft as a new todo at the end of the list.
    ///
    /// A draft that is empty after trimming commits nothing and is left
    /// as-is; a successful commit clears it.
    pub fn add_todo(&mut self) {
        let text = self.draft.trim();
        if text.is_empty() {
            return;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.todos.push(Todo::new(id, text.to_string()));
        self.draft.clear();
    }

    /// Flip the completed flag on the todo with this id, if it exists
    pub fn toggle_todo(&mut self, id: u64) {
        if let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == id) {
            todo.completed = !todo.completed;
        }
    }

    /// Remove the todo with this id, if it exists; order of the rest is kept
    pub fn delete_todo(&mut self, id: u64) {
        self.todos.retain(|todo| todo.id != id);
    }

    /// Whether the list has no todos (the views show a placeholder then)
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}
