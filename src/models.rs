//! Todo Model
//!
//! Data structure for a single todo item.

use serde::{Deserialize, Serialize};

/// A single todo item
///
/// `id` and `text` are fixed at creation; only `completed` changes afterwards,
/// and only through [`crate::store::TodoStore::toggle_todo`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier, assigned by the store at creation
    pub id: u64,
    /// Display text, already trimmed by the store
    pub text: String,
    /// Completion status
    pub completed: bool,
}

impl Todo {
    /// Create a new, not-yet-completed todo
    pub fn new(id: u64, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}
