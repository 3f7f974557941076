//! Client-side cache of the server's todo list.
//!
//! Refreshed wholesale only on load. Mutations are patched in from the
//! server's response payload rather than re-fetched.

use crate::types::{Todo, TodoId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<Todo>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace_all(&mut self, items: Vec<Todo>) {
        self.items = items;
    }

    /// New items go to the top.
    pub fn prepend(&mut self, todo: Todo) {
        self.items.insert(0, todo);
    }

    /// Swaps in `todo` wherever an item has `id`. Returns whether anything matched.
    pub fn replace(&mut self, id: &TodoId, todo: Todo) -> bool {
        let mut matched = false;
        for slot in self.items.iter_mut().filter(|t| &t.id == id) {
            *slot = todo.clone();
            matched = true;
        }
        matched
    }

    /// Drops every item with `id`. Returns how many were removed.
    pub fn remove(&mut self, id: &TodoId) -> usize {
        let before = self.items.len();
        self.items.retain(|t| &t.id != id);
        before - self.items.len()
    }

    pub fn get(&self, id: &TodoId) -> Option<&Todo> {
        self.items.iter().find(|t| &t.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Todo] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
