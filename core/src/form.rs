//! Editable mirror of one todo's fields.

use crate::error::FormError;
use crate::types::{CreateTodo, Todo};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoForm {
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl TodoForm {
    pub fn from_todo(todo: &Todo) -> Self {
        Self {
            title: todo.title.clone(),
            description: todo.description.clone(),
            completed: todo.completed,
        }
    }

    /// Normalized payload for create or update. Only the title is checked.
    pub fn validate(&self) -> Result<CreateTodo, FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::TitleRequired);
        }
        Ok(CreateTodo {
            title: title.to_string(),
            description: self.description.clone(),
            completed: self.completed,
        })
    }

    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}
