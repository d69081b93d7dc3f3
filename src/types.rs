//! Core todo data model and list mutations.

use crate::error::TodoError;
use crate::store::codec::FIELD_DELIMITER;

/// One todo entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub id: i64,
    pub text: String,
    pub done: bool,
}

impl TodoItem {
    pub fn new(id: i64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            done: false,
        }
    }
}

/// Ordered todo items plus the id counter for the next `add`.
///
/// `next_id` starts at `max(existing ids) + 1` (at least 1) and only moves
/// forward, so ids are never reused within a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<TodoItem>,
    next_id: i64,
}

impl Default for TodoList {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from already-persisted items, preserving their order.
    pub fn from_items(items: Vec<TodoItem>) -> Self {
        let next_id = items
            .iter()
            .map(|item| item.id)
            .max()
            .map_or(1, |max| max.saturating_add(1).max(1));
        Self { items, next_id }
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Id the next `add` will assign.
    pub fn next_id(&self) -> i64 {
        self.next_id
    }

    /// Append a new open item and return it.
    pub fn add(&mut self, text: impl Into<String>) -> Result<&TodoItem, TodoError> {
        let text = text.into();
        if text.contains(FIELD_DELIMITER) {
            return Err(TodoError::ReservedDelimiter(text));
        }
        let item = TodoItem::new(self.next_id, text);
        self.next_id = self.next_id.saturating_add(1);
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Mark the first item with exactly `text` as done.
    pub fn complete(&mut self, text: &str) -> Result<&TodoItem, TodoError> {
        let index = self.position(text)?;
        let item = &mut self.items[index];
        item.done = true;
        Ok(&*item)
    }

    /// Remove the first item with exactly `text`, shifting later items up.
    pub fn delete(&mut self, text: &str) -> Result<TodoItem, TodoError> {
        let index = self.position(text)?;
        Ok(self.items.remove(index))
    }

    /// Index of the first item whose text equals `text`.
    pub fn position(&self, text: &str) -> Result<usize, TodoError> {
        self.items
            .iter()
            .position(|item| item.text == text)
            .ok_or_else(|| TodoError::NotFound(text.to_string()))
    }
}
