use crate::error::{ListError, ListResult};
use tracing::debug;

/// Result of adding an item that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The item was appended
    Added,

    /// The item was already present; the list is unchanged
    Duplicate,
}

/// Result of removing an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The item was removed
    Removed,

    /// The item was not in the list
    NotFound,
}

/// Ordered list of unique, non-empty items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemList {
    items: Vec<String>,
}

impl ItemList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `item` unless it is already present.
    ///
    /// # Errors
    ///
    /// Returns `ListError::EmptyItem` for an empty string.
    pub fn add_item(&mut self, item: &str) -> ListResult<AddOutcome> {
        if item.is_empty() {
            return Err(ListError::EmptyItem);
        }
        if self.contains(item) {
            debug!(item, "Duplicate item ignored");
            return Ok(AddOutcome::Duplicate);
        }
        self.items.push(item.to_string());
        Ok(AddOutcome::Added)
    }

    /// Remove the first occurrence of `item`.
    pub fn remove_item(&mut self, item: &str) -> RemoveOutcome {
        match self.items.iter().position(|i| i == item) {
            Some(index) => {
                self.items.remove(index);
                RemoveOutcome::Removed
            }
            None => RemoveOutcome::NotFound,
        }
    }

    /// A copy of the current items.
    pub fn items(&self) -> Vec<String> {
        self.items.clone()
    }

    /// Whether `item` is in the list.
    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
