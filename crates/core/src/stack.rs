//! A last-in-first-out container.

use thiserror::Error;

/// Errors from [`Stack`] operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    /// `pop` or `peek` was called with no items on the stack.
    #[error("stack is empty")]
    Empty,
}

/// A LIFO stack: the last item pushed is the first one retrieved.
///
/// ```
/// use shopkit_core::{Stack, StackError};
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(stack.peek(), Ok(&2));
/// assert_eq!(stack.pop(), Ok(2));
/// assert_eq!(stack.pop(), Ok(1));
/// assert_eq!(stack.pop(), Err(StackError::Empty));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Create an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Push `item` on top of the stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the top item.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Empty`] if the stack has no items.
    pub fn pop(&mut self) -> Result<T, StackError> {
        self.items.pop().ok_or(StackError::Empty)
    }

    /// Return the top item without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Empty`] if the stack has no items.
    pub fn peek(&self) -> Result<&T, StackError> {
        self.items.last().ok_or(StackError::Empty)
    }

    /// Whether the stack has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items on the stack.
    #[must_use]
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

/// Drains the stack in pop order (top first).
impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = std::iter::Rev<std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter().rev()
    }
}
