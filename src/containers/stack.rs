//! LIFO stack over an owned singly-linked chain.

/// One stack node; each node owns the one below it.
struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// Last-in-first-out stack.
///
/// Only the top of the chain is ever touched, so plain `Box` ownership gives
/// O(1) push and pop with no shared references at all.
pub struct Stack<T> {
    top: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Create an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { top: None, len: 0 }
    }

    /// Push a value on top. O(1).
    pub fn push(&mut self, value: T) {
        let node = Box::new(Node {
            value,
            next: self.top.take(),
        });
        self.top = Some(node);
        self.len += 1;
    }

    /// Remove and return the top value, or `None` when the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        let node = self.top.take()?;
        self.top = node.next;
        self.len -= 1;
        Some(node.value)
    }

    /// Borrow the top value without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.top.as_deref().map(|node| &node.value)
    }

    /// Number of stacked values. O(1).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the stack holds no values. O(1).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T> Drop for Stack<T> {
    // Unlink iteratively; a recursive chain drop would overflow on deep stacks.
    fn drop(&mut self) {
        while self.pop().is_some() {}
    }
}
