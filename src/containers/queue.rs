//! FIFO queue over a singly-linked chain with O(1) append and removal.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;

type Link<T> = Option<Arc<Mutex<Node<T>>>>;

/// One chained node: a value and an exclusive forward link.
struct Node<T> {
    value: T,
    next: Link<T>,
}

/// First-in-first-out queue backed by a singly-linked chain.
///
/// The queue holds a strong reference to the first node and a weak reference
/// to the last. Every inner node is owned by its predecessor's forward link,
/// so a dequeued head has no remaining owner and its value moves out without
/// cloning. Links use `Arc<Mutex<..>>` so the queue stays `Send` with the
/// crate's `unsafe_code` denial in place; the per-node mutex is uncontended
/// because all mutation goes through `&mut self`.
pub struct Queue<T> {
    head: Link<T>,
    tail: Option<Weak<Mutex<Node<T>>>>,
    len: usize,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Create an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Append a value at the tail. O(1), infallible.
    pub fn enqueue(&mut self, value: T) {
        let node = Arc::new(Mutex::new(Node { value, next: None }));
        if let Some(tail) = self.tail.take().and_then(|weak| weak.upgrade()) {
            tail.lock().next = Some(Arc::clone(&node));
        }
        self.tail = Some(Arc::downgrade(&node));
        if self.head.is_none() {
            self.head = Some(node);
        }
        self.len += 1;
    }

    /// Remove and return the head value, or `None` when the queue is empty.
    ///
    /// Absence is a sentinel, not a failure.
    pub fn dequeue(&mut self) -> Option<T> {
        let node = self.head.take()?;
        self.head = node.lock().next.take();
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        match Arc::try_unwrap(node) {
            Ok(cell) => Some(cell.into_inner().value),
            // The chain link was just taken and the tail reference is weak.
            Err(_) => unreachable!("dequeued node must not have other owners"),
        }
    }

    /// Remove up to `count` values from the head, preserving FIFO order.
    ///
    /// Returns fewer than `count` values when the queue runs out; `count == 0`
    /// returns an empty vector without touching state.
    pub fn dequeue_count(&mut self, count: usize) -> Vec<T> {
        let mut values = Vec::with_capacity(count.min(self.len));
        for _ in 0..count {
            match self.dequeue() {
                Some(value) => values.push(value),
                None => break,
            }
        }
        values
    }

    /// Map the head value without removing it, or `None` when empty.
    pub fn peek_with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.head.as_ref().map(|node| f(&node.lock().value))
    }

    /// Clone of the head value without removing it, or `None` when empty.
    pub fn peek(&self) -> Option<T>
    where
        T: Clone,
    {
        self.peek_with(T::clone)
    }

    /// Number of queued values. O(1).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the queue holds no values. O(1).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T> Drop for Queue<T> {
    // Unlink iteratively; dropping a long chain recursively would blow the stack.
    fn drop(&mut self) {
        while self.dequeue().is_some() {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut q = Queue::new();
        for i in 1..=5 {
            q.enqueue(i);
        }

        for expected in 1..=5 {
            assert_eq!(q.dequeue(), Some(expected));
        }
        assert_eq!(q.dequeue(), None);
    }

    #[test]
    fn test_len_tracks_enqueues_and_dequeues() {
        let mut q = Queue::new();
        assert!(q.is_empty());

        for i in 0..4 {
            q.enqueue(i);
        }
        assert_eq!(q.len(), 4);

        q.dequeue();
        q.dequeue();
        assert_eq!(q.len(), 2);
        assert!(!q.is_empty());
    }

    #[test]
    fn test_dequeue_count_takes_min_of_count_and_len() {
        let mut q = Queue::new();
        for i in 1..=3 {
            q.enqueue(i);
        }

        assert_eq!(q.dequeue_count(2), vec![1, 2]);
        assert_eq!(q.len(), 1);

        // Requesting more than remains returns what is left, not an error.
        assert_eq!(q.dequeue_count(10), vec![3]);
        assert!(q.is_empty());
    }

    #[test]
    fn test_dequeue_count_zero_does_not_mutate() {
        let mut q = Queue::new();
        q.enqueue("a");
        assert!(q.dequeue_count(0).is_empty());
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn test_dequeue_count_on_empty_returns_empty_vec() {
        let mut q = Queue::<u32>::new();
        assert!(q.dequeue_count(3).is_empty());
    }

    #[test]
    fn test_peek_does_not_remove() {
        let mut q = Queue::new();
        assert_eq!(q.peek(), None::<i32>);

        q.enqueue(7);
        q.enqueue(8);
        assert_eq!(q.peek(), Some(7));
        assert_eq!(q.len(), 2);
        assert_eq!(q.peek_with(|v| v * 10), Some(70));
    }

    #[test]
    fn test_interleaved_enqueue_dequeue_keeps_order() {
        let mut q = Queue::new();
        q.enqueue(1);
        q.enqueue(2);
        assert_eq!(q.dequeue(), Some(1));
        q.enqueue(3);
        assert_eq!(q.dequeue(), Some(2));
        assert_eq!(q.dequeue(), Some(3));
        assert_eq!(q.dequeue(), None);

        // Tail is reset after full drain; the chain rebuilds from scratch.
        q.enqueue(4);
        assert_eq!(q.peek(), Some(4));
        assert_eq!(q.dequeue(), Some(4));
    }

    #[test]
    fn test_long_chain_drop_does_not_overflow() {
        let mut q = Queue::new();
        for i in 0..200_000 {
            q.enqueue(i);
        }
        drop(q);
    }
}
