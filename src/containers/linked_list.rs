//! Doubly-linked list with bidirectional traversal and node-anchored inserts.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::core::SchedulerError;

/// Shared handle to a live list node, as returned by [`LinkedList::find`].
pub type NodeRef<T> = Rc<RefCell<Node<T>>>;

/// One list node holding a value, a strong forward link, and a weak back link.
pub struct Node<T> {
    value: T,
    next: Option<NodeRef<T>>,
    prev: Option<Weak<RefCell<Node<T>>>>,
}

impl<T> Node<T> {
    /// Borrow the stored value.
    pub const fn value(&self) -> &T {
        &self.value
    }
}

/// Doubly-linked list.
///
/// Forward links are strong (`Rc`), back links and the tail handle are weak,
/// which keeps the node graph cycle-free so plain drops reclaim it. Node
/// handles returned by `find`/`find_last` stay valid anchors for
/// [`insert_before`](Self::insert_before) and
/// [`insert_after`](Self::insert_after) until the node is removed.
pub struct LinkedList<T> {
    head: Option<NodeRef<T>>,
    tail: Option<Weak<RefCell<Node<T>>>>,
    len: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    /// Create an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Append a value at the tail. O(1).
    pub fn append(&mut self, value: T) {
        let node = Rc::new(RefCell::new(Node {
            value,
            next: None,
            prev: self.tail.clone(),
        }));
        if let Some(tail) = self.tail.take().and_then(|weak| weak.upgrade()) {
            tail.borrow_mut().next = Some(Rc::clone(&node));
        }
        self.tail = Some(Rc::downgrade(&node));
        if self.head.is_none() {
            self.head = Some(node);
        }
        self.len += 1;
    }

    /// Prepend a value at the head. O(1).
    pub fn prepend(&mut self, value: T) {
        let node = Rc::new(RefCell::new(Node {
            value,
            next: self.head.take(),
            prev: None,
        }));
        if let Some(next) = node.borrow().next.as_ref() {
            next.borrow_mut().prev = Some(Rc::downgrade(&node));
        }
        if self.tail.is_none() {
            self.tail = Some(Rc::downgrade(&node));
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Insert a value directly after `node`.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::InvalidReference`] when `node` is absent.
    pub fn insert_after(
        &mut self,
        node: Option<&NodeRef<T>>,
        value: T,
    ) -> Result<(), SchedulerError> {
        let anchor = node.ok_or(SchedulerError::InvalidReference)?;
        let new_node = Rc::new(RefCell::new(Node {
            value,
            next: anchor.borrow().next.clone(),
            prev: Some(Rc::downgrade(anchor)),
        }));
        let follower = new_node.borrow().next.clone();
        if let Some(next) = follower {
            next.borrow_mut().prev = Some(Rc::downgrade(&new_node));
        } else {
            // Anchor was the tail.
            self.tail = Some(Rc::downgrade(&new_node));
        }
        anchor.borrow_mut().next = Some(new_node);
        self.len += 1;
        Ok(())
    }

    /// Insert a value directly before `node`.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::InvalidReference`] when `node` is absent.
    pub fn insert_before(
        &mut self,
        node: Option<&NodeRef<T>>,
        value: T,
    ) -> Result<(), SchedulerError> {
        let anchor = node.ok_or(SchedulerError::InvalidReference)?;
        let predecessor = anchor.borrow().prev.clone().and_then(|weak| weak.upgrade());
        let new_node = Rc::new(RefCell::new(Node {
            value,
            next: Some(Rc::clone(anchor)),
            prev: anchor.borrow().prev.clone(),
        }));
        if let Some(prev) = predecessor {
            prev.borrow_mut().next = Some(Rc::clone(&new_node));
        } else {
            // Anchor was the head.
            self.head = Some(Rc::clone(&new_node));
        }
        anchor.borrow_mut().prev = Some(Rc::downgrade(&new_node));
        self.len += 1;
        Ok(())
    }

    /// Forward-traverse for the first node holding `value`.
    pub fn find(&self, value: &T) -> Option<NodeRef<T>>
    where
        T: PartialEq,
    {
        let mut current = self.head.clone();
        while let Some(node) = current {
            if node.borrow().value == *value {
                return Some(node);
            }
            current = node.borrow().next.clone();
        }
        None
    }

    /// Backward-traverse for the last node holding `value`.
    pub fn find_last(&self, value: &T) -> Option<NodeRef<T>>
    where
        T: PartialEq,
    {
        let mut current = self.tail.clone().and_then(|weak| weak.upgrade());
        while let Some(node) = current {
            if node.borrow().value == *value {
                return Some(node);
            }
            current = node.borrow().prev.clone().and_then(|weak| weak.upgrade());
        }
        None
    }

    /// Position of the first occurrence of `value`, front to back.
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let mut current = self.head.clone();
        let mut index = 0;
        while let Some(node) = current {
            if node.borrow().value == *value {
                return Some(index);
            }
            current = node.borrow().next.clone();
            index += 1;
        }
        None
    }

    /// Position of the last occurrence of `value`, scanned back to front.
    pub fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let mut current = self.tail.clone().and_then(|weak| weak.upgrade());
        let mut index = self.len;
        while let Some(node) = current {
            index -= 1;
            if node.borrow().value == *value {
                return Some(index);
            }
            current = node.borrow().prev.clone().and_then(|weak| weak.upgrade());
        }
        None
    }

    /// Unlink the first node holding `value`; `false` when no node matches.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let mut current = self.head.clone();
        while let Some(node) = current {
            if node.borrow().value == *value {
                self.unlink(&node);
                return true;
            }
            current = node.borrow().next.clone();
        }
        false
    }

    /// Drop every node. Subsequent use behaves like a fresh list.
    pub fn clear(&mut self) {
        // Break the strong forward chain iteratively; a recursive chain drop
        // would overflow on long lists.
        let mut current = self.head.take();
        while let Some(node) = current {
            current = node.borrow_mut().next.take();
        }
        self.tail = None;
        self.len = 0;
    }

    /// Number of listed values. O(1).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no values. O(1).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Snapshot of the values front to back.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut values = Vec::with_capacity(self.len);
        let mut current = self.head.clone();
        while let Some(node) = current {
            values.push(node.borrow().value.clone());
            current = node.borrow().next.clone();
        }
        values
    }

    fn unlink(&mut self, node: &NodeRef<T>) {
        let prev = node.borrow().prev.clone().and_then(|weak| weak.upgrade());
        let next = node.borrow().next.clone();

        if let Some(prev_node) = &prev {
            prev_node.borrow_mut().next = next.clone();
        } else {
            self.head = next.clone();
        }

        if let Some(next_node) = &next {
            next_node.borrow_mut().prev = prev.as_ref().map(Rc::downgrade);
        } else {
            self.tail = prev.as_ref().map(Rc::downgrade);
        }

        node.borrow_mut().next = None;
        node.borrow_mut().prev = None;
        self.len -= 1;
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}
