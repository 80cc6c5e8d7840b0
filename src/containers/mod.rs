//! Container primitives.

pub mod linked_list;
pub mod queue;
pub mod stack;

pub use linked_list::{LinkedList, NodeRef};
pub use queue::Queue;
pub use stack::Stack;
