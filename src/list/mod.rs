//! # Linked List Module
//!
//! This module builds the singly linked lists the cycle detector walks.
//!
//! ## Representation
//!
//! Nodes live in an arena owned by the [`LinkedList`]; a node's `next` is
//! an index into that arena rather than an owning pointer. A cyclic list is
//! therefore just an index pointing backwards - storage lifetime stays with
//! the list and no reference cycle can leak.
//!
//! ## Example
//!
//! ```
//! use chalkboard::list::LinkedList;
//!
//! // A rho-shaped list: 3 → 2 → 0 → -4 → (back to 2)
//! let list = LinkedList::build(&[3, 2, 0, -4], Some(1));
//!
//! assert_eq!(list.len(), 4);
//! assert_eq!(list.head(), Some(0));
//! assert_eq!(list.next(3), Some(1));
//! ```

mod builder;

pub use builder::*;
