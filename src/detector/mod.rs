//! # Cycle Detection Module
//!
//! This module decides whether a linked list contains a cycle and, when it
//! does, locates the node where the cycle begins.
//!
//! ## Algorithm
//!
//! Floyd's tortoise-and-hare runs in two phases. Phase 1 advances a slow
//! cursor one link and a fast cursor two links per step; the cursors can
//! only meet inside a cycle, so a meeting proves one exists. Phase 2
//! restarts a cursor from the head and walks both one link at a time; the
//! meeting-point arithmetic guarantees they converge exactly at the
//! cycle's entry node. Total work is O(n) with O(1) extra space.
//!
//! ## Example
//!
//! ```
//! use chalkboard::detector::CycleDetector;
//! use chalkboard::list::LinkedList;
//!
//! let list = LinkedList::build(&[3, 2, 0, -4], Some(1));
//! let result = CycleDetector::new().detect(&list);
//!
//! assert!(result.detected);
//! assert_eq!(result.entry_value, Some(2));
//! assert_eq!(result.entry_position, Some(1));
//! ```

mod detector_impl;

pub use detector_impl::*;
