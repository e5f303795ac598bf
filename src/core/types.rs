//! Core type definitions
//!
//! This module contains the basic data structures used throughout the
//! application, with minimal logic - focusing on data representation.

use serde::Serialize;

/// Outcome of running the cycle detector over a linked list
///
/// `entry_value` and `entry_position` are only meaningful when `detected`
/// is true. The position is the zero-based distance from the head to the
/// cycle's entry node along construction order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CycleResult {
    pub detected: bool,
    pub entry_value: Option<i64>,
    pub entry_position: Option<usize>,
}

impl CycleResult {
    /// The result for any acyclic list
    pub fn acyclic() -> Self {
        Self {
            detected: false,
            entry_value: None,
            entry_position: None,
        }
    }

    /// A detected cycle entering at `position` with the given node value
    pub fn cycle_at(value: i64, position: usize) -> Self {
        Self {
            detected: true,
            entry_value: Some(value),
            entry_position: Some(position),
        }
    }

    /// Entry position as the original UI encodes it: `-1` when absent
    pub fn position_or_sentinel(&self) -> i64 {
        match self.entry_position {
            Some(position) => position as i64,
            None => -1,
        }
    }
}
