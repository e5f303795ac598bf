//! Core data structures shared across the application
//!
//! Contains plain value types with minimal logic.

pub mod types;

pub use types::*;
