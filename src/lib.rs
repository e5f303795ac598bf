//! # Chalkboard - Classic Algorithm Walkthroughs in Your Terminal
//!
//! Chalkboard demonstrates three textbook algorithms the way they are drawn
//! on a classroom board: linked-list cycle detection with Floyd's tortoise
//! and hare, Pascal's triangle generation, and counting the trailing zeros
//! of a factorial.
//!
//! ## Main Components
//!
//! - **List**: Builds arena-backed singly linked lists, optionally closing
//!   the tail into a cycle
//! - **Detector**: Implements two-phase Floyd cycle detection
//! - **Sequences**: The Pascal's-triangle and trailing-zeros collaborators
//! - **Reports**: Generates human-readable and machine-readable reports
//!
//! ## Usage
//!
//! ### Example: Detecting a Cycle in a Hand-Built List
//!
//! ```
//! use chalkboard::detector::CycleDetector;
//! use chalkboard::list::LinkedList;
//!
//! // A rho-shaped list: 3 → 2 → 0 → -4, with the tail linking back to
//! // index 1
//! let list = LinkedList::build(&[3, 2, 0, -4], Some(1));
//!
//! let result = CycleDetector::new().detect(&list);
//!
//! assert!(result.detected);
//! assert_eq!(result.entry_value, Some(2));
//! assert_eq!(result.entry_position, Some(1));
//! ```
//!
//! ### Example: Reporting on a Randomized Demo List
//!
//! ```
//! use chalkboard::demo;
//! use chalkboard::detector::CycleDetector;
//! use chalkboard::list::LinkedList;
//! use chalkboard::reports::{ChaseOutcome, JsonReportGenerator, ReportGenerator};
//!
//! # fn main() -> miette::Result<()> {
//! // Five nodes with values in [-9, 9]; a cycle on a coin flip
//! let input = demo::sample(&mut demo::demo_rng(Some(42)));
//! let list = LinkedList::build(&input.values, input.cycle_index);
//!
//! let result = CycleDetector::new().detect(&list);
//!
//! let generator = JsonReportGenerator::new();
//! let report = generator.generate_report(&ChaseOutcome { list, result })?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: The Supporting Sequences
//!
//! ```
//! use chalkboard::sequences::{factorial, pascal};
//!
//! # fn main() -> miette::Result<()> {
//! let triangle = pascal::rows(5);
//! assert_eq!(triangle[4], vec![1, 4, 6, 4, 1]);
//!
//! let zeros = factorial::trailing_zeros(100)?;
//! assert_eq!(zeros, 24);
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod demo;
pub mod detector;
pub mod error;
pub mod executors;
pub mod list;
pub mod reports;
pub mod sequences;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();

    execute_command(cli.command)
}
