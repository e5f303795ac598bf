//! Report generation modules for different output formats
//!
//! This module contains report generators for the supported formats:
//! - human: styled console output, one rendering per walkthrough
//! - json: JSON format for programmatic use
//!
//! Each walkthrough has a small outcome type pairing the inputs with the
//! computed result; generators implement [`ReportGenerator`] per outcome.

pub mod human;
pub mod json;

use crate::core::CycleResult;
use crate::error::ChalkboardError;
use crate::list::LinkedList;

/// Common trait for all report generators
pub trait ReportGenerator<S> {
    /// Generate a report from a walkthrough outcome
    fn generate_report(&self, subject: &S) -> Result<String, ChalkboardError>;
}

/// Outcome of a chase run: the list that was built and what the detector
/// found in it
#[derive(Debug, Clone)]
pub struct ChaseOutcome {
    pub list: LinkedList,
    pub result: CycleResult,
}

/// Outcome of a triangle run
#[derive(Debug, Clone)]
pub struct TriangleOutcome {
    pub rows: Vec<Vec<u64>>,
}

/// Outcome of a zeros run, including the per-power terms that sum to the
/// total
#[derive(Debug, Clone)]
pub struct ZerosOutcome {
    pub n: u64,
    pub zeros: u64,
    pub terms: Vec<u64>,
}

// Re-export for convenience
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
