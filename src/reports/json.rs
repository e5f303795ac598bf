//! JSON format report generation

use serde_json::json;

use super::{ChaseOutcome, ReportGenerator, TriangleOutcome, ZerosOutcome};
use crate::error::ChalkboardError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator<ChaseOutcome> for JsonReportGenerator {
    fn generate_report(&self, subject: &ChaseOutcome) -> Result<String, ChalkboardError> {
        let values: Vec<i64> = subject.list.values().collect();

        let report = json!({
            "values": values,
            "detected": subject.result.detected,
            "entry_value": subject.result.entry_value,
            // -1 when no cycle, matching the visualizer's contract
            "entry_position": subject.result.position_or_sentinel(),
        });

        serde_json::to_string_pretty(&report).map_err(ChalkboardError::Json)
    }
}

impl ReportGenerator<TriangleOutcome> for JsonReportGenerator {
    fn generate_report(&self, subject: &TriangleOutcome) -> Result<String, ChalkboardError> {
        let report = json!({
            "row_count": subject.rows.len(),
            "rows": subject.rows,
        });

        serde_json::to_string_pretty(&report).map_err(ChalkboardError::Json)
    }
}

impl ReportGenerator<ZerosOutcome> for JsonReportGenerator {
    fn generate_report(&self, subject: &ZerosOutcome) -> Result<String, ChalkboardError> {
        let report = json!({
            "n": subject.n,
            "trailing_zeros": subject.zeros,
            "terms": subject.terms,
        });

        serde_json::to_string_pretty(&report).map_err(ChalkboardError::Json)
    }
}
