//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::{ChaseOutcome, ReportGenerator, TriangleOutcome, ZerosOutcome};
use crate::error::ChalkboardError;
use crate::utils::string::{arrow_chain, pluralize};

pub struct HumanReportGenerator;

impl Default for HumanReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator<ChaseOutcome> for HumanReportGenerator {
    fn generate_report(&self, subject: &ChaseOutcome) -> Result<String, ChalkboardError> {
        let mut output = String::new();

        if subject.list.is_empty() {
            writeln!(
                output,
                "\n{} The list is empty - nothing to chase.",
                style("ℹ").blue()
            )?;
            return Ok(output);
        }

        let chain = arrow_chain(subject.list.values());
        if subject.result.detected {
            let position = subject.result.position_or_sentinel();
            writeln!(
                output,
                "\n{} {}",
                style("❌").red().bold(),
                style("Cycle detected").red().bold()
            )?;
            writeln!(
                output,
                "\n  {} {} {} {}",
                style("🔗").cyan(),
                chain,
                style("↩").red(),
                style(format!("cycles to index #{position}")).red().bold()
            )?;
            writeln!(
                output,
                "\n  {} Entry node: value {} at position {}",
                style("🎯").yellow(),
                style(subject.result.entry_value.unwrap_or_default()).bold(),
                style(position).bold()
            )?;
        } else {
            writeln!(
                output,
                "\n{} {}",
                style("✅").green().bold(),
                style("No cycle").green().bold()
            )?;
            writeln!(output, "\n  {} {}", style("🔗").cyan(), chain)?;
        }

        writeln!(
            output,
            "\n{} The hare moves two links per step and the tortoise one; they can only meet \
             inside a cycle.",
            style("💡").yellow()
        )?;

        Ok(output)
    }
}

impl ReportGenerator<TriangleOutcome> for HumanReportGenerator {
    fn generate_report(&self, subject: &TriangleOutcome) -> Result<String, ChalkboardError> {
        let mut output = String::new();

        let row_count = subject.rows.len();
        writeln!(
            output,
            "\n{} Pascal's triangle, {} {}:\n",
            style("📐").cyan(),
            style(row_count).bold(),
            pluralize("row", row_count)
        )?;

        let rendered: Vec<String> = subject
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|entry| entry.to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();

        let width = rendered.last().map_or(0, String::len);
        for line in &rendered {
            writeln!(output, "  {:^width$}", line)?;
        }

        Ok(output)
    }
}

impl ReportGenerator<ZerosOutcome> for HumanReportGenerator {
    fn generate_report(&self, subject: &ZerosOutcome) -> Result<String, ChalkboardError> {
        let mut output = String::new();

        let n = subject.n;
        writeln!(
            output,
            "\n{} {}! ends in {} trailing {}",
            style("🔢").cyan(),
            style(n).bold(),
            style(subject.zeros).green().bold(),
            pluralize("zero", subject.zeros as usize)
        )?;

        if !subject.terms.is_empty() {
            writeln!(output, "\n  Counting the factors of five:")?;
            for (i, term) in subject.terms.iter().enumerate() {
                let power = 5u64.pow(i as u32 + 1);
                writeln!(
                    output,
                    "    {} {n} / {power} = {term}",
                    style("→").dim()
                )?;
            }
        }

        writeln!(
            output,
            "\n{} Every trailing zero needs a factor of 10, and fives are scarcer than twos.",
            style("💡").yellow()
        )?;

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CycleResult;
    use crate::list::LinkedList;

    #[test]
    fn test_chase_report_with_cycle() {
        let outcome = ChaseOutcome {
            list: LinkedList::build(&[3, 2, 0, -4], Some(1)),
            result: CycleResult::cycle_at(2, 1),
        };

        let report = HumanReportGenerator::new().generate_report(&outcome).unwrap();
        assert!(report.contains("Cycle detected"));
        assert!(report.contains("3 → 2 → 0 → -4"));
        assert!(report.contains("cycles to index #1"));
    }

    #[test]
    fn test_chase_report_without_cycle() {
        let outcome = ChaseOutcome {
            list: LinkedList::build(&[1, 2], None),
            result: CycleResult::acyclic(),
        };

        let report = HumanReportGenerator::new().generate_report(&outcome).unwrap();
        assert!(report.contains("No cycle"));
        assert!(report.contains("1 → 2"));
    }

    #[test]
    fn test_chase_report_empty_list() {
        let outcome = ChaseOutcome {
            list: LinkedList::build(&[], None),
            result: CycleResult::acyclic(),
        };

        let report = HumanReportGenerator::new().generate_report(&outcome).unwrap();
        assert!(report.contains("empty"));
    }

    #[test]
    fn test_triangle_report_contains_rows() {
        let outcome = TriangleOutcome {
            rows: crate::sequences::pascal::rows(5),
        };

        let report = HumanReportGenerator::new().generate_report(&outcome).unwrap();
        assert!(report.contains("5 rows"));
        assert!(report.contains("1 4 6 4 1"));
    }

    #[test]
    fn test_zeros_report_shows_terms() {
        let outcome = ZerosOutcome {
            n: 100,
            zeros: 24,
            terms: vec![20, 4],
        };

        let report = HumanReportGenerator::new().generate_report(&outcome).unwrap();
        assert!(report.contains("100! ends in 24 trailing zeros"));
        assert!(report.contains("100 / 5 = 20"));
        assert!(report.contains("100 / 25 = 4"));
    }
}
