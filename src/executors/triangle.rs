//! Triangle command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::OutputFormat;
use crate::config::TriangleConfig;
use crate::executors::CommandExecutor;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator, TriangleOutcome};
use crate::sequences::pascal;

pub struct TriangleExecutor;

impl CommandExecutor for TriangleExecutor {
    type Config = TriangleConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Stacking up {} rows of Pascal's triangle...\n",
            style("📐").cyan(),
            style(config.rows).bold()
        );

        let outcome = TriangleOutcome {
            rows: pascal::rows(config.rows),
        };

        let report_result = match config.format {
            OutputFormat::Human => HumanReportGenerator::new().generate_report(&outcome),
            OutputFormat::Json => JsonReportGenerator::new().generate_report(&outcome),
        };

        match report_result {
            Ok(report) => print!("{report}"),
            Err(e) => {
                return Err(e)
                    .into_diagnostic()
                    .wrap_err("Failed to generate report");
            }
        }

        Ok(())
    }
}
