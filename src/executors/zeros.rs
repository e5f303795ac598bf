//! Zeros command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::OutputFormat;
use crate::config::ZerosConfig;
use crate::executors::CommandExecutor;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator, ZerosOutcome};
use crate::sequences::factorial;

pub struct ZerosExecutor;

impl CommandExecutor for ZerosExecutor {
    type Config = ZerosConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Counting the zeros trailing {}!...\n",
            style("🔢").cyan(),
            style(config.n).bold()
        );

        let zeros = factorial::trailing_zeros(config.n)
            .into_diagnostic()
            .wrap_err("Failed to count trailing zeros")?;

        let outcome = ZerosOutcome {
            n: config.n,
            zeros,
            terms: factorial::reduction_terms(config.n),
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
