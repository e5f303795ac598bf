//! Chase command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::OutputFormat;
use crate::config::ChaseConfig;
use crate::demo;
use crate::detector::CycleDetector;
use crate::executors::CommandExecutor;
use crate::list::LinkedList;
use crate::reports::{ChaseOutcome, HumanReportGenerator, JsonReportGenerator, ReportGenerator};

pub struct ChaseExecutor;

impl CommandExecutor for ChaseExecutor {
    type Config = ChaseConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let (values, cycle_index) = match &config.values {
            Some(values) => (values.clone(), config.cycle_index),
            None => {
                eprintln!(
                    "{} Sampling a random demo list...\n",
                    style("🎲").cyan()
                );
                let input = demo::sample(&mut demo::demo_rng(config.seed));
                (input.values, input.cycle_index)
            }
        };

        eprintln!(
            "{} Sending the tortoise and the hare after {} {}...\n",
            style("🐢").cyan(),
            style(values.len()).bold(),
            crate::utils::string::pluralize("node", values.len())
        );

        let list = LinkedList::build(&values, cycle_index);
        let result = CycleDetector::new().detect(&list);
        let outcome = ChaseOutcome { list, result };

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
