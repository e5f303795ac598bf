use clap::{Parser, Subcommand};

use crate::common::FormatArgs;

#[derive(Parser)]
#[command(
    name = "chalkboard",
    about = "📐 Classic algorithm walkthroughs in your terminal",
    long_about = "chalkboard demonstrates three textbook algorithms with terminal-friendly \
                  visualizations: linked-list cycle detection (Floyd's tortoise and hare), \
                  Pascal's triangle generation, and counting the trailing zeros of a factorial.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Send the tortoise and the hare after a cycle
    ///
    /// Builds a singly linked list and runs Floyd's two-phase cycle
    /// detection over it. Provide explicit node values (and optionally a
    /// cycle index) to study a specific list, or give no values to get a
    /// randomized five-node demo list that may or may not contain a cycle.
    #[command(
        long_about = "Build a linked list and detect whether it contains a cycle. Phase 1 chases \
                      a fast cursor (two links per step) with a slow one (one link per step); a \
                      meeting proves a cycle. Phase 2 walks a cursor from the head alongside the \
                      meeting-point cursor to locate the node where the cycle begins. With no \
                      --values, a demo list is sampled: five nodes with values in [-9, 9] and a \
                      cycle on a coin flip."
    )]
    Chase {
        /// Node values in list order, comma separated (random demo list if
        /// omitted)
        #[arg(
            long,
            value_name = "VALUES",
            value_delimiter = ',',
            allow_hyphen_values = true,
            env = "CHALKBOARD_VALUES"
        )]
        values: Option<Vec<i64>>,

        /// Index the tail links back to (out-of-range means no cycle)
        #[arg(long, value_name = "INDEX", env = "CHALKBOARD_CYCLE_INDEX")]
        cycle_index: Option<usize>,

        /// Seed for the randomized demo list, for reproducible runs
        #[arg(long, value_name = "SEED", env = "CHALKBOARD_SEED")]
        seed: Option<u64>,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Stack up rows of Pascal's triangle
    ///
    /// Generates the first N rows of Pascal's triangle using the binomial
    /// recurrence and renders them centered, the way the blackboard
    /// drawing looks.
    #[command(
        long_about = "Generate rows of Pascal's triangle. Every row starts and ends with 1, and \
                      each interior entry is the sum of the two entries above it. The demo \
                      renders up to 8 rows."
    )]
    Triangle {
        /// Number of rows to generate
        #[arg(
            long,
            value_name = "ROWS",
            default_value = "5",
            value_parser = clap::value_parser!(u8).range(1..=crate::constants::triangle::MAX_ROWS as i64),
            env = "CHALKBOARD_ROWS"
        )]
        rows: u8,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Count the zeros trailing a factorial
    ///
    /// Computes how many zeros end N! without computing the factorial
    /// itself, by counting factors of five.
    #[command(
        long_about = "Count the trailing zeros of N! for 0 <= N <= 500. Each trailing zero comes \
                      from a factor of 10 = 2 x 5, and fives are the scarce factor, so the count \
                      is N/5 + N/25 + N/125 + ... The human output shows each term of that sum."
    )]
    Zeros {
        /// The n in n!
        #[arg(value_name = "N", env = "CHALKBOARD_N")]
        n: u64,

        #[command(flatten)]
        format: FormatArgs,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_chase_parses_negative_values() {
        let cli = Cli::parse_from(["chalkboard", "chase", "--values", "3,2,0,-4"]);
        match cli.command {
            Commands::Chase { values, .. } => {
                assert_eq!(values, Some(vec![3, 2, 0, -4]));
            }
            _ => panic!("Expected Chase command"),
        }
    }

    #[test]
    fn test_triangle_rejects_too_many_rows() {
        let result = Cli::try_parse_from(["chalkboard", "triangle", "--rows", "9"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_zeros_parses_positional() {
        let cli = Cli::parse_from(["chalkboard", "zeros", "120"]);
        match cli.command {
            Commands::Zeros { n, .. } => assert_eq!(n, 120),
            _ => panic!("Expected Zeros command"),
        }
    }
}
