//! Configuration constants for chalkboard
//!
//! This module centralizes the fixed policies the demo commands rely on:
//! the randomized list shape, the factorial input domain, and output
//! defaults.

/// Randomized linked-list demo policy
///
/// Matches the classroom demo exactly: five nodes, small signed values,
/// a cycle on a coin flip.
pub mod demo {
    /// Number of nodes generated per randomized list
    pub const NODE_COUNT: usize = 5;

    /// Inclusive lower bound for sampled node values
    pub const MIN_VALUE: i64 = -9;

    /// Inclusive upper bound for sampled node values
    pub const MAX_VALUE: i64 = 9;

    /// Probability that the sampled list contains a cycle
    pub const CYCLE_PROBABILITY: f64 = 0.5;
}

/// Factorial trailing-zeros configuration
pub mod factorial {
    /// Largest n for which n! trailing zeros are computed
    pub const MAX_INPUT: u64 = 500;
}

/// Pascal's triangle demo configuration
pub mod triangle {
    /// Largest row count the demo command renders
    pub const MAX_ROWS: usize = 8;
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_constants() {
        assert_eq!(demo::NODE_COUNT, 5);
        assert!(demo::MIN_VALUE < demo::MAX_VALUE);
        assert!(demo::CYCLE_PROBABILITY > 0.0 && demo::CYCLE_PROBABILITY < 1.0);
    }

    #[test]
    fn test_factorial_constants() {
        assert_eq!(factorial::MAX_INPUT, 500);
    }

    #[test]
    fn test_output_constants() {
        assert_eq!(output::DEFAULT_FORMAT, "human");
    }
}
