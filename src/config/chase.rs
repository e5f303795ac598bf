//! Chase command configuration

use crate::cli::OutputFormat;

/// Configuration for the chase command
///
/// When `values` is absent the executor samples the randomized demo list;
/// `cycle_index` and `seed` only apply to their respective input modes.
#[derive(Debug, Clone)]
pub struct ChaseConfig {
    /// Explicit node values (randomized demo list when absent)
    pub values: Option<Vec<i64>>,
    /// Index the tail links back to; out-of-range means no cycle
    pub cycle_index: Option<usize>,
    /// Seed for the demo list sampler
    pub seed: Option<u64>,
    /// Output format for the report
    pub format: OutputFormat,
}

impl ChaseConfig {
    pub fn builder() -> ChaseConfigBuilder {
        ChaseConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct ChaseConfigBuilder {
    values: Option<Option<Vec<i64>>>,
    cycle_index: Option<Option<usize>>,
    seed: Option<Option<u64>>,
    format: Option<OutputFormat>,
}

impl ChaseConfigBuilder {
    pub fn new() -> Self {
        Self {
            values: None,
            cycle_index: None,
            seed: None,
            format: None,
        }
    }

    pub fn with_values(mut self, values: Option<Vec<i64>>) -> Self {
        self.values = Some(values);
        self
    }

    pub fn with_cycle_index(mut self, cycle_index: Option<usize>) -> Self {
        self.cycle_index = Some(cycle_index);
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }
}

impl crate::common::ConfigBuilder for ChaseConfigBuilder {
    type Config = ChaseConfig;

    fn build(self) -> Result<Self::Config, crate::error::ChalkboardError> {
        Ok(ChaseConfig {
            values: self.values.ok_or_else(|| {
                crate::error::ChalkboardError::ConfigurationError {
                    message: "Missing required field: values".to_string(),
                }
            })?,
            cycle_index: self.cycle_index.ok_or_else(|| {
                crate::error::ChalkboardError::ConfigurationError {
                    message: "Missing required field: cycle_index".to_string(),
                }
            })?,
            seed: self.seed.ok_or_else(|| {
                crate::error::ChalkboardError::ConfigurationError {
                    message: "Missing required field: seed".to_string(),
                }
            })?,
            format: self.format.ok_or_else(|| {
                crate::error::ChalkboardError::ConfigurationError {
                    message: "Missing required field: format".to_string(),
                }
            })?,
        })
    }
}
