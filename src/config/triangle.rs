//! Triangle command configuration

use crate::cli::OutputFormat;

/// Configuration for the triangle command
#[derive(Debug, Clone)]
pub struct TriangleConfig {
    /// Number of rows to generate
    pub rows: usize,
    /// Output format for the report
    pub format: OutputFormat,
}

impl TriangleConfig {
    pub fn builder() -> TriangleConfigBuilder {
        TriangleConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct TriangleConfigBuilder {
    rows: Option<usize>,
    format: Option<OutputFormat>,
}

impl TriangleConfigBuilder {
    pub fn new() -> Self {
        Self {
            rows: None,
            format: None,
        }
    }

    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = Some(rows);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }
}

impl crate::common::ConfigBuilder for TriangleConfigBuilder {
    type Config = TriangleConfig;

    fn build(self) -> Result<Self::Config, crate::error::ChalkboardError> {
        Ok(TriangleConfig {
            rows: self.rows.ok_or_else(|| {
                crate::error::ChalkboardError::ConfigurationError {
                    message: "Missing required field: rows".to_string(),
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
