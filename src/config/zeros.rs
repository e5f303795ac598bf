//! Zeros command configuration

use crate::cli::OutputFormat;

/// Configuration for the zeros command
#[derive(Debug, Clone)]
pub struct ZerosConfig {
    /// The n in n!
    pub n: u64,
    /// Output format for the report
    pub format: OutputFormat,
}

impl ZerosConfig {
    pub fn builder() -> ZerosConfigBuilder {
        ZerosConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct ZerosConfigBuilder {
    n: Option<u64>,
    format: Option<OutputFormat>,
}

impl ZerosConfigBuilder {
    pub fn new() -> Self {
        Self {
            n: None,
            format: None,
        }
    }

    pub fn with_n(mut self, n: u64) -> Self {
        self.n = Some(n);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }
}

impl crate::common::ConfigBuilder for ZerosConfigBuilder {
    type Config = ZerosConfig;

    fn build(self) -> Result<Self::Config, crate::error::ChalkboardError> {
        Ok(ZerosConfig {
            n: self
                .n
                .ok_or_else(|| crate::error::ChalkboardError::ConfigurationError {
                    message: "Missing required field: n".to_string(),
                })?,
            format: self.format.ok_or_else(|| {
                crate::error::ChalkboardError::ConfigurationError {
                    message: "Missing required field: format".to_string(),
                }
            })?,
        })
    }
}
