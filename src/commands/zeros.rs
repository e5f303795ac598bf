//! Zeros command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::ZerosConfig;
use crate::error::ChalkboardError;

impl FromCommand for ZerosConfig {
    fn from_command(command: Commands) -> Result<Self, ChalkboardError> {
        match command {
            Commands::Zeros { n, format } => ZerosConfig::builder()
                .with_n(n)
                .with_format(format.format)
                .build(),
            _ => Err(ChalkboardError::ConfigurationError {
                message: "Invalid command type for ZerosConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(ZerosConfig);

/// Execute the zeros command for factorial trailing-zero counting
pub fn execute_zeros_command(command: Commands) -> Result<()> {
    let config = ZerosConfig::from_command(command)
        .wrap_err("Failed to parse zeros command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::zeros::ZerosExecutor;
    ZerosExecutor::execute(config)
}
