//! Chase command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::ChaseConfig;
use crate::error::ChalkboardError;

impl FromCommand for ChaseConfig {
    fn from_command(command: Commands) -> Result<Self, ChalkboardError> {
        match command {
            Commands::Chase {
                values,
                cycle_index,
                seed,
                format,
            } => ChaseConfig::builder()
                .with_values(values)
                .with_cycle_index(cycle_index)
                .with_seed(seed)
                .with_format(format.format)
                .build(),
            _ => Err(ChalkboardError::ConfigurationError {
                message: "Invalid command type for ChaseConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(ChaseConfig);

/// Execute the chase command for linked-list cycle detection
pub fn execute_chase_command(command: Commands) -> Result<()> {
    let config = ChaseConfig::from_command(command)
        .wrap_err("Failed to parse chase command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::chase::ChaseExecutor;
    ChaseExecutor::execute(config)
}
