//! Triangle command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::TriangleConfig;
use crate::error::ChalkboardError;

impl FromCommand for TriangleConfig {
    fn from_command(command: Commands) -> Result<Self, ChalkboardError> {
        match command {
            Commands::Triangle { rows, format } => TriangleConfig::builder()
                .with_rows(rows as usize)
                .with_format(format.format)
                .build(),
            _ => Err(ChalkboardError::ConfigurationError {
                message: "Invalid command type for TriangleConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(TriangleConfig);

/// Execute the triangle command for Pascal's triangle generation
pub fn execute_triangle_command(command: Commands) -> Result<()> {
    let config = TriangleConfig::from_command(command)
        .wrap_err("Failed to parse triangle command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::triangle::TriangleExecutor;
    TriangleExecutor::execute(config)
}
