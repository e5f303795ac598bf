//! Command implementations for the chalkboard CLI
//!
//! This module contains the implementations for each CLI command:
//! - chase: send the tortoise and the hare after a cycle
//! - triangle: stack up rows of Pascal's triangle
//! - zeros: count the zeros trailing a factorial

pub mod chase;
pub mod triangle;
pub mod zeros;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Chase { .. } => chase::execute_chase_command(command),
        Commands::Triangle { .. } => triangle::execute_triangle_command(command),
        Commands::Zeros { .. } => zeros::execute_zeros_command(command),
    }
}
