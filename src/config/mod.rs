//! # Configuration Module
//!
//! Configuration structures for the chalkboard commands, each with a
//! builder validated at `build` time.
//!
//! ## Example
//!
//! ```
//! use chalkboard::cli::OutputFormat;
//! use chalkboard::common::ConfigBuilder;
//! use chalkboard::config::ChaseConfig;
//!
//! let config = ChaseConfig::builder()
//!     .with_values(Some(vec![3, 2, 0, -4]))
//!     .with_cycle_index(Some(1))
//!     .with_seed(None)
//!     .with_format(OutputFormat::Human)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.cycle_index, Some(1));
//! ```

pub mod chase;
pub mod triangle;
pub mod zeros;

pub use chase::ChaseConfig;
pub use triangle::TriangleConfig;
pub use zeros::ZerosConfig;
