//! Command-line interface module.
//!
//! One runner per subcommand; each prints its report to stdout.

mod args;
pub mod analyze;
pub mod images;
pub mod optimize;
pub mod routes;

pub use args::{Cli, Commands, OptimizeArgs};
