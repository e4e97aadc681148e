//! Shared helpers with no domain knowledge.
//!
//! - [`exec`]: external command builder (`Cmd`)
//! - [`path`]: filesystem path normalization
//! - [`plural`]: count/noun formatting
//! - [`size`]: byte-size formatting for reports

pub mod exec;
pub mod path;
pub mod plural;
pub mod size;

pub use plural::plural_count;
