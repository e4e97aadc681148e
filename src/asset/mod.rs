//! Build-output asset analysis.
//!
//! ```text
//! classify(dir) ──► Vec<AssetRecord> ──► report() ──► text
//!                                   └──► recommendations()
//! ```

mod category;
mod error;
mod recommend;
mod report;
mod scan;

pub use category::AssetCategory;
pub use error::FilesystemError;
pub use recommend::recommendations;
pub use report::report;
pub(crate) use report::push_banner;
pub use scan::{AssetRecord, classify};
