//! Source image tooling.
//!
//! - [`image_report`]: size report for the source images
//! - [`optimize`]: compress PNG then JPEG batches into an output directory
//!   and compare sizes

mod compress;
mod format;
mod optimize;
mod source_report;

pub use compress::{Compressor, CompressorBackend, QualityRange, ServiceError, compressor_for};
pub use format::{RasterFormat, list_images};
pub use optimize::{OptimizeOptions, optimize, render_comparison};
pub use source_report::image_report;
