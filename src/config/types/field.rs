//! Config field path used in diagnostics.

use owo_colors::Style;
use std::fmt;

use crate::logger::paint;

/// Dotted path of a config field, e.g. `images.quality.min`.
///
/// ```ignore
/// diag.error(ImagesConfig::QUALITY, "`min` is greater than `max`");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(&'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&paint(self.0, Style::new().cyan()))
    }
}
