//! Configuration sections.
//!
//! ```toml
//! [analyze]
//! dir = "dist"
//!
//! [images]
//! dir = "src/assets"
//! output = "src/assets/optimized"
//! backend = "builtin"
//! quality = { min = 60, max = 80 }
//!
//! [theme]
//! dark = false
//! icons = "mdi"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{ConfigDiagnostics, FieldPath};
use crate::image::{CompressorBackend, QualityRange};
use crate::route::ThemeSettings;

/// `[analyze]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzeConfig {
    /// Build output directory to classify.
    pub dir: PathBuf,
}

impl Default for AnalyzeConfig {
    fn default() -> Self {
        Self {
            dir: "dist".into(),
        }
    }
}

/// `[images]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagesConfig {
    /// Source images, not recursed.
    pub dir: PathBuf,
    /// Where optimized copies are written.
    pub output: PathBuf,
    pub backend: CompressorBackend,
    pub quality: QualityRange,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            dir: "src/assets".into(),
            output: "src/assets/optimized".into(),
            backend: CompressorBackend::default(),
            quality: QualityRange::default(),
        }
    }
}

impl ImagesConfig {
    pub const OUTPUT: FieldPath = FieldPath::new("images.output");
    pub const QUALITY: FieldPath = FieldPath::new("images.quality");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let QualityRange { min, max } = self.quality;
        if !self.quality.is_valid() {
            if max > 100 {
                diag.error(Self::QUALITY, format!("`max` is {max}, above 100"));
            }
            if min > max {
                diag.error_with_hint(
                    Self::QUALITY,
                    format!("`min` ({min}) is greater than `max` ({max})"),
                    "e.g. quality = { min = 60, max = 80 }",
                );
            }
        }
        if self.output == self.dir {
            diag.error_with_hint(
                Self::OUTPUT,
                "output directory is the source directory",
                "optimized files would overwrite the originals; pick a subdirectory",
            );
        }
    }
}

/// `[theme]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub dark: bool,
    /// Icon font family.
    pub icons: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        let ThemeSettings { dark, icon_font } = ThemeSettings::default();
        Self {
            dark,
            icons: icon_font,
        }
    }
}

impl ThemeConfig {
    pub const ICONS: FieldPath = FieldPath::new("theme.icons");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.icons.trim().is_empty() {
            diag.error(Self::ICONS, "icon font must not be empty");
        }
    }

    /// Settings handed to the app.
    pub fn settings(&self) -> ThemeSettings {
        ThemeSettings {
            dark: self.dark,
            icon_font: self.icons.clone(),
        }
    }
}
