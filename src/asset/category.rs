//! Asset category definitions and size budgets.

use std::path::Path;

use crate::utils::size::KIB;

/// Category of a build-output asset, decided by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetCategory {
    /// JavaScript bundle (.js)
    Script,
    /// Stylesheet (.css)
    Stylesheet,
    /// Raster or vector image (.png, .jpg, .jpeg, .gif, .svg)
    Image,
    /// Web font (.woff, .woff2, .eot, .ttf, .otf)
    Font,
}

impl AssetCategory {
    /// Report section order.
    pub const ALL: [Self; 4] = [Self::Script, Self::Stylesheet, Self::Image, Self::Font];

    /// Detect category from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "js" => Some(Self::Script),
            "css" => Some(Self::Stylesheet),
            "png" | "jpg" | "jpeg" | "gif" | "svg" => Some(Self::Image),
            "woff" | "woff2" | "eot" | "ttf" | "otf" => Some(Self::Font),
            _ => None,
        }
    }

    /// Detect category from a file path. Files without extension have none.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Advisory size budget in bytes.
    pub const fn threshold(self) -> u64 {
        match self {
            Self::Script => 500 * KIB,
            Self::Stylesheet => 200 * KIB,
            Self::Image => 250 * KIB,
            Self::Font => 300 * KIB,
        }
    }

    /// Whether `size` exceeds the budget. Exactly at the budget passes.
    #[inline]
    pub const fn is_oversized(self, size: u64) -> bool {
        size > self.threshold()
    }

    /// Short label used in the summary block.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Script => "JavaScript",
            Self::Stylesheet => "CSS",
            Self::Image => "Images",
            Self::Font => "Fonts",
        }
    }

    /// Section heading (with icon) for the per-file listing.
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Script => "📦 JavaScript Files:",
            Self::Stylesheet => "🎨 CSS Files:",
            Self::Image => "🖼️  Image Files:",
            Self::Font => "🔤 Font Files:",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Script => "script",
            Self::Stylesheet => "stylesheet",
            Self::Image => "image",
            Self::Font => "font",
        }
    }
}

impl std::fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_from_extension() {
        assert_eq!(AssetCategory::from_extension("js"), Some(AssetCategory::Script));
        assert_eq!(AssetCategory::from_extension("css"), Some(AssetCategory::Stylesheet));
        for ext in ["png", "jpg", "jpeg", "gif", "svg"] {
            assert_eq!(AssetCategory::from_extension(ext), Some(AssetCategory::Image));
        }
        for ext in ["woff", "woff2", "eot", "ttf", "otf"] {
            assert_eq!(AssetCategory::from_extension(ext), Some(AssetCategory::Font));
        }
        assert_eq!(AssetCategory::from_extension("txt"), None);
        assert_eq!(AssetCategory::from_extension("map"), None);
        assert_eq!(AssetCategory::from_extension("mjs"), None);
    }

    #[test]
    fn test_from_extension_case_insensitive() {
        assert_eq!(AssetCategory::from_extension("JS"), Some(AssetCategory::Script));
        assert_eq!(AssetCategory::from_extension("Png"), Some(AssetCategory::Image));
        assert_eq!(AssetCategory::from_extension("WOFF2"), Some(AssetCategory::Font));
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            AssetCategory::from_path(&PathBuf::from("js/app.3f2a.js")),
            Some(AssetCategory::Script)
        );
        assert_eq!(
            AssetCategory::from_path(&PathBuf::from("img/LOGO.SVG")),
            Some(AssetCategory::Image)
        );
        // `.js.map` ends in `map`, not `js`
        assert_eq!(AssetCategory::from_path(&PathBuf::from("js/app.js.map")), None);
        assert_eq!(AssetCategory::from_path(&PathBuf::from("LICENSE")), None);
        assert_eq!(AssetCategory::from_path(&PathBuf::from(".css")), None);
    }

    #[test]
    fn test_thresholds() {
        assert_eq!(AssetCategory::Script.threshold(), 512_000);
        assert_eq!(AssetCategory::Stylesheet.threshold(), 204_800);
        assert_eq!(AssetCategory::Image.threshold(), 256_000);
        assert_eq!(AssetCategory::Font.threshold(), 307_200);
    }

    #[test]
    fn test_is_oversized_boundary() {
        for category in AssetCategory::ALL {
            let limit = category.threshold();
            assert!(!category.is_oversized(limit - 1));
            assert!(!category.is_oversized(limit));
            assert!(category.is_oversized(limit + 1));
        }
    }
}
