//! Remediation advice for oversized assets.

use std::fmt::Write;

use super::{AssetCategory, AssetRecord};
use crate::utils::path::display_slash;
use crate::utils::size::kb;

/// Printed when no category has an oversized file.
pub const ALL_GOOD: &str = "🎉 All assets are reasonably sized! Great job!";

/// Advice block order.
const ORDER: [AssetCategory; 4] = [
    AssetCategory::Image,
    AssetCategory::Font,
    AssetCategory::Script,
    AssetCategory::Stylesheet,
];

fn heading(category: AssetCategory) -> &'static str {
    match category {
        AssetCategory::Image => "🖼️  Large Images to Optimize:",
        AssetCategory::Font => "🔤 Large Fonts to Optimize:",
        AssetCategory::Script => "📦 Large JS Bundles:",
        AssetCategory::Stylesheet => "🎨 Large CSS Files:",
    }
}

/// Fixed advisory for a category.
pub fn advice(category: AssetCategory) -> &'static str {
    match category {
        AssetCategory::Image => "Use TinyPNG, Squoosh, or similar tools to compress",
        AssetCategory::Font => "Consider font subsetting or using system fonts",
        AssetCategory::Script => "Consider further code splitting or tree shaking",
        AssetCategory::Stylesheet => "Consider purging unused CSS or component-level imports",
    }
}

/// Build the recommendation block for a set of records.
///
/// Files are listed in input order under their category heading.
pub fn recommendations(records: &[AssetRecord]) -> String {
    let mut out = String::new();

    for category in ORDER {
        let offending: Vec<_> = records
            .iter()
            .filter(|r| r.category() == category && r.is_oversized())
            .collect();
        if offending.is_empty() {
            continue;
        }

        let _ = writeln!(out, "\n{}", heading(category));
        for record in offending {
            let _ = writeln!(
                out,
                "  - {} ({} KB)",
                display_slash(record.relative_path()),
                kb(record.size_bytes())
            );
        }
        let _ = writeln!(out, "  → {}", advice(category));
    }

    if out.is_empty() {
        let _ = writeln!(out, "{ALL_GOOD}");
    }
    out
}
