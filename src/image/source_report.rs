//! Report on the source images before they are optimized.

use std::fmt::Write;
use std::path::Path;

use super::list_images;
use crate::asset::{AssetCategory, FilesystemError, push_banner};
use crate::utils::size::kb;

const COMPRESSION_TIPS: [&str; 4] = [
    "Use online tools like TinyPNG or Squoosh to compress images",
    "Consider converting PNG to WebP format for better compression",
    "Resize images to appropriate dimensions for web use",
    "Use responsive images with different sizes for different screen sizes",
];

const BUNDLE_TIPS: [&str; 4] = [
    "Implement lazy loading for images",
    "Use WebP format with PNG fallbacks",
    "Consider using a CDN for image delivery",
    "Implement responsive images with srcset",
];

struct SourceImage {
    name: String,
    size: u64,
}

/// Build the source image report for `dir` (not recursed).
pub fn image_report(dir: &Path) -> Result<String, FilesystemError> {
    let mut images = Vec::new();
    for path in list_images(dir, |_| true)? {
        let size = std::fs::metadata(&path)
            .map_err(|err| FilesystemError::Io(path.clone(), err))?
            .len();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        images.push(SourceImage { name, size });
    }
    Ok(render(&images))
}

fn render(images: &[SourceImage]) -> String {
    let mut out = String::new();
    push_banner(&mut out, "Image Analysis Report:", '=');
    out.push('\n');

    for img in images {
        let _ = writeln!(out, "{}: {} KB", img.name, kb(img.size));
    }
    let total: u64 = images.iter().map(|img| img.size).sum();
    let _ = writeln!(out, "\nTotal image size: {} KB", kb(total));

    let large: Vec<_> = images
        .iter()
        .filter(|img| AssetCategory::Image.is_oversized(img.size))
        .collect();

    if large.is_empty() {
        out.push_str("\n✅ All images are reasonably sized!\n");
    } else {
        section(&mut out, "⚠️  Large images that need optimization:", 37);
        for img in &large {
            let _ = writeln!(out, "{}: {} KB", img.name, kb(img.size));
        }

        section(&mut out, "📋 Optimization Recommendations:", 32);
        numbered(&mut out, &COMPRESSION_TIPS);

        section(&mut out, "🔧 Manual optimization steps:", 29);
        for img in &large {
            let _ = writeln!(out, "- Optimize {} (currently {} KB)", img.name, kb(img.size));
        }
    }

    section(&mut out, "📦 Bundle Size Recommendations:", 31);
    numbered(&mut out, &BUNDLE_TIPS);
    out
}

// Emoji headings have no sensible char count, so the rule width is explicit.
fn section(out: &mut String, heading: &str, rule: usize) {
    let _ = writeln!(out, "\n{heading}\n{}", "=".repeat(rule));
}

fn numbered(out: &mut String, lines: &[&str]) {
    for (i, line) in lines.iter().enumerate() {
        let _ = writeln!(out, "{}. {line}", i + 1);
    }
}
