//! Size report rendering.

use std::fmt::Write;

use super::{AssetCategory, AssetRecord, recommendations};
use crate::utils::path::display_slash;
use crate::utils::plural_count;
use crate::utils::size::{kb, mb};

/// Marker for a file within budget.
pub const PASS_MARKER: &str = "✅ ";
/// Marker for a file over budget.
pub const WARN_MARKER: &str = "⚠️ ";

/// File count and cumulative size of a group of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub files: usize,
    pub bytes: u64,
}

impl Totals {
    pub fn of<'a>(records: impl IntoIterator<Item = &'a AssetRecord>) -> Self {
        records.into_iter().fold(Self::default(), |acc, r| Self {
            files: acc.files + 1,
            bytes: acc.bytes + r.size_bytes(),
        })
    }
}

/// Sort records largest first. Stable: equal sizes keep their input order.
pub fn sort_by_size_desc(records: &mut [&AssetRecord]) {
    records.sort_by(|a, b| b.size_bytes().cmp(&a.size_bytes()));
}

/// Records of one category, largest first.
pub fn by_category(records: &[AssetRecord], category: AssetCategory) -> Vec<&AssetRecord> {
    let mut selected: Vec<_> = records.iter().filter(|r| r.category() == category).collect();
    sort_by_size_desc(&mut selected);
    selected
}

/// Render the full build analysis report.
///
/// ```text
/// 📦 JavaScript Files:
/// --------------------
/// ⚠️ js/app.js: 600.0 KB
///
/// 📈 Summary:
/// ===========
/// Total assets: 2 files, 0.63 MB
/// ```
pub fn report(records: &[AssetRecord]) -> String {
    let mut out = String::new();
    push_banner(&mut out, "📊 Build Analysis Results:", '=');

    for category in AssetCategory::ALL {
        out.push('\n');
        push_banner(&mut out, category.heading(), '-');
        for record in by_category(records, category) {
            let marker = if record.is_oversized() {
                WARN_MARKER
            } else {
                PASS_MARKER
            };
            let _ = writeln!(
                out,
                "{marker}{}: {} KB",
                display_slash(record.relative_path()),
                kb(record.size_bytes())
            );
        }
    }

    out.push('\n');
    push_banner(&mut out, "📈 Summary:", '=');
    let total = Totals::of(records);
    let _ = writeln!(
        out,
        "Total assets: {}, {} MB",
        plural_count(total.files, "file"),
        mb(total.bytes)
    );
    for category in AssetCategory::ALL {
        let totals = Totals::of(records.iter().filter(|r| r.category() == category));
        let _ = writeln!(
            out,
            "{}: {}, {} MB",
            category.label(),
            plural_count(totals.files, "file"),
            mb(totals.bytes)
        );
    }

    out.push('\n');
    push_banner(&mut out, "💡 Optimization Recommendations:", '=');
    out.push_str(&recommendations(records));
    out
}

/// Heading followed by an underline of the same width.
pub(crate) fn push_banner(out: &mut String, heading: &str, underline: char) {
    let width = heading.chars().count();
    let _ = writeln!(out, "{heading}");
    let _ = writeln!(out, "{}", underline.to_string().repeat(width));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::size::KIB;

    fn record(path: &str, size: u64) -> AssetRecord {
        let category = AssetCategory::from_path(std::path::Path::new(path)).unwrap();
        AssetRecord::new(path, size, category)
    }

    #[test]
    fn test_sort_is_stable_and_descending() {
        let records = [
            record("a.js", 10),
            record("b.js", 30),
            record("c.js", 10),
            record("d.js", 20),
        ];
        let mut refs: Vec<_> = records.iter().collect();
        sort_by_size_desc(&mut refs);
        let names: Vec<_> = refs.iter().map(|r| r.relative_path().to_str().unwrap()).collect();
        assert_eq!(names, ["b.js", "d.js", "a.js", "c.js"]);
    }

    #[test]
    fn test_sort_idempotent() {
        let records = [record("x.css", 5), record("y.css", 9), record("z.css", 5)];
        let mut once: Vec<_> = records.iter().collect();
        sort_by_size_desc(&mut once);
        let mut twice = once.clone();
        sort_by_size_desc(&mut twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_totals() {
        let records = [record("a.js", 600 * KIB), record("b.css", 50 * KIB)];
        assert_eq!(
            Totals::of(&records),
            Totals {
                files: 2,
                bytes: 650 * KIB
            }
        );
        assert_eq!(Totals::of(&[] as &[AssetRecord]), Totals::default());
    }

    #[test]
    fn test_report_js_and_css() {
        let records = [record("a.js", 600 * KIB), record("b.css", 50 * KIB)];
        let text = report(&records);

        let js = text.find("📦 JavaScript Files:").unwrap();
        let css = text.find("🎨 CSS Files:").unwrap();
        let images = text.find("🖼️  Image Files:").unwrap();
        let warn_line = text.find("⚠️ a.js: 600.0 KB").unwrap();
        let pass_line = text.find("✅ b.css: 50.0 KB").unwrap();
        assert!(js < warn_line && warn_line < css);
        assert!(css < pass_line && pass_line < images);

        assert!(text.contains("Total assets: 2 files, 0.63 MB"));
        assert!(text.contains("JavaScript: 1 file, 0.59 MB"));
        assert!(text.contains("CSS: 1 file, 0.05 MB"));
        assert!(text.contains("Images: 0 files, 0.00 MB"));
        assert!(text.contains("📦 Large JS Bundles:"));
    }

    #[test]
    fn test_report_empty() {
        let text = report(&[]);
        for category in AssetCategory::ALL {
            assert!(text.contains(category.heading()));
        }
        assert!(text.contains("Total assets: 0 files, 0.00 MB"));
        assert!(text.contains("Fonts: 0 files, 0.00 MB"));
        assert!(!text.contains(PASS_MARKER));
        assert!(!text.contains(WARN_MARKER));
        assert!(text.contains(crate::asset::recommend::ALL_GOOD));
    }

    #[test]
    fn test_report_orders_largest_first() {
        let records = [
            record("small.png", KIB),
            record("big.png", 300 * KIB),
            record("mid.png", 100 * KIB),
        ];
        let text = report(&records);
        let big = text.find("big.png: 300.0 KB").unwrap();
        let mid = text.find("mid.png: 100.0 KB").unwrap();
        let small = text.find("small.png: 1.0 KB").unwrap();
        assert!(big < mid && mid < small);
        assert!(text.contains("⚠️ big.png"));
        assert!(text.contains("✅ mid.png"));
    }

    #[test]
    fn test_push_banner() {
        let mut out = String::new();
        push_banner(&mut out, "📈 Summary:", '=');
        assert_eq!(out, "📈 Summary:\n==========\n");
    }
}
