//! Byte-size formatting for human-readable reports.

/// Bytes per kibibyte.
pub const KIB: u64 = 1024;

/// Bytes per mebibyte.
pub const MIB: u64 = KIB * KIB;

/// Format a byte count as kilobytes with one decimal.
///
/// # Examples
///
/// - `kb(1536)` -> `"1.5"`
/// - `kb(0)` -> `"0.0"`
#[allow(clippy::cast_precision_loss)] // Asset sizes are far below 2^52
pub fn kb(bytes: u64) -> String {
    format!("{:.1}", bytes as f64 / KIB as f64)
}

/// Format a byte count as megabytes with two decimals.
#[allow(clippy::cast_precision_loss)]
pub fn mb(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / MIB as f64)
}

/// Percentage saved going from `before` to `after`, one decimal.
///
/// Empty originals report `0.0`. Files that grew report a negative value.
#[allow(clippy::cast_precision_loss)]
pub fn reduction_percent(before: u64, after: u64) -> String {
    if before == 0 {
        return "0.0".to_string();
    }
    let saved = before as f64 - after as f64;
    format!("{:.1}", saved / before as f64 * 100.0)
}
