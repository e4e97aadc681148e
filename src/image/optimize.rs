//! Image optimization run: compress, then compare sizes.

use std::fmt::Write;
use std::path::{Path, PathBuf};

use super::{
    Compressor, CompressorBackend, QualityRange, RasterFormat, ServiceError, compressor_for,
    list_images,
};
use crate::asset::{FilesystemError, push_banner};
use crate::logger::ProgressLine;
use crate::utils::size::{kb, reduction_percent};
use crate::{debug, log};

/// Inputs of one optimizer run.
#[derive(Debug, Clone)]
pub struct OptimizeOptions {
    /// Directory holding the source images (not recursed).
    pub input: PathBuf,
    /// Destination directory, created if absent.
    pub output: PathBuf,
    pub quality: QualityRange,
    pub backend: CompressorBackend,
}

/// Before/after size of one optimized file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub file_name: String,
    pub original: u64,
    pub optimized: u64,
}

/// Outcome of an optimizer run.
#[derive(Debug, Default)]
pub struct OptimizeSummary {
    /// Paths written by the compressors.
    pub produced: Vec<PathBuf>,
    /// Formats whose batch failed.
    pub failed: Vec<RasterFormat>,
    pub comparisons: Vec<Comparison>,
}

/// Run the optimizer with the configured backend.
pub fn optimize(options: &OptimizeOptions) -> Result<OptimizeSummary, FilesystemError> {
    optimize_with(options, |format| compressor_for(options.backend, format))
}

/// Run the optimizer with compressors from `factory`.
///
/// Each format is one batch. A failing batch is logged and the run moves on;
/// files it already wrote stay in place. Only filesystem problems around the
/// batches (missing input, uncreatable output) are fatal.
pub fn optimize_with<F>(
    options: &OptimizeOptions,
    factory: F,
) -> Result<OptimizeSummary, FilesystemError>
where
    F: Fn(RasterFormat) -> Box<dyn Compressor>,
{
    FilesystemError::check_dir(&options.input)?;
    std::fs::create_dir_all(&options.output)
        .map_err(|err| FilesystemError::Io(options.output.clone(), err))?;

    let mut batches = Vec::with_capacity(RasterFormat::ALL.len());
    for format in RasterFormat::ALL {
        batches.push((format, list_images(&options.input, |f| f == format)?));
    }

    let counters: Vec<_> = batches.iter().map(|(f, files)| (f.name(), files.len())).collect();
    let progress = ProgressLine::new(&counters);

    let mut summary = OptimizeSummary::default();
    for (format, files) in &batches {
        if files.is_empty() {
            continue;
        }

        let compressor = factory(*format);
        match run_batch(compressor.as_ref(), files, options, |_| progress.inc(format.name())) {
            Ok(produced) => {
                debug!("optimize"; "{} {} file(s) via {}", produced.len(), format.name(), compressor.name());
                summary.produced.extend(produced);
            }
            Err(err) => {
                log!("error"; "optimizing {} images failed: {:#}", format.name(), anyhow::Error::from(err));
                summary.failed.push(*format);
            }
        }
    }
    progress.finish();

    summary.comparisons = compare(&options.input, &options.output)?;
    Ok(summary)
}

/// Compress a batch, stopping at the first failure.
fn run_batch(
    compressor: &dyn Compressor,
    files: &[PathBuf],
    options: &OptimizeOptions,
    on_done: impl Fn(&Path),
) -> Result<Vec<PathBuf>, ServiceError> {
    let mut produced = Vec::with_capacity(files.len());
    for file in files {
        let output = compressor.compress(file, &options.output, options.quality)?;
        on_done(&output);
        produced.push(output);
    }
    Ok(produced)
}

/// Pair each source image with its counterpart in `output`, if one exists.
pub fn compare(input: &Path, output: &Path) -> Result<Vec<Comparison>, FilesystemError> {
    let size_of = |path: &Path| {
        std::fs::metadata(path)
            .map(|m| m.len())
            .map_err(|err| FilesystemError::Io(path.to_path_buf(), err))
    };

    let mut comparisons = Vec::new();
    for source in list_images(input, |_| true)? {
        let Some(name) = source.file_name() else {
            continue;
        };
        let optimized = output.join(name);
        if !optimized.is_file() {
            continue;
        }
        comparisons.push(Comparison {
            file_name: name.to_string_lossy().into_owned(),
            original: size_of(&source)?,
            optimized: size_of(&optimized)?,
        });
    }
    Ok(comparisons)
}

/// Render the before/after block.
///
/// ```text
/// hero.png:
///   Original: 812.4 KB
///   Optimized: 201.9 KB
///   Reduction: 75.1%
/// ```
pub fn render_comparison(comparisons: &[Comparison]) -> String {
    let mut out = String::new();
    push_banner(&mut out, "File size comparison:", '=');
    for c in comparisons {
        let _ = writeln!(out, "{}:", c.file_name);
        let _ = writeln!(out, "  Original: {} KB", kb(c.original));
        let _ = writeln!(out, "  Optimized: {} KB", kb(c.optimized));
        let _ = writeln!(out, "  Reduction: {}%", reduction_percent(c.original, c.optimized));
        out.push('\n');
    }
    out
}
