//! Image compression backends.
//!
//! The optimizer treats compression as an external service behind the
//! [`Compressor`] trait:
//!
//! | Backend    | PNG                                       | JPEG                      |
//! |------------|-------------------------------------------|---------------------------|
//! | `builtin`  | `imagequant` palette within min-max       | `image` re-encode at max  |
//! | `pngquant` | `pngquant --quality=<min>-<max>`          | falls back to `builtin`   |

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageError, RgbaImage};
use imagequant::RGBA;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::RasterFormat;
use crate::utils::exec::{Cmd, FilterRule};

// ============================================================================
// Quality range
// ============================================================================

/// Lossy quality bounds in percent (`min <= max <= 100`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityRange {
    pub min: u8,
    pub max: u8,
}

impl Default for QualityRange {
    fn default() -> Self {
        Self { min: 60, max: 80 }
    }
}

impl QualityRange {
    pub fn is_valid(self) -> bool {
        self.min <= self.max && self.max <= 100
    }

    /// `pngquant` style argument, e.g. `60-80`.
    pub fn as_arg(self) -> String {
        format!("{}-{}", self.min, self.max)
    }
}

impl std::fmt::Display for QualityRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}%", self.min, self.max)
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Failure of a compression backend. Non-fatal for the optimizer run.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("cannot derive an output name for `{0}`")]
    NoFileName(PathBuf),

    #[error("failed to encode `{path}`")]
    Image {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    #[error("cannot reach quality {quality} for `{path}`")]
    Quantize {
        path: PathBuf,
        quality: QualityRange,
        #[source]
        source: imagequant::Error,
    },

    #[error("failed to write PNG `{path}`")]
    Png {
        path: PathBuf,
        #[source]
        source: png::EncodingError,
    },

    #[error("IO error when writing `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("{tool} failed on `{path}`: {message}")]
    Tool {
        tool: &'static str,
        path: PathBuf,
        message: String,
    },
}

// ============================================================================
// Backends
// ============================================================================

/// Compression backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CompressorBackend {
    /// Re-encode with the built-in `image` encoders
    #[default]
    Builtin,
    /// Run the external `pngquant` binary for PNG files
    Pngquant,
}

/// A compression service writing one optimized file into `dest`.
pub trait Compressor {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Compress `input` into `dest` (same file name), returning the produced path.
    fn compress(
        &self,
        input: &Path,
        dest: &Path,
        quality: QualityRange,
    ) -> Result<PathBuf, ServiceError>;
}

/// Pick the compressor for a format.
pub fn compressor_for(backend: CompressorBackend, format: RasterFormat) -> Box<dyn Compressor> {
    match (backend, format) {
        (CompressorBackend::Pngquant, RasterFormat::Png) => Box::new(Pngquant),
        _ => Box::new(Builtin { format }),
    }
}

fn output_path(input: &Path, dest: &Path) -> Result<PathBuf, ServiceError> {
    input
        .file_name()
        .map(|name| dest.join(name))
        .ok_or_else(|| ServiceError::NoFileName(input.to_path_buf()))
}

/// Reduce to a palette of at most 256 colors, as `pngquant` does.
///
/// Fails with `QualityTooLow` when `quality.min` cannot be reached.
fn quantize(
    img: &RgbaImage,
    quality: QualityRange,
) -> Result<(Vec<RGBA>, Vec<u8>), imagequant::Error> {
    let pixels: Vec<RGBA> = img
        .pixels()
        .map(|p| {
            let [r, g, b, a] = p.0;
            RGBA::new(r, g, b, a)
        })
        .collect();

    let mut attr = imagequant::new();
    attr.set_quality(quality.min, quality.max)?;
    let mut image = attr.new_image(pixels, img.width() as usize, img.height() as usize, 0.0)?;
    let mut result = attr.quantize(&mut image)?;
    result.set_dithering_level(1.0)?;
    result.remapped(&mut image)
}

fn write_indexed_png<W: Write>(
    writer: W,
    (width, height): (u32, u32),
    palette: &[RGBA],
    indices: &[u8],
) -> Result<(), png::EncodingError> {
    let mut encoder = png::Encoder::new(writer, width, height);
    encoder.set_color(png::ColorType::Indexed);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Best);
    encoder.set_palette(palette.iter().flat_map(|c| [c.r, c.g, c.b]).collect::<Vec<_>>());
    encoder.set_trns(palette.iter().map(|c| c.a).collect::<Vec<_>>());

    let mut writer = encoder.write_header()?;
    writer.write_image_data(indices)?;
    writer.finish()
}

/// Compress in-process: `imagequant` for PNG, the `image` encoder for JPEG.
pub struct Builtin {
    pub format: RasterFormat,
}

impl Compressor for Builtin {
    fn name(&self) -> &'static str {
        "builtin"
    }

    fn compress(
        &self,
        input: &Path,
        dest: &Path,
        quality: QualityRange,
    ) -> Result<PathBuf, ServiceError> {
        let output = output_path(input, dest)?;
        let image_err = |source| ServiceError::Image {
            path: input.to_path_buf(),
            source,
        };

        let img = image::open(input).map_err(image_err)?;
        let create = || {
            File::create(&output)
                .map(BufWriter::new)
                .map_err(|err| ServiceError::Io(output.clone(), err))
        };

        match self.format {
            RasterFormat::Png => {
                let rgba = img.to_rgba8();
                let (palette, indices) =
                    quantize(&rgba, quality).map_err(|source| ServiceError::Quantize {
                        path: input.to_path_buf(),
                        quality,
                        source,
                    })?;
                write_indexed_png(create()?, rgba.dimensions(), &palette, &indices).map_err(
                    |source| ServiceError::Png {
                        path: output.clone(),
                        source,
                    },
                )?;
            }
            RasterFormat::Jpeg => {
                // JPEG has no alpha channel
                let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
                let encoder = JpegEncoder::new_with_quality(create()?, quality.max);
                rgb.write_with_encoder(encoder).map_err(image_err)?;
            }
        }

        Ok(output)
    }
}

/// Skip libpng warnings echoed by pngquant.
static PNGQUANT_FILTER: FilterRule = FilterRule::new(&["warning:", "libpng warning:"]);

/// External `pngquant` process.
pub struct Pngquant;

impl Compressor for Pngquant {
    fn name(&self) -> &'static str {
        "pngquant"
    }

    fn compress(
        &self,
        input: &Path,
        dest: &Path,
        quality: QualityRange,
    ) -> Result<PathBuf, ServiceError> {
        let output = output_path(input, dest)?;

        Cmd::new("pngquant")
            .arg(format!("--quality={}", quality.as_arg()))
            .args(["--speed", "1", "--force", "--output"])
            .arg(&output)
            .arg("--")
            .arg(input)
            .filter(&PNGQUANT_FILTER)
            .run()
            .map_err(|err| ServiceError::Tool {
                tool: "pngquant",
                path: input.to_path_buf(),
                message: format!("{err:#}"),
            })?;

        Ok(output)
    }
}
