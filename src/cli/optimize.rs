//! `distlens optimize`: compress source images and compare sizes.

use anyhow::Result;

use crate::config::AppConfig;
use crate::image::{OptimizeOptions, optimize, render_comparison};
use crate::log;
use crate::utils::path::display_slash;
use crate::utils::plural_count;

pub fn run_optimize(config: &AppConfig) -> Result<()> {
    let images = &config.images;
    let options = OptimizeOptions {
        input: images.dir.clone(),
        output: images.output.clone(),
        quality: images.quality,
        backend: images.backend,
    };

    log!(
        "optimize";
        "{} -> {} (quality {})",
        display_slash(&options.input),
        display_slash(&options.output),
        options.quality
    );

    let summary = optimize(&options)?;
    log!("optimize"; "wrote {}", plural_count(summary.produced.len(), "file"));

    if !summary.comparisons.is_empty() {
        print!("{}", render_comparison(&summary.comparisons));
    }

    if summary.failed.is_empty() {
        println!("Image optimization completed!");
        println!(
            "Replace the original images with the optimized versions in {}",
            display_slash(&options.output)
        );
    } else {
        let failed: Vec<_> = summary.failed.iter().map(|f| f.name()).collect();
        log!("error"; "some batches failed: {}", failed.join(", "));
    }
    Ok(())
}
