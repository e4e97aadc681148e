//! `distlens images`: quick report on the source images.

use anyhow::Result;

use crate::config::AppConfig;
use crate::image::image_report;
use crate::log;
use crate::utils::path::display_slash;

pub fn run_images(config: &AppConfig) -> Result<()> {
    log!("images"; "analyzing {}", display_slash(&config.images.dir));
    print!("{}", image_report(&config.images.dir)?);
    Ok(())
}
