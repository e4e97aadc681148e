//! `distlens analyze`: size report for a build output directory.

use anyhow::{Context, Result};

use crate::asset::{FilesystemError, classify, report};
use crate::config::AppConfig;
use crate::log;
use crate::utils::path::display_slash;

pub fn run_analyze(config: &AppConfig) -> Result<()> {
    let dir = &config.analyze.dir;
    log!("analyze"; "scanning {}", display_slash(dir));

    let records = match classify(dir) {
        Ok(records) => records,
        Err(err @ FilesystemError::NotFound(_)) => {
            return Err(err).context("No build output found. Run the build first.");
        }
        Err(err) => return Err(err.into()),
    };

    print!("{}", report(&records));
    Ok(())
}
