//! Configuration management for `distlens.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section    # [analyze], [images], [theme]
//! ├── types/     # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util       # config file lookup
//! └── mod.rs     # AppConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section      | Purpose                                          |
//! |--------------|--------------------------------------------------|
//! | `[analyze]`  | Build output directory to classify               |
//! | `[images]`   | Source images, output dir, backend, quality      |
//! | `[theme]`    | Dark mode and icon font for the app shell        |
//!
//! The file is optional: without one every section takes its defaults,
//! resolved against the current directory.

mod section;
mod types;
mod util;

pub use section::{AnalyzeConfig, ImagesConfig, ThemeConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, Commands, OptimizeArgs},
    debug, log,
    utils::path::resolve_against,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use util::find_config_file;

/// Config file searched for when `-C` is not given.
pub const DEFAULT_CONFIG: &str = "distlens.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing distlens.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Absolute path to the config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Directory relative paths resolve against (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub analyze: AnalyzeConfig,

    #[serde(default)]
    pub images: ImagesConfig,

    #[serde(default)]
    pub theme: ThemeConfig,
}

impl AppConfig {
    /// Load configuration for a CLI invocation.
    ///
    /// Searches upward from cwd unless `-C` names a file. CLI values
    /// override the file; the result is validated before it is returned.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        Self::load_from(cli, &cwd)
    }

    fn load_from(cli: &Cli, cwd: &Path) -> Result<Self> {
        let mut config = match Self::resolve_config_path(cli.config.as_deref(), cwd)? {
            Some(path) => {
                debug!("config"; "using {}", path.display());
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                config.config_path = Some(path);
                config
            }
            None => {
                debug!("config"; "no {DEFAULT_CONFIG} found, using defaults");
                Self {
                    root: cwd.to_path_buf(),
                    ..Self::default()
                }
            }
        };

        config.normalize_paths();
        config.apply_command_options(&cli.command, cwd);
        config.validate(&cli.command)?;
        if let Some(path) = &config.config_path {
            debug!("config"; "loaded {} (root {})", path.display(), config.root.display());
        }
        Ok(config)
    }

    /// Explicit `-C` paths must exist; the default name is optional.
    fn resolve_config_path(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
        match explicit {
            Some(path) => {
                let resolved = resolve_against(path, cwd);
                if !resolved.is_file() {
                    return Err(ConfigError::NotFound(path.to_path_buf()).into());
                }
                Ok(Some(resolved))
            }
            None => Ok(find_config_file(Path::new(DEFAULT_CONFIG), cwd)),
        }
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("Failed to parse `{}`", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Unknown fields are ignored, not fatal.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring: {}", display_path, fields.join(", "));
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific overrides. CLI paths are relative to `cwd`.
    fn apply_command_options(&mut self, command: &Commands, cwd: &Path) {
        match command {
            Commands::Analyze { dir } => {
                Self::update_path(&mut self.analyze.dir, dir.as_deref(), cwd);
            }
            Commands::Images { dir } => {
                Self::update_path(&mut self.images.dir, dir.as_deref(), cwd);
            }
            Commands::Optimize { args } => self.apply_optimize_args(args, cwd),
            Commands::Routes { .. } => {
                Self::update_option(&mut self.theme.dark, command.dark_override().as_ref());
            }
        }
    }

    fn apply_optimize_args(&mut self, args: &OptimizeArgs, cwd: &Path) {
        Self::update_path(&mut self.images.dir, args.input.as_deref(), cwd);
        Self::update_path(&mut self.images.output, args.output.as_deref(), cwd);
        Self::update_option(&mut self.images.backend, args.backend.as_ref());
        Self::update_option(&mut self.images.quality.min, args.min_quality.as_ref());
        Self::update_option(&mut self.images.quality.max, args.max_quality.as_ref());
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    fn update_path(config_path: &mut PathBuf, cli_path: Option<&Path>, cwd: &Path) {
        if let Some(path) = cli_path {
            *config_path = resolve_against(path, cwd);
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Resolve configured directories against the config file's directory.
    fn normalize_paths(&mut self) {
        let root = crate::utils::path::normalize_path(&self.root);
        self.analyze.dir = resolve_against(&self.analyze.dir, &root);
        self.images.dir = resolve_against(&self.images.dir, &root);
        self.images.output = resolve_against(&self.images.output, &root);
        self.root = root;
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the sections `command` reads, collecting all errors at once.
    pub fn validate(&self, command: &Commands) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        match command {
            Commands::Optimize { .. } => self.images.validate(&mut diag),
            Commands::Routes { .. } => self.theme.validate(&mut diag),
            Commands::Analyze { .. } | Commands::Images { .. } => {}
        }
        diag.into_result().map_err(ConfigError::Diagnostics)
    }
}

// ============================================================================
// Test Helpers
// ============================================================================

/// Parse config, panicking on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> AppConfig {
    let (parsed, ignored) = AppConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
