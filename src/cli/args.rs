//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::image::CompressorBackend;

/// Audit the assets of a client-side web application
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: distlens.toml, searched upward)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Print debug messages
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Report asset sizes of a build output directory
    #[command(visible_alias = "a")]
    Analyze {
        /// Build output directory (default: dist)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        dir: Option<PathBuf>,
    },

    /// Report source image sizes
    #[command(visible_alias = "i")]
    Images {
        /// Source asset directory (default: src/assets)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        dir: Option<PathBuf>,
    },

    /// Compress source images into an output directory
    #[command(visible_alias = "o")]
    Optimize {
        #[command(flatten)]
        args: OptimizeArgs,
    },

    /// List the route table, or resolve a path against it
    #[command(visible_alias = "r")]
    Routes {
        /// Path to resolve, e.g. `/session/42`
        path: Option<String>,

        /// Use the dark theme
        #[arg(long, conflicts_with = "light")]
        dark: bool,

        /// Use the light theme
        #[arg(long)]
        light: bool,
    },
}

/// Optimize command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct OptimizeArgs {
    /// Source image directory (default: src/assets)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub input: Option<PathBuf>,

    /// Destination directory (default: src/assets/optimized)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Compression backend
    #[arg(short, long, value_enum)]
    pub backend: Option<CompressorBackend>,

    /// Lowest acceptable quality in percent
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min_quality: Option<u8>,

    /// Target quality in percent
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub max_quality: Option<u8>,
}

impl Commands {
    /// Theme override from `--dark` / `--light`.
    pub fn dark_override(&self) -> Option<bool> {
        match self {
            Self::Routes { dark: true, .. } => Some(true),
            Self::Routes { light: true, .. } => Some(false),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("distlens").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_analyze_alias() {
        let cli = parse(&["a", "build"]);
        assert!(matches!(cli.command, Commands::Analyze { dir: Some(ref d) } if d == &PathBuf::from("build")));
    }

    #[test]
    fn test_optimize_args() {
        let cli = parse(&["-C", "x.toml", "optimize", "--backend", "pngquant", "--max-quality", "90"]);
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        let Commands::Optimize { args } = cli.command else {
            panic!("expected optimize");
        };
        assert_eq!(args.backend, Some(CompressorBackend::Pngquant));
        assert_eq!(args.max_quality, Some(90));
        assert_eq!(args.min_quality, None);
    }

    #[test]
    fn test_quality_out_of_range() {
        let result = Cli::try_parse_from(["distlens", "optimize", "--max-quality", "101"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_theme_flags() {
        assert_eq!(parse(&["routes", "--dark"]).command.dark_override(), Some(true));
        assert_eq!(parse(&["r", "--light", "/wall"]).command.dark_override(), Some(false));
        assert_eq!(parse(&["routes"]).command.dark_override(), None);
        assert!(Cli::try_parse_from(["distlens", "routes", "--dark", "--light"]).is_err());
    }

    #[test]
    fn test_global_verbose() {
        assert!(parse(&["images", "-v"]).verbose);
    }
}
