//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Bundle the runner's sprites into a generated `assets.js`
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Directory the sprite files are read from
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Generated script path (default: assets.js in the root directory)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Config file path (default: assetjs.toml)
    #[arg(short = 'C', long, default_value = "assetjs.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_args_defaults() {
        let cli = Cli::parse_from(["assetjs"]);
        assert!(cli.root.is_none());
        assert!(cli.output.is_none());
        assert_eq!(cli.config, PathBuf::from("assetjs.toml"));
        assert!(!cli.verbose);
        assert_eq!(cli.color, ColorChoice::Auto);
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::parse_from(["assetjs", "-r", "sprites", "-o", "out.js", "-v"]);
        assert_eq!(cli.root, Some(PathBuf::from("sprites")));
        assert_eq!(cli.output, Some(PathBuf::from("out.js")));
        assert!(cli.verbose);
    }
}
