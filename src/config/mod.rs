//! Bundler configuration for `assetjs.toml`.
//!
//! The config file is optional. It only relocates where the built-in
//! sprites are read from and where `assets.js` is written.
//!
//! ```toml
//! [bundle]
//! root = "sprites"     # relative to the config file
//! output = "assets.js" # relative to root
//! ```
//!
//! CLI flags take precedence; their relative paths resolve against the
//! current directory.

mod error;
mod util;

pub use error::ConfigError;
use util::{find_config_file, resolve_against};

use crate::{cli::Cli, log};
use anyhow::Result;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default name of the generated file.
pub const DEFAULT_OUTPUT: &str = "assets.js";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing assetjs.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BundleConfig {
    /// Absolute path to the config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Resolved asset directory (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Resolved output file (internal use only)
    #[serde(skip)]
    pub output: PathBuf,

    /// `[bundle]` section
    #[serde(default)]
    pub bundle: BundleSection,
}

/// `[bundle]` section configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BundleSection {
    /// Directory the built-in file names are resolved against.
    pub root: PathBuf,
    /// Output file path.
    pub output: PathBuf,
}

impl Default for BundleSection {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl BundleConfig {
    /// Load configuration for the current working directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::load_from(cli, &cwd)
    }

    /// Load configuration, searching upward from `cwd` for the config file.
    pub fn load_from(cli: &Cli, cwd: &Path) -> Result<Self> {
        let mut config = match find_config_file(&cli.config, cwd) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.config_path = Some(path);
                config
            }
            None => Self::default(),
        };

        config.finalize(cli, cwd);
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
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

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        log!("warning"; "unknown fields in {}, ignoring:", path.display());
        for field in fields {
            log!("warning"; "- {}", field);
        }
    }

    /// Resolve `root` and `output` to absolute paths, CLI first.
    fn finalize(&mut self, cli: &Cli, cwd: &Path) {
        let config_dir = self
            .config_path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(cwd);

        self.root = match &cli.root {
            Some(root) => resolve_against(cwd, root),
            None => resolve_against(config_dir, &self.bundle.root),
        };

        self.output = match &cli.output {
            Some(output) => resolve_against(cwd, output),
            None => resolve_against(&self.root, &self.bundle.output),
        };
    }

    /// Get the asset root directory
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Get the output file path
    pub fn get_output(&self) -> &Path {
        &self.output
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("assetjs").chain(args.iter().copied()))
    }

    fn parse(content: &str) -> Result<BundleConfig, ConfigError> {
        BundleConfig::parse_with_ignored(content).map(|(config, _)| config)
    }

    #[test]
    fn test_parse_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config.bundle.root, PathBuf::from("."));
        assert_eq!(config.bundle.output, PathBuf::from("assets.js"));
    }

    #[test]
    fn test_parse_bundle_section() {
        let config = parse(
            r#"
            [bundle]
            root = "sprites"
            output = "dist/assets.js"
            "#,
        )
        .unwrap();
        assert_eq!(config.bundle.root, PathBuf::from("sprites"));
        assert_eq!(config.bundle.output, PathBuf::from("dist/assets.js"));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(parse("[bundle]\nroot = 3"), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_parse_with_ignored_collects_unknown() {
        let (config, ignored) = BundleConfig::parse_with_ignored(
            "[bundle]\noutput = \"a.js\"\nminify = true\n[extra]\nx = 1\n",
        )
        .unwrap();
        assert_eq!(config.bundle.output, PathBuf::from("a.js"));
        assert_eq!(ignored, vec!["bundle.minify".to_string(), "extra".to_string()]);
    }

    #[test]
    fn test_load_without_config_uses_cwd() {
        let tmp = TempDir::new().unwrap();
        let config = BundleConfig::load_from(&cli(&["-C", "absent-assetjs.toml"]), tmp.path()).unwrap();

        assert!(config.config_path.is_none());
        assert_eq!(config.get_root().as_os_str(), tmp.path().as_os_str());
        assert_eq!(
            config.get_output().as_os_str(),
            tmp.path().join("assets.js").as_os_str()
        );
    }

    #[test]
    fn test_load_resolves_against_config_dir() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("deep");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            tmp.path().join("assetjs.toml"),
            "[bundle]\nroot = \"sprites\"\noutput = \"out.js\"\n",
        )
        .unwrap();

        let config = BundleConfig::load_from(&cli(&[]), &nested).unwrap();
        assert_eq!(config.config_path, Some(tmp.path().join("assetjs.toml")));
        assert_eq!(config.get_root(), tmp.path().join("sprites"));
        assert_eq!(config.get_output(), tmp.path().join("sprites").join("out.js"));
    }

    #[test]
    fn test_cli_overrides_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("assetjs.toml"),
            "[bundle]\nroot = \"sprites\"\noutput = \"out.js\"\n",
        )
        .unwrap();

        let config =
            BundleConfig::load_from(&cli(&["--root", "img", "-o", "web/assets.js"]), tmp.path())
                .unwrap();
        assert_eq!(config.get_root(), tmp.path().join("img"));
        assert_eq!(config.get_output(), tmp.path().join("web/assets.js"));
    }

    #[test]
    fn test_load_config_pointing_at_dir_is_ignored() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().to_string_lossy().into_owned();

        let config = BundleConfig::load_from(&cli(&["-C", &dir]), tmp.path()).unwrap();
        assert!(config.config_path.is_none());
        assert_eq!(config.get_root().as_os_str(), tmp.path().as_os_str());
    }

    #[test]
    fn test_load_reports_parse_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("assetjs.toml"), "[bundle\n").unwrap();

        let err = BundleConfig::load_from(&cli(&[]), tmp.path()).unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some());
    }
}
