//! assetjs - Bundle game sprites into a generated `assets.js` of data URIs.

mod asset;
mod bundle;
mod cli;
mod config;
mod logger;
mod render;
mod utils;

use anyhow::Result;
use asset::BUILTIN_ASSETS;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::BundleConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = BundleConfig::load(&cli)?;
    if let Some(path) = &config.config_path {
        debug!("config"; "using {}", path.display());
    }
    debug!("config"; "root {}", config.get_root().display());

    let report = bundle::bundle(BUILTIN_ASSETS, &config)?;
    debug!("bundle"; "{} bundled, {} missing -> {}",
        report.bundled.len(), report.missing.len(), report.output.display());
    for missing in &report.missing {
        debug!("bundle"; "skipped {} ({})", missing.name, missing.path.display());
    }

    Ok(())
}
