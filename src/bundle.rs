//! The bundling run: read, encode, render, write.
//!
//! Sources whose file does not exist are skipped with a warning. Every other
//! I/O failure ends the run; a partially written output is left in place.

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    asset::{AssetEntry, AssetError, AssetMap, AssetSource},
    config::BundleConfig,
    debug, log,
    render::render_artifact,
};

/// A declared source whose file was not found.
///
/// One is recorded for every `[warning] <path> not found!` line logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingAsset {
    pub name: &'static str,
    pub path: PathBuf,
}

/// Outcome of a bundling run.
#[derive(Debug)]
pub struct BundleReport {
    /// Names written to the artifact, in order.
    pub bundled: Vec<String>,
    pub missing: Vec<MissingAsset>,
    pub output: PathBuf,
}

/// Read and encode every existing source, in declaration order.
pub fn collect(sources: &[AssetSource], root: &Path) -> Result<(AssetMap, Vec<MissingAsset>)> {
    let mut map = AssetMap::new();
    let mut missing = Vec::new();

    for source in sources {
        let path = source.resolve(root);
        if !path.exists() {
            log!("warning"; "{} not found!", path.display());
            missing.push(MissingAsset {
                name: source.name,
                path,
            });
            continue;
        }

        log!("encode"; "{}", path.display());
        let entry = AssetEntry::load(source.name, &path)?;
        debug!("encode"; "{} = {} as {} ({} base64 chars)",
            entry.name, entry.path.display(), entry.mime, entry.payload.len());
        if let Err(err @ AssetError::DuplicateKey(_)) = map.insert(entry) {
            log!("error"; "{}", err);
            return Err(err.into());
        }
    }

    Ok((map, missing))
}

/// Run the full bundle and write the artifact to `config.get_output()`.
pub fn bundle(sources: &[AssetSource], config: &BundleConfig) -> Result<BundleReport> {
    log!("bundle"; "generating {}", config.get_output().display());

    let (map, missing) = collect(sources, config.get_root())?;
    if map.is_empty() {
        log!("warning"; "no assets found under {}", config.get_root().display());
    }
    let content = render_artifact(&map);

    let output = config.get_output();
    fs::write(output, content).with_context(|| format!("failed to write {}", output.display()))?;

    let count = map.len();
    log!("done"; "{} created with {} asset{}", output.display(), count, if count == 1 { "" } else { "s" });

    Ok(BundleReport {
        bundled: map.names().map(str::to_string).collect(),
        missing,
        output: output.to_path_buf(),
    })
}
