//! Encoded asset entries.

use anyhow::{Context, Result};
use base64::{Engine, engine::general_purpose::STANDARD};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::utils::mime;

/// A single image resolved, read and base64-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    pub name: String,
    pub path: PathBuf,
    pub mime: &'static str,
    /// Base64 payload (standard alphabet, padded).
    pub payload: String,
}

impl AssetEntry {
    /// Read `path` and encode it under `name`.
    ///
    /// Read failures are returned with the path attached; callers decide
    /// beforehand whether a missing file should be skipped.
    pub fn load(name: impl Into<String>, path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        Ok(Self::from_bytes(name, path, &bytes))
    }

    /// Encode already loaded bytes.
    pub fn from_bytes(name: impl Into<String>, path: &Path, bytes: &[u8]) -> Self {
        Self {
            name: name.into(),
            path: path.to_path_buf(),
            mime: mime::for_image(path),
            payload: STANDARD.encode(bytes),
        }
    }

    /// `data:<mime>;base64,<payload>`
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.payload)
    }
}
