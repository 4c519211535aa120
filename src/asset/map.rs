//! Ordered asset map.

use rustc_hash::FxHashSet;
use thiserror::Error;

use super::AssetEntry;

/// Asset map errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssetError {
    #[error("duplicate asset name `{0}`")]
    DuplicateKey(String),
}

/// Entries in insertion order with unique names.
#[derive(Debug, Default)]
pub struct AssetMap {
    entries: Vec<AssetEntry>,
    names: FxHashSet<String>,
}

impl AssetMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, rejecting a name that is already present.
    pub fn insert(&mut self, entry: AssetEntry) -> Result<(), AssetError> {
        if !self.names.insert(entry.name.clone()) {
            return Err(AssetError::DuplicateKey(entry.name));
        }
        self.entries.push(entry);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &AssetEntry> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
