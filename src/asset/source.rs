//! The static name → file mapping bundled into `assets.js`.

use std::path::{Path, PathBuf};

/// One row of the static mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetSource {
    /// Symbolic name used as the key in the generated `ASSETS` object.
    pub name: &'static str,
    /// File path, resolved against the asset root when relative.
    pub path: &'static str,
}

impl AssetSource {
    pub const fn new(name: &'static str, path: &'static str) -> Self {
        Self { name, path }
    }

    /// Resolve the source path against `root`.
    ///
    /// Absolute paths are returned unchanged.
    pub fn resolve(&self, root: &Path) -> PathBuf {
        let path = Path::new(self.path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            root.join(path)
        }
    }
}

/// Sprites consumed by the endless runner front-end, in declaration order.
pub const BUILTIN_ASSETS: &[AssetSource] = &[
    AssetSource::new("head", "sk-head.png"),
    AssetSource::new("headJump", "sk_jump.png"),
    AssetSource::new("wifeHead", "jane.png"),
    AssetSource::new("smallDog", "sk_dog.png"),
    AssetSource::new("bigDog", "bigdog.jpg"),
    AssetSource::new("dogOne", "dogone.jpg"),
    AssetSource::new("dogTwo", "dogtwo.jpg"),
];
