//! MIME type detection for bundled images.

use std::path::Path;

/// Image MIME type constants.
pub mod types {
    pub const PNG: &str = "image/png";
    pub const JPEG: &str = "image/jpeg";
}

/// Guess an image MIME type from a file path.
///
/// Only JPEG is distinguished; every other suffix (or none) is treated
/// as PNG, which is what the game loader expects for its sprites.
///
/// Matches on the file name suffix, so a dot-file such as `.jpg` is JPEG.
pub fn for_image(path: &Path) -> &'static str {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    if name.ends_with(".jpg") || name.ends_with(".jpeg") {
        types::JPEG
    } else {
        types::PNG
    }
}
