//! Rendering of the generated `assets.js` artifact.
//!
//! The front-end reads a global `ASSETS` binding, so the markers, four-space
//! indentation and trailing commas must stay exactly as below:
//!
//! ```text
//! const ASSETS = {
//!     head: "data:image/png;base64,...",
//! };
//! ```

use std::fmt::Write;

use crate::asset::AssetMap;

/// Name of the global binding the front-end expects.
pub const BINDING: &str = "ASSETS";

const INDENT: &str = "    ";

/// Render the asset map as a `const ASSETS = { ... };` declaration.
pub fn render_artifact(map: &AssetMap) -> String {
    let capacity = map
        .iter()
        .map(|e| e.name.len() + e.payload.len() + e.mime.len() + 32)
        .sum::<usize>()
        + 32;

    let mut out = String::with_capacity(capacity);
    out.push_str("const ");
    out.push_str(BINDING);
    out.push_str(" = {\n");

    for entry in map.iter() {
        // Writing to a String cannot fail
        let _ = writeln!(out, "{INDENT}{}: \"{}\",", entry.name, entry.data_uri());
    }

    out.push_str("};\n");
    out
}
