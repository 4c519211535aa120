//! Asset sources, entries and the ordered asset map.
//!
//! # Module Structure
//!
//! - `source` - The built-in name → file table
//! - `entry` - A single encoded asset and its data URI
//! - `map` - Ordered, key-unique collection of entries

mod entry;
mod map;
mod source;

pub use entry::AssetEntry;
pub use map::{AssetError, AssetMap};
pub use source::{AssetSource, BUILTIN_ASSETS};
