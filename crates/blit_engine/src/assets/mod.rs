//! Image assets: decoding, logical slots, and the per-session store

pub mod image_loader;
pub mod store;

pub use image_loader::ImageData;
pub use store::AssetStore;

use std::path::PathBuf;
use thiserror::Error;

/// Logical names for the assets a session can display
///
/// A closed enumeration instead of raw array indices; the key-binding
/// table and the loop selection both speak in these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetSlot {
    /// Shown at startup and after any unrecognized key
    Default,
    /// Bound to the up arrow
    Up,
    /// Bound to the down arrow
    Down,
    /// Bound to the left arrow
    Left,
    /// Bound to the right arrow
    Right,
}

/// Asset loading and conversion errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// The file could not be read or decoded
    #[error("image {} could not be loaded! Error: {reason}", path.display())]
    Decode {
        /// Path of the failing file
        path: PathBuf,
        /// Underlying decoder or IO error
        reason: String,
    },

    /// The decoded buffer could not be converted to the target surface format
    #[error("image {} could not be optimized! Error: {reason}", path.display())]
    Convert {
        /// Path of the failing file
        path: PathBuf,
        /// Underlying conversion error
        reason: String,
    },

    /// A slot was read before anything was loaded into it
    #[error("no image loaded for slot {0:?}")]
    MissingSlot(AssetSlot),
}
