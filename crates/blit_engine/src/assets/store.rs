//! Per-session asset store
//!
//! Owns the displayable surfaces for the lifetime of a session. Loading a
//! batch stops at the first failure but keeps everything loaded so far;
//! there is no rollback. Surfaces free themselves when the store drops,
//! before the window they were loaded for (the store always lives above
//! the session on the stack).

use crate::assets::{AssetError, AssetSlot, ImageData};
use sdl2::pixels::PixelFormatEnum;
use sdl2::surface::Surface;
use std::collections::HashMap;
use std::path::Path;

/// Image assets keyed by logical slot
pub struct AssetStore {
    slots: HashMap<AssetSlot, Surface<'static>>,
    target_format: Option<PixelFormatEnum>,
    png_enabled: bool,
}

impl AssetStore {
    /// Create an empty store
    ///
    /// With a `target_format`, every loaded asset is converted to that
    /// pixel format at load time and the intermediate decode is discarded;
    /// without one, assets stay in their decoded RGBA layout.
    pub fn new(target_format: Option<PixelFormatEnum>) -> Self {
        Self {
            slots: HashMap::new(),
            target_format,
            png_enabled: true,
        }
    }

    /// Toggle PNG acceptance
    ///
    /// Sessions created without PNG support hand out stores that reject
    /// `.png` paths up front instead of failing mid-decode.
    pub fn with_png_support(mut self, enabled: bool) -> Self {
        self.png_enabled = enabled;
        self
    }

    /// Load one image file into a slot
    ///
    /// Replaces whatever the slot held before. Decode failures and
    /// format-conversion failures are reported separately, both naming the
    /// failing path.
    pub fn load<P: AsRef<Path>>(&mut self, slot: AssetSlot, path: P) -> Result<(), AssetError> {
        let path_ref = path.as_ref();

        if !self.png_enabled && is_png(path_ref) {
            return Err(AssetError::Decode {
                path: path_ref.to_path_buf(),
                reason: "PNG support was not initialized for this session".to_string(),
            });
        }

        let decoded = ImageData::from_file(path_ref)?;
        let mut surface = wrap_surface(&decoded, path_ref)?;

        if let Some(format) = self.target_format {
            // Convert to the window surface's format and drop the decode.
            surface = surface.convert_format(format).map_err(|e| AssetError::Convert {
                path: path_ref.to_path_buf(),
                reason: e,
            })?;
            log::debug!("Optimized {:?} to {:?}", path_ref, format);
        }

        self.slots.insert(slot, surface);
        Ok(())
    }

    /// Load several slot/path pairs, stopping at the first failure
    ///
    /// Entries loaded before the failure stay loaded and valid.
    pub fn load_batch<P: AsRef<Path>>(
        &mut self,
        entries: &[(AssetSlot, P)],
    ) -> Result<(), AssetError> {
        for (slot, path) in entries {
            self.load(*slot, path)?;
        }
        Ok(())
    }

    /// Borrow the surface loaded into a slot
    pub fn get(&self, slot: AssetSlot) -> Result<&Surface<'static>, AssetError> {
        self.slots.get(&slot).ok_or(AssetError::MissingSlot(slot))
    }

    /// Whether a slot currently holds an asset
    pub fn contains(&self, slot: AssetSlot) -> bool {
        self.slots.contains_key(&slot)
    }

    /// Number of loaded assets
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the store holds no assets
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Release every loaded asset
    ///
    /// Idempotent; dropping the store does the same thing implicitly.
    pub fn clear(&mut self) {
        if !self.slots.is_empty() {
            log::debug!("Releasing {} asset(s)", self.slots.len());
        }
        self.slots.clear();
    }
}

/// Whether a path names a PNG file, by extension
fn is_png(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}

/// Wrap a decoded RGBA buffer into an owned surface
fn wrap_surface(decoded: &ImageData, path: &Path) -> Result<Surface<'static>, AssetError> {
    let mut surface = Surface::new(decoded.width, decoded.height, PixelFormatEnum::RGBA32)
        .map_err(|e| AssetError::Convert {
            path: path.to_path_buf(),
            reason: e,
        })?;

    // The surface row stride can exceed width * 4; copy row by row.
    let pitch = surface.pitch() as usize;
    let row_bytes = decoded.width as usize * 4;
    surface.with_lock_mut(|buffer| {
        for y in 0..decoded.height as usize {
            let src = &decoded.data[y * row_bytes..(y + 1) * row_bytes];
            buffer[y * pitch..y * pitch + row_bytes].copy_from_slice(src);
        }
    });

    Ok(surface)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_bmp(dir: &tempfile::TempDir, name: &str, color: [u8; 4]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let img = ImageData::solid_color(2, 2, color);
        image::save_buffer(
            &path,
            &img.data,
            img.width,
            img.height,
            image::ExtendedColorType::Rgba8,
        )
        .unwrap();
        path
    }

    #[test]
    fn batch_failure_keeps_earlier_entries_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_bmp(&dir, "press.bmp", [1, 2, 3, 255]);
        let missing = dir.path().join("missing.bmp");

        let mut store = AssetStore::new(None);
        let err = store
            .load_batch(&[
                (AssetSlot::Default, good.clone()),
                (AssetSlot::Up, missing.clone()),
                (AssetSlot::Down, good),
            ])
            .unwrap_err();

        match err {
            AssetError::Decode { path, .. } => assert_eq!(path, missing),
            other => panic!("expected Decode, got {other:?}"),
        }
        assert!(store.contains(AssetSlot::Default));
        assert!(!store.contains(AssetSlot::Up));
        assert!(!store.contains(AssetSlot::Down));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn reading_an_unloaded_slot_is_an_error() {
        let store = AssetStore::new(None);
        assert!(matches!(
            store.get(AssetSlot::Left),
            Err(AssetError::MissingSlot(AssetSlot::Left))
        ));
    }

    #[test]
    fn clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_bmp(&dir, "up.bmp", [0, 255, 0, 255]);

        let mut store = AssetStore::new(None);
        store.load(AssetSlot::Up, &path).unwrap();
        assert_eq!(store.len(), 1);

        store.clear();
        assert!(store.is_empty());
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn png_paths_are_rejected_when_support_was_not_initialized() {
        let mut store = AssetStore::new(None).with_png_support(false);
        let err = store.load(AssetSlot::Default, "assets/loaded.png").unwrap_err();
        match err {
            AssetError::Decode { path, reason } => {
                assert_eq!(path, std::path::PathBuf::from("assets/loaded.png"));
                assert!(reason.contains("PNG support"));
            }
            other => panic!("expected Decode, got {other:?}"),
        }
    }

    #[test]
    fn png_detection_ignores_extension_case() {
        let mut store = AssetStore::new(None).with_png_support(false);
        let err = store.load(AssetSlot::Default, "assets/LOADED.PNG").unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }));

        // Non-PNG paths pass the gate and fail later, at decode.
        let err = store.load(AssetSlot::Default, "assets/missing.bmp").unwrap_err();
        match err {
            AssetError::Decode { reason, .. } => assert!(!reason.contains("PNG support")),
            other => panic!("expected Decode, got {other:?}"),
        }
    }

    #[test]
    fn loaded_surface_keeps_the_image_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_bmp(&dir, "stretch.bmp", [9, 9, 9, 255]);

        let mut store = AssetStore::new(None);
        store.load(AssetSlot::Default, &path).unwrap();

        let surface = store.get(AssetSlot::Default).unwrap();
        assert_eq!(surface.width(), 2);
        assert_eq!(surface.height(), 2);
    }
}
