//! Asset collaborator: decoded bitmaps and mask derivation
//!
//! Bitmaps arrive by logical name through an injected `AssetSource`; nothing
//! in the simulation constructs its own ambient provider. Load failures are
//! fatal at world construction, never per-tick.

use std::path::PathBuf;

use thiserror::Error;

use crate::sim::PixelMask;

/// The single fatal error class: a missing or undecodable asset at startup
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset `{name}` not found under {root}")]
    Missing { name: String, root: PathBuf },
    #[error("failed to decode asset `{name}`")]
    Decode {
        name: String,
        #[source]
        source: image::ImageError,
    },
    #[error("invalid level definition")]
    Level(#[from] serde_json::Error),
}

/// A decoded RGBA8 bitmap surface
#[derive(Debug, Clone)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA8
    pub rgba: Vec<u8>,
}

impl Bitmap {
    /// A solid-color surface, fully opaque
    pub fn solid(width: u32, height: u32, color: [u8; 4]) -> Self {
        Self {
            width,
            height,
            rgba: color
                .iter()
                .copied()
                .cycle()
                .take((width * height * 4) as usize)
                .collect(),
        }
    }

    #[inline]
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        self.rgba[((y * self.width + x) * 4 + 3) as usize]
    }

    /// Derive a collision mask from the alpha channel
    pub fn mask(&self) -> PixelMask {
        PixelMask::new(self.width, self.height, |x, y| self.alpha_at(x, y) > 0)
    }
}

/// Supplies decoded bitmaps by logical name
pub trait AssetSource {
    fn bitmap(&self, name: &str) -> Result<Bitmap, AssetError>;
}

/// Disk-backed source decoding `<root>/<name>.png` or `.jpg`
pub struct DirAssets {
    root: PathBuf,
}

impl DirAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetSource for DirAssets {
    fn bitmap(&self, name: &str) -> Result<Bitmap, AssetError> {
        for ext in ["png", "jpg"] {
            let path = self.root.join(format!("{name}.{ext}"));
            if !path.exists() {
                continue;
            }
            let decoded = image::open(&path)
                .map_err(|source| AssetError::Decode {
                    name: name.to_owned(),
                    source,
                })?
                .to_rgba8();
            log::info!("loaded asset `{name}` from {}", path.display());
            return Ok(Bitmap {
                width: decoded.width(),
                height: decoded.height(),
                rgba: decoded.into_raw(),
            });
        }
        Err(AssetError::Missing {
            name: name.to_owned(),
            root: self.root.clone(),
        })
    }
}

/// Procedural source used by tests and headless runs: every bitmap is a
/// solid opaque block
pub struct SolidAssets;

impl AssetSource for SolidAssets {
    fn bitmap(&self, name: &str) -> Result<Bitmap, AssetError> {
        let size = match name {
            "background" => 64,
            _ => crate::consts::BLOCK_SIZE,
        };
        Ok(Bitmap::solid(size, size, [90, 90, 110, 255]))
    }
}
