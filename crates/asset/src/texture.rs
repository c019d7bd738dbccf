//! CPU-side RGBA8 texture payloads.

use anyhow::Context;
use std::path::Path;

/// Decoded image bytes plus dimensions, ready for an upload path.
/// Pixels are tightly packed RGBA8, row-major, top-left origin.
#[derive(Clone, Debug, PartialEq)]
pub struct TextureData {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl TextureData {
    /// Wrap raw RGBA8 bytes. The byte length must be `width * height * 4`.
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize) * 4,
            "pixel buffer does not match RGBA8 dimensions"
        );
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Decode a PNG file into RGBA8, converting from whatever the file stores.
    pub fn load_png<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let img = image::open(path)
            .with_context(|| format!("failed to decode texture {}", path.display()))?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        log::info!(
            "loaded texture {} ({}x{})",
            path.display(),
            width,
            height
        );
        Ok(Self::from_rgba8(width, height, rgba.into_raw()))
    }

    /// Procedural checkerboard, used when no texture file is given.
    pub fn checkerboard(size: u32, cell: u32) -> Self {
        let mut pixels = Vec::with_capacity((size as usize) * (size as usize) * 4);
        for y in 0..size {
            for x in 0..size {
                let light = ((x / cell) + (y / cell)) % 2 == 0;
                let v = if light { 230 } else { 60 };
                pixels.extend_from_slice(&[v, v, v, 255]);
            }
        }
        Self::from_rgba8(size, size, pixels)
    }

    pub fn is_valid(&self) -> bool {
        self.width > 0
            && self.height > 0
            && self.pixels.len() == (self.width as usize) * (self.height as usize) * 4
    }
}
