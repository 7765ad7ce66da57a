//! Decoded texture data.
//!
//! A [`Texture`] is the opaque handle the core hands to the renderer next to
//! a mesh payload. The core never inspects the pixels; it only decodes them
//! once and shares the buffer with every mesh that references the same file.

use anyhow::Context;

/// A decoded RGBA8 pixel buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl Texture {
    /// Decode an image from raw file bytes.
    ///
    /// The image is flipped vertically on load so that texture coordinates
    /// from OBJ files address it the way the legacy viewer expects.
    pub fn from_bytes(name: &str, bytes: &[u8]) -> anyhow::Result<Self> {
        let img = image::load_from_memory(bytes)
            .with_context(|| format!("failed to decode texture {name}"))?;
        let rgba = img.flipv().to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Self {
            name: name.to_string(),
            width,
            height,
            rgba: rgba.into_raw(),
        })
    }
}
