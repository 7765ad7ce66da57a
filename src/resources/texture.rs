//! Texture loading.

use std::path::Path;

use crate::data_structures::texture::Texture;
use crate::resources::load_binary;

/// Load and decode a texture file into an RGBA8 pixel buffer.
pub fn load_texture(path: &Path) -> anyhow::Result<Texture> {
    let data = load_binary(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Texture::from_bytes(&name, &data)
}
