//! Loading of meshes, textures and scene descriptions from external files.
//!
//! All file I/O of the core lives here. Mesh and texture decode are
//! synchronous: a cache miss blocks the caller until the payload is ready or
//! the load has failed, and there is no retry policy beyond "ask again".

use std::path::{Path, PathBuf};

use anyhow::Context;

pub mod cache;
pub mod mesh;
pub mod scene;
pub mod texture;

/// Base directories model and texture identifiers resolve against.
///
/// Identifiers in the scene description are filesystem-relative names; where
/// they are anchored is configuration, not part of the scene contract. The
/// defaults match the legacy layout (`models/` with `models/textures/`).
#[derive(Clone, Debug)]
pub struct AssetPaths {
    pub model_dir: PathBuf,
    pub texture_dir: PathBuf,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from("models"),
            texture_dir: PathBuf::from("models/textures"),
        }
    }
}

pub fn load_string(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

pub fn load_binary(path: &Path) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}
