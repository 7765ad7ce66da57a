//! Render-ready mesh data.
//!
//! A [`MeshPayload`] is the decoded form of a model file: flat, pre-triangulated,
//! non-indexed vertex streams plus an optional texture. Payloads are immutable
//! once loaded and owned by the mesh cache; scene nodes share them by
//! reference, so two nodes placing the same piece of furniture point at the
//! same payload.

use anyhow::bail;

use crate::data_structures::texture::Texture;

/// Decoded geometry for one model file.
///
/// Invariants (enforced by [`MeshPayload::new`]):
/// - `positions` is non-empty and its length is a multiple of 3, i.e. the
///   payload is a plain triangle list
/// - `normals` and `texcoords` are each either empty or exactly as long as
///   `positions`
#[derive(Clone, Debug, PartialEq)]
pub struct MeshPayload {
    pub name: String,
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub texcoords: Vec<[f32; 2]>,
    pub texture: Option<Texture>,
}

impl MeshPayload {
    pub fn new(
        name: impl Into<String>,
        positions: Vec<[f32; 3]>,
        normals: Vec<[f32; 3]>,
        texcoords: Vec<[f32; 2]>,
        texture: Option<Texture>,
    ) -> anyhow::Result<Self> {
        let name = name.into();
        if positions.is_empty() {
            bail!("mesh {name} contains no geometry");
        }
        if positions.len() % 3 != 0 {
            bail!(
                "mesh {name} is not a triangle list ({} vertices)",
                positions.len()
            );
        }
        if !normals.is_empty() && normals.len() != positions.len() {
            bail!(
                "mesh {name} has {} normals for {} vertices",
                normals.len(),
                positions.len()
            );
        }
        if !texcoords.is_empty() && texcoords.len() != positions.len() {
            bail!(
                "mesh {name} has {} texcoords for {} vertices",
                texcoords.len(),
                positions.len()
            );
        }
        Ok(Self {
            name,
            positions,
            normals,
            texcoords,
            texture,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn has_normals(&self) -> bool {
        !self.normals.is_empty()
    }

    pub fn has_texcoords(&self) -> bool {
        !self.texcoords.is_empty()
    }
}
