//! OBJ mesh decoding.
//!
//! Decodes a model file into the flat, non-indexed triangle streams the
//! renderer consumes: every face-vertex index is expanded in place, exactly
//! like the legacy viewer walks `tinyobjloader` indices. Normals and texture
//! coordinates are optional per file; if a file supplies them only for part
//! of its geometry they are dropped entirely rather than left misaligned.

use std::path::Path;

use anyhow::Context;
use log::warn;

use crate::{
    data_structures::{model::MeshPayload, texture::Texture},
    resources::{AssetPaths, texture::load_texture},
};

/// Decode `name` (relative to the configured model directory) into a payload.
///
/// The first material's diffuse texture, if any, is resolved against the
/// texture directory by file name only; a missing or broken texture degrades
/// to an untextured payload instead of failing the mesh.
pub fn load_mesh_obj(name: &str, paths: &AssetPaths) -> anyhow::Result<MeshPayload> {
    let path = paths.model_dir.join(name);
    let (models, materials) = tobj::load_obj(
        &path,
        &tobj::LoadOptions {
            triangulate: true,
            ..Default::default()
        },
    )
    .with_context(|| format!("failed to load model {}", path.display()))?;

    let mut positions: Vec<[f32; 3]> = Vec::new();
    let mut normals: Vec<[f32; 3]> = Vec::new();
    let mut texcoords: Vec<[f32; 2]> = Vec::new();

    for m in &models {
        let mesh = &m.mesh;
        for (face_vertex, &i) in mesh.indices.iter().enumerate() {
            let i = i as usize;
            positions.push([
                mesh.positions[3 * i],
                mesh.positions[3 * i + 1],
                mesh.positions[3 * i + 2],
            ]);
            if let Some(&n) = mesh.normal_indices.get(face_vertex) {
                let n = n as usize;
                normals.push([
                    mesh.normals[3 * n],
                    mesh.normals[3 * n + 1],
                    mesh.normals[3 * n + 2],
                ]);
            }
            if let Some(&t) = mesh.texcoord_indices.get(face_vertex) {
                let t = t as usize;
                texcoords.push([mesh.texcoords[2 * t], mesh.texcoords[2 * t + 1]]);
            }
        }
    }

    if !normals.is_empty() && normals.len() != positions.len() {
        warn!("{name}: partial normals ({}/{}), dropping them", normals.len(), positions.len());
        normals.clear();
    }
    if !texcoords.is_empty() && texcoords.len() != positions.len() {
        warn!(
            "{name}: partial texcoords ({}/{}), dropping them",
            texcoords.len(),
            positions.len()
        );
        texcoords.clear();
    }

    let texture = resolve_diffuse_texture(name, materials, paths);

    MeshPayload::new(name, positions, normals, texcoords, texture)
}

/// Look up the first material's diffuse texture, tolerating every failure.
fn resolve_diffuse_texture(
    mesh_name: &str,
    materials: Result<Vec<tobj::Material>, tobj::LoadError>,
    paths: &AssetPaths,
) -> Option<Texture> {
    let materials = match materials {
        Ok(materials) => materials,
        Err(e) => {
            warn!("{mesh_name}: material library could not be read: {e}");
            return None;
        }
    };
    let texture_name = materials.first().and_then(|m| m.diffuse_texture.clone())?;
    // MTL files sometimes carry full export paths; only the file name is
    // meaningful relative to our texture directory.
    let file_name = texture_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(texture_name.as_str());
    match load_texture(&paths.texture_dir.join(file_name)) {
        Ok(texture) => Some(texture),
        Err(e) => {
            warn!("{mesh_name}: texture {file_name} unavailable, rendering untextured: {e}");
            None
        }
    }
}
