//! Deduplicating mesh cache.
//!
//! Model files are expensive to decode and scenes reference the same file
//! from many nodes (a chair placed eight times is still one OBJ). The cache
//! guarantees each identifier is loaded at most once per process: it owns
//! every payload and hands out shared `Rc` handles, so repeated requests are
//! pointer-identical.
//!
//! Failed loads are not cached. The next request for the same identifier
//! attempts the load again; callers that cannot live with that should stop
//! asking.

use std::{collections::HashMap, rc::Rc};

use log::{info, warn};

use crate::{data_structures::model::MeshPayload, resources::AssetPaths};

/// The collaborator boundary that turns an identifier into a payload.
///
/// The cache never touches the filesystem itself; tests substitute loaders
/// that count invocations or fail on demand.
pub trait MeshLoader {
    fn load(&self, name: &str) -> anyhow::Result<MeshPayload>;
}

/// Production loader: OBJ files resolved against configured base directories.
#[derive(Clone, Debug, Default)]
pub struct ObjMeshLoader {
    pub paths: AssetPaths,
}

impl ObjMeshLoader {
    pub fn new(paths: AssetPaths) -> Self {
        Self { paths }
    }
}

impl MeshLoader for ObjMeshLoader {
    fn load(&self, name: &str) -> anyhow::Result<MeshPayload> {
        super::mesh::load_mesh_obj(name, &self.paths)
    }
}

/// Owning store of every loaded mesh payload, keyed by source identifier.
#[derive(Default)]
pub struct MeshCache {
    entries: HashMap<String, Rc<MeshPayload>>,
}

impl MeshCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the payload for `name`, loading it on first request.
    ///
    /// A hit returns the previously stored payload without invoking the
    /// loader. A miss delegates to `loader` exactly once; on success the
    /// payload is stored and shared, on failure nothing is stored and the
    /// error is returned to the requesting node.
    pub fn get(&mut self, name: &str, loader: &dyn MeshLoader) -> anyhow::Result<Rc<MeshPayload>> {
        if let Some(payload) = self.entries.get(name) {
            return Ok(Rc::clone(payload));
        }
        match loader.load(name) {
            Ok(payload) => {
                info!(
                    "loaded mesh {name}: {} triangles{}",
                    payload.triangle_count(),
                    if payload.texture.is_some() { ", textured" } else { "" }
                );
                let payload = Rc::new(payload);
                self.entries.insert(name.to_string(), Rc::clone(&payload));
                Ok(payload)
            }
            Err(e) => {
                warn!("failed to load mesh {name}: {e:#}");
                Err(e)
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
