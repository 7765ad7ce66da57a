//! roomview
//!
//! The core of an interactive 3D scene viewer: a hierarchical scene
//! description (node transforms, mesh references, animation flags) is decoded
//! from JSON, each referenced mesh is resolved through a deduplicating
//! resource cache, and the resulting graph is composed into per-node world
//! transforms every frame while keyboard events edit node transforms and the
//! camera live. The graphics backend is deliberately absent: a renderer
//! consumes `(world transform, mesh payload, selected flag)` triples through
//! the [`render`] seam and produces pixels however it likes.
//!
//! High-level modules
//! - `camera`: free-look camera seeded from the scene description
//! - `data_structures`: scene data models (mesh payloads, transforms, the graph)
//! - `resources`: helpers to decode meshes/textures/scenes and the mesh cache
//! - `selection`: cyclic node selection over the flattened graph
//! - `animation`: per-tick spin animation for flagged nodes
//! - `session`: the session context owning graph, cache and controllers
//! - `render`: the backend-facing output types
//!

pub mod animation;
pub mod camera;
pub mod data_structures;
pub mod render;
pub mod resources;
pub mod selection;
pub mod session;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
