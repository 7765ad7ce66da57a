//! Backend-facing render output.
//!
//! The core never issues draw calls. Instead, the per-frame traversal hands
//! one [`RenderItem`] per scene node to a [`RenderBackend`] implementation,
//! which owns the actual graphics API. This is the whole contract between
//! the scene core and whatever draws pixels.

use cgmath::Matrix4;

use crate::data_structures::model::MeshPayload;

/// Everything the renderer needs for one node, valid for the current frame.
///
/// `mesh` is `None` for group nodes and for mesh nodes whose payload failed
/// to load; a backend simply skips those.
pub struct RenderItem<'a> {
    pub name: &'a str,
    pub world: Matrix4<f32>,
    pub mesh: Option<&'a MeshPayload>,
    pub selected: bool,
}

/// The seam the graphics backend implements.
///
/// Items arrive in pre-order, parents before children, roots in declaration
/// order.
pub trait RenderBackend {
    fn draw(&mut self, item: &RenderItem<'_>);
}
