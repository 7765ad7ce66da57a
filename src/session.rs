//! Session context and frame phases.
//!
//! A [`Session`] bundles everything one viewer instance owns: the scene
//! graph, the mesh cache and its loader, the camera and the selection and
//! animation controllers. The driving loop feeds it abstract input events
//! and advances it once per logical tick; how keys map to events and how the
//! resulting [`RenderItem`]s become pixels is the embedder's business.
//!
//! # Frame order
//!
//! Each frame follows a strict phase order:
//! 1. `apply` all pending input events
//! 2. `advance` the animation by one tick
//! 3. `render_to` composes world transforms and hands items to the backend
//!
//! [`RenderItem`]: crate::render::RenderItem

use std::path::Path;

use cgmath::Vector3;
use serde_json::Value;

use crate::{
    animation::AnimationStepper,
    camera::Camera,
    data_structures::scene_graph::{NodeId, SceneGraph, SceneNode},
    render::RenderBackend,
    resources::{
        AssetPaths,
        cache::{MeshCache, MeshLoader, ObjMeshLoader},
        scene::{build_scene, load_scene_file},
    },
    selection::SelectionController,
};

/// Abstract input events, decoupled from any concrete key mapping.
///
/// The node edits apply to the currently selected node and are silently
/// dropped when nothing is selected, mirroring the legacy key handlers.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    SelectNext,
    TogglePause,
    Translate(Vector3<f32>),
    Rotate(Vector3<f32>),
    Scale(Vector3<f32>),
    AdjustSpeed(f32),
    MoveCamera(Vector3<f32>),
}

/// One viewer instance: scene, resources, camera and controllers.
pub struct Session {
    pub graph: SceneGraph,
    pub cache: MeshCache,
    pub camera: Camera,
    loader: Box<dyn MeshLoader>,
    selection: SelectionController,
    stepper: AnimationStepper,
}

impl Session {
    /// Load a scene description from disk with the production OBJ loader.
    pub fn from_file(path: impl AsRef<Path>, paths: AssetPaths) -> anyhow::Result<Self> {
        let loader = Box::new(ObjMeshLoader::new(paths));
        let mut cache = MeshCache::new();
        let built = load_scene_file(path.as_ref(), &mut cache, loader.as_ref())?;
        Ok(Self::assemble(built.graph, built.camera_pos, cache, loader))
    }

    /// Build a session from an already decoded tree with a caller-supplied
    /// loader. This is the seam tests and embedders use.
    pub fn from_tree(tree: &Value, loader: Box<dyn MeshLoader>) -> anyhow::Result<Self> {
        let mut cache = MeshCache::new();
        let built = build_scene(tree, &mut cache, loader.as_ref())?;
        Ok(Self::assemble(built.graph, built.camera_pos, cache, loader))
    }

    fn assemble(
        mut graph: SceneGraph,
        camera_pos: Option<Vector3<f32>>,
        cache: MeshCache,
        loader: Box<dyn MeshLoader>,
    ) -> Self {
        let mut selection = SelectionController::new();
        // Select the first node up front, like the legacy viewer after load.
        selection.select_next(&mut graph);
        Self {
            graph,
            cache,
            camera: Camera::new(camera_pos.unwrap_or_else(Camera::default_position)),
            loader,
            selection,
            stepper: AnimationStepper::new(),
        }
    }

    /// Apply one input event. Phase 1 of the frame.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::SelectNext => self.selection.select_next(&mut self.graph),
            InputEvent::TogglePause => {
                self.stepper.toggle_pause();
            }
            InputEvent::Translate(delta) => {
                self.edit_selected(|node| node.transform.position += delta)
            }
            InputEvent::Rotate(delta) => {
                self.edit_selected(|node| node.transform.rotation += delta)
            }
            InputEvent::Scale(delta) => self.edit_selected(|node| node.transform.scale += delta),
            InputEvent::AdjustSpeed(delta) => self.edit_selected(|node| node.spin_speed += delta),
            InputEvent::MoveCamera(delta) => self.camera.translate(delta),
        }
    }

    /// Advance animation by one logical tick. Phase 2 of the frame.
    pub fn advance(&mut self) {
        self.stepper.tick(&mut self.graph);
    }

    /// Compose world transforms and hand every node to the backend. Phase 3.
    pub fn render_to(&self, backend: &mut dyn RenderBackend) {
        self.graph.visit(|item| backend.draw(&item));
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.selection.selected(&self.graph)
    }

    pub fn is_paused(&self) -> bool {
        self.stepper.is_paused()
    }

    /// The loader behind this session's cache, for resolving further meshes
    /// through `session.cache.get(name, session.loader())`.
    pub fn loader(&self) -> &dyn MeshLoader {
        self.loader.as_ref()
    }

    fn edit_selected(&mut self, edit: impl FnOnce(&mut SceneNode)) {
        if let Some(id) = self.selection.selected(&self.graph) {
            edit(self.graph.node_mut(id));
        }
    }
}
