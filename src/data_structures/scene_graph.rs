//! Scene graph and hierarchical scene organization.
//!
//! The graph is a forest of [`SceneNode`]s stored in an arena: the graph owns
//! every node in a flat `Vec` and parent/child links are [`NodeId`] indices.
//! That keeps ownership single and explicit (the graph owns the forest, the
//! cache owns the mesh payloads, nodes only share `Rc` handles into the
//! cache) while still allowing the selection and animation controllers to
//! mutate arbitrary nodes through the flattened order.
//!
//! # Key operations
//!
//! - [`SceneGraph::flatten`] is the deterministic pre-order linearization of
//!   the forest, roots in declaration order. Selection cycling and animation
//!   stepping both iterate it.
//! - [`SceneGraph::visit`] composes world transforms top-down and yields one
//!   [`RenderItem`] per node for the render backend.

use std::rc::Rc;

use cgmath::{Matrix4, SquareMatrix};

use crate::{
    data_structures::{model::MeshPayload, transform::Transform},
    render::RenderItem,
};

/// Index of a node inside its owning [`SceneGraph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// What a node contributes to the scene.
///
/// A `Group` exists purely to compose transforms for its children. A `Mesh`
/// node normally carries a payload, but keeps its kind even when the load
/// failed (it then renders as nothing).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NodeKind {
    #[default]
    Group,
    Mesh,
}

/// The rotation axis a spin animation accumulates on.
///
/// Fixed per node at build time. Scenes in this family historically rotate
/// their animated nodes about Z (clock hands) or X (wall clock), so the axis
/// is data, not code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpinAxis {
    X,
    Y,
    #[default]
    Z,
}

impl SpinAxis {
    /// Add `degrees` to the rotation component this axis designates.
    pub fn spin(&self, transform: &mut Transform, degrees: f32) {
        match self {
            SpinAxis::X => transform.rotation.x += degrees,
            SpinAxis::Y => transform.rotation.y += degrees,
            SpinAxis::Z => transform.rotation.z += degrees,
        }
    }
}

/// One element of the scene hierarchy.
///
/// Created once by the scene builder, then mutated in place for the rest of
/// the session: animation accumulates rotation, the selection controller
/// toggles `selected`, keyboard edits adjust the transform. Nodes are never
/// reparented or deleted individually.
#[derive(Clone, Debug)]
pub struct SceneNode {
    pub name: String,
    pub kind: NodeKind,
    pub transform: Transform,
    pub mesh: Option<Rc<MeshPayload>>,
    pub children: Vec<NodeId>,
    pub selected: bool,
    pub animated: bool,
    pub spin_speed: f32,
    pub spin_axis: SpinAxis,
}

impl SceneNode {
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            transform: Transform::new(),
            mesh: None,
            children: Vec::new(),
            selected: false,
            animated: false,
            spin_speed: 1.0,
            spin_axis: SpinAxis::default(),
        }
    }
}

/// An owned forest of scene nodes with a cached pre-order flattening.
#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
    roots: Vec<NodeId>,
    flat: Vec<NodeId>,
}

impl SceneGraph {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Take ownership of a built forest and compute the flattened order.
    ///
    /// `roots` must index into `nodes`, in declaration order. The flattening
    /// is rebuilt here once; structural mutation after construction is out of
    /// scope for a session, so it never goes stale.
    pub(crate) fn with_forest(nodes: Vec<SceneNode>, roots: Vec<NodeId>) -> Self {
        let mut graph = Self {
            nodes,
            roots,
            flat: Vec::new(),
        };
        graph.flat = graph.compute_flatten();
        graph
    }

    pub fn node(&self, id: NodeId) -> &SceneNode {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut SceneNode {
        &mut self.nodes[id.0]
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The pre-order, depth-first linearization of the forest.
    ///
    /// Deterministic: roots in declaration order, every node exactly once,
    /// each parent before any of its descendants.
    pub fn flatten(&self) -> &[NodeId] {
        &self.flat
    }

    /// First node whose name matches, in flatten order.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.flat
            .iter()
            .copied()
            .find(|&id| self.nodes[id.0].name == name)
    }

    fn compute_flatten(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        for &root in &self.roots {
            self.flatten_into(root, &mut order);
        }
        order
    }

    fn flatten_into(&self, id: NodeId, order: &mut Vec<NodeId>) {
        order.push(id);
        for &child in &self.nodes[id.0].children {
            self.flatten_into(child, order);
        }
    }

    /// Pre-order traversal yielding one [`RenderItem`] per node.
    ///
    /// Each node's world transform is `parent_world * local`; roots start
    /// from the identity. A node's item is yielded before its children are
    /// visited with the just-computed world transform, so a consumer always
    /// sees parents first. Group nodes are yielded too, with `mesh: None`.
    pub fn visit<F>(&self, mut consumer: F)
    where
        F: FnMut(RenderItem<'_>),
    {
        for &root in &self.roots {
            self.visit_node(root, Matrix4::identity(), &mut consumer);
        }
    }

    fn visit_node<F>(&self, id: NodeId, parent_world: Matrix4<f32>, consumer: &mut F)
    where
        F: FnMut(RenderItem<'_>),
    {
        let node = &self.nodes[id.0];
        let world = parent_world * node.transform.to_matrix();
        consumer(RenderItem {
            name: &node.name,
            world,
            mesh: node.mesh.as_deref(),
            selected: node.selected,
        });
        for &child in &node.children {
            self.visit_node(child, world, consumer);
        }
    }

    /// World transform of a single node, composed from its ancestor chain.
    ///
    /// Convenience for picking and tests; the render path uses [`visit`]
    /// which computes every world transform in one pass.
    ///
    /// [`visit`]: SceneGraph::visit
    pub fn world_transform(&self, id: NodeId) -> Matrix4<f32> {
        for &root in &self.roots {
            if let Some(world) = self.world_of(root, id, Matrix4::identity()) {
                return world;
            }
        }
        Matrix4::identity()
    }

    fn world_of(&self, current: NodeId, target: NodeId, parent_world: Matrix4<f32>) -> Option<Matrix4<f32>> {
        let world = parent_world * self.nodes[current.0].transform.to_matrix();
        if current == target {
            return Some(world);
        }
        for &child in &self.nodes[current.0].children {
            if let Some(found) = self.world_of(child, target, world) {
                return Some(found);
            }
        }
        None
    }
}
