//! Declarative scene building.
//!
//! Materializes a [`SceneGraph`] from a generic decoded tree
//! (`serde_json::Value`): a top-level `root` array of node objects, each with
//! optional `name`, `type`, `pos`/`rot`/`scale` triples, animation flags, a
//! `model` reference and nested `children`. Mesh references are resolved
//! through the [`MeshCache`], so instancing the same model file is free.
//!
//! Error policy: a missing or ill-typed `root` container fails the whole
//! build (no partial scene); a malformed per-node field falls back to its
//! documented default with a diagnostic; a failed mesh load leaves that one
//! node empty and the rest of the scene intact.

use std::path::Path;

use anyhow::{Context, bail};
use cgmath::Vector3;
use log::warn;
use serde_json::Value;

use crate::{
    data_structures::scene_graph::{NodeId, NodeKind, SceneGraph, SceneNode, SpinAxis},
    resources::{
        cache::{MeshCache, MeshLoader},
        load_string,
    },
};

/// Depth bound for nested `children`; the decoded input is not trusted to be
/// depth-limited.
pub const MAX_DEPTH: usize = 64;

/// A freshly built scene graph plus the one-shot camera seed, if declared.
pub struct BuiltScene {
    pub graph: SceneGraph,
    pub camera_pos: Option<Vector3<f32>>,
}

/// Read and decode a scene file, then build it.
pub fn load_scene_file(
    path: &Path,
    cache: &mut MeshCache,
    loader: &dyn MeshLoader,
) -> anyhow::Result<BuiltScene> {
    let text = load_string(path)?;
    let tree: Value = serde_json::from_str(&text)
        .with_context(|| format!("scene description {} is not valid JSON", path.display()))?;
    build_scene(&tree, cache, loader)
}

/// Walk the decoded tree and materialize the node forest.
pub fn build_scene(
    tree: &Value,
    cache: &mut MeshCache,
    loader: &dyn MeshLoader,
) -> anyhow::Result<BuiltScene> {
    let Some(declared_roots) = tree.get("root").and_then(Value::as_array) else {
        bail!("scene description has no `root` array");
    };

    let mut nodes: Vec<SceneNode> = Vec::new();
    let mut roots: Vec<NodeId> = Vec::new();
    for entry in declared_roots {
        if let Some(id) = build_node(entry, &mut nodes, cache, loader, 0)? {
            roots.push(id);
        }
    }

    let camera_pos = tree
        .get("camera")
        .and_then(|camera| camera.get("pos"))
        .and_then(as_vec3);

    Ok(BuiltScene {
        graph: SceneGraph::with_forest(nodes, roots),
        camera_pos,
    })
}

/// Materialize one node object and, recursively, its children.
///
/// Returns `Ok(None)` for entries that are skippable noise (not an object);
/// exceeding [`MAX_DEPTH`] is structural and fails the build.
fn build_node(
    entry: &Value,
    nodes: &mut Vec<SceneNode>,
    cache: &mut MeshCache,
    loader: &dyn MeshLoader,
    depth: usize,
) -> anyhow::Result<Option<NodeId>> {
    if depth > MAX_DEPTH {
        bail!("scene hierarchy exceeds the depth bound of {MAX_DEPTH}");
    }
    let Some(obj) = entry.as_object() else {
        warn!("skipping scene entry that is not an object: {entry}");
        return Ok(None);
    };

    let name = obj
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or("Unnamed")
        .to_string();
    let kind = match obj.get("type").and_then(Value::as_str) {
        Some("mesh") => NodeKind::Mesh,
        Some("group") | None => NodeKind::Group,
        Some(other) => {
            warn!("{name}: unknown node type {other:?}, treating as group");
            NodeKind::Group
        }
    };

    let mut node = SceneNode::new(name, kind);
    node.transform.position = vec3_field(obj, "pos", node.transform.position, &node.name);
    node.transform.rotation = vec3_field(obj, "rot", node.transform.rotation, &node.name);
    node.transform.scale = vec3_field(obj, "scale", node.transform.scale, &node.name);
    node.animated = obj
        .get("isAnimated")
        .or_else(|| obj.get("animated"))
        .and_then(Value::as_bool)
        .unwrap_or(false);
    node.spin_speed = obj
        .get("speed")
        .and_then(Value::as_f64)
        .map(|speed| speed as f32)
        .unwrap_or(1.0);
    node.spin_axis = match obj.get("axis").and_then(Value::as_str) {
        Some("x") => SpinAxis::X,
        Some("y") => SpinAxis::Y,
        Some("z") | None => SpinAxis::Z,
        Some(other) => {
            warn!("{}: unknown spin axis {other:?}, using z", node.name);
            SpinAxis::Z
        }
    };

    if node.kind == NodeKind::Mesh {
        if let Some(model) = obj.get("model").and_then(Value::as_str) {
            // A failed load is local to this node: it keeps its mesh kind,
            // renders as nothing and the cache has already logged why.
            node.mesh = cache.get(model, loader).ok();
        }
    }

    let id = NodeId(nodes.len());
    nodes.push(node);

    if let Some(children) = obj.get("children").and_then(Value::as_array) {
        let mut child_ids = Vec::new();
        for child in children {
            if let Some(child_id) = build_node(child, nodes, cache, loader, depth + 1)? {
                child_ids.push(child_id);
            }
        }
        nodes[id.0].children = child_ids;
    }

    Ok(Some(id))
}

/// A 3-element numeric field; absent or malformed falls back to `default`.
fn vec3_field(
    obj: &serde_json::Map<String, Value>,
    key: &str,
    default: Vector3<f32>,
    node_name: &str,
) -> Vector3<f32> {
    match obj.get(key) {
        None => default,
        Some(value) => match as_vec3(value) {
            Some(parsed) => parsed,
            None => {
                warn!("{node_name}: malformed `{key}` field {value}, using default");
                default
            }
        },
    }
}

fn as_vec3(value: &Value) -> Option<Vector3<f32>> {
    let array = value.as_array()?;
    if array.len() != 3 {
        return None;
    }
    let mut components = [0.0f32; 3];
    for (slot, element) in components.iter_mut().zip(array) {
        *slot = element.as_f64()? as f32;
    }
    Some(Vector3::new(components[0], components[1], components[2]))
}
