use std::rc::Rc;

use roomview::{
    data_structures::scene_graph::{NodeKind, SpinAxis},
    resources::{cache::MeshCache, scene::build_scene},
    session::Session,
};
use serde_json::json;

use crate::common::test_utils::{CountingLoader, SharedLoader, assert_close, scene};

mod common;

#[test]
fn name_only_node_gets_the_documented_defaults() {
    let tree = scene(r#"{ "root": [ { "name": "solo" } ] }"#);
    let loader = CountingLoader::new();
    let mut cache = MeshCache::new();

    let built = build_scene(&tree, &mut cache, &loader).unwrap();
    let graph = built.graph;
    assert_eq!(graph.len(), 1);

    let node = graph.node(graph.find("solo").unwrap());
    assert_eq!(node.kind, NodeKind::Group);
    assert_eq!(node.transform.position, cgmath::Vector3::new(0.0, 0.0, 0.0));
    assert_eq!(node.transform.rotation, cgmath::Vector3::new(0.0, 0.0, 0.0));
    assert_eq!(node.transform.scale, cgmath::Vector3::new(1.0, 1.0, 1.0));
    assert!(!node.animated);
    assert_close(node.spin_speed, 1.0);
    assert_eq!(node.spin_axis, SpinAxis::Z);
    assert!(node.mesh.is_none());
}

#[test]
fn all_declared_fields_are_honoured() {
    let tree = scene(
        r#"{ "root": [ {
            "name": "clock", "type": "mesh", "model": "clock.obj",
            "pos": [1.0, 2.0, 3.0], "rot": [10.0, 20.0, 30.0], "scale": [2.0, 2.0, 2.0],
            "isAnimated": true, "speed": -0.5, "axis": "x"
        } ] }"#,
    );
    let loader = CountingLoader::new();
    let mut cache = MeshCache::new();

    let graph = build_scene(&tree, &mut cache, &loader).unwrap().graph;
    let node = graph.node(graph.find("clock").unwrap());
    assert_eq!(node.kind, NodeKind::Mesh);
    assert_eq!(node.transform.position, cgmath::Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(node.transform.rotation, cgmath::Vector3::new(10.0, 20.0, 30.0));
    assert_eq!(node.transform.scale, cgmath::Vector3::new(2.0, 2.0, 2.0));
    assert!(node.animated);
    assert_close(node.spin_speed, -0.5);
    assert_eq!(node.spin_axis, SpinAxis::X);
    assert!(node.mesh.is_some());
    assert_eq!(loader.calls_for("clock.obj"), 1);
}

#[test]
fn animated_field_alias_is_accepted() {
    let tree = scene(r#"{ "root": [ { "name": "fan", "animated": true } ] }"#);
    let graph = build_scene(&tree, &mut MeshCache::new(), &CountingLoader::new())
        .unwrap()
        .graph;
    assert!(graph.node(graph.find("fan").unwrap()).animated);
}

#[test]
fn malformed_fields_fall_back_to_defaults_without_failing_the_build() {
    let tree = scene(
        r#"{ "root": [ { "name": "odd", "pos": [1.0, 2.0], "rot": "sideways", "scale": [1, 2, "x"] } ] }"#,
    );
    let graph = build_scene(&tree, &mut MeshCache::new(), &CountingLoader::new())
        .unwrap()
        .graph;
    let node = graph.node(graph.find("odd").unwrap());
    // Partial or ill-typed triples never leave half-written values behind.
    assert_eq!(node.transform.position, cgmath::Vector3::new(0.0, 0.0, 0.0));
    assert_eq!(node.transform.rotation, cgmath::Vector3::new(0.0, 0.0, 0.0));
    assert_eq!(node.transform.scale, cgmath::Vector3::new(1.0, 1.0, 1.0));
}

#[test]
fn missing_root_container_is_a_construction_failure() {
    for bad in [r#"{ "nodes": [] }"#, r#"{ "root": "not-an-array" }"#, r#"{}"#] {
        let result = build_scene(&scene(bad), &mut MeshCache::new(), &CountingLoader::new());
        assert!(result.is_err(), "expected failure for {bad}");
    }
}

#[test]
fn non_object_entries_are_skipped() {
    let tree = scene(r#"{ "root": [ 42, { "name": "kept" }, "noise" ] }"#);
    let graph = build_scene(&tree, &mut MeshCache::new(), &CountingLoader::new())
        .unwrap()
        .graph;
    assert_eq!(graph.len(), 1);
    assert!(graph.find("kept").is_some());
}

#[test]
fn children_are_built_and_attached_in_declaration_order() {
    let tree = scene(
        r#"{ "root": [ { "name": "room", "children": [
            { "name": "table", "children": [ { "name": "vase" } ] },
            { "name": "chair" }
        ] } ] }"#,
    );
    let graph = build_scene(&tree, &mut MeshCache::new(), &CountingLoader::new())
        .unwrap()
        .graph;

    let room = graph.node(graph.find("room").unwrap());
    let child_names: Vec<&str> = room
        .children
        .iter()
        .map(|&id| graph.node(id).name.as_str())
        .collect();
    assert_eq!(child_names, ["table", "chair"]);

    let flat_names: Vec<&str> = graph
        .flatten()
        .iter()
        .map(|&id| graph.node(id).name.as_str())
        .collect();
    assert_eq!(flat_names, ["room", "table", "vase", "chair"]);
}

#[test]
fn runaway_nesting_is_rejected() {
    let mut node = json!({ "name": "leaf" });
    for i in 0..70 {
        node = json!({ "name": format!("level{i}"), "children": [node] });
    }
    let tree = json!({ "root": [node] });
    let result = build_scene(&tree, &mut MeshCache::new(), &CountingLoader::new());
    assert!(result.is_err());
}

#[test]
fn camera_position_is_seeded_from_the_description() {
    let tree = scene(r#"{ "root": [], "camera": { "pos": [1.0, 2.0, 3.0] } }"#);
    let session = Session::from_tree(&tree, Box::new(SharedLoader::new())).unwrap();
    assert_eq!(session.camera.position, cgmath::Vector3::new(1.0, 2.0, 3.0));

    let tree = scene(r#"{ "root": [] }"#);
    let session = Session::from_tree(&tree, Box::new(SharedLoader::new())).unwrap();
    assert_eq!(session.camera.position, cgmath::Vector3::new(0.0, -5.0, 2.0));
}

#[test]
fn one_failing_mesh_does_not_poison_the_scene() {
    let tree = scene(
        r#"{ "root": [
            { "name": "good", "type": "mesh", "model": "sofa.obj" },
            { "name": "bad", "type": "mesh", "model": "missing.obj" }
        ] }"#,
    );
    let loader = CountingLoader::failing(&["missing.obj"]);
    let mut cache = MeshCache::new();

    let graph = build_scene(&tree, &mut cache, &loader).unwrap().graph;
    assert_eq!(graph.len(), 2);

    let good = graph.node(graph.find("good").unwrap());
    let bad = graph.node(graph.find("bad").unwrap());
    assert!(good.mesh.is_some());
    assert!(bad.mesh.is_none());
    assert_eq!(bad.kind, NodeKind::Mesh);
    assert_eq!(cache.len(), 1);
}

#[test]
fn nodes_sharing_a_model_share_one_payload() {
    let tree = scene(
        r#"{ "root": [
            { "name": "chair_left", "type": "mesh", "model": "chair.obj" },
            { "name": "chair_right", "type": "mesh", "model": "chair.obj" }
        ] }"#,
    );
    let loader = CountingLoader::new();
    let mut cache = MeshCache::new();

    let graph = build_scene(&tree, &mut cache, &loader).unwrap().graph;
    assert_eq!(loader.calls_for("chair.obj"), 1);

    let left = graph.node(graph.find("chair_left").unwrap()).mesh.clone().unwrap();
    let right = graph.node(graph.find("chair_right").unwrap()).mesh.clone().unwrap();
    assert!(Rc::ptr_eq(&left, &right));
}
