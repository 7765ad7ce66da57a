//! Scene data structures: mesh payloads, textures, transforms and the graph.
//!
//! This module contains the core data types for scene representation:
//!
//! - `model` contains the decoded, render-ready mesh payload
//! - `texture` contains the decoded pixel-buffer texture handle
//! - `transform` holds per-node translation/rotation/scale and the fixed
//!   local-matrix composition order
//! - `scene_graph` enables hierarchical scene organization and traversal

pub mod model;
pub mod scene_graph;
pub mod texture;
pub mod transform;
