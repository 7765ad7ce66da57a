//! Per-tick spin animation.
//!
//! The only per-frame mutation of the graph outside direct user edits: every
//! node flagged `animated` accumulates its signed spin speed (degrees) on its
//! designated rotation axis, once per logical tick. Angles are not clamped or
//! normalized; the trigonometric functions consuming them wrap naturally.

use crate::data_structures::scene_graph::SceneGraph;

#[derive(Debug, Default)]
pub struct AnimationStepper {
    paused: bool,
}

impl AnimationStepper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the pause flag, returning the new paused state.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Advance every animated node by one tick. No-op while paused.
    pub fn tick(&mut self, graph: &mut SceneGraph) {
        if self.paused {
            return;
        }
        for flat_index in 0..graph.flatten().len() {
            let id = graph.flatten()[flat_index];
            let node = graph.node_mut(id);
            if node.animated {
                let (axis, degrees) = (node.spin_axis, node.spin_speed);
                axis.spin(&mut node.transform, degrees);
            }
        }
    }
}
