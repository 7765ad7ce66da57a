//! Cyclic node selection.
//!
//! The controller owns a cursor into the graph's flattened node order and is
//! the only writer of the per-node `selected` flag, which keeps the flag
//! mutually exclusive across the whole graph: clearing the old node and
//! setting the new one happen inside one operation.

use log::info;

use crate::data_structures::scene_graph::{NodeId, SceneGraph};

#[derive(Debug, Default)]
pub struct SelectionController {
    cursor: Option<usize>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the selection to the next node in flatten order, wrapping.
    ///
    /// The first call selects the first flattened node. On an empty graph
    /// this is a silent no-op and nothing stays selected.
    pub fn select_next(&mut self, graph: &mut SceneGraph) {
        let len = graph.flatten().len();
        if len == 0 {
            return;
        }
        if let Some(current) = self.cursor {
            let id = graph.flatten()[current];
            graph.node_mut(id).selected = false;
        }
        let next = self.cursor.map_or(0, |current| (current + 1) % len);
        self.cursor = Some(next);
        let id = graph.flatten()[next];
        graph.node_mut(id).selected = true;
        info!("selected: {}", graph.node(id).name);
    }

    /// The currently selected node, if any.
    pub fn selected(&self, graph: &SceneGraph) -> Option<NodeId> {
        self.cursor.map(|current| graph.flatten()[current])
    }
}
