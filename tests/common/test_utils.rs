#![allow(dead_code)]

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use roomview::{data_structures::model::MeshPayload, resources::cache::MeshLoader};
use serde_json::Value;

/// A minimal one-triangle payload standing in for a decoded OBJ file.
pub(crate) fn tri_payload(name: &str) -> MeshPayload {
    MeshPayload::new(
        name,
        vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        vec![[0.0, 0.0, 1.0]; 3],
        Vec::new(),
        None,
    )
    .unwrap()
}

/// Loader stub that counts invocations per identifier and fails on demand.
pub(crate) struct CountingLoader {
    calls: RefCell<HashMap<String, usize>>,
    failing: Vec<String>,
}

impl CountingLoader {
    pub fn new() -> Self {
        Self::failing(&[])
    }

    pub fn failing(names: &[&str]) -> Self {
        Self {
            calls: RefCell::new(HashMap::new()),
            failing: names.iter().map(|n| n.to_string()).collect(),
        }
    }

    pub fn calls_for(&self, name: &str) -> usize {
        self.calls.borrow().get(name).copied().unwrap_or(0)
    }
}

impl MeshLoader for CountingLoader {
    fn load(&self, name: &str) -> anyhow::Result<MeshPayload> {
        *self.calls.borrow_mut().entry(name.to_string()).or_insert(0) += 1;
        if self.failing.iter().any(|f| f == name) {
            anyhow::bail!("stub loader was told to fail for {name}");
        }
        Ok(tri_payload(name))
    }
}

/// Shareable handle so tests keep counting after handing a box to a session.
#[derive(Clone)]
pub(crate) struct SharedLoader(pub Rc<CountingLoader>);

impl SharedLoader {
    pub fn new() -> Self {
        Self(Rc::new(CountingLoader::new()))
    }

    pub fn failing(names: &[&str]) -> Self {
        Self(Rc::new(CountingLoader::failing(names)))
    }
}

impl MeshLoader for SharedLoader {
    fn load(&self, name: &str) -> anyhow::Result<MeshPayload> {
        self.0.load(name)
    }
}

pub(crate) fn scene(json: &str) -> Value {
    serde_json::from_str(json).expect("test scene must be valid JSON")
}

pub(crate) fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {expected}, got {actual}"
    );
}
