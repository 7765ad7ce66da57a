use std::{cell::Cell, rc::Rc};

use roomview::{
    data_structures::model::MeshPayload,
    resources::cache::{MeshCache, MeshLoader},
};

use crate::common::test_utils::{CountingLoader, tri_payload};

mod common;

#[test]
fn repeated_requests_load_once_and_share_the_payload() {
    let loader = CountingLoader::new();
    let mut cache = MeshCache::new();

    let first = cache.get("sofa.obj", &loader).unwrap();
    let second = cache.get("sofa.obj", &loader).unwrap();
    let third = cache.get("sofa.obj", &loader).unwrap();

    assert_eq!(loader.calls_for("sofa.obj"), 1);
    assert!(Rc::ptr_eq(&first, &second));
    assert!(Rc::ptr_eq(&second, &third));
}

#[test]
fn distinct_identifiers_are_loaded_separately() {
    let loader = CountingLoader::new();
    let mut cache = MeshCache::new();

    let sofa = cache.get("sofa.obj", &loader).unwrap();
    let clock = cache.get("clock.obj", &loader).unwrap();

    assert_eq!(loader.calls_for("sofa.obj"), 1);
    assert_eq!(loader.calls_for("clock.obj"), 1);
    assert_eq!(cache.len(), 2);
    assert!(!Rc::ptr_eq(&sofa, &clock));
}

#[test]
fn failed_loads_are_not_cached_and_are_retried() {
    let loader = CountingLoader::failing(&["broken.obj"]);
    let mut cache = MeshCache::new();

    assert!(cache.get("broken.obj", &loader).is_err());
    assert!(cache.get("broken.obj", &loader).is_err());

    // No negative caching: every request attempts the load again, and no
    // placeholder entry pollutes the cache.
    assert_eq!(loader.calls_for("broken.obj"), 2);
    assert!(!cache.contains("broken.obj"));
    assert!(cache.is_empty());
}

#[test]
fn a_load_that_recovers_is_cached_from_then_on() {
    struct Flaky {
        attempts: Cell<usize>,
    }
    impl MeshLoader for Flaky {
        fn load(&self, name: &str) -> anyhow::Result<MeshPayload> {
            self.attempts.set(self.attempts.get() + 1);
            if self.attempts.get() == 1 {
                anyhow::bail!("first attempt fails");
            }
            Ok(tri_payload(name))
        }
    }

    let loader = Flaky {
        attempts: Cell::new(0),
    };
    let mut cache = MeshCache::new();

    assert!(cache.get("table.obj", &loader).is_err());
    let recovered = cache.get("table.obj", &loader).unwrap();
    let cached = cache.get("table.obj", &loader).unwrap();

    assert_eq!(loader.attempts.get(), 2);
    assert!(Rc::ptr_eq(&recovered, &cached));
}
