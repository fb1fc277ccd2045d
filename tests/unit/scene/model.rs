use super::*;

#[test]
fn spawn_allocates_fresh_ids() {
    let mut scene = Scene::new();
    let (a, evicted) = scene.spawn("alpha", Point::new(1.0, 2.0), 1.0, 0.0);
    assert!(evicted.is_none());
    let (b, _) = scene.spawn("beta", Point::ORIGIN, 1.0, 0.0);
    assert_ne!(a, b);
    assert_eq!(scene.len(), 2);
    assert_eq!(scene.get("alpha").unwrap().lifecycle, Lifecycle::Entering);
}

#[test]
fn respawn_under_same_key_evicts_previous() {
    let mut scene = Scene::new();
    let (first, _) = scene.spawn("w", Point::ORIGIN, 1.0, 0.0);
    let (second, evicted) = scene.spawn("w", Point::ORIGIN, 1.0, 0.0);
    let evicted = evicted.unwrap();
    assert_eq!(evicted.id, first);
    assert_eq!(evicted.lifecycle, Lifecycle::Removed);
    assert_eq!(scene.len(), 1);
    assert_eq!(scene.get("w").unwrap().id, second);
}

#[test]
fn clear_and_remove_mark_entities_removed() {
    let mut scene = Scene::new();
    scene.spawn("a", Point::ORIGIN, 1.0, 0.0);
    scene.spawn("b", Point::ORIGIN, 1.0, 0.0);
    let gone = scene.remove("a").unwrap();
    assert_eq!(gone.lifecycle, Lifecycle::Removed);
    assert!(scene.remove("a").is_none());

    let cleared = scene.clear();
    assert_eq!(cleared.len(), 1);
    assert!(cleared.iter().all(|e| e.lifecycle == Lifecycle::Removed));
    assert!(scene.is_empty());
}

#[test]
fn words_iterate_in_key_order() {
    let mut scene = Scene::new();
    for w in ["pear", "apple", "mango"] {
        scene.spawn(w, Point::ORIGIN, 1.0, 0.0);
    }
    assert_eq!(scene.words().collect::<Vec<_>>(), vec!["apple", "mango", "pear"]);
}

#[test]
fn lifecycle_liveness() {
    assert!(Lifecycle::Entering.is_live());
    assert!(Lifecycle::Active.is_live());
    assert!(!Lifecycle::Exiting.is_live());
    assert!(!Lifecycle::Removed.is_live());
}
