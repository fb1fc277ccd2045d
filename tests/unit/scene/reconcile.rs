use super::*;
use crate::{
    foundation::core::Canvas,
    layout::scales::{LayoutSpec, build_scales},
    scene::model::Lifecycle,
};

fn layout() -> LayoutSpec {
    LayoutSpec {
        canvas: Canvas {
            width: 1000.0,
            height: 380.0,
        },
        left_pad: 150.0,
        right_pad: 150.0,
        font_range: [24.0, 72.0],
    }
}

/// Put every word of `list` into `scene` as a settled, active entity.
fn settle(scene: &mut Scene, list: &RankedList) {
    let scales = build_scales(list, &layout()).unwrap();
    for (rank, wc) in list.iter().enumerate() {
        let t = scales.target(rank, wc.count);
        scene.spawn(&wc.word, t.position, t.font_size, 1.0);
        let e = scene.get_mut(&wc.word).unwrap();
        e.lifecycle = Lifecycle::Active;
        e.count = wc.count;
        e.rank = rank;
        e.target_position = t.position;
        e.target_font_size = t.font_size;
    }
}

fn diff(scene: &Scene, list: &RankedList) -> Delta {
    let scales = build_scales(list, &layout());
    match reconcile(scene, list, scales.as_ref()) {
        Reconciliation::Diff(d) => d,
        other => panic!("expected diff, got {other:?}"),
    }
}

fn words(ps: &[Placement]) -> Vec<&str> {
    ps.iter().map(|p| p.word.as_str()).collect()
}

#[test]
fn fresh_scene_enters_everything() {
    let list = RankedList::from_counts([("a", 5), ("b", 3)]);
    let d = diff(&Scene::new(), &list);
    assert_eq!(words(&d.enter), vec!["a", "b"]);
    assert!(d.update.is_empty() && d.exit.is_empty() && d.retained.is_empty());
    assert_eq!(d.enter[1].rank, 1);
    assert_eq!(d.enter[1].target.position.x, 850.0);
}

#[test]
fn same_list_twice_is_empty_delta() {
    let list = RankedList::from_counts([("a", 5), ("b", 3), ("c", 1)]);
    let mut scene = Scene::new();
    settle(&mut scene, &list);
    let d = diff(&scene, &list);
    assert!(d.is_empty());
    assert_eq!(d.retained, vec!["a", "b", "c"]);
}

#[test]
fn rank_swap_updates_without_enter_or_exit() {
    let before = RankedList::from_counts([("a", 5), ("b", 3)]);
    let mut scene = Scene::new();
    settle(&mut scene, &before);

    let after = RankedList::from_counts([("b", 6), ("a", 5)]);
    let d = diff(&scene, &after);
    assert!(d.enter.is_empty());
    assert!(d.exit.is_empty());
    assert_eq!(words(&d.update), vec!["b", "a"]);
    assert_eq!(d.update[0].target.position.x, 150.0);
    assert_eq!(d.update[1].target.position.x, 850.0);
}

#[test]
fn count_change_at_same_slot_is_an_update() {
    let mut scene = Scene::new();
    settle(&mut scene, &RankedList::from_counts([("a", 5), ("b", 3)]));
    let d = diff(&scene, &RankedList::from_counts([("a", 5), ("b", 4)]));
    // b keeps rank 1 and the minimum font size, but its count moved.
    assert_eq!(words(&d.update), vec!["b"]);
    assert_eq!(d.retained, vec!["a"]);
}

#[test]
fn dropped_words_exit_and_new_words_enter() {
    let mut scene = Scene::new();
    settle(&mut scene, &RankedList::from_counts([("a", 5), ("b", 3)]));
    let d = diff(&scene, &RankedList::from_counts([("a", 5), ("c", 2)]));
    assert_eq!(words(&d.enter), vec!["c"]);
    assert_eq!(d.exit, vec!["b"]);
}

#[test]
fn exiting_entities_are_not_exited_twice_and_return_fresh() {
    let mut scene = Scene::new();
    settle(&mut scene, &RankedList::from_counts([("a", 5), ("b", 3)]));
    scene.get_mut("b").unwrap().lifecycle = Lifecycle::Exiting;

    let d = diff(&scene, &RankedList::from_counts([("a", 5)]));
    assert!(d.exit.is_empty());

    let d = diff(&scene, &RankedList::from_counts([("a", 5), ("b", 3)]));
    assert_eq!(words(&d.enter), vec!["b"]);
}

#[test]
fn empty_list_resets() {
    let mut scene = Scene::new();
    settle(&mut scene, &RankedList::from_counts([("a", 5)]));
    let rec = reconcile(&scene, &RankedList::empty(), None);
    assert_eq!(
        rec,
        Reconciliation::Reset {
            removed: vec!["a".to_string()]
        }
    );
    assert!(!rec.is_noop());
    assert!(reconcile(&Scene::new(), &RankedList::empty(), None).is_noop());
}
