use super::*;

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

#[test]
fn empty_list_has_no_scales() {
    assert!(build_scales(&RankedList::empty(), &layout()).is_none());
}

#[test]
fn x_depends_on_rank_not_count() {
    let list = RankedList::from_counts([("a", 100), ("b", 2), ("c", 1)]);
    let s = build_scales(&list, &layout()).unwrap();
    assert_eq!(s.target(0, 100).position.x, 150.0);
    assert_eq!(s.target(1, 2).position.x, 500.0);
    assert_eq!(s.target(2, 1).position.x, 850.0);
    assert_eq!(s.target(1, 2).position.y, 190.0);
}

#[test]
fn single_entry_uses_unit_index_domain() {
    let list = RankedList::from_counts([("solo", 3)]);
    let s = build_scales(&list, &layout()).unwrap();
    assert_eq!(s.x.domain(), [0.0, 1.0]);
    assert_eq!(s.target(0, 3).position.x, 150.0);
    // Degenerate count domain [3,3] widens to [2,4]; 3 sits in the middle of the range.
    assert_eq!(s.target(0, 3).font_size, 48.0);
}

#[test]
fn font_spans_full_range_for_distinct_counts() {
    let list = RankedList::from_counts([("a", 5), ("b", 3), ("c", 1)]);
    let s = build_scales(&list, &layout()).unwrap();
    assert_eq!(s.target(0, 5).font_size, 72.0);
    assert_eq!(s.target(2, 1).font_size, 24.0);
    assert_eq!(s.target(1, 3).font_size, 48.0);
}

#[test]
fn target_approx_eq_tolerates_noise() {
    let a = Target {
        position: Point::new(1.0, 2.0),
        font_size: 3.0,
    };
    let b = Target {
        position: Point::new(1.0 + 1e-12, 2.0),
        font_size: 3.0,
    };
    assert!(a.approx_eq(&b));
    let c = Target {
        font_size: 3.5,
        ..a
    };
    assert!(!a.approx_eq(&c));
}
