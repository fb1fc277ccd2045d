use super::*;

#[test]
fn maps_domain_ends_onto_range_ends() {
    let s = LinearScale::new([1.0, 5.0], [24.0, 72.0]);
    assert_eq!(s.apply(1.0), 24.0);
    assert_eq!(s.apply(5.0), 72.0);
    assert_eq!(s.apply(3.0), 48.0);
}

#[test]
fn degenerate_domain_is_widened() {
    let s = LinearScale::new([4.0, 4.0], [24.0, 72.0]);
    assert_eq!(s.domain(), [3.0, 5.0]);
    assert_eq!(s.apply(4.0), 48.0);
    assert!(s.apply(4.0).is_finite());
}

#[test]
fn extrapolates_outside_domain() {
    let s = LinearScale::new([0.0, 1.0], [150.0, 850.0]);
    assert_eq!(s.apply(2.0), 1550.0);
}

#[test]
fn invert_round_trips_interior_points() {
    let s = LinearScale::new([0.0, 4.0], [150.0, 850.0]);
    for i in 0..=4 {
        let x = f64::from(i);
        assert!((s.invert(s.apply(x)) - x).abs() < 1e-12);
    }
    assert_eq!(LinearScale::new([0.0, 1.0], [5.0, 5.0]).invert(5.0), 0.0);
}
