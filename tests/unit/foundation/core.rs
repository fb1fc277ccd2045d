use super::*;

#[test]
fn millis_saturates_at_bounds() {
    assert_eq!(Millis(5).saturating_sub(Millis(9)), Millis::ZERO);
    assert_eq!(Millis(u64::MAX).saturating_add(Millis(1)), Millis(u64::MAX));
    assert_eq!(Millis(300).saturating_add(Millis(600)), Millis(900));
}

#[test]
fn millis_from_frame_floors() {
    assert_eq!(Millis::from_frame(0, 30), Millis(0));
    assert_eq!(Millis::from_frame(1, 30), Millis(33));
    assert_eq!(Millis::from_frame(30, 30), Millis(1000));
    assert_eq!(Millis::from_frame(7, 0), Millis::ZERO);
}

#[test]
fn canvas_center_line() {
    let c = Canvas {
        width: 1000.0,
        height: 380.0,
    };
    assert_eq!(c.center_y(), 190.0);
}
