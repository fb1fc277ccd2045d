use super::*;

#[test]
fn every_curve_pins_endpoints() {
    for e in Ease::ALL {
        assert_eq!(e.apply(0.0), 0.0, "{e}");
        assert_eq!(e.apply(1.0), 1.0, "{e}");
        assert_eq!(e.apply(-3.0), 0.0, "{e}");
        assert_eq!(e.apply(7.0), 1.0, "{e}");
    }
}

#[test]
fn cubic_out_decelerates_and_in_out_is_symmetric() {
    // Fast start: more than half done at the midpoint.
    assert!(Ease::CubicOut.apply(0.5) > 0.8);
    assert_eq!(Ease::CubicInOut.apply(0.5), 0.5);
    let a = Ease::CubicInOut.apply(0.2);
    let b = Ease::CubicInOut.apply(0.8);
    assert!((a + b - 1.0).abs() < 1e-12);
}

#[test]
fn names_round_trip_through_from_str() {
    for e in Ease::ALL {
        assert_eq!(e.name().parse::<Ease>().unwrap(), e);
    }
    assert_eq!(" Cubic-Out ".parse::<Ease>().unwrap(), Ease::CubicOut);
    assert!("bounce".parse::<Ease>().is_err());
}

#[test]
fn serde_uses_kebab_names() {
    assert_eq!(
        serde_json::to_string(&Ease::CubicInOut).unwrap(),
        "\"cubic-in-out\""
    );
    let e: Ease = serde_json::from_str("\"quad-out\"").unwrap();
    assert_eq!(e, Ease::QuadOut);
}
