use super::*;

#[test]
fn endpoints_are_stable() {
    for ease in [Ease::Linear, Ease::InOutSine] {
        assert!(ease.apply(0.0).abs() < 1e-12, "{ease:?}");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?}");
        assert!((ease.apply(0.5) - 0.5).abs() < 1e-12, "{ease:?}");
    }
}

#[test]
fn in_out_sine_is_slow_at_the_ends() {
    let e = Ease::InOutSine;
    assert!(e.apply(0.1) < 0.1);
    assert!(e.apply(0.9) > 0.9);
    assert!(e.apply(0.25) < e.apply(0.5) && e.apply(0.5) < e.apply(0.75));
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::Linear.apply(-3.0), 0.0);
    assert_eq!(Ease::InOutSine.apply(7.0), 1.0);
}
