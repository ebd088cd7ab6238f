use super::*;
use crate::animation::anim::SampleCtx;

#[test]
fn evenly_spaced_places_keys_on_equal_segments() {
    let anim = evenly_spaced(vec![0.0, -6.0, 0.0, 5.0, 0.0], 18.0, Ease::Linear);
    let at = |t: f64| anim.sample(SampleCtx::at(t)).unwrap();
    assert_eq!(at(0.0), 0.0);
    assert_eq!(at(4.5), -6.0);
    assert_eq!(at(9.0), 0.0);
    assert_eq!(at(13.5), 5.0);
    assert_eq!(at(18.0), 0.0);
    assert!((at(2.25) + 3.0).abs() < 1e-12);
}

#[test]
fn single_value_is_constant() {
    let anim = evenly_spaced(vec![7.0], 3.0, Ease::InOutSine);
    assert_eq!(anim.sample(SampleCtx::at(1.0)).unwrap(), 7.0);
}

#[test]
fn repeat_forever_restarts_each_period() {
    let anim = repeat_forever(vec![0.0, 360.0], 30.0, Ease::Linear);
    let a = anim.sample(SampleCtx::at(7.5)).unwrap();
    let b = anim.sample(SampleCtx::at(37.5)).unwrap();
    assert!((a - 90.0).abs() < 1e-9);
    assert!((a - b).abs() < 1e-9);
    anim.validate().unwrap();
}
