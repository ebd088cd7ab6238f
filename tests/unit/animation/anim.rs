use super::*;

fn key(at_s: f64, value: f64) -> Keyframe<f64> {
    Keyframe {
        at_s,
        value,
        ease: Ease::Linear,
    }
}

fn ctx(time_s: f64) -> SampleCtx {
    SampleCtx::at(time_s)
}

fn ramp(to: f64, over_s: f64) -> Anim<f64> {
    Anim::Keyframes(Keyframes {
        keys: vec![key(0.0, 0.0), key(over_s, to)],
    })
}

#[test]
fn keyframes_interpolate_and_clamp_to_the_ends() {
    let anim = ramp(10.0, 10.0);
    assert_eq!(anim.sample(ctx(5.0)).unwrap(), 5.0);
    assert_eq!(anim.sample(ctx(-1.0)).unwrap(), 0.0);
    assert_eq!(anim.sample(ctx(99.0)).unwrap(), 10.0);
}

#[test]
fn segment_ease_comes_from_the_earlier_key() {
    let anim = Anim::Keyframes(Keyframes {
        keys: vec![
            Keyframe {
                at_s: 0.0,
                value: 0.0,
                ease: Ease::InOutSine,
            },
            key(2.0, 10.0),
        ],
    });
    assert!(anim.sample(ctx(0.5)).unwrap() < 2.5);
    assert!((anim.sample(ctx(1.0)).unwrap() - 5.0).abs() < 1e-12);
}

#[test]
fn empty_keyframes_fail() {
    let empty = Keyframes::<f64> { keys: vec![] };
    assert!(empty.validate().is_err());
    assert!(empty.sample(ctx(1.0)).is_err());
}

#[test]
fn unsorted_keys_fail_validation() {
    let kf = Keyframes {
        keys: vec![key(2.0, 0.0), key(1.0, 1.0)],
    };
    assert!(kf.validate().is_err());
}

#[test]
fn loop_wraps_time() {
    let looped = Anim::Loop {
        inner: Box::new(ramp(4.0, 4.0)),
        period_s: 4.0,
    };
    assert_eq!(looped.sample(ctx(1.0)).unwrap(), 1.0);
    assert_eq!(looped.sample(ctx(5.0)).unwrap(), 1.0);
    assert_eq!(looped.sample(ctx(8.0)).unwrap(), 0.0);
    assert_eq!(looped.sample(ctx(-3.0)).unwrap(), 0.0);
}

#[test]
fn zero_period_loop_is_rejected() {
    let looped = Anim::Loop {
        inner: Box::new(ramp(1.0, 1.0)),
        period_s: 0.0,
    };
    assert!(looped.validate().is_err());
    assert!(looped.sample(ctx(1.0)).is_err());
}

#[test]
fn vec2_lerps_componentwise() {
    let v = <Vec2 as Lerp>::lerp(&Vec2::new(0.0, 10.0), &Vec2::new(10.0, 0.0), 0.25);
    assert_eq!(v, Vec2::new(2.5, 7.5));
}
