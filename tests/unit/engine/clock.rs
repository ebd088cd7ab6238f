use super::*;

#[test]
fn fixed_step_ticks_at_frame_boundaries() {
    let mut clock = FixedStepClock::new(Fps::new(30, 1).unwrap()).with_limit(4);
    let ticks: Vec<_> = std::iter::from_fn(|| clock.next_frame()).collect();
    assert_eq!(ticks.len(), 4);
    assert_eq!(ticks[0].index, FrameIndex(0));
    assert_eq!(ticks[0].now, Duration::ZERO);
    assert_eq!(ticks[3].index, FrameIndex(3));
    assert!((ticks[3].now.as_secs_f64() - 0.1).abs() < 1e-6);
    assert!(clock.next_frame().is_none());
}

#[test]
fn fixed_step_without_limit_keeps_going() {
    let mut clock = FixedStepClock::new(Fps::new(60, 1).unwrap());
    for _ in 0..1000 {
        assert!(clock.next_frame().is_some());
    }
    assert_eq!(clock.next_frame().unwrap().index, FrameIndex(1000));
}

#[test]
fn realtime_clock_paces_frames() {
    let mut clock = RealtimeClock::new(Fps::new(100, 1).unwrap()).with_limit(3);
    let first = clock.next_frame().unwrap();
    let _ = clock.next_frame().unwrap();
    let third = clock.next_frame().unwrap();
    assert_eq!(first.now, Duration::ZERO);
    assert!(third.now >= Duration::from_millis(20));
    assert_eq!(third.index, FrameIndex(2));
    assert!(clock.next_frame().is_none());
}
