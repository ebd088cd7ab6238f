use std::sync::mpsc;

use super::*;

fn pair() -> (LoopHandle, Receiver<LoopEvent>) {
    let (tx, rx) = mpsc::channel();
    (LoopHandle::new(Arc::new(AtomicBool::new(false)), tx), rx)
}

#[test]
fn latest_resize_wins() {
    let (handle, rx) = pair();
    handle.resize(Viewport::new(800.0, 600.0, 1.0));
    handle.pointer_moved(Point::new(1.0, 2.0), Point::ZERO);
    handle.resize(Viewport::new(1024.0, 768.0, 2.0));

    let pending = drain_events(&rx);
    assert_eq!(pending.resize, Some(Viewport::new(1024.0, 768.0, 2.0)));
    assert_eq!(pending.pointer, vec![(Point::new(1.0, 2.0), Point::ZERO)]);
    assert_eq!(drain_events(&rx), PendingInput::default());
}

#[test]
fn cancel_is_shared_between_clones() {
    let (handle, _rx) = pair();
    let other = handle.clone();
    assert!(!handle.is_cancelled());
    other.cancel();
    assert!(handle.is_cancelled());
}

#[test]
fn sending_after_the_loop_is_gone_is_harmless() {
    let (handle, rx) = pair();
    drop(rx);
    handle.resize(Viewport::default());
    handle.pointer_moved(Point::ZERO, Point::ZERO);
}
