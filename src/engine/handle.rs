use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
    mpsc::{Receiver, Sender, TryRecvError},
};

use crate::foundation::core::{Point, Viewport};

/// Input delivered to the loop between frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LoopEvent {
    Resize(Viewport),
    PointerMoved {
        client: Point,
        overlay_origin: Point,
    },
}

/// Cloneable remote control for a running [`crate::RenderLoop`].
///
/// Calls never block. Once the loop has finished, sends are silently dropped.
#[derive(Clone, Debug)]
pub struct LoopHandle {
    cancel: Arc<AtomicBool>,
    events: Sender<LoopEvent>,
}

impl LoopHandle {
    pub(crate) fn new(cancel: Arc<AtomicBool>, events: Sender<LoopEvent>) -> Self {
        Self { cancel, events }
    }

    /// Stops the loop before its next frame.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::Acquire)
    }

    pub fn resize(&self, viewport: Viewport) {
        let _ = self.events.send(LoopEvent::Resize(viewport));
    }

    pub fn pointer_moved(&self, client: Point, overlay_origin: Point) {
        let _ = self.events.send(LoopEvent::PointerMoved {
            client,
            overlay_origin,
        });
    }
}

/// Inputs collected since the previous frame.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct PendingInput {
    pub resize: Option<Viewport>,
    pub pointer: Vec<(Point, Point)>,
}

/// Empties the queue. Only the latest resize survives; pointer moves keep their order.
pub(crate) fn drain_events(rx: &Receiver<LoopEvent>) -> PendingInput {
    let mut pending = PendingInput::default();
    loop {
        match rx.try_recv() {
            Ok(LoopEvent::Resize(viewport)) => pending.resize = Some(viewport),
            Ok(LoopEvent::PointerMoved {
                client,
                overlay_origin,
            }) => pending.pointer.push((client, overlay_origin)),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
        }
    }
    pending
}

#[cfg(test)]
#[path = "../../tests/unit/engine/handle.rs"]
mod tests;
