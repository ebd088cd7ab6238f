use std::time::{Duration, Instant};

use crate::foundation::core::{Fps, FrameIndex};

/// One scheduled frame: its index and the loop time it should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameTick {
    pub index: FrameIndex,
    pub now: Duration,
}

/// Schedules frames for the render loop. Returning `None` ends the run.
pub trait FrameSource {
    fn next_frame(&mut self) -> Option<FrameTick>;
}

/// Offline clock: frame `i` is at `i / fps`, produced as fast as the loop consumes them.
#[derive(Clone, Debug)]
pub struct FixedStepClock {
    fps: Fps,
    next: u64,
    limit: Option<u64>,
}

impl FixedStepClock {
    pub fn new(fps: Fps) -> Self {
        Self {
            fps,
            next: 0,
            limit: None,
        }
    }

    /// Stops after `frames` ticks.
    pub fn with_limit(mut self, frames: u64) -> Self {
        self.limit = Some(frames);
        self
    }

    pub fn fps(&self) -> Fps {
        self.fps
    }
}

impl FrameSource for FixedStepClock {
    fn next_frame(&mut self) -> Option<FrameTick> {
        if self.limit.is_some_and(|limit| self.next >= limit) {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some(FrameTick {
            index: FrameIndex(index),
            now: Duration::from_secs_f64(self.fps.frames_to_secs(index)),
        })
    }
}

/// Wall-clock pacing: sleeps until the next frame deadline, reports elapsed real time.
///
/// A late frame is not made up for; the next deadline is measured from when the late frame
/// was handed out.
#[derive(Clone, Debug)]
pub struct RealtimeClock {
    interval: Duration,
    started: Option<Instant>,
    deadline: Option<Instant>,
    next: u64,
    limit: Option<u64>,
}

impl RealtimeClock {
    pub fn new(fps: Fps) -> Self {
        Self {
            interval: Duration::from_secs_f64(fps.frame_duration_secs()),
            started: None,
            deadline: None,
            next: 0,
            limit: None,
        }
    }

    pub fn with_limit(mut self, frames: u64) -> Self {
        self.limit = Some(frames);
        self
    }
}

impl FrameSource for RealtimeClock {
    fn next_frame(&mut self) -> Option<FrameTick> {
        if self.limit.is_some_and(|limit| self.next >= limit) {
            return None;
        }

        let mut now = Instant::now();
        if let Some(deadline) = self.deadline
            && deadline > now
        {
            std::thread::sleep(deadline - now);
            now = Instant::now();
        }
        let started = *self.started.get_or_insert(now);
        self.deadline = Some(now + self.interval);

        let index = self.next;
        self.next += 1;
        Some(FrameTick {
            index: FrameIndex(index),
            now: now.duration_since(started),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/clock.rs"]
mod tests;
