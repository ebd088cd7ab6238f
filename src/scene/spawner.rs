use std::time::Duration;

use rand::Rng;

use crate::scene::meteor::MeteorParams;

/// Decides, once per frame, whether a new meteor is due.
///
/// The spawner remembers the time of the last spawn and a threshold drawn uniformly from
/// the configured interval. It fires at most once per call, so a stalled frame followed by a
/// large time jump still yields a single meteor.
#[derive(Clone, Debug)]
pub struct MeteorSpawner {
    last_spawn: Duration,
    threshold: Duration,
}

impl MeteorSpawner {
    pub fn new<R: Rng + ?Sized>(params: &MeteorParams, rng: &mut R) -> Self {
        Self {
            last_spawn: Duration::ZERO,
            threshold: draw_threshold(params, rng),
        }
    }

    pub fn last_spawn(&self) -> Duration {
        self.last_spawn
    }

    pub fn threshold(&self) -> Duration {
        self.threshold
    }

    /// Returns `true` when a meteor should be spawned at `now`, and rearms the timer.
    pub fn poll<R: Rng + ?Sized>(&mut self, now: Duration, params: &MeteorParams, rng: &mut R) -> bool {
        if now.saturating_sub(self.last_spawn) <= self.threshold {
            return false;
        }
        self.last_spawn = now;
        self.threshold = draw_threshold(params, rng);
        true
    }
}

fn draw_threshold<R: Rng + ?Sized>(params: &MeteorParams, rng: &mut R) -> Duration {
    let secs = if params.interval_max_s > params.interval_min_s {
        rng.gen_range(params.interval_min_s..params.interval_max_s)
    } else {
        params.interval_min_s
    };
    Duration::from_secs_f64(secs.max(0.0))
}

#[cfg(test)]
#[path = "../../tests/unit/scene/spawner.rs"]
mod tests;
