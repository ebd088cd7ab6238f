use std::path::Path;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
    mpsc::{self, Receiver, Sender},
};

use rand::{Rng, rngs::StdRng};

use crate::{
    config::SceneConfig,
    engine::clock::{FixedStepClock, FrameSource, FrameTick},
    engine::handle::{LoopHandle, LoopEvent, drain_events},
    engine::sink::{FrameSink, LastFrameSink, PngSequenceSink, SinkConfig},
    foundation::core::Fps,
    foundation::error::{LoepError, LoepResult},
    render::backend::{BackendKind, FrameRGBA, RenderBackend, RenderSettings, create_backend},
    scene::Scene,
};

/// Counters for one [`RenderLoop::run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    pub frames_rendered: u64,
    pub resizes_applied: u64,
    /// The run ended through [`LoopHandle::cancel`] rather than the frame source running out.
    pub cancelled: bool,
}

/// Drives a [`Scene`]: one simulation step and one render per scheduled frame.
///
/// The loop owns the scene. Other threads talk to it through [`LoopHandle`]s; their events are
/// applied at the top of the next frame.
pub struct RenderLoop<R = StdRng> {
    scene: Scene<R>,
    fps: Fps,
    cancel: Arc<AtomicBool>,
    tx: Sender<LoopEvent>,
    rx: Receiver<LoopEvent>,
}

impl RenderLoop<StdRng> {
    pub fn from_config(config: &SceneConfig) -> LoepResult<Self> {
        Ok(Self::new(Scene::from_config(config)?, config.fps))
    }
}

impl<R: Rng> RenderLoop<R> {
    pub fn new(scene: Scene<R>, fps: Fps) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            scene,
            fps,
            cancel: Arc::new(AtomicBool::new(false)),
            tx,
            rx,
        }
    }

    pub fn handle(&self) -> LoopHandle {
        LoopHandle::new(Arc::clone(&self.cancel), self.tx.clone())
    }

    pub fn scene(&self) -> &Scene<R> {
        &self.scene
    }

    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Applies queued input. Returns `true` when the scene was resized.
    pub fn apply_pending(&mut self) -> LoepResult<bool> {
        let pending = drain_events(&self.rx);
        for (client, origin) in pending.pointer {
            self.scene.pointer_moved(client, origin);
        }
        match pending.resize {
            Some(viewport) => {
                self.scene.resize(viewport)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Produces a single frame: apply input, advance the scene, rasterize.
    pub fn step(
        &mut self,
        tick: FrameTick,
        backend: &mut dyn RenderBackend,
    ) -> LoepResult<FrameRGBA> {
        self.apply_pending()?;
        self.render_tick(tick, backend)
    }

    fn render_tick(
        &mut self,
        tick: FrameTick,
        backend: &mut dyn RenderBackend,
    ) -> LoepResult<FrameRGBA> {
        let plan = self.scene.frame(tick.now)?;
        backend.render(&plan)
    }

    /// Runs until `source` is exhausted or the loop is cancelled.
    #[tracing::instrument(skip_all, fields(fps = self.fps.as_f64()))]
    pub fn run(
        &mut self,
        source: &mut dyn FrameSource,
        backend: &mut dyn RenderBackend,
        sink: &mut dyn FrameSink,
    ) -> LoepResult<RunStats> {
        let mut stats = RunStats::default();
        sink.begin(SinkConfig {
            canvas: self.scene.canvas(),
            fps: self.fps,
        })?;

        loop {
            if self.cancel.load(Ordering::Acquire) {
                stats.cancelled = true;
                break;
            }
            let Some(tick) = source.next_frame() else {
                break;
            };

            if self.apply_pending()? {
                stats.resizes_applied += 1;
            }
            let frame = self.render_tick(tick, backend)?;
            sink.push_frame(tick.index, &frame)?;
            stats.frames_rendered += 1;
        }

        sink.end()?;
        tracing::info!(
            frames = stats.frames_rendered,
            resizes = stats.resizes_applied,
            cancelled = stats.cancelled,
            "render loop finished"
        );
        Ok(stats)
    }
}

/// Simulates `frames` frames offline on the CPU backend and returns the last one.
pub fn render_still(config: &SceneConfig, frames: u64) -> LoepResult<FrameRGBA> {
    if frames == 0 {
        return Err(LoepError::validation("frames must be > 0"));
    }
    let mut render_loop = RenderLoop::from_config(config)?;
    let mut clock = FixedStepClock::new(config.fps).with_limit(frames);
    let mut backend = create_backend(BackendKind::Cpu, &RenderSettings::default())?;
    let mut sink = LastFrameSink::new();
    render_loop.run(&mut clock, backend.as_mut(), &mut sink)?;
    sink.into_last()
        .map(|(_, frame)| frame)
        .ok_or_else(|| LoepError::render("no frame was rendered"))
}

/// Renders `frames` consecutive frames to a numbered PNG sequence in `dir`.
pub fn render_sequence(
    config: &SceneConfig,
    frames: u64,
    dir: impl AsRef<Path>,
) -> LoepResult<RunStats> {
    if frames == 0 {
        return Err(LoepError::validation("frames must be > 0"));
    }
    let mut render_loop = RenderLoop::from_config(config)?;
    let mut clock = FixedStepClock::new(config.fps).with_limit(frames);
    let mut backend = create_backend(BackendKind::Cpu, &RenderSettings::default())?;
    let mut sink = PngSequenceSink::new(dir.as_ref());
    render_loop.run(&mut clock, backend.as_mut(), &mut sink)
}

#[cfg(test)]
#[path = "../../tests/unit/engine/render_loop.rs"]
mod tests;
