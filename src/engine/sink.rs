use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    foundation::core::{Canvas, Fps, FrameIndex},
    foundation::error::{LoepError, LoepResult},
    render::backend::FrameRGBA,
};

/// Configuration handed to a [`FrameSink`] before the first frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SinkConfig {
    /// Canvas at the start of the run; later resizes change the frames, not this.
    pub canvas: Canvas,
    pub fps: Fps,
}

/// Consumer of rendered frames, called in increasing `FrameIndex` order.
pub trait FrameSink {
    fn begin(&mut self, cfg: SinkConfig) -> LoepResult<()>;
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> LoepResult<()>;
    fn end(&mut self) -> LoepResult<()>;
}

/// Keeps every frame in memory. Meant for tests and short runs.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, FrameRGBA)>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    pub fn frames(&self) -> &[(FrameIndex, FrameRGBA)] {
        &self.frames
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> LoepResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> LoepResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> LoepResult<()> {
        Ok(())
    }
}

/// Keeps only the most recent frame; used to render a still after a warm-up.
#[derive(Debug, Default)]
pub struct LastFrameSink {
    last: Option<(FrameIndex, FrameRGBA)>,
}

impl LastFrameSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_last(self) -> Option<(FrameIndex, FrameRGBA)> {
        self.last
    }
}

impl FrameSink for LastFrameSink {
    fn begin(&mut self, _cfg: SinkConfig) -> LoepResult<()> {
        self.last = None;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> LoepResult<()> {
        self.last = Some((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> LoepResult<()> {
        Ok(())
    }
}

/// Writes each frame to `<dir>/frame_00000.png`, `frame_00001.png`, ...
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    written: u64,
}

impl PngSequenceSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: 0,
        }
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn frame_path(&self, idx: FrameIndex) -> PathBuf {
        self.dir.join(format!("frame_{:05}.png", idx.0))
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, _cfg: SinkConfig) -> LoepResult<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create output dir '{}'", self.dir.display()))?;
        self.written = 0;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> LoepResult<()> {
        if frame.is_empty() {
            return Ok(());
        }
        write_png(self.frame_path(idx), frame)?;
        self.written += 1;
        Ok(())
    }

    fn end(&mut self) -> LoepResult<()> {
        tracing::info!(frames = self.written, dir = %self.dir.display(), "png sequence written");
        Ok(())
    }
}

/// Encodes a frame as straight-alpha RGBA PNG.
pub fn write_png(path: impl AsRef<Path>, frame: &FrameRGBA) -> LoepResult<()> {
    let path = path.as_ref();
    if frame.is_empty() {
        return Err(LoepError::render("cannot write an empty frame"));
    }
    image::save_buffer_with_format(
        path,
        &frame.to_straight_rgba8(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/engine/sink.rs"]
mod tests;
