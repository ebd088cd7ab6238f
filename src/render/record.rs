use crate::{
    foundation::error::LoepResult,
    render::backend::{FrameRGBA, RenderBackend},
    render::plan::{DrawTag, FramePlan},
};

/// Backend that keeps the draw order of every frame instead of producing pixels.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    frames: Vec<Vec<DrawTag>>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[Vec<DrawTag>] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&[DrawTag]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl RenderBackend for RecordingBackend {
    fn render(&mut self, plan: &FramePlan) -> LoepResult<FrameRGBA> {
        self.frames.push(plan.ops().map(|op| op.tag).collect());
        Ok(FrameRGBA::empty())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/record.rs"]
mod tests;
