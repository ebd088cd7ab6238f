use crate::{
    foundation::core::Rgba8,
    foundation::error::{LoepError, LoepResult},
    render::plan::FramePlan,
};

/// Rendered frame, premultiplied RGBA8 rows top to bottom.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRGBA {
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            data: Vec::new(),
            premultiplied: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Straight-alpha copy of the pixels, as PNG encoders expect.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = u32::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.data.get(i..i + 4).map(|p| [p[0], p[1], p[2], p[3]])
    }
}

pub trait RenderBackend {
    fn render(&mut self, plan: &FramePlan) -> LoepResult<FrameRGBA>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendKind {
    Cpu,
    Recording,
}

#[derive(Clone, Debug, Default)]
pub struct RenderSettings {
    /// Overrides the plan's clear color when set.
    pub clear_override: Option<Rgba8>,
}

pub fn create_backend(
    kind: BackendKind,
    settings: &RenderSettings,
) -> LoepResult<Box<dyn RenderBackend>> {
    match kind {
        BackendKind::Cpu => Ok(Box::new(crate::render::cpu::CpuBackend::new(
            settings.clone(),
        ))),
        BackendKind::Recording => Ok(Box::new(crate::render::record::RecordingBackend::new())),
    }
}

pub(crate) fn surface_dims(plan: &FramePlan) -> LoepResult<(u16, u16)> {
    let w: u16 = plan
        .canvas
        .width
        .try_into()
        .map_err(|_| LoepError::render("canvas width exceeds u16"))?;
    let h: u16 = plan
        .canvas
        .height
        .try_into()
        .map_err(|_| LoepError::render("canvas height exceeds u16"))?;
    Ok((w, h))
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
