use vello_cpu::peniko::{BlendMode, Compose, Gradient, Mix};

use crate::{
    foundation::core::{Affine, BezPath, Point, Rgba8},
    foundation::error::LoepResult,
    render::backend::{FrameRGBA, RenderBackend, RenderSettings, surface_dims},
    render::plan::{Blend, ColorStop, DrawKind, DrawOp, FramePlan, Paint},
};

/// Rasterizes frame plans with `vello_cpu`. The pixmap is reused while the canvas size holds.
pub struct CpuBackend {
    settings: RenderSettings,
    surface: Option<CpuSurface>,
}

struct CpuSurface {
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
}

impl CpuBackend {
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            surface: None,
        }
    }

    fn ensure_surface(&mut self, width: u16, height: u16) -> &mut CpuSurface {
        if !matches!(&self.surface, Some(s) if s.width == width && s.height == height) {
            tracing::debug!(width, height, "allocating cpu surface");
            self.surface = None;
        }
        let surface = self.surface.get_or_insert_with(|| CpuSurface {
            width,
            height,
            pixmap: vello_cpu::Pixmap::new(width, height),
        });
        clear_pixmap(&mut surface.pixmap);
        surface
    }
}

impl RenderBackend for CpuBackend {
    #[tracing::instrument(skip_all, fields(width = plan.canvas.width, height = plan.canvas.height, ops = plan.op_count()))]
    fn render(&mut self, plan: &FramePlan) -> LoepResult<FrameRGBA> {
        if plan.canvas.is_empty() {
            return Ok(FrameRGBA::empty());
        }
        let (w, h) = surface_dims(plan)?;
        let clear = self.settings.clear_override.unwrap_or(plan.clear);

        let mut ctx = vello_cpu::RenderContext::new(w, h);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(color_to_cpu(clear, 1.0));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(w),
            f64::from(h),
        ));

        for op in plan.ops() {
            draw_op(&mut ctx, op);
        }
        ctx.flush();

        let surface = self.ensure_surface(w, h);
        ctx.render_to_pixmap(&mut surface.pixmap);

        Ok(FrameRGBA {
            width: u32::from(w),
            height: u32::from(h),
            data: surface.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

fn draw_op(ctx: &mut vello_cpu::RenderContext, op: &DrawOp) {
    if op.opacity <= 0.0 {
        return;
    }
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_transform(affine_to_cpu(op.transform));

    match &op.paint {
        Paint::Solid(color) => ctx.set_paint(color_to_cpu(*color, op.opacity)),
        Paint::Linear { start, end, stops } => ctx.set_paint(
            Gradient::new_linear(point_to_cpu(*start), point_to_cpu(*end))
                .with_stops(stops_to_cpu(stops, op.opacity).as_slice()),
        ),
        Paint::Radial {
            center,
            radius,
            stops,
        } => ctx.set_paint(
            Gradient::new_radial(point_to_cpu(*center), *radius as f32)
                .with_stops(stops_to_cpu(stops, op.opacity).as_slice()),
        ),
    }

    let layered = match op.blend {
        Blend::Normal => false,
        Blend::Additive => {
            ctx.push_blend_layer(BlendMode::new(Mix::Normal, Compose::Plus));
            true
        }
        Blend::Screen => {
            ctx.push_blend_layer(BlendMode::new(Mix::Screen, Compose::SrcOver));
            true
        }
    };

    let path = bezpath_to_cpu(&op.geometry.to_path());
    match op.kind {
        DrawKind::Fill => ctx.fill_path(&path),
        DrawKind::Stroke { width, round_caps } => {
            let mut stroke = vello_cpu::kurbo::Stroke::new(width);
            if round_caps {
                stroke = stroke.with_caps(vello_cpu::kurbo::Cap::Round);
            }
            ctx.set_stroke(stroke);
            ctx.stroke_path(&path);
        }
    }

    if layered {
        ctx.pop_layer();
    }
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap) {
    pixmap.data_as_u8_slice_mut().fill(0);
}

fn color_to_cpu(c: Rgba8, opacity: f32) -> vello_cpu::peniko::Color {
    let a = (f32::from(c.a) * opacity.clamp(0.0, 1.0)).round() as u8;
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, a)
}

fn stops_to_cpu(stops: &[ColorStop], opacity: f32) -> Vec<(f32, vello_cpu::peniko::Color)> {
    stops
        .iter()
        .map(|s| (s.offset.clamp(0.0, 1.0), color_to_cpu(s.color, opacity)))
        .collect()
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
