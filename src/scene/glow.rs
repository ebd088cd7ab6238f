use crate::{
    foundation::core::{Point, Rgba8, Vec2, Viewport},
    foundation::error::{LoepError, LoepResult},
    render::plan::{ColorStop, DrawOp, DrawTag, Geometry, Layer, LayerKind, Paint},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GlowParams {
    /// Gradient radius in CSS pixels.
    pub radius: f64,
    /// Fraction of the radius where the gradient reaches full transparency.
    pub fade_at: f64,
    pub color: Rgba8,
    /// Offsets used before the first pointer event, in CSS pixels.
    pub initial: Vec2,
}

impl Default for GlowParams {
    fn default() -> Self {
        Self {
            radius: 250.0,
            fade_at: 0.2,
            color: Rgba8::rgba(59, 130, 246, 31),
            initial: Vec2::new(-100.0, -100.0),
        }
    }
}

impl GlowParams {
    pub fn validate(&self) -> LoepResult<()> {
        if !(self.radius.is_finite() && self.radius >= 0.0) {
            return Err(LoepError::validation("glow radius must be >= 0"));
        }
        if !(self.fade_at > 0.0 && self.fade_at <= 1.0) {
            return Err(LoepError::validation("glow fade_at must be in (0, 1]"));
        }
        if !(self.initial.x.is_finite() && self.initial.y.is_finite()) {
            return Err(LoepError::validation("glow initial offsets must be finite"));
        }
        Ok(())
    }
}

/// Cursor-tracked glow. Holds the pointer offset relative to the overlay origin.
#[derive(Clone, Debug)]
pub struct PointerGlow {
    params: GlowParams,
    offset: Vec2,
}

impl PointerGlow {
    pub fn new(params: GlowParams) -> Self {
        Self {
            offset: params.initial,
            params,
        }
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Records a pointer position given in client coordinates.
    pub fn pointer_moved(&mut self, client: Point, overlay_origin: Point) {
        let offset = client - overlay_origin;
        if offset.x.is_finite() && offset.y.is_finite() {
            self.offset = offset;
        }
    }

    pub fn draw(&self, viewport: &Viewport) -> Layer {
        let mut layer = Layer::with_capacity(LayerKind::PointerGlow, 1);
        let dpr = viewport.dpr();
        let radius = self.params.radius * dpr;
        if radius <= 0.0 || viewport.canvas().is_empty() {
            return layer;
        }

        let center = (self.offset * dpr).to_point();
        let color = self.params.color;
        layer.push(DrawOp::fill(
            DrawTag::PointerGlow,
            // Everything past the fade stop is transparent, so only the lit disk is filled.
            Geometry::Circle {
                center,
                radius: radius * self.params.fade_at,
            },
            Paint::Radial {
                center,
                radius,
                stops: vec![
                    ColorStop::new(0.0, color),
                    ColorStop::new(self.params.fade_at as f32, color.with_alpha(0.0)),
                    ColorStop::new(1.0, color.with_alpha(0.0)),
                ],
            },
        ));
        layer
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/glow.rs"]
mod tests;
