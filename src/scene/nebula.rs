use crate::{
    foundation::core::{Canvas, Point, Rect, Rgba8},
    foundation::error::{LoepError, LoepResult},
    render::plan::{DrawOp, DrawTag, Geometry, Layer, LayerKind, Paint},
};

/// Static radial wash painted over the page color before the stars.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct NebulaParams {
    /// Gradient center as fractions of the canvas size.
    pub center_x: f64,
    pub center_y: f64,
    /// Radius as a fraction of the longer canvas side.
    pub radius_factor: f64,
    pub color: Rgba8,
}

impl Default for NebulaParams {
    fn default() -> Self {
        Self {
            center_x: 0.7,
            center_y: 0.3,
            radius_factor: 0.8,
            color: Rgba8::rgba(96, 132, 252, 38),
        }
    }
}

impl NebulaParams {
    pub fn validate(&self) -> LoepResult<()> {
        if !(self.radius_factor.is_finite() && self.radius_factor >= 0.0) {
            return Err(LoepError::validation("nebula radius_factor must be >= 0"));
        }
        if !(self.center_x.is_finite() && self.center_y.is_finite()) {
            return Err(LoepError::validation("nebula center must be finite"));
        }
        Ok(())
    }
}

pub fn draw(canvas: Canvas, params: &NebulaParams) -> Layer {
    let mut layer = Layer::with_capacity(LayerKind::Nebula, 1);
    if canvas.is_empty() {
        return layer;
    }

    let (w, h) = (f64::from(canvas.width), f64::from(canvas.height));
    let radius = w.max(h) * params.radius_factor;
    if radius <= 0.0 {
        return layer;
    }
    layer.push(DrawOp::fill(
        DrawTag::Nebula,
        Geometry::Rect(Rect::new(0.0, 0.0, w, h)),
        Paint::radial(
            Point::new(w * params.center_x, h * params.center_y),
            radius,
            params.color,
            params.color.with_alpha(0.0),
        ),
    ));
    layer
}

#[cfg(test)]
#[path = "../../tests/unit/scene/nebula.rs"]
mod tests;
