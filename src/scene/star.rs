use std::f64::consts::TAU;

use rand::Rng;

use crate::{
    foundation::core::{Canvas, Point, Rgba8},
    foundation::error::{LoepError, LoepResult},
    foundation::math::wrap_angle,
    render::plan::{DrawOp, DrawTag, Geometry, Layer, LayerKind, Paint},
};

/// Tunables for the twinkling star pool.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StarFieldParams {
    /// Device-pixel area per star at density 1.
    pub area_per_star: f64,
    /// Random radius span, multiplied by the device pixel ratio.
    pub radius_span: f64,
    /// Minimum radius in device pixels.
    pub radius_min: f64,
    /// Angular velocity magnitude range in radians per frame.
    pub speed_min: f64,
    pub speed_max: f64,
    pub color: Rgba8,
}

impl Default for StarFieldParams {
    fn default() -> Self {
        Self {
            area_per_star: 11_000.0,
            radius_span: 1.6,
            radius_min: 0.4,
            speed_min: 0.01,
            speed_max: 0.04,
            color: Rgba8::WHITE,
        }
    }
}

impl StarFieldParams {
    pub fn validate(&self) -> LoepResult<()> {
        if !(self.area_per_star.is_finite() && self.area_per_star > 0.0) {
            return Err(LoepError::validation("stars.area_per_star must be > 0"));
        }
        if !(self.radius_span.is_finite() && self.radius_span >= 0.0) {
            return Err(LoepError::validation("stars.radius_span must be >= 0"));
        }
        if !(self.radius_min.is_finite() && self.radius_min > 0.0) {
            return Err(LoepError::validation("stars.radius_min must be > 0"));
        }
        if !(self.speed_min.is_finite()
            && self.speed_max.is_finite()
            && 0.0 <= self.speed_min
            && self.speed_min < self.speed_max)
        {
            return Err(LoepError::validation(
                "stars speed range must satisfy 0 <= speed_min < speed_max",
            ));
        }
        Ok(())
    }

    /// Largest radius a star can get at density `dpr` (exclusive).
    pub fn radius_max(&self, dpr: f64) -> f64 {
        self.radius_span * dpr + self.radius_min
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub phase: f64,
    pub angular_velocity: f64, // rad/frame, signed
}

impl Star {
    pub fn advance(&mut self) {
        self.phase = wrap_angle(self.phase + self.angular_velocity);
    }

    /// Twinkle brightness for the current phase, in `[0.1, 1.0]`.
    pub fn alpha(&self) -> f64 {
        0.55 + self.phase.sin() * 0.45
    }
}

/// Number of stars for a canvas: one per `area_per_star * dpr` device pixels.
pub fn star_count(canvas: Canvas, dpr: f64, params: &StarFieldParams) -> usize {
    let quantum = params.area_per_star * dpr;
    if canvas.is_empty() || !(quantum.is_finite() && quantum > 0.0) {
        return 0;
    }
    (canvas.area() as f64 / quantum).floor() as usize
}

/// Fresh star pool covering `canvas`. Always a full replacement, never incremental.
pub fn generate_stars<R: Rng + ?Sized>(
    canvas: Canvas,
    dpr: f64,
    params: &StarFieldParams,
    rng: &mut R,
) -> Vec<Star> {
    let count = star_count(canvas, dpr, params);
    let (w, h) = (f64::from(canvas.width), f64::from(canvas.height));
    (0..count)
        .map(|_| {
            let speed = rng.gen_range(params.speed_min..params.speed_max);
            let sign = if rng.gen_bool(0.5) { -1.0 } else { 1.0 };
            Star {
                x: rng.gen_range(0.0..w),
                y: rng.gen_range(0.0..h),
                radius: rng.gen_range(0.0..1.0) * params.radius_span * dpr + params.radius_min,
                phase: rng.gen_range(0.0..TAU),
                angular_velocity: speed * sign,
            }
        })
        .collect()
}

/// Advances every star one frame and emits its dot.
pub fn step_and_draw(stars: &mut [Star], params: &StarFieldParams) -> Layer {
    let mut layer = Layer::with_capacity(LayerKind::Stars, stars.len());
    for star in stars.iter_mut() {
        star.advance();
        layer.push(
            DrawOp::fill(
                DrawTag::Star,
                Geometry::Circle {
                    center: Point::new(star.x, star.y),
                    radius: star.radius,
                },
                Paint::Solid(params.color),
            )
            .with_opacity(star.alpha() as f32),
        );
    }
    layer
}

#[cfg(test)]
#[path = "../../tests/unit/scene/star.rs"]
mod tests;
