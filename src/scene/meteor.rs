use std::f64::consts::{FRAC_PI_4, PI};

use rand::Rng;

use crate::{
    foundation::core::{Canvas, Point, Rgba8, Vec2},
    foundation::error::{LoepError, LoepResult},
    render::plan::{Blend, DrawOp, DrawTag, Geometry, Layer, LayerKind, Paint},
};

/// Tunables for meteor spawning and drawing. Lengths are CSS pixels unless noted.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MeteorParams {
    /// Distance outside the canvas edge where meteors start (device pixels).
    pub spawn_margin: f64,
    /// Probability of starting on the top edge rather than the trailing side.
    pub top_edge_probability: f64,
    /// Side-edge spawns keep `y` within this fraction of the height.
    pub side_band: f64,
    /// Half-width of the random heading jitter, radians.
    pub jitter_rad: f64,
    /// Speed in pixels per frame at density 1.
    pub speed: f64,
    pub life_min: f64,
    pub life_max: f64,
    pub tail_length: f64,
    pub line_width: f64,
    pub head_radius: f64,
    pub glow_blur: f64,
    /// Seconds between spawns, drawn uniformly from `[min, max)`.
    pub interval_min_s: f64,
    pub interval_max_s: f64,
    pub color: Rgba8,
}

impl Default for MeteorParams {
    fn default() -> Self {
        Self {
            spawn_margin: 80.0,
            top_edge_probability: 0.75,
            side_band: 0.8,
            jitter_rad: 0.25,
            speed: 6.0,
            life_min: 120.0,
            life_max: 210.0,
            tail_length: 140.0,
            line_width: 2.2,
            head_radius: 2.2,
            glow_blur: 8.0,
            interval_min_s: 6.0,
            interval_max_s: 18.0,
            color: Rgba8::WHITE,
        }
    }
}

impl MeteorParams {
    pub fn validate(&self) -> LoepResult<()> {
        let finite = [
            self.spawn_margin,
            self.top_edge_probability,
            self.side_band,
            self.jitter_rad,
            self.speed,
            self.life_min,
            self.life_max,
            self.tail_length,
            self.line_width,
            self.head_radius,
            self.glow_blur,
            self.interval_min_s,
            self.interval_max_s,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return Err(LoepError::validation("meteor parameters must be finite"));
        }
        if !(0.0..=1.0).contains(&self.top_edge_probability) {
            return Err(LoepError::validation(
                "meteors.top_edge_probability must be within 0..=1",
            ));
        }
        if !(0.0 < self.side_band && self.side_band <= 1.0) {
            return Err(LoepError::validation("meteors.side_band must be within (0, 1]"));
        }
        if self.jitter_rad < 0.0 || self.speed <= 0.0 {
            return Err(LoepError::validation(
                "meteors need jitter_rad >= 0 and speed > 0",
            ));
        }
        if !(1.0 <= self.life_min && self.life_min < self.life_max) {
            return Err(LoepError::validation(
                "meteor life range must satisfy 1 <= life_min < life_max",
            ));
        }
        if !(0.0 < self.interval_min_s && self.interval_min_s < self.interval_max_s) {
            return Err(LoepError::validation(
                "meteor interval must satisfy 0 < interval_min_s < interval_max_s",
            ));
        }
        Ok(())
    }
}

/// Diagonal travel direction of a meteor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heading {
    /// Down and to the right, about 45 degrees.
    SouthEast,
    /// Down and to the left, about 135 degrees.
    SouthWest,
}

impl Heading {
    pub fn base_angle(self) -> f64 {
        match self {
            Self::SouthEast => FRAC_PI_4,
            Self::SouthWest => 3.0 * PI / 4.0,
        }
    }
}

/// Canvas edge a meteor enters from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Origin {
    Top,
    /// Left edge for south-east meteors, right edge for south-west ones.
    Side,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Meteor {
    pub pos: Point,
    pub vel: Vec2, // px/frame
    pub life: u32, // frames lived
    pub max_life: f64,
}

/// Result of advancing a meteor by one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeteorStep {
    Alive,
    Expired,
}

impl Meteor {
    pub fn new(pos: Point, vel: Vec2, max_life: f64) -> Self {
        Self {
            pos,
            vel,
            life: 0,
            max_life,
        }
    }

    /// Fraction of the lifetime used, `life / max_life`.
    pub fn life_fraction(&self) -> f64 {
        f64::from(self.life) / self.max_life
    }

    pub fn is_expired(&self) -> bool {
        self.life_fraction() >= 1.0
    }

    pub fn step(&mut self) -> MeteorStep {
        self.pos += self.vel;
        self.life = self.life.saturating_add(1);
        if self.is_expired() {
            MeteorStep::Expired
        } else {
            MeteorStep::Alive
        }
    }

    pub fn head_alpha(&self) -> f64 {
        (0.75 * (1.0 - self.life_fraction()) + 0.15).clamp(0.0, 1.0)
    }

    pub fn trail_alpha(&self) -> f64 {
        (0.45 * (1.0 - self.life_fraction())).clamp(0.0, 1.0)
    }

    /// End of the trail, `tail_len` behind the head along the direction of travel.
    pub fn tail_point(&self, tail_len: f64) -> Point {
        let speed = self.vel.hypot();
        let dir = if speed > 0.0 {
            self.vel / speed
        } else {
            Vec2::ZERO
        };
        self.pos - dir * tail_len
    }
}

/// Picks heading, origin edge and start position, then builds the meteor.
pub fn spawn_meteor<R: Rng + ?Sized>(
    canvas: Canvas,
    dpr: f64,
    params: &MeteorParams,
    rng: &mut R,
) -> Meteor {
    let heading = if rng.gen_bool(0.5) {
        Heading::SouthEast
    } else {
        Heading::SouthWest
    };
    let origin = if rng.gen_bool(params.top_edge_probability) {
        Origin::Top
    } else {
        Origin::Side
    };
    spawn_meteor_from(heading, origin, canvas, dpr, params, rng)
}

/// Builds a meteor for a fixed heading and origin; position, jitter and lifetime stay random.
pub fn spawn_meteor_from<R: Rng + ?Sized>(
    heading: Heading,
    origin: Origin,
    canvas: Canvas,
    dpr: f64,
    params: &MeteorParams,
    rng: &mut R,
) -> Meteor {
    let (w, h) = (f64::from(canvas.width), f64::from(canvas.height));
    let margin = params.spawn_margin;
    let pos = match (origin, heading) {
        (Origin::Top, _) => Point::new(uniform(rng, 0.0, w), -margin),
        (Origin::Side, Heading::SouthEast) => {
            Point::new(-margin, uniform(rng, 0.0, h * params.side_band))
        }
        (Origin::Side, Heading::SouthWest) => {
            Point::new(w + margin, uniform(rng, 0.0, h * params.side_band))
        }
    };

    let angle = heading.base_angle() + uniform(rng, -params.jitter_rad, params.jitter_rad);
    let speed = params.speed * dpr;
    let max_life = uniform(rng, params.life_min, params.life_max);
    Meteor::new(pos, Vec2::from_angle(angle) * speed, max_life)
}

fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if hi > lo { rng.gen_range(lo..hi) } else { lo }
}

/// Advances every meteor, drops the expired ones and draws the survivors additively.
///
/// Iterates back to front so removal never skips an element. Each meteor is removed in the
/// frame its life reaches `max_life`, before anything is drawn for it.
pub fn step_and_draw(meteors: &mut Vec<Meteor>, dpr: f64, params: &MeteorParams) -> Layer {
    let mut layer = Layer::with_capacity(LayerKind::Meteors, meteors.len() * 3);
    let tail_len = params.tail_length * dpr;
    let head_radius = params.head_radius * dpr;
    let glow_radius = head_radius + params.glow_blur * dpr;

    let mut i = meteors.len();
    while i > 0 {
        i -= 1;
        if meteors[i].step() == MeteorStep::Expired {
            meteors.swap_remove(i);
            continue;
        }
        let m = &meteors[i];
        let tail = m.tail_point(tail_len);

        layer.push(
            DrawOp::stroke(
                DrawTag::MeteorTrail,
                Geometry::Line {
                    from: m.pos,
                    to: tail,
                },
                params.line_width * dpr,
                Paint::linear(
                    m.pos,
                    tail,
                    params.color.with_alpha(m.trail_alpha()),
                    params.color.with_alpha(0.0),
                ),
            )
            .with_blend(Blend::Additive),
        );
        layer.push(
            DrawOp::fill(
                DrawTag::MeteorGlow,
                Geometry::Circle {
                    center: m.pos,
                    radius: glow_radius,
                },
                Paint::radial(
                    m.pos,
                    glow_radius,
                    params.color.with_alpha(0.6),
                    params.color.with_alpha(0.0),
                ),
            )
            .with_blend(Blend::Additive),
        );
        layer.push(
            DrawOp::fill(
                DrawTag::MeteorHead,
                Geometry::Circle {
                    center: m.pos,
                    radius: head_radius,
                },
                Paint::Solid(params.color.with_alpha(m.head_alpha())),
            )
            .with_blend(Blend::Additive),
        );
    }
    layer
}

#[cfg(test)]
#[path = "../../tests/unit/scene/meteor.rs"]
mod tests;
