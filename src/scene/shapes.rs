use std::f64::consts::PI;

use crate::{
    animation::anim::{Anim, SampleCtx},
    animation::ease::Ease,
    animation::ops::repeat_forever,
    foundation::core::{Affine, Point, Rect, Rgba8, Vec2, Viewport},
    foundation::error::{LoepError, LoepResult},
    render::plan::{Blend, ColorStop, DrawOp, DrawTag, Geometry, Layer, LayerKind, Paint},
};

/// Viewport CSS width below which `hide_on_small` shapes are skipped.
pub const SMALL_VIEWPORT_WIDTH: f64 = 768.0;

const PLANET_BOX: f64 = 100.0;
const PLANET_CENTER: Point = Point::new(50.0, 50.0);
const PLANET_RADIUS: f64 = 36.0;
const PLANET_BASE: Rgba8 = Rgba8::rgb(0x0b, 0x10, 0x20);
const RING_CENTER: Vec2 = Vec2::new(50.0, 52.0);
const RING_RADII: Vec2 = Vec2::new(50.0, 14.0);
const RING_TILT_DEG: f64 = -18.0;

const SATELLITE_SIZE: Vec2 = Vec2::new(38.0, 24.0);
const SATELLITE_VIEWBOX: Vec2 = Vec2::new(28.0, 18.0);
const SATELLITE_PANEL: Rgba8 = Rgba8::rgb(0x60, 0xa5, 0xfa);
const SATELLITE_BODY: Rgba8 = Rgba8::rgb(0xe5, 0xe7, 0xeb);
const SATELLITE_BEACON: Rgba8 = Rgba8::rgb(0xa7, 0x8b, 0xfa);

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlanetSpec {
    /// Diameter of the planet's box in CSS pixels.
    pub size: f64,
    pub top_pct: f64,
    pub left_pct: f64,
    pub tint: Rgba8,
    #[serde(default)]
    pub ring: bool,
    /// Halo blur radius in CSS pixels.
    #[serde(default = "default_blur")]
    pub blur: f64,
    #[serde(default)]
    pub hide_on_small: bool,
    /// Vertical bob keyframes in CSS pixels, spread over `bob_duration_s`.
    #[serde(default = "default_bob")]
    pub bob_offsets: Vec<f64>,
    #[serde(default = "default_bob_duration")]
    pub bob_duration_s: f64,
}

fn default_blur() -> f64 {
    12.0
}

fn default_bob() -> Vec<f64> {
    vec![0.0, -6.0, 0.0, 5.0, 0.0]
}

fn default_bob_duration() -> f64 {
    18.0
}

impl PlanetSpec {
    pub fn new(size: f64, top_pct: f64, left_pct: f64, tint: Rgba8) -> Self {
        Self {
            size,
            top_pct,
            left_pct,
            tint,
            ring: false,
            blur: default_blur(),
            hide_on_small: false,
            bob_offsets: default_bob(),
            bob_duration_s: default_bob_duration(),
        }
    }

    pub fn with_ring(mut self) -> Self {
        self.ring = true;
        self
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SatelliteSpec {
    pub center_top_pct: f64,
    pub center_right_pct: f64,
    /// Orbit radius in CSS pixels; the vertical extent is 0.6 of it.
    pub orbit_radius: f64,
    #[serde(default = "default_orbit_duration")]
    pub orbit_duration_s: f64,
    #[serde(default)]
    pub hide_on_small: bool,
}

fn default_orbit_duration() -> f64 {
    30.0
}

/// Hand-placed decorative shapes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ShapeLayout {
    pub planets: Vec<PlanetSpec>,
    pub satellites: Vec<SatelliteSpec>,
}

impl Default for ShapeLayout {
    fn default() -> Self {
        Self {
            planets: vec![
                PlanetSpec::new(220.0, 14.0, 6.0, Rgba8::rgb(0x60, 0xa5, 0xfa)).with_ring(),
                PlanetSpec::new(140.0, 72.0, 78.0, Rgba8::rgb(0xa7, 0x8b, 0xfa)),
            ],
            satellites: vec![SatelliteSpec {
                center_top_pct: 10.0,
                center_right_pct: 8.0,
                orbit_radius: 30.0,
                orbit_duration_s: default_orbit_duration(),
                hide_on_small: false,
            }],
        }
    }
}

impl ShapeLayout {
    pub fn validate(&self) -> LoepResult<()> {
        for (i, p) in self.planets.iter().enumerate() {
            if !(p.size.is_finite() && p.size > 0.0) {
                return Err(LoepError::validation(format!("planet {i}: size must be > 0")));
            }
            if !(p.blur.is_finite() && p.blur >= 0.0) {
                return Err(LoepError::validation(format!("planet {i}: blur must be >= 0")));
            }
            if !(p.top_pct.is_finite() && p.left_pct.is_finite()) {
                return Err(LoepError::validation(format!(
                    "planet {i}: position must be finite"
                )));
            }
            if p.bob_offsets.is_empty() {
                return Err(LoepError::validation(format!(
                    "planet {i}: bob_offsets must not be empty"
                )));
            }
        }
        for (i, s) in self.satellites.iter().enumerate() {
            if !(s.orbit_radius.is_finite() && s.orbit_radius >= 0.0) {
                return Err(LoepError::validation(format!(
                    "satellite {i}: orbit_radius must be >= 0"
                )));
            }
            if !(s.center_top_pct.is_finite() && s.center_right_pct.is_finite()) {
                return Err(LoepError::validation(format!(
                    "satellite {i}: position must be finite"
                )));
            }
        }
        Ok(())
    }
}

enum ShapeInstance {
    Planet {
        spec: PlanetSpec,
        bob: Anim<f64>,
    },
    Satellite {
        spec: SatelliteSpec,
        orbit: Anim<Vec2>,
        spin_deg: Anim<f64>,
    },
}

/// Decorative shapes with their looping motion, sampled by time rather than simulated.
pub struct ShapeLayer {
    instances: Vec<ShapeInstance>,
}

impl ShapeLayer {
    pub fn new(layout: &ShapeLayout) -> LoepResult<Self> {
        layout.validate()?;
        let mut instances = Vec::with_capacity(layout.planets.len() + layout.satellites.len());

        for spec in &layout.planets {
            let bob = repeat_forever(spec.bob_offsets.clone(), spec.bob_duration_s, Ease::InOutSine);
            bob.validate()?;
            instances.push(ShapeInstance::Planet {
                spec: spec.clone(),
                bob,
            });
        }

        for spec in &layout.satellites {
            let r = spec.orbit_radius;
            let orbit = repeat_forever(
                vec![
                    Vec2::new(0.0, -0.6 * r),
                    Vec2::new(r, 0.0),
                    Vec2::new(0.0, 0.6 * r),
                    Vec2::new(-r, 0.0),
                    Vec2::new(0.0, -0.6 * r),
                ],
                spec.orbit_duration_s,
                Ease::Linear,
            );
            let spin_deg = repeat_forever(vec![0.0, 360.0], spec.orbit_duration_s, Ease::Linear);
            orbit.validate()?;
            spin_deg.validate()?;
            instances.push(ShapeInstance::Satellite {
                spec: spec.clone(),
                orbit,
                spin_deg,
            });
        }

        Ok(Self { instances })
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Emits every visible shape at `time_s` seconds into the animation.
    pub fn draw(&self, viewport: &Viewport, time_s: f64) -> LoepResult<Layer> {
        let mut layer = Layer::new(LayerKind::Shapes);
        let small = viewport.width < SMALL_VIEWPORT_WIDTH;
        let dpr = viewport.dpr();
        let ctx = SampleCtx::at(time_s);

        for inst in &self.instances {
            match inst {
                ShapeInstance::Planet { spec, bob } => {
                    if small && spec.hide_on_small {
                        continue;
                    }
                    let origin = Vec2::new(
                        viewport.width * spec.left_pct / 100.0,
                        viewport.height * spec.top_pct / 100.0 + bob.sample(ctx)?,
                    );
                    let transform = Affine::scale(dpr)
                        * Affine::translate(origin)
                        * Affine::scale(spec.size / PLANET_BOX);
                    draw_planet(&mut layer, spec, transform);
                }
                ShapeInstance::Satellite {
                    spec,
                    orbit,
                    spin_deg,
                } => {
                    if small && spec.hide_on_small {
                        continue;
                    }
                    let anchor = Vec2::new(
                        viewport.width * (1.0 - spec.center_right_pct / 100.0),
                        viewport.height * spec.center_top_pct / 100.0,
                    );
                    let offset = orbit.sample(ctx)?;
                    let half = SATELLITE_SIZE / 2.0;
                    let transform = Affine::scale(dpr)
                        * Affine::translate(anchor + offset + half)
                        * Affine::rotate(spin_deg.sample(ctx)?.to_radians())
                        * Affine::translate(-half)
                        * Affine::scale_non_uniform(
                            SATELLITE_SIZE.x / SATELLITE_VIEWBOX.x,
                            SATELLITE_SIZE.y / SATELLITE_VIEWBOX.y,
                        );
                    draw_satellite(&mut layer, transform);
                }
            }
        }
        Ok(layer)
    }
}

/// Planet in its 100x100 box. A ring is split in two halves drawn around the body: the back
/// half first so the opaque disk hides it, the front half last so it crosses the disk.
fn draw_planet(layer: &mut Layer, spec: &PlanetSpec, transform: Affine) {
    let tint = spec.tint;

    let blur_local = spec.blur * PLANET_BOX / spec.size;
    let halo_radius = PLANET_RADIUS + blur_local;
    layer.push(
        DrawOp::fill(
            DrawTag::PlanetHalo,
            Geometry::Circle {
                center: PLANET_CENTER,
                radius: halo_radius,
            },
            Paint::Radial {
                center: PLANET_CENTER,
                radius: halo_radius,
                stops: vec![
                    ColorStop::new(0.0, tint.with_alpha(0x55 as f64 / 255.0)),
                    ColorStop::new(
                        (PLANET_RADIUS / halo_radius) as f32,
                        tint.with_alpha(0x55 as f64 / 255.0),
                    ),
                    ColorStop::new(1.0, tint.with_alpha(0.0)),
                ],
            },
        )
        .with_transform(transform),
    );

    if spec.ring {
        draw_ring_half(layer, DrawTag::RingBack, tint, transform);
    }

    let body = Geometry::Circle {
        center: PLANET_CENTER,
        radius: PLANET_RADIUS,
    };
    layer.push(DrawOp::fill(DrawTag::PlanetBody, body, Paint::Solid(PLANET_BASE)).with_transform(transform));
    layer.push(
        DrawOp::fill(
            DrawTag::PlanetBody,
            body,
            Paint::radial(
                Point::new(50.0, 42.8),
                43.2,
                tint.with_alpha(0.9),
                tint.with_alpha(0.2),
            ),
        )
        .with_transform(transform),
    );
    layer.push(
        DrawOp::stroke(
            DrawTag::PlanetBody,
            body,
            0.6,
            Paint::linear(
                Point::new(14.0, 14.0),
                Point::new(86.0, 86.0),
                Rgba8::WHITE.with_alpha(0.6),
                tint.with_alpha(0.1),
            ),
        )
        .with_transform(transform),
    );
    layer.push(
        DrawOp::fill(
            DrawTag::PlanetShading,
            Geometry::Ellipse {
                center: Point::new(44.0, 48.0),
                radii: Vec2::new(PLANET_RADIUS, PLANET_RADIUS),
                rotation: 0.0,
            },
            Paint::Solid(Rgba8::rgb(0, 0, 0).with_alpha(0.18)),
        )
        .with_transform(transform),
    );
    layer.push(
        DrawOp::fill(
            DrawTag::PlanetShading,
            Geometry::Circle {
                center: Point::new(38.0, 38.0),
                radius: 15.0,
            },
            Paint::Solid(Rgba8::WHITE),
        )
        .with_opacity(0.01)
        .with_transform(transform),
    );

    if spec.ring {
        draw_ring_half(layer, DrawTag::RingFront, tint, transform);
    }
}

fn draw_ring_half(layer: &mut Layer, tag: DrawTag, tint: Rgba8, planet: Affine) {
    // Negative local y is the far side of the tilted ring.
    let start = if tag == DrawTag::RingBack { PI } else { 0.0 };
    let arc = Geometry::Arc {
        center: Point::ZERO,
        radii: RING_RADII,
        start,
        sweep: PI,
        rotation: 0.0,
    };
    let transform =
        planet * Affine::translate(RING_CENTER) * Affine::rotate(RING_TILT_DEG.to_radians());

    layer.push(
        DrawOp::stroke(tag, arc, 1.6, Paint::Solid(tint.with_alpha(0.8))).with_transform(transform),
    );
    // Stands in for a blurred glow: a wider faint stroke, screen-blended, no blur pass.
    layer.push(
        DrawOp::stroke(tag, arc, 3.0, Paint::Solid(tint.with_alpha(0.3)))
            .with_transform(transform)
            .with_blend(Blend::Screen),
    );
}

fn draw_satellite(layer: &mut Layer, transform: Affine) {
    let rounded = |x: f64, y: f64, w: f64, h: f64| Geometry::RoundedRect {
        rect: Rect::new(x, y, x + w, y + h),
        radius: 1.5,
    };
    let parts = [
        (rounded(0.0, 4.0, 8.0, 10.0), SATELLITE_PANEL, 0.85),
        (rounded(20.0, 4.0, 8.0, 10.0), SATELLITE_PANEL, 0.85),
        (rounded(9.0, 6.0, 10.0, 6.0), SATELLITE_BODY, 1.0),
        (
            Geometry::Rect(Rect::new(13.5, 1.0, 14.5, 5.0)),
            SATELLITE_BODY,
            1.0,
        ),
        (
            Geometry::Circle {
                center: Point::new(14.0, 1.0),
                radius: 1.2,
            },
            SATELLITE_BEACON,
            1.0,
        ),
    ];
    for (geometry, color, opacity) in parts {
        layer.push(
            DrawOp::fill(DrawTag::Satellite, geometry, Paint::Solid(color))
                .with_opacity(opacity)
                .with_transform(transform),
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/shapes.rs"]
mod tests;
