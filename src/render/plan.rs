use kurbo::Shape as _;

use crate::foundation::core::{Affine, BezPath, Canvas, Point, Rect, Rgba8, Vec2};

const PATH_TOLERANCE: f64 = 0.1;

/// Backend-agnostic description of one frame: a clear color plus layers in paint order.
#[derive(Clone, Debug)]
pub struct FramePlan {
    pub canvas: Canvas,
    pub clear: Rgba8,
    pub layers: Vec<Layer>,
}

impl FramePlan {
    pub fn new(canvas: Canvas, clear: Rgba8) -> Self {
        Self {
            canvas,
            clear,
            layers: Vec::new(),
        }
    }

    pub fn push_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    /// All draw operations in paint order.
    pub fn ops(&self) -> impl Iterator<Item = &DrawOp> {
        self.layers.iter().flat_map(|l| l.ops.iter())
    }

    pub fn op_count(&self) -> usize {
        self.layers.iter().map(|l| l.ops.len()).sum()
    }

    pub fn layer(&self, kind: LayerKind) -> Option<&Layer> {
        self.layers.iter().find(|l| l.kind == kind)
    }
}

/// Stacking slots of the backdrop, back to front.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LayerKind {
    Nebula,
    Stars,
    Meteors,
    Shapes,
    PointerGlow,
}

#[derive(Clone, Debug)]
pub struct Layer {
    pub kind: LayerKind,
    pub ops: Vec<DrawOp>,
}

impl Layer {
    pub fn new(kind: LayerKind) -> Self {
        Self {
            kind,
            ops: Vec::new(),
        }
    }

    pub fn with_capacity(kind: LayerKind, cap: usize) -> Self {
        Self {
            kind,
            ops: Vec::with_capacity(cap),
        }
    }

    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }
}

/// What a draw operation depicts. Used for ordering checks and diagnostics only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DrawTag {
    Nebula,
    Star,
    MeteorTrail,
    MeteorGlow,
    MeteorHead,
    PlanetHalo,
    RingBack,
    PlanetBody,
    PlanetShading,
    RingFront,
    Satellite,
    PointerGlow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blend {
    Normal,
    /// Source and backdrop add, so overlapping streaks brighten.
    Additive,
    Screen,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba8,
}

impl ColorStop {
    pub fn new(offset: f32, color: Rgba8) -> Self {
        Self { offset, color }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Rgba8),
    Linear {
        start: Point,
        end: Point,
        stops: Vec<ColorStop>,
    },
    Radial {
        center: Point,
        radius: f64,
        stops: Vec<ColorStop>,
    },
}

impl Paint {
    /// Two-stop radial gradient from `inner` at the center to `outer` at `radius`.
    pub fn radial(center: Point, radius: f64, inner: Rgba8, outer: Rgba8) -> Self {
        Self::Radial {
            center,
            radius,
            stops: vec![ColorStop::new(0.0, inner), ColorStop::new(1.0, outer)],
        }
    }

    pub fn linear(start: Point, end: Point, from: Rgba8, to: Rgba8) -> Self {
        Self::Linear {
            start,
            end,
            stops: vec![ColorStop::new(0.0, from), ColorStop::new(1.0, to)],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Geometry {
    Rect(Rect),
    RoundedRect {
        rect: Rect,
        radius: f64,
    },
    Circle {
        center: Point,
        radius: f64,
    },
    Ellipse {
        center: Point,
        radii: Vec2,
        rotation: f64,
    },
    Line {
        from: Point,
        to: Point,
    },
    /// Elliptical arc; angles in radians, measured before `rotation` is applied.
    Arc {
        center: Point,
        radii: Vec2,
        start: f64,
        sweep: f64,
        rotation: f64,
    },
}

impl Geometry {
    pub fn to_path(&self) -> BezPath {
        match *self {
            Self::Rect(r) => r.to_path(PATH_TOLERANCE),
            Self::RoundedRect { rect, radius } => {
                kurbo::RoundedRect::from_rect(rect, radius).to_path(PATH_TOLERANCE)
            }
            Self::Circle { center, radius } => {
                kurbo::Circle::new(center, radius).to_path(PATH_TOLERANCE)
            }
            Self::Ellipse {
                center,
                radii,
                rotation,
            } => kurbo::Ellipse::new(center, radii, rotation).to_path(PATH_TOLERANCE),
            Self::Line { from, to } => kurbo::Line::new(from, to).to_path(PATH_TOLERANCE),
            Self::Arc {
                center,
                radii,
                start,
                sweep,
                rotation,
            } => kurbo::Arc {
                center,
                radii,
                start_angle: start,
                sweep_angle: sweep,
                x_rotation: rotation,
            }
            .to_path(PATH_TOLERANCE),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawKind {
    Fill,
    Stroke { width: f64, round_caps: bool },
}

#[derive(Clone, Debug, PartialEq)]
pub struct DrawOp {
    pub tag: DrawTag,
    pub kind: DrawKind,
    pub geometry: Geometry,
    pub paint: Paint,
    pub transform: Affine,
    pub opacity: f32, // 0..1, multiplies paint alpha
    pub blend: Blend,
}

impl DrawOp {
    pub fn fill(tag: DrawTag, geometry: Geometry, paint: Paint) -> Self {
        Self {
            tag,
            kind: DrawKind::Fill,
            geometry,
            paint,
            transform: Affine::IDENTITY,
            opacity: 1.0,
            blend: Blend::Normal,
        }
    }

    pub fn stroke(tag: DrawTag, geometry: Geometry, width: f64, paint: Paint) -> Self {
        Self {
            tag,
            kind: DrawKind::Stroke {
                width,
                round_caps: true,
            },
            geometry,
            paint,
            transform: Affine::IDENTITY,
            opacity: 1.0,
            blend: Blend::Normal,
        }
    }

    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn with_blend(mut self, blend: Blend) -> Self {
        self.blend = blend;
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/plan.rs"]
mod tests;
