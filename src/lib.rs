//! Loep renders the animated space backdrop of the Loep portfolio site.
//!
//! Each frame stacks, back to front, a nebula wash over the page color, a twinkling star
//! field, additive meteor streaks, hand-placed planets and a satellite, and a glow that
//! follows the pointer. The crate also carries the typed project records the page lists.
//!
//! # Frame pipeline
//!
//! 1. **Simulate**: [`Scene::frame`] advances stars and meteors by one frame, polls the
//!    meteor spawner and samples the shape keyframes at the loop time.
//! 2. **Plan**: the scene emits a [`FramePlan`], an ordered list of [`DrawOp`]s per layer.
//! 3. **Render**: a [`RenderBackend`] turns the plan into premultiplied RGBA8 pixels
//!    ([`FrameRGBA`]). [`CpuBackend`] rasterizes with `vello_cpu`.
//!
//! [`RenderLoop`] ties the steps together, pulling frame times from a [`FrameSource`] and
//! handing pixels to a [`FrameSink`]. Resize and pointer input reach the loop through a
//! [`LoopHandle`] and are applied between frames.
//!
//! Movement is expressed per frame (pixels per frame, lifetimes in frames), so the offline
//! [`FixedStepClock`] reproduces the look of the live page at its frame rate.
#![forbid(unsafe_code)]

mod animation;
mod config;
mod content;
mod engine;
mod foundation;
mod render;
mod scene;

pub use animation::anim::{Anim, Keyframe, Keyframes, Lerp, SampleCtx};
pub use animation::ease::Ease;
pub use animation::ops::{evenly_spaced, repeat_forever};
pub use config::{DEFAULT_BACKGROUND, SceneConfig};
pub use content::projects::{ProjectCatalog, ProjectMeta};
pub use engine::clock::{FixedStepClock, FrameSource, FrameTick, RealtimeClock};
pub use engine::handle::{LoopEvent, LoopHandle};
pub use engine::render_loop::{RenderLoop, RunStats, render_sequence, render_still};
pub use engine::sink::{
    FrameSink, InMemorySink, LastFrameSink, PngSequenceSink, SinkConfig, write_png,
};
pub use foundation::core::{
    Affine, BezPath, Canvas, Fps, FrameIndex, MAX_CANVAS_SIDE, Point, Rect, Rgba8, Vec2, Viewport,
};
pub use foundation::error::{LoepError, LoepResult};
pub use render::backend::{BackendKind, FrameRGBA, RenderBackend, RenderSettings, create_backend};
pub use render::cpu::CpuBackend;
pub use render::plan::{
    Blend, ColorStop, DrawKind, DrawOp, DrawTag, FramePlan, Geometry, Layer, LayerKind, Paint,
};
pub use render::record::RecordingBackend;
pub use scene::Scene;
pub use scene::glow::{GlowParams, PointerGlow};
pub use scene::meteor::{
    Heading, Meteor, MeteorParams, MeteorStep, Origin, spawn_meteor, spawn_meteor_from,
    step_and_draw,
};
pub use scene::nebula::NebulaParams;
pub use scene::shapes::{
    PlanetSpec, SMALL_VIEWPORT_WIDTH, SatelliteSpec, ShapeLayer, ShapeLayout,
};
pub use scene::spawner::MeteorSpawner;
pub use scene::star::{Star, StarFieldParams, generate_stars, star_count};
