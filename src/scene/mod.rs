//! Simulation state for the backdrop and the per-frame plan builder.

use std::time::Duration;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    config::SceneConfig,
    foundation::core::{Canvas, Point, Rgba8, Viewport},
    foundation::error::LoepResult,
    render::plan::FramePlan,
};

pub mod glow;
pub mod meteor;
pub mod nebula;
pub mod shapes;
pub mod spawner;
pub mod star;

use glow::PointerGlow;
use meteor::{Meteor, MeteorParams};
use nebula::NebulaParams;
use shapes::ShapeLayer;
use spawner::MeteorSpawner;
use star::{Star, StarFieldParams};

/// All mutable backdrop state: star pool, live meteors, spawn timer, shapes and pointer glow.
///
/// A scene is owned by exactly one frame loop. Inputs (resize, pointer) are applied between
/// frames, never during one.
pub struct Scene<R = StdRng> {
    viewport: Viewport,
    canvas: Canvas,
    background: Rgba8,
    nebula: NebulaParams,
    star_params: StarFieldParams,
    meteor_params: MeteorParams,
    stars: Vec<Star>,
    meteors: Vec<Meteor>,
    spawner: MeteorSpawner,
    shapes: ShapeLayer,
    glow: PointerGlow,
    rng: R,
}

impl Scene<StdRng> {
    /// Builds a scene seeded from `config.seed`, or from OS entropy when unset.
    pub fn from_config(config: &SceneConfig) -> LoepResult<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Scene<R> {
    pub fn with_rng(config: &SceneConfig, mut rng: R) -> LoepResult<Self> {
        config.validate()?;
        let viewport = config.viewport;
        let canvas = viewport.canvas();
        let stars = star::generate_stars(canvas, viewport.dpr(), &config.stars, &mut rng);
        let spawner = MeteorSpawner::new(&config.meteors, &mut rng);
        tracing::debug!(
            width = canvas.width,
            height = canvas.height,
            stars = stars.len(),
            "scene created"
        );

        Ok(Self {
            viewport,
            canvas,
            background: config.background,
            nebula: config.nebula,
            star_params: config.stars,
            meteor_params: config.meteors,
            stars,
            meteors: Vec::new(),
            spawner,
            shapes: ShapeLayer::new(&config.shapes)?,
            glow: PointerGlow::new(config.glow),
            rng,
        })
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn meteors(&self) -> &[Meteor] {
        &self.meteors
    }

    pub fn glow(&self) -> &PointerGlow {
        &self.glow
    }

    /// Adopts a new viewport and replaces the whole star pool.
    pub fn resize(&mut self, viewport: Viewport) -> LoepResult<()> {
        viewport.validate()?;
        self.viewport = viewport;
        self.canvas = viewport.canvas();
        self.stars =
            star::generate_stars(self.canvas, viewport.dpr(), &self.star_params, &mut self.rng);
        tracing::debug!(
            width = self.canvas.width,
            height = self.canvas.height,
            stars = self.stars.len(),
            "scene resized"
        );
        Ok(())
    }

    pub fn pointer_moved(&mut self, client: Point, overlay_origin: Point) {
        self.glow.pointer_moved(client, overlay_origin);
    }

    /// Adds one meteor immediately, bypassing the spawn timer.
    pub fn spawn_meteor(&mut self) {
        let m = meteor::spawn_meteor(
            self.canvas,
            self.viewport.dpr(),
            &self.meteor_params,
            &mut self.rng,
        );
        self.meteors.push(m);
    }

    /// Advances the simulation by one frame and returns what to paint.
    ///
    /// `now` is the loop clock; it drives the spawn timer and the shape keyframes. An empty
    /// canvas yields a plan without layers.
    pub fn frame(&mut self, now: Duration) -> LoepResult<FramePlan> {
        let mut plan = FramePlan::new(self.canvas, self.background);
        if self.canvas.is_empty() {
            return Ok(plan);
        }
        let dpr = self.viewport.dpr();

        plan.push_layer(nebula::draw(self.canvas, &self.nebula));
        plan.push_layer(star::step_and_draw(&mut self.stars, &self.star_params));

        if self.spawner.poll(now, &self.meteor_params, &mut self.rng) {
            self.spawn_meteor();
            tracing::trace!(live = self.meteors.len(), "meteor spawned");
        }
        plan.push_layer(meteor::step_and_draw(
            &mut self.meteors,
            dpr,
            &self.meteor_params,
        ));

        plan.push_layer(self.shapes.draw(&self.viewport, now.as_secs_f64())?);
        plan.push_layer(self.glow.draw(&self.viewport));
        Ok(plan)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/scene.rs"]
mod tests;
