use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{
    foundation::core::{Fps, Rgba8, Viewport},
    foundation::error::{LoepError, LoepResult},
    scene::glow::GlowParams,
    scene::meteor::MeteorParams,
    scene::nebula::NebulaParams,
    scene::shapes::ShapeLayout,
    scene::star::StarFieldParams,
};

/// Page color behind every layer (`#020617`).
pub const DEFAULT_BACKGROUND: Rgba8 = Rgba8::rgb(0x02, 0x06, 0x17);

/// Everything needed to build a [`crate::Scene`].
///
/// Every field has a default matching the live site, so a config file only lists what it
/// changes:
///
/// ```json
/// { "viewport": { "width": 1920, "height": 1080, "device_pixel_ratio": 2 }, "seed": 7 }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub viewport: Viewport,
    pub fps: Fps,
    /// Fixed randomness source for reproducible renders. `None` seeds from the OS.
    pub seed: Option<u64>,
    pub background: Rgba8,
    pub nebula: NebulaParams,
    pub stars: StarFieldParams,
    pub meteors: MeteorParams,
    pub shapes: ShapeLayout,
    pub glow: GlowParams,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            fps: Fps { num: 60, den: 1 },
            seed: None,
            background: DEFAULT_BACKGROUND,
            nebula: NebulaParams::default(),
            stars: StarFieldParams::default(),
            meteors: MeteorParams::default(),
            shapes: ShapeLayout::default(),
            glow: GlowParams::default(),
        }
    }
}

impl SceneConfig {
    pub fn from_reader<R: std::io::Read>(r: R) -> LoepResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| LoepError::validation(format!("parse scene config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> LoepResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            LoepError::validation(format!("open scene config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> LoepResult<()> {
        self.viewport.validate()?;
        Fps::new(self.fps.num, self.fps.den)?;
        self.nebula.validate()?;
        self.stars.validate()?;
        self.meteors.validate()?;
        self.shapes.validate()?;
        self.glow.validate()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
