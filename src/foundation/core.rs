use crate::foundation::error::{LoepError, LoepResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Largest canvas side the rasterizer can allocate.
pub const MAX_CANVAS_SIDE: u32 = u16::MAX as u32;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    pub fn new(num: u32, den: u32) -> LoepResult<Self> {
        if den == 0 {
            return Err(LoepError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(LoepError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }
}

/// Layout size of the backdrop in CSS pixels plus the display density.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub device_pixel_ratio: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            device_pixel_ratio: 1.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio,
        }
    }

    /// Density with non-finite or non-positive values replaced by 1.
    pub fn dpr(&self) -> f64 {
        if self.device_pixel_ratio.is_finite() && self.device_pixel_ratio > 0.0 {
            self.device_pixel_ratio
        } else {
            1.0
        }
    }

    /// Backing buffer size in device pixels. Degenerate sizes collapse to 0.
    pub fn canvas(&self) -> Canvas {
        fn axis(css: f64, dpr: f64) -> u32 {
            let px = css * dpr;
            if px.is_finite() && px > 0.0 {
                px.floor().min(f64::from(u32::MAX)) as u32
            } else {
                0
            }
        }

        let dpr = self.dpr();
        Canvas {
            width: axis(self.width, dpr),
            height: axis(self.height, dpr),
        }
    }

    pub fn validate(&self) -> LoepResult<()> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(LoepError::validation("viewport width/height must be finite"));
        }
        if !self.device_pixel_ratio.is_finite() || self.device_pixel_ratio <= 0.0 {
            return Err(LoepError::validation("device_pixel_ratio must be > 0"));
        }
        let canvas = self.canvas();
        if canvas.width > MAX_CANVAS_SIDE || canvas.height > MAX_CANVAS_SIDE {
            return Err(LoepError::validation(format!(
                "canvas {}x{} exceeds {MAX_CANVAS_SIDE} device px per side",
                canvas.width, canvas.height
            )));
        }
        Ok(())
    }
}

/// Device-pixel dimensions of the drawing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn area(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Straight-alpha RGBA8 color. Serialized as `#rrggbb` or `#rrggbbaa`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(s: &str) -> LoepResult<Self> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| LoepError::validation(format!("color '{s}' must start with '#'")))?;
        let byte = |i: usize| -> LoepResult<u8> {
            hex.get(i..i + 2)
                .and_then(|h| u8::from_str_radix(h, 16).ok())
                .ok_or_else(|| LoepError::validation(format!("color '{s}' is not valid hex")))
        };
        match hex.len() {
            6 => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(LoepError::validation(format!(
                "color '{s}' must be #rrggbb or #rrggbbaa"
            ))),
        }
    }

    /// Same color with alpha replaced by `alpha` in 0..1 (clamped).
    pub fn with_alpha(self, alpha: f64) -> Self {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { a, ..self }
    }
}

impl TryFrom<String> for Rgba8 {
    type Error = LoepError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Rgba8> for String {
    fn from(c: Rgba8) -> Self {
        if c.a == 255 {
            format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", c.r, c.g, c.b, c.a)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
