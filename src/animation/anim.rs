use crate::{
    animation::ease::Ease,
    foundation::core::Vec2,
    foundation::error::{LoepError, LoepResult},
};

/// Sampling position on the animation timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleCtx {
    pub time_s: f64, // seconds since the layer started animating
}

impl SampleCtx {
    pub fn at(time_s: f64) -> Self {
        Self { time_s }
    }
}

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

/// Time-varying value: a keyframe track, optionally repeated.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum Anim<T> {
    Keyframes(Keyframes<T>),
    /// Plays `inner` over `[0, period_s)` and starts again.
    Loop { inner: Box<Anim<T>>, period_s: f64 },
}

impl<T> Anim<T>
where
    T: Lerp + Clone,
{
    pub fn sample(&self, ctx: SampleCtx) -> LoepResult<T> {
        match self {
            Self::Keyframes(kf) => kf.sample(ctx),
            Self::Loop { inner, period_s } => {
                if *period_s <= 0.0 {
                    return Err(LoepError::animation("Loop period must be > 0"));
                }
                let t = ctx.time_s.max(0.0).rem_euclid(*period_s);
                inner.sample(SampleCtx::at(t))
            }
        }
    }

    pub fn validate(&self) -> LoepResult<()> {
        match self {
            Self::Keyframes(kf) => kf.validate(),
            Self::Loop { inner, period_s } => {
                if !period_s.is_finite() || *period_s <= 0.0 {
                    return Err(LoepError::animation("Loop period must be > 0"));
                }
                inner.validate()
            }
        }
    }
}

/// Keys sorted by time, interpolated linearly through each key's ease.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Keyframes<T> {
    pub keys: Vec<Keyframe<T>>,
}

impl<T> Keyframes<T>
where
    T: Lerp + Clone,
{
    pub fn validate(&self) -> LoepResult<()> {
        if self.keys.is_empty() {
            return Err(LoepError::animation("Keyframes must have at least one key"));
        }
        if self.keys.iter().any(|k| !k.at_s.is_finite()) {
            return Err(LoepError::animation("Keyframe times must be finite"));
        }
        if !self.keys.windows(2).all(|w| w[0].at_s <= w[1].at_s) {
            return Err(LoepError::animation("Keyframes keys must be sorted by time"));
        }
        Ok(())
    }

    pub fn sample(&self, ctx: SampleCtx) -> LoepResult<T> {
        let (Some(first), Some(last)) = (self.keys.first(), self.keys.last()) else {
            return Err(LoepError::animation("Keyframes has no keys"));
        };

        let t = ctx.time_s;
        let idx = self.keys.partition_point(|k| k.at_s <= t);
        if idx == 0 {
            return Ok(first.value.clone());
        }
        if idx >= self.keys.len() {
            return Ok(last.value.clone());
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let span = b.at_s - a.at_s;
        if span <= 0.0 {
            return Ok(a.value.clone());
        }

        let te = a.ease.apply((t - a.at_s) / span);
        Ok(T::lerp(&a.value, &b.value, te))
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Keyframe<T> {
    pub at_s: f64,
    pub value: T,
    pub ease: Ease, // ease applied toward next key
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
