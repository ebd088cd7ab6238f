use crate::animation::{
    anim::{Anim, Keyframe, Keyframes},
    ease::Ease,
};

/// Keyframes spread evenly over `duration_s`, each segment eased with `ease`.
pub fn evenly_spaced<T>(values: Vec<T>, duration_s: f64, ease: Ease) -> Anim<T> {
    let segments = values.len().saturating_sub(1).max(1) as f64;
    let keys = values
        .into_iter()
        .enumerate()
        .map(|(i, value)| Keyframe {
            at_s: duration_s * (i as f64) / segments,
            value,
            ease,
        })
        .collect();
    Anim::Keyframes(Keyframes { keys })
}

/// Keyframe cycle repeated forever: `values` spread over `duration_s`, then restart.
pub fn repeat_forever<T>(values: Vec<T>, duration_s: f64, ease: Ease) -> Anim<T> {
    Anim::Loop {
        inner: Box::new(evenly_spaced(values, duration_s, ease)),
        period_s: duration_s,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ops.rs"]
mod tests;
