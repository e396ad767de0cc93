//! Mapping and smoothing helpers for `f32` control values.

use std::ops::RangeInclusive;


/// Map `input` linearly so that `from_low` lands on `to_low` and `from_high` on
/// `to_high`. Nothing is clamped.
#[must_use]
pub fn rescale_points(input: f32, from_low: f32, from_high: f32, to_low: f32, to_high: f32) -> f32 {
    let input = (input - from_low) / (from_high - from_low);
    input * (to_high - to_low) + to_low
}

/// [`rescale_points`] taking the end points as ranges.
#[must_use]
pub fn rescale(input: f32, from: RangeInclusive<f32>, to: RangeInclusive<f32>) -> f32 {
    rescale_points(input, *from.start(), *from.end(), *to.start(), *to.end())
}

/// [`rescale`], then clamped to `to`.
#[must_use]
pub fn rescale_clamped(input: f32, from: RangeInclusive<f32>, to: RangeInclusive<f32>) -> f32 {
    rescale(input, from, to.clone()).clamp(*to.start(), *to.end())
}

/// Linear interpolation, `value_at_zero` at `t == 0` and `value_at_one` at `t == 1`.
#[must_use]
pub fn lerp(value_at_zero: f32, value_at_one: f32, t: f32) -> f32 {
    value_at_zero * (1.0 - t) + value_at_one * t
}

/// `min * base^t`, the curve of an exponential knob.
#[must_use]
pub fn exp_scale(min: f32, base: f32, t: f32) -> f32 {
    min * base.powf(t)
}

/// Inverse of [`exp_scale`].
///
/// Values below `min` are treated as `min`, so the result is never negative.
#[must_use]
pub fn exp_unscale(min: f32, base: f32, value: f32) -> f32 {
    (value.max(min) / min).ln() / base.ln()
}

/// One step of a one-pole lowpass: move `current` a fraction `coeff` of the way to `target`.
#[must_use]
pub fn one_pole(current: f32, target: f32, coeff: f32) -> f32 {
    current + coeff * (target - current)
}
