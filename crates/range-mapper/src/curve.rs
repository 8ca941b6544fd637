//! Exponential-growth curve mapping and its inverse.
//!
//! A curve coefficient `c` bends the linear map into
//! `b - a * e^(c * t)` where `t` is the normalized input position. Negative
//! coefficients rise quickly and flatten out, positive ones start flat and
//! rise late. Coefficients with `|c| < 0.001` fall back to the linear
//! formula.
//!
//! # Coefficient algebra
//!
//! The growth constants are `a = (max - min) / (1 - e^c)` and `b = min + a`.
//! Read without parentheses, as `max - min / (1 - e^c)`, the same expression
//! divides only `min`, which no longer hits `max` at the top of the range and
//! breaks [`inverse_curved_map`] as an inverse. The parenthesized form is the
//! one implemented here.

use num_traits::Float;

use crate::clip::ClipMode;

/// Coefficients with an absolute value below this map linearly.
pub const DEGENERATE_CURVE_THRESHOLD: f64 = 0.001;

/// Curve used when none is given: a fast rise that flattens out.
pub const DEFAULT_CURVE: f64 = -4.0;

/// Converts an `f64` constant into the scalar type.
#[inline]
pub(crate) fn constant<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

/// Whether `curve` is close enough to zero to map linearly.
#[inline]
pub fn is_degenerate_curve<T: Float>(curve: T) -> bool {
    curve.abs() < constant(DEGENERATE_CURVE_THRESHOLD)
}

/// Maps `x` from the input range onto the output range along an
/// exponential-growth curve.
///
/// `clip` selects which boundaries clamp; with [`ClipMode::None`] the curve
/// extrapolates past both ends.
///
/// # Example
///
/// ```
/// use range_mapper::{ClipMode, curved_map};
///
/// // Negative curves rise fast: the midpoint lands well above 0.5.
/// let y: f64 = curved_map(0.5, 0.0, 1.0, 0.0, 1.0, -4.0, ClipMode::Both);
/// assert!((y - 0.880_797).abs() < 1e-5);
///
/// // A near-zero curve is plain linear interpolation.
/// let y: f64 = curved_map(0.5, 0.0, 1.0, 0.0, 1.0, 0.0005, ClipMode::Both);
/// assert!((y - 0.5).abs() < 1e-12);
/// ```
#[inline]
pub fn curved_map<T: Float>(
    x: T,
    in_min: T,
    in_max: T,
    out_min: T,
    out_max: T,
    curve: T,
    clip: ClipMode,
) -> T {
    if let Some(clamped) = clip.clamp(x, in_min, in_max, out_min, out_max) {
        return clamped;
    }
    if is_degenerate_curve(curve) {
        return (x - in_min) / (in_max - in_min) * (out_max - out_min) + out_min;
    }
    let grow = curve.exp();
    let a = (out_max - out_min) / (T::one() - grow);
    let b = out_min + a;
    let scaled = (x - in_min) / (in_max - in_min);
    b - a * grow.powf(scaled)
}

/// Recovers a linear position from a value produced by [`curved_map`].
///
/// Here the *input* range is the curved one: calling this with the ranges of
/// a `curved_map` call swapped, and the same `curve`, undoes that call.
///
/// With [`ClipMode::None`] an input beyond the curve's asymptote produces NaN.
///
/// # Example
///
/// ```
/// use range_mapper::{ClipMode, curved_map, inverse_curved_map};
///
/// let curved = curved_map(0.3, 0.0, 1.0, 10.0, 20.0, 2.5, ClipMode::None);
/// let linear: f64 = inverse_curved_map(curved, 10.0, 20.0, 0.0, 1.0, 2.5, ClipMode::None);
/// assert!((linear - 0.3).abs() < 1e-9);
/// ```
#[inline]
pub fn inverse_curved_map<T: Float>(
    x: T,
    in_min: T,
    in_max: T,
    out_min: T,
    out_max: T,
    curve: T,
    clip: ClipMode,
) -> T {
    if let Some(clamped) = clip.clamp(x, in_min, in_max, out_min, out_max) {
        return clamped;
    }
    if is_degenerate_curve(curve) {
        return (x - in_min) / (in_max - in_min) * (out_max - out_min) + out_min;
    }
    let grow = curve.exp();
    let a = (in_max - in_min) / (T::one() - grow);
    let b = in_min + a;
    ((b - x) / a).ln() * (out_max - out_min) / curve + out_min
}
