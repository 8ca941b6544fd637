//! One-sided range maps with implicit clipping at both ends.
//!
//! Every function here returns `out_min` for `x <= in_min` and `out_max` for
//! `x >= in_max` before evaluating its formula. Nothing is guarded beyond
//! that: a zero-width input range, or a non-positive bound fed to a
//! logarithm, yields NaN or infinity rather than an error. Use the
//! [`checked`](crate::checked) variants to reject such inputs up front.

use num_traits::Float;

use crate::clip::ClipMode;

/// A scalar that [`linear_map`] and
/// [`bipolar_linear_map`](crate::bipolar_linear_map) can interpolate.
///
/// Floats interpolate in their own precision. Fixed-width integers
/// interpolate through an `i128` intermediate, so narrow types and falling
/// unsigned output ranges never overflow. Integer division truncates toward
/// zero, and an extrapolated result that does not fit the type saturates at
/// its bounds.
pub trait LinearScalar: Copy + PartialOrd {
    /// Interpolates `x` from `[in_min, in_max]` onto `[out_min, out_max]`
    /// without clipping.
    fn interpolate(x: Self, in_min: Self, in_max: Self, out_min: Self, out_max: Self) -> Self;
}

macro_rules! impl_linear_float {
    ($($ty:ident),*) => {$(
        impl LinearScalar for $ty {
            #[inline]
            fn interpolate(x: $ty, in_min: $ty, in_max: $ty, out_min: $ty, out_max: $ty) -> $ty {
                linear_unclipped(x, in_min, in_max, out_min, out_max)
            }
        }
    )*};
}

macro_rules! impl_linear_int {
    ($($ty:ident),*) => {$(
        impl LinearScalar for $ty {
            #[inline]
            fn interpolate(x: $ty, in_min: $ty, in_max: $ty, out_min: $ty, out_max: $ty) -> $ty {
                let wide = interpolate_wide(
                    i128::from(x),
                    i128::from(in_min),
                    i128::from(in_max),
                    i128::from(out_min),
                    i128::from(out_max),
                );
                <$ty>::try_from(wide).unwrap_or(if wide < 0 { <$ty>::MIN } else { <$ty>::MAX })
            }
        }
    )*};
}

impl_linear_float!(f32, f64);
impl_linear_int!(u8, u16, u32, u64, i8, i16, i32, i64);

/// Integer interpolation on operands widened from at most 64 bits.
///
/// A zero-width input range yields `out_min`. Products beyond `i128` fall
/// back to `f64` arithmetic.
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    reason = "f64 fallback only for products that overflow i128"
)]
fn interpolate_wide(x: i128, in_min: i128, in_max: i128, out_min: i128, out_max: i128) -> i128 {
    let offset = x - in_min;
    let in_span = in_max - in_min;
    let out_span = out_max - out_min;
    if in_span == 0 {
        return out_min;
    }
    let step = match offset.checked_mul(out_span) {
        Some(scaled) => scaled / in_span,
        None => (offset as f64 * out_span as f64 / in_span as f64) as i128,
    };
    step.saturating_add(out_min)
}

/// Maps `x` from `[in_min, in_max]` to `[out_min, out_max]` linearly.
///
/// Works for fixed-width integers too; see [`LinearScalar`] for how they
/// round.
///
/// # Example
///
/// ```
/// use range_mapper::linear_map;
///
/// assert_eq!(linear_map(5, 0, 10, 0, 100), 50);
/// assert_eq!(linear_map(-1, 0, 10, 0, 100), 0);
/// assert_eq!(linear_map(11, 0, 10, 0, 100), 100);
///
/// // A falling unsigned output and a narrow intermediate are both fine.
/// assert_eq!(linear_map(5_u8, 0, 10, 100, 0), 50);
/// assert_eq!(linear_map(1000_i16, 0, 1023, 0, 255), 249);
/// ```
#[inline]
pub fn linear_map<T: LinearScalar>(x: T, in_min: T, in_max: T, out_min: T, out_max: T) -> T {
    match ClipMode::Both.clamp(x, in_min, in_max, out_min, out_max) {
        Some(clamped) => clamped,
        None => T::interpolate(x, in_min, in_max, out_min, out_max),
    }
}

/// [`linear_map`] for any [`Float`], used by the generic descriptors.
#[inline]
pub(crate) fn linear_float<T: Float>(x: T, in_min: T, in_max: T, out_min: T, out_max: T) -> T {
    match ClipMode::Both.clamp(x, in_min, in_max, out_min, out_max) {
        Some(clamped) => clamped,
        None => linear_unclipped(x, in_min, in_max, out_min, out_max),
    }
}

/// Maps `x` logarithmically: equal input ratios produce equal output steps.
///
/// Requires `in_min > 0` and `in_max > 0`.
///
/// # Example
///
/// ```
/// use range_mapper::log_input_map;
///
/// // 10 sits halfway through the two decades between 1 and 100.
/// let y: f64 = log_input_map(10.0, 1.0, 100.0, 0.0, 1.0);
/// assert!((y - 0.5).abs() < 1e-12);
/// ```
#[inline]
pub fn log_input_map<T: Float>(x: T, in_min: T, in_max: T, out_min: T, out_max: T) -> T {
    match ClipMode::Both.clamp(x, in_min, in_max, out_min, out_max) {
        Some(clamped) => clamped,
        None => log_input_unclipped(x, in_min, in_max, out_min, out_max),
    }
}

/// Maps a logarithmic input onto an exponential output.
///
/// Computes `out_min * (out_max / out_min)^(ln(x / in_min) / ln(in_max / in_min))`.
/// Requires positive input bounds and an output range whose bounds share a
/// sign (and are non-zero).
#[inline]
pub fn exp_output_map<T: Float>(x: T, in_min: T, in_max: T, out_min: T, out_max: T) -> T {
    if let Some(clamped) = ClipMode::Both.clamp(x, in_min, in_max, out_min, out_max) {
        return clamped;
    }
    let exponent = (x / in_min).ln() / (in_max / in_min).ln();
    (out_max / out_min).powf(exponent) * out_min
}

/// Maps a linear input onto an exponential output.
///
/// Computes `out_min * (out_max / out_min)^((x - in_min) / (in_max - in_min))`.
/// The output bounds must be non-zero and share a sign.
///
/// # Example
///
/// ```
/// use range_mapper::lin_exp_map;
///
/// // Halfway through the input lands on the geometric mean of the output.
/// let y: f64 = lin_exp_map(5.0, 0.0, 10.0, 1.0, 100.0);
/// assert!((y - 10.0).abs() < 1e-9);
/// ```
#[inline]
pub fn lin_exp_map<T: Float>(x: T, in_min: T, in_max: T, out_min: T, out_max: T) -> T {
    if let Some(clamped) = ClipMode::Both.clamp(x, in_min, in_max, out_min, out_max) {
        return clamped;
    }
    (out_max / out_min).powf((x - in_min) / (in_max - in_min)) * out_min
}

#[inline]
pub(crate) fn linear_unclipped<T: Float>(x: T, in_min: T, in_max: T, out_min: T, out_max: T) -> T {
    (x - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

#[inline]
pub(crate) fn log_input_unclipped<T: Float>(
    x: T,
    in_min: T,
    in_max: T,
    out_min: T,
    out_max: T,
) -> T {
    (x / in_min).ln() / (in_max / in_min).ln() * (out_max - out_min) + out_min
}
