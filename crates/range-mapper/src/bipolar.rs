//! Three-point maps around a distinguished center value.
//!
//! The outer clip policy is applied against the overall `in_min`/`in_max`
//! bounds first. The surviving value is then mapped, unclipped, through
//! whichever half-range contains it; `x == in_center` always selects the
//! upper half, which starts exactly at `out_center`.

use num_traits::Float;

use crate::clip::ClipMode;
use crate::map::{LinearScalar, linear_unclipped, log_input_unclipped};

#[expect(
    clippy::too_many_arguments,
    reason = "three-point input and output ranges, the clip policy and the half map"
)]
#[inline]
fn split_at_center<T, F>(
    x: T,
    in_center: T,
    in_min: T,
    in_max: T,
    out_center: T,
    out_min: T,
    out_max: T,
    clip: ClipMode,
    half: F,
) -> T
where
    T: PartialOrd + Copy,
    F: Fn(T, T, T, T, T) -> T,
{
    if let Some(clamped) = clip.clamp(x, in_min, in_max, out_min, out_max) {
        return clamped;
    }
    if x >= in_center {
        half(x, in_center, in_max, out_center, out_max)
    } else {
        half(x, in_min, in_center, out_min, out_center)
    }
}

/// Piecewise-linear map through `(in_min, out_min)`, `(in_center, out_center)`
/// and `(in_max, out_max)`.
///
/// Integer scalars round as described on [`LinearScalar`].
///
/// # Example
///
/// ```
/// use range_mapper::{ClipMode, bipolar_linear_map};
///
/// // A steering axis centered at 2048 onto [-1, 1].
/// let y = bipolar_linear_map(2048, 2048, 0, 4095, 0, -1000, 1000, ClipMode::Both);
/// assert_eq!(y, 0);
/// let y = bipolar_linear_map(1024.0, 2048.0, 0.0, 4096.0, 0.0, -1.0, 1.0, ClipMode::Both);
/// assert_eq!(y, -0.5);
/// ```
#[expect(
    clippy::too_many_arguments,
    reason = "three-point input and output ranges plus the clip policy"
)]
#[inline]
pub fn bipolar_linear_map<T: LinearScalar>(
    x: T,
    in_center: T,
    in_min: T,
    in_max: T,
    out_center: T,
    out_min: T,
    out_max: T,
    clip: ClipMode,
) -> T {
    split_at_center(
        x, in_center, in_min, in_max, out_center, out_min, out_max, clip, T::interpolate,
    )
}

/// [`bipolar_linear_map`] for any [`Float`], used by the generic descriptors.
#[expect(
    clippy::too_many_arguments,
    reason = "three-point input and output ranges plus the clip policy"
)]
#[inline]
pub(crate) fn bipolar_linear_float<T: Float>(
    x: T,
    in_center: T,
    in_min: T,
    in_max: T,
    out_center: T,
    out_min: T,
    out_max: T,
    clip: ClipMode,
) -> T {
    split_at_center(
        x, in_center, in_min, in_max, out_center, out_min, out_max, clip, linear_unclipped,
    )
}

/// Piecewise-logarithmic map through `(in_min, out_min)`,
/// `(in_center, out_center)` and `(in_max, out_max)`.
///
/// Each half is a [`log_input_map`](crate::log_input_map), so `in_min`,
/// `in_center` and `in_max` must all be positive.
#[expect(
    clippy::too_many_arguments,
    reason = "three-point input and output ranges plus the clip policy"
)]
#[inline]
pub fn bipolar_exp_map<T: Float>(
    x: T,
    in_center: T,
    in_min: T,
    in_max: T,
    out_center: T,
    out_min: T,
    out_max: T,
    clip: ClipMode,
) -> T {
    split_at_center(
        x, in_center, in_min, in_max, out_center, out_min, out_max, clip, log_input_unclipped,
    )
}
