//! Validating wrappers around the mapping functions.
//!
//! Each `checked_*` function verifies the preconditions its raw counterpart
//! leaves to the caller, delegates, and finally rejects a non-finite result.
//! Nothing here panics; a rejected call logs a `warn!` event and returns a
//! [`MapError`]. An infinite `x` is accepted wherever the clip policy clamps
//! it.

use num_traits::Float;
use tracing::warn;

use crate::bipolar::{bipolar_exp_map, bipolar_linear_float};
use crate::clip::ClipMode;
use crate::config::CurveConfig;
use crate::curve::{curved_map, inverse_curved_map};
use crate::error::{MapError, MapResult, widen};
use crate::map::{exp_output_map, lin_exp_map, linear_float, log_input_map};
use crate::mapping::{Mapping, Range};

fn reject<T>(err: MapError) -> MapResult<T> {
    warn!(error = %err, "Rejected range mapping");
    Err(err)
}

fn require_not_nan<T: Float>(x: T) -> MapResult<()> {
    if x.is_nan() {
        return reject(MapError::NonFiniteInput {
            field: "x",
            value: f64::NAN,
        });
    }
    Ok(())
}

fn require_finite<T: Float>(fields: &[(&'static str, T)]) -> MapResult<()> {
    for &(field, value) in fields {
        if !value.is_finite() {
            return reject(MapError::NonFiniteInput {
                field,
                value: widen(value),
            });
        }
    }
    Ok(())
}

fn require_span<T: Float>(range: &'static str, min: T, max: T) -> MapResult<()> {
    if Range::new(min, max).is_degenerate() {
        return reject(MapError::DegenerateRange {
            range,
            value: widen(min),
        });
    }
    Ok(())
}

fn require_positive<T: Float>(fields: &[(&'static str, T)]) -> MapResult<()> {
    for &(field, value) in fields {
        if value <= T::zero() {
            return reject(MapError::NonPositiveBound {
                field,
                value: widen(value),
            });
        }
    }
    Ok(())
}

fn require_positive_ratio<T: Float>(min: T, max: T) -> MapResult<()> {
    if min.is_zero() || max / min <= T::zero() {
        return reject(MapError::NonPositiveRatio {
            min: widen(min),
            max: widen(max),
        });
    }
    Ok(())
}

fn require_center<T: Float>(min: T, center: T, max: T) -> MapResult<()> {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    if center <= low || center >= high {
        return reject(MapError::CenterOutOfRange {
            center: widen(center),
            min: widen(min),
            max: widen(max),
        });
    }
    Ok(())
}

fn require_finite_result<T: Float>(x: T, y: T) -> MapResult<T> {
    if !y.is_finite() {
        return reject(MapError::NonFiniteResult {
            input: widen(x),
            value: widen(y),
        });
    }
    Ok(y)
}

fn require_bounds<T: Float>(input: Range<T>, output: Range<T>) -> MapResult<()> {
    require_finite(&[
        ("in_min", input.min),
        ("in_max", input.max),
        ("out_min", output.min),
        ("out_max", output.max),
    ])?;
    require_span("input", input.min, input.max)
}

/// Checks `input`/`output` against the preconditions of `mapping` without
/// mapping a value.
pub(crate) fn require_mapping<T: Float>(
    mapping: &Mapping<T>,
    input: Range<T>,
    output: Range<T>,
) -> MapResult<()> {
    require_bounds(input, output)?;
    match mapping {
        Mapping::Linear => Ok(()),
        Mapping::LogInput => require_positive(&[("in_min", input.min), ("in_max", input.max)]),
        Mapping::ExpOutput => {
            require_positive(&[("in_min", input.min), ("in_max", input.max)])?;
            require_positive_ratio(output.min, output.max)
        }
        Mapping::LinExp => require_positive_ratio(output.min, output.max),
        Mapping::Curved(config) | Mapping::InverseCurved(config) => {
            config.validate().or_else(reject)
        }
    }
}

fn require_one_sided<T: Float>(
    mapping: &Mapping<T>,
    x: T,
    in_min: T,
    in_max: T,
    out_min: T,
    out_max: T,
) -> MapResult<()> {
    require_not_nan(x)?;
    require_mapping(
        mapping,
        Range::new(in_min, in_max),
        Range::new(out_min, out_max),
    )
}

/// [`linear_map`](crate::linear_map) with a finite, non-degenerate input range.
///
/// # Errors
///
/// [`MapError::NonFiniteInput`] for a NaN `x` or a non-finite bound,
/// [`MapError::DegenerateRange`] if `in_min == in_max`.
pub fn checked_linear_map<T: Float>(
    x: T,
    in_min: T,
    in_max: T,
    out_min: T,
    out_max: T,
) -> MapResult<T> {
    require_one_sided(&Mapping::Linear, x, in_min, in_max, out_min, out_max)?;
    require_finite_result(x, linear_float(x, in_min, in_max, out_min, out_max))
}

/// [`log_input_map`] with positive input bounds.
///
/// # Errors
///
/// As [`checked_linear_map`], plus [`MapError::NonPositiveBound`] if either
/// input bound is `<= 0`.
pub fn checked_log_input_map<T: Float>(
    x: T,
    in_min: T,
    in_max: T,
    out_min: T,
    out_max: T,
) -> MapResult<T> {
    require_one_sided(&Mapping::LogInput, x, in_min, in_max, out_min, out_max)?;
    require_finite_result(x, log_input_map(x, in_min, in_max, out_min, out_max))
}

/// [`exp_output_map`] with positive input bounds and a positive output ratio.
///
/// # Errors
///
/// As [`checked_log_input_map`], plus [`MapError::NonPositiveRatio`] if
/// `out_min` is zero or the output bounds differ in sign.
pub fn checked_exp_output_map<T: Float>(
    x: T,
    in_min: T,
    in_max: T,
    out_min: T,
    out_max: T,
) -> MapResult<T> {
    require_one_sided(&Mapping::ExpOutput, x, in_min, in_max, out_min, out_max)?;
    require_finite_result(x, exp_output_map(x, in_min, in_max, out_min, out_max))
}

/// [`lin_exp_map`] with a positive output ratio.
///
/// # Errors
///
/// As [`checked_linear_map`], plus [`MapError::NonPositiveRatio`].
pub fn checked_lin_exp_map<T: Float>(
    x: T,
    in_min: T,
    in_max: T,
    out_min: T,
    out_max: T,
) -> MapResult<T> {
    require_one_sided(&Mapping::LinExp, x, in_min, in_max, out_min, out_max)?;
    require_finite_result(x, lin_exp_map(x, in_min, in_max, out_min, out_max))
}

/// [`curved_map`] with a finite curve.
///
/// # Errors
///
/// As [`checked_linear_map`], plus [`MapError::InvalidConfiguration`] for a
/// non-finite curve and [`MapError::NonFiniteResult`] if an unclipped curve
/// overflows.
pub fn checked_curved_map<T: Float>(
    x: T,
    in_min: T,
    in_max: T,
    out_min: T,
    out_max: T,
    curve: T,
    clip: ClipMode,
) -> MapResult<T> {
    let mapping = Mapping::Curved(CurveConfig::new(curve, clip));
    require_one_sided(&mapping, x, in_min, in_max, out_min, out_max)?;
    require_finite_result(
        x,
        curved_map(x, in_min, in_max, out_min, out_max, curve, clip),
    )
}

/// [`inverse_curved_map`] with a finite curve.
///
/// # Errors
///
/// As [`checked_curved_map`]. An unclipped input past the curve's asymptote
/// is a [`MapError::NonFiniteResult`].
pub fn checked_inverse_curved_map<T: Float>(
    x: T,
    in_min: T,
    in_max: T,
    out_min: T,
    out_max: T,
    curve: T,
    clip: ClipMode,
) -> MapResult<T> {
    let mapping = Mapping::InverseCurved(CurveConfig::new(curve, clip));
    require_one_sided(&mapping, x, in_min, in_max, out_min, out_max)?;
    require_finite_result(
        x,
        inverse_curved_map(x, in_min, in_max, out_min, out_max, curve, clip),
    )
}

fn require_bipolar<T: Float>(x: T, bounds: [(&'static str, T); 6]) -> MapResult<()> {
    require_not_nan(x)?;
    require_finite(&bounds)?;
    let [(_, in_center), (_, in_min), (_, in_max), ..] = bounds;
    require_span("lower half", in_min, in_center)?;
    require_span("upper half", in_center, in_max)?;
    require_center(in_min, in_center, in_max)
}

/// [`bipolar_linear_map`](crate::bipolar_linear_map) with two non-degenerate input halves.
///
/// # Errors
///
/// [`MapError::NonFiniteInput`] for a NaN `x` or a non-finite bound,
/// [`MapError::DegenerateRange`] if `in_center` coincides with either end,
/// [`MapError::CenterOutOfRange`] if it lies outside them.
#[expect(
    clippy::too_many_arguments,
    reason = "three-point input and output ranges plus the clip policy"
)]
pub fn checked_bipolar_linear_map<T: Float>(
    x: T,
    in_center: T,
    in_min: T,
    in_max: T,
    out_center: T,
    out_min: T,
    out_max: T,
    clip: ClipMode,
) -> MapResult<T> {
    require_bipolar(
        x,
        [
            ("in_center", in_center),
            ("in_min", in_min),
            ("in_max", in_max),
            ("out_center", out_center),
            ("out_min", out_min),
            ("out_max", out_max),
        ],
    )?;
    require_finite_result(
        x,
        bipolar_linear_float(x, in_center, in_min, in_max, out_center, out_min, out_max, clip),
    )
}

/// [`bipolar_exp_map`] with two non-degenerate, positive input halves.
///
/// # Errors
///
/// As [`checked_bipolar_linear_map`], plus [`MapError::NonPositiveBound`]
/// if any input point is `<= 0`.
#[expect(
    clippy::too_many_arguments,
    reason = "three-point input and output ranges plus the clip policy"
)]
pub fn checked_bipolar_exp_map<T: Float>(
    x: T,
    in_center: T,
    in_min: T,
    in_max: T,
    out_center: T,
    out_min: T,
    out_max: T,
    clip: ClipMode,
) -> MapResult<T> {
    require_bipolar(
        x,
        [
            ("in_center", in_center),
            ("in_min", in_min),
            ("in_max", in_max),
            ("out_center", out_center),
            ("out_min", out_min),
            ("out_max", out_max),
        ],
    )?;
    require_positive(&[("in_min", in_min), ("in_center", in_center), ("in_max", in_max)])?;
    require_finite_result(
        x,
        bipolar_exp_map(x, in_center, in_min, in_max, out_center, out_min, out_max, clip),
    )
}
