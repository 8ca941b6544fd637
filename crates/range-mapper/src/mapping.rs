//! Reusable mapping descriptors.
//!
//! The free functions take every bound as a separate argument. The types
//! here bundle ranges and a [`Mapping`] so a mapping can be configured once
//! (deserialized from a profile, say) and evaluated many times.

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::bipolar::{bipolar_exp_map, bipolar_linear_float};
use crate::checked;
use crate::clip::ClipMode;
use crate::config::CurveConfig;
use crate::curve::{curved_map, inverse_curved_map};
use crate::error::MapResult;
use crate::map::{exp_output_map, lin_exp_map, linear_float, log_input_map};

/// An ordered pair of bounds. `min` may exceed `max` for a falling range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Range<T> {
    /// Bound that `x <= min` clamps to.
    pub min: T,
    /// Bound that `x >= max` clamps to.
    pub max: T,
}

impl<T: Float> Range<T> {
    /// Creates a range.
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// The normalized unit range `[0, 1]`.
    pub fn unit() -> Self {
        Self::new(T::zero(), T::one())
    }

    /// Signed width, `max - min`.
    pub fn width(&self) -> T {
        self.max - self.min
    }

    /// Whether the bounds coincide.
    pub fn is_degenerate(&self) -> bool {
        self.width().is_zero()
    }

    /// Whether `x` lies between the bounds, inclusive, in either order.
    pub fn contains(&self, x: T) -> bool {
        let (lo, hi) = if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        };
        lo <= x && x <= hi
    }

    /// The same bounds in the opposite order.
    pub fn swapped(&self) -> Self {
        Self::new(self.max, self.min)
    }

    /// The point `t` of the way from `min` to `max`.
    pub fn lerp(&self, t: T) -> T {
        self.min + self.width() * t
    }
}

/// The shape of a one-sided mapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "config", rename_all = "snake_case")]
pub enum Mapping<T: Float = f32> {
    /// [`linear_map`](crate::linear_map).
    #[default]
    Linear,
    /// [`log_input_map`].
    LogInput,
    /// [`exp_output_map`].
    ExpOutput,
    /// [`lin_exp_map`].
    LinExp,
    /// [`curved_map`] with the given curve and clip policy.
    Curved(CurveConfig<T>),
    /// [`inverse_curved_map`] with the given curve and clip policy.
    InverseCurved(CurveConfig<T>),
}

impl<T: Float> Mapping<T> {
    /// Maps `x` from `input` onto `output`.
    #[inline]
    pub fn evaluate(&self, x: T, input: Range<T>, output: Range<T>) -> T {
        let (i0, i1, o0, o1) = (input.min, input.max, output.min, output.max);
        match self {
            Mapping::Linear => linear_float(x, i0, i1, o0, o1),
            Mapping::LogInput => log_input_map(x, i0, i1, o0, o1),
            Mapping::ExpOutput => exp_output_map(x, i0, i1, o0, o1),
            Mapping::LinExp => lin_exp_map(x, i0, i1, o0, o1),
            Mapping::Curved(c) => curved_map(x, i0, i1, o0, o1, c.curve, c.clip),
            Mapping::InverseCurved(c) => inverse_curved_map(x, i0, i1, o0, o1, c.curve, c.clip),
        }
    }

    /// Like [`evaluate`](Self::evaluate), but rejects inputs that would make
    /// the result undefined.
    ///
    /// # Errors
    ///
    /// See the [`checked`] module.
    pub fn try_evaluate(&self, x: T, input: Range<T>, output: Range<T>) -> MapResult<T> {
        let (i0, i1, o0, o1) = (input.min, input.max, output.min, output.max);
        match self {
            Mapping::Linear => checked::checked_linear_map(x, i0, i1, o0, o1),
            Mapping::LogInput => checked::checked_log_input_map(x, i0, i1, o0, o1),
            Mapping::ExpOutput => checked::checked_exp_output_map(x, i0, i1, o0, o1),
            Mapping::LinExp => checked::checked_lin_exp_map(x, i0, i1, o0, o1),
            Mapping::Curved(c) => checked::checked_curved_map(x, i0, i1, o0, o1, c.curve, c.clip),
            Mapping::InverseCurved(c) => {
                checked::checked_inverse_curved_map(x, i0, i1, o0, o1, c.curve, c.clip)
            }
        }
    }

    /// The mapping that undoes this one once input and output ranges are
    /// swapped.
    pub fn inverse(&self) -> Self {
        match *self {
            Mapping::Linear => Mapping::Linear,
            Mapping::LogInput => Mapping::LinExp,
            Mapping::LinExp => Mapping::LogInput,
            Mapping::ExpOutput => Mapping::ExpOutput,
            Mapping::Curved(c) => Mapping::InverseCurved(c),
            Mapping::InverseCurved(c) => Mapping::Curved(c),
        }
    }
}

/// A one-sided mapping with its ranges.
///
/// # Example
///
/// ```
/// use range_mapper::{Mapping, Range, RangeMapper};
///
/// // Map a 0..1 knob onto 20 Hz..20 kHz.
/// let knob = RangeMapper::new(Range::unit(), Range::new(20.0, 20_000.0), Mapping::LinExp);
/// let hz = knob.map(0.5_f64);
/// assert!((hz - 632.455_532).abs() < 1e-6);
///
/// // And back again.
/// let pos = knob.inverse().map(hz);
/// assert!((pos - 0.5).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RangeMapper<T: Float = f32> {
    /// Range `x` is taken from.
    pub input: Range<T>,
    /// Range results land in.
    pub output: Range<T>,
    /// Shape of the mapping.
    #[serde(default)]
    pub mapping: Mapping<T>,
}

impl<T: Float> RangeMapper<T> {
    /// Creates a mapper.
    pub fn new(input: Range<T>, output: Range<T>, mapping: Mapping<T>) -> Self {
        Self {
            input,
            output,
            mapping,
        }
    }

    /// A linear mapper.
    pub fn linear(input: Range<T>, output: Range<T>) -> Self {
        Self::new(input, output, Mapping::Linear)
    }

    /// Maps `x`.
    #[inline]
    pub fn map(&self, x: T) -> T {
        self.mapping.evaluate(x, self.input, self.output)
    }

    /// Maps `x`, rejecting inputs that would make the result undefined.
    ///
    /// # Errors
    ///
    /// See the [`checked`] module.
    pub fn try_map(&self, x: T) -> MapResult<T> {
        self.mapping.try_evaluate(x, self.input, self.output)
    }

    /// Checks the ranges against the mapping's preconditions without mapping
    /// a value.
    ///
    /// # Errors
    ///
    /// See the [`checked`] module.
    pub fn validate(&self) -> MapResult<()> {
        checked::require_mapping(&self.mapping, self.input, self.output)
    }

    /// The mapper taking this mapper's outputs back to its inputs.
    pub fn inverse(&self) -> Self {
        Self::new(self.output, self.input, self.mapping.inverse())
    }
}

/// Which one-sided mapping each half of a [`BipolarMapper`] uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BipolarKind {
    /// Linear halves ([`bipolar_linear_map`](crate::bipolar_linear_map)).
    #[default]
    Linear,
    /// Logarithmic-input halves ([`bipolar_exp_map`]).
    Exponential,
}

/// A range with a distinguished center.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BipolarRange<T> {
    /// Lower bound.
    pub min: T,
    /// Center point shared by both halves.
    pub center: T,
    /// Upper bound.
    pub max: T,
}

impl<T: Float> BipolarRange<T> {
    /// Creates a bipolar range.
    pub fn new(min: T, center: T, max: T) -> Self {
        Self { min, center, max }
    }

    /// `[-1, 1]` centered on zero.
    pub fn symmetric_unit() -> Self {
        Self::new(-T::one(), T::zero(), T::one())
    }

    /// The half from `min` to `center`.
    pub fn lower(&self) -> Range<T> {
        Range::new(self.min, self.center)
    }

    /// The half from `center` to `max`.
    pub fn upper(&self) -> Range<T> {
        Range::new(self.center, self.max)
    }
}

/// A three-point mapping with its ranges.
///
/// # Example
///
/// ```
/// use range_mapper::{BipolarKind, BipolarMapper, BipolarRange, ClipMode};
///
/// // A pedal with a sticky center detent at 30%.
/// let pedal = BipolarMapper::new(
///     BipolarRange::new(0.0, 0.3, 1.0),
///     BipolarRange::symmetric_unit(),
///     BipolarKind::Linear,
///     ClipMode::Both,
/// );
/// assert_eq!(pedal.map(0.3), 0.0);
/// assert_eq!(pedal.map(0.0), -1.0);
/// assert_eq!(pedal.map(1.0), 1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BipolarMapper<T: Float = f32> {
    /// Input range with its center.
    pub input: BipolarRange<T>,
    /// Output range with its center.
    pub output: BipolarRange<T>,
    /// Shape of each half.
    #[serde(default)]
    pub kind: BipolarKind,
    /// Outer clip policy.
    #[serde(default)]
    pub clip: ClipMode,
}

impl<T: Float> BipolarMapper<T> {
    /// Creates a bipolar mapper.
    pub fn new(
        input: BipolarRange<T>,
        output: BipolarRange<T>,
        kind: BipolarKind,
        clip: ClipMode,
    ) -> Self {
        Self {
            input,
            output,
            kind,
            clip,
        }
    }

    /// Maps `x`.
    #[inline]
    pub fn map(&self, x: T) -> T {
        let (i, o) = (self.input, self.output);
        match self.kind {
            BipolarKind::Linear => bipolar_linear_float(
                x, i.center, i.min, i.max, o.center, o.min, o.max, self.clip,
            ),
            BipolarKind::Exponential => {
                bipolar_exp_map(x, i.center, i.min, i.max, o.center, o.min, o.max, self.clip)
            }
        }
    }

    /// Maps `x`, rejecting inputs that would make the result undefined.
    ///
    /// # Errors
    ///
    /// See the [`checked`] module.
    pub fn try_map(&self, x: T) -> MapResult<T> {
        let (i, o) = (self.input, self.output);
        match self.kind {
            BipolarKind::Linear => checked::checked_bipolar_linear_map(
                x, i.center, i.min, i.max, o.center, o.min, o.max, self.clip,
            ),
            BipolarKind::Exponential => checked::checked_bipolar_exp_map(
                x, i.center, i.min, i.max, o.center, o.min, o.max, self.clip,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MapError;
    use approx::assert_relative_eq;

    #[test]
    fn test_range_helpers() {
        let r = Range::new(10.0_f64, 2.0);
        assert_relative_eq!(r.width(), -8.0);
        assert!(r.contains(5.0));
        assert!(r.contains(2.0));
        assert!(!r.contains(11.0));
        assert_eq!(r.swapped(), Range::new(2.0, 10.0));
        assert_relative_eq!(r.lerp(0.25), 8.0);
        assert!(!r.is_degenerate());
        assert!(Range::new(3.0_f32, 3.0).is_degenerate());
    }

    #[test]
    fn test_mapping_evaluate_dispatches() {
        let input = Range::new(1.0_f64, 100.0);
        let output = Range::new(0.0_f64, 1.0);
        assert_relative_eq!(
            Mapping::LogInput.evaluate(10.0, input, output),
            0.5,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            Mapping::Linear.evaluate(50.5, input, output),
            0.5,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_inverse_pairs() {
        let c = CurveConfig::new(-2.0_f32, ClipMode::None);
        assert_eq!(Mapping::<f32>::Linear.inverse(), Mapping::Linear);
        assert_eq!(Mapping::<f32>::LogInput.inverse(), Mapping::LinExp);
        assert_eq!(Mapping::<f32>::LinExp.inverse(), Mapping::LogInput);
        assert_eq!(Mapping::<f32>::ExpOutput.inverse(), Mapping::ExpOutput);
        assert_eq!(Mapping::Curved(c).inverse(), Mapping::InverseCurved(c));
        assert_eq!(Mapping::Curved(c).inverse().inverse(), Mapping::Curved(c));
    }

    #[test]
    fn test_mapper_inverse_round_trips_each_kind() {
        let curve = CurveConfig::new(3.0_f64, ClipMode::Both);
        let mappings = [
            Mapping::Linear,
            Mapping::LogInput,
            Mapping::ExpOutput,
            Mapping::LinExp,
            Mapping::Curved(curve),
            Mapping::InverseCurved(curve),
        ];
        for mapping in mappings {
            let mapper = RangeMapper::new(Range::new(2.0, 50.0), Range::new(5.0, 500.0), mapping);
            for x in [3.0, 10.0, 25.0, 49.0] {
                let back = mapper.inverse().map(mapper.map(x));
                assert_relative_eq!(back, x, max_relative = 1e-9);
            }
        }
    }

    #[test]
    fn test_mapper_try_map_reports_bad_range() {
        let mapper = RangeMapper::new(
            Range::new(0.0_f64, 10.0),
            Range::unit(),
            Mapping::LogInput,
        );
        assert!(mapper.map(5.0).is_nan());
        assert_eq!(
            mapper.try_map(5.0),
            Err(MapError::NonPositiveBound {
                field: "in_min",
                value: 0.0
            })
        );
        assert!(mapper.validate().is_err());
    }

    #[test]
    fn test_mapper_serde_defaults_to_linear() -> Result<(), serde_json::Error> {
        let mapper: RangeMapper<f64> = serde_json::from_str(
            r#"{"input": {"min": 0.0, "max": 10.0}, "output": {"min": 0.0, "max": 1.0}}"#,
        )?;
        assert_eq!(mapper.mapping, Mapping::Linear);
        assert_eq!(Mapping::<f64>::default(), Mapping::Linear);
        assert_relative_eq!(mapper.map(2.5), 0.25);
        Ok(())
    }

    #[test]
    fn test_mapper_serde_curved() -> Result<(), serde_json::Error> {
        let json = r#"{
            "input": {"min": 0.0, "max": 1.0},
            "output": {"min": 0.0, "max": 1.0},
            "mapping": {"kind": "curved", "config": {"curve": -4.0, "clip": "none"}}
        }"#;
        let mapper: RangeMapper<f64> = serde_json::from_str(json)?;
        assert_eq!(
            mapper.mapping,
            Mapping::Curved(CurveConfig::new(-4.0, ClipMode::None))
        );
        assert!(mapper.map(1.5) > 1.0);
        Ok(())
    }

    #[test]
    fn test_bipolar_mapper_kinds() {
        let linear = BipolarMapper::new(
            BipolarRange::new(0.0_f64, 0.3, 1.0),
            BipolarRange::symmetric_unit(),
            BipolarKind::Linear,
            ClipMode::Both,
        );
        assert_relative_eq!(linear.map(0.15), -0.5, epsilon = 1e-12);
        assert_relative_eq!(linear.map(0.65), 0.5, epsilon = 1e-12);

        let exp = BipolarMapper::new(
            BipolarRange::new(1.0_f64, 10.0, 100.0),
            BipolarRange::symmetric_unit(),
            BipolarKind::Exponential,
            ClipMode::Both,
        );
        assert_relative_eq!(exp.map(10.0), 0.0, epsilon = 1e-12);
        assert_relative_eq!(exp.map(10.0_f64.sqrt()), -0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_bipolar_range_halves() {
        let r = BipolarRange::new(-2.0_f32, 0.5, 4.0);
        assert_eq!(r.lower(), Range::new(-2.0, 0.5));
        assert_eq!(r.upper(), Range::new(0.5, 4.0));
    }

    #[test]
    fn test_bipolar_mapper_try_map_rejects_collapsed_half() {
        let mapper = BipolarMapper::new(
            BipolarRange::new(0.0_f64, 0.0, 1.0),
            BipolarRange::symmetric_unit(),
            BipolarKind::Linear,
            ClipMode::None,
        );
        assert!(matches!(
            mapper.try_map(0.5),
            Err(MapError::DegenerateRange { range: "lower half", .. })
        ));
    }
}
