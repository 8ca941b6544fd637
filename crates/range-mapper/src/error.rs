//! Error types for the validating mapping layer.
//!
//! The raw mapping functions never return errors: violated preconditions
//! surface as NaN or infinity. These errors are produced only by the
//! [`checked`](crate::checked) functions, [`CurveConfig::validate`](crate::CurveConfig::validate)
//! and [`ClipMode`](crate::ClipMode) parsing.

use num_traits::ToPrimitive;

/// Error type for range mapping validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MapError {
    /// A range has identical bounds, so its width is zero.
    #[error("{range} range is degenerate: both bounds are {value}")]
    DegenerateRange {
        /// Which range was degenerate (e.g. "input", "lower half").
        range: &'static str,
        /// The shared bound value.
        value: f64,
    },

    /// A bound that feeds a logarithm is zero or negative.
    #[error("{field} must be > 0 for logarithmic mapping, got {value}")]
    NonPositiveBound {
        /// Name of the offending bound.
        field: &'static str,
        /// The invalid value.
        value: f64,
    },

    /// The output bounds of an exponential mapping have a non-positive ratio.
    #[error("output ratio {max}/{min} must be positive for exponential mapping")]
    NonPositiveRatio {
        /// Output range minimum.
        min: f64,
        /// Output range maximum.
        max: f64,
    },

    /// A bipolar center does not lie strictly between the outer bounds.
    #[error("center {center} must lie strictly between {min} and {max}")]
    CenterOutOfRange {
        /// The offending center.
        center: f64,
        /// Outer range minimum.
        min: f64,
        /// Outer range maximum.
        max: f64,
    },

    /// An argument is NaN or infinite.
    #[error("{field} must be finite, got {value}")]
    NonFiniteInput {
        /// Name of the offending argument.
        field: &'static str,
        /// The invalid value.
        value: f64,
    },

    /// Preconditions held but the mapping still left the finite domain,
    /// e.g. an unclipped inverse curve extrapolated past its asymptote.
    #[error("mapping of {input} produced non-finite result {value}")]
    NonFiniteResult {
        /// The mapped input.
        input: f64,
        /// The non-finite output.
        value: f64,
    },

    /// Invalid curve configuration.
    #[error("Invalid curve configuration: {0}")]
    InvalidConfiguration(String),

    /// A clip mode token did not name one of the four policies.
    #[error("unknown clip mode '{0}', expected one of: minmax, min, max, none")]
    UnknownClipMode(String),
}

/// Result alias for the validating layer.
pub type MapResult<T> = Result<T, MapError>;

/// Widens a scalar for error reporting. Values with no `f64` image report NaN.
pub(crate) fn widen<T: ToPrimitive>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
