//! Range Mapping for Embedded and Real-Time Control
//!
//! This crate maps scalars from one numeric range into another, optionally
//! through a logarithmic, exponential or exponential-growth curve, with an
//! explicit policy for what happens at the range boundaries.
//!
//! # Overview
//!
//! The mapping family:
//! - **Linear**: [`linear_map`], straight interpolation (also for integers)
//! - **Logarithmic input**: [`log_input_map`], equal ratios give equal steps
//! - **Exponential output**: [`exp_output_map`] and [`lin_exp_map`]
//! - **Curved**: [`curved_map`] and its inverse [`inverse_curved_map`],
//!   steered by a signed curve coefficient and a [`ClipMode`]
//! - **Bipolar**: [`bipolar_linear_map`] and [`bipolar_exp_map`], two halves
//!   joined at a center point
//! - **Randomness**: [`random_triangular_sum`], a cheap bell-shaped draw
//!
//! # Preconditions
//!
//! The mapping functions never panic and never return errors. A zero-width
//! input range, or a non-positive bound fed to a logarithm, produces NaN or
//! infinity. The [`checked`] module wraps every mapping with validation that
//! reports these cases as a [`MapError`] instead.
//!
//! # RT Safety
//!
//! Every mapping function is O(1), allocation-free and re-entrant.
//! [`MappingLut::lookup()`] additionally avoids transcendental functions.
//!
//! # Example
//!
//! ```
//! use range_mapper::{ClipMode, curved_map, inverse_curved_map, linear_map};
//!
//! assert_eq!(linear_map(5, 0, 10, 0, 100), 50);
//!
//! // A fast-rising response curve, and the knob position it came from.
//! let y = curved_map(0.25, 0.0, 1.0, 0.0, 1.0, -4.0, ClipMode::Both);
//! let x: f64 = inverse_curved_map(y, 0.0, 1.0, 0.0, 1.0, -4.0, ClipMode::Both);
//! assert!((x - 0.25).abs() < 1e-9);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod bipolar;
pub mod checked;
pub mod clip;
pub mod config;
pub mod curve;
pub mod error;
pub mod lut;
pub mod map;
pub mod mapping;
pub mod prelude;
pub mod random;

#[cfg(test)]
mod test_support;

pub use bipolar::{bipolar_exp_map, bipolar_linear_map};
pub use clip::ClipMode;
pub use config::CurveConfig;
pub use curve::{
    DEFAULT_CURVE, DEGENERATE_CURVE_THRESHOLD, curved_map, inverse_curved_map, is_degenerate_curve,
};
pub use error::{MapError, MapResult};
pub use lut::MappingLut;
pub use map::{LinearScalar, exp_output_map, lin_exp_map, linear_map, log_input_map};
pub use mapping::{BipolarKind, BipolarMapper, BipolarRange, Mapping, Range, RangeMapper};
pub use random::{ThreadRng, UniformSource, random_triangular_sum};
