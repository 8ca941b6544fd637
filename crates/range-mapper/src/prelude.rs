//! Prelude for the range mapping crate.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//!
//! ```
//! use range_mapper::prelude::*;
//!
//! let mapper = RangeMapper::new(
//!     Range::new(0.0, 1.0),
//!     Range::new(-10.0, 10.0),
//!     Mapping::Curved(CurveConfig::default()),
//! );
//! assert_eq!(mapper.map(2.0), 10.0);
//! ```

pub use crate::bipolar::{bipolar_exp_map, bipolar_linear_map};
pub use crate::clip::ClipMode;
pub use crate::config::CurveConfig;
pub use crate::curve::{curved_map, inverse_curved_map};
pub use crate::error::{MapError, MapResult};
pub use crate::lut::MappingLut;
pub use crate::map::{LinearScalar, exp_output_map, lin_exp_map, linear_map, log_input_map};
pub use crate::mapping::{BipolarKind, BipolarMapper, BipolarRange, Mapping, Range, RangeMapper};
pub use crate::random::{ThreadRng, UniformSource, random_triangular_sum};
