//! Pre-computed lookup table for RT-safe mapping.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::MapResult;
use crate::mapping::{BipolarMapper, Range, RangeMapper};

/// Pre-computed lookup table for the RT path (no allocation).
///
/// The table samples a mapping at 256 evenly spaced points across its input
/// range. [`lookup`](Self::lookup) then costs one division and one linear
/// interpolation, with no transcendental functions, whatever the mapping.
///
/// # RT Safety
///
/// `MappingLut::lookup()` is RT-safe:
/// - No heap allocations
/// - O(1) time complexity
/// - No syscalls or I/O
///
/// Building the table is O(256) and should happen at configuration time.
///
/// # Example
///
/// ```
/// use range_mapper::{ClipMode, CurveConfig, Mapping, MappingLut, Range, RangeMapper};
///
/// let mapper = RangeMapper::new(
///     Range::new(0.0, 1023.0),
///     Range::unit(),
///     Mapping::Curved(CurveConfig::new(-4.0, ClipMode::Both)),
/// );
/// let lut = MappingLut::from_mapper(&mapper)?;
///
/// let output = lut.lookup(511.5);
/// assert!((output - mapper.map(511.5)).abs() < 1e-3);
/// # Ok::<(), range_mapper::MapError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MappingLut {
    input: Range<f32>,
    table: [f32; 256],
}

impl MappingLut {
    /// Number of samples in the table.
    pub const SIZE: usize = 256;

    /// Samples a validated one-sided mapper across its input range.
    ///
    /// # Errors
    ///
    /// Returns the mapper's validation error if its ranges do not satisfy
    /// the mapping's preconditions.
    pub fn from_mapper(mapper: &RangeMapper<f32>) -> MapResult<Self> {
        mapper.validate()?;
        debug!(
            mapping = ?mapper.mapping,
            in_min = mapper.input.min,
            in_max = mapper.input.max,
            "Building mapping LUT"
        );
        Ok(Self::from_fn(mapper.input, |x| mapper.map(x)))
    }

    /// Samples a validated bipolar mapper across its full input range.
    ///
    /// # Errors
    ///
    /// Returns the mapper's validation error if either half is degenerate,
    /// the center lies outside the outer range, or, for exponential halves,
    /// an input point is not positive.
    pub fn from_bipolar(mapper: &BipolarMapper<f32>) -> MapResult<Self> {
        mapper.try_map(mapper.input.center)?;
        debug!(
            kind = ?mapper.kind,
            in_min = mapper.input.min,
            in_center = mapper.input.center,
            in_max = mapper.input.max,
            "Building bipolar mapping LUT"
        );
        let input = Range::new(mapper.input.min, mapper.input.max);
        Ok(Self::from_fn(input, |x| mapper.map(x)))
    }

    /// Samples an arbitrary function across `input`.
    pub fn from_fn<F>(input: Range<f32>, f: F) -> Self
    where
        F: Fn(f32) -> f32,
    {
        let mut table = [0.0f32; Self::SIZE];

        for (i, entry) in table.iter_mut().enumerate() {
            let t = i as f32 / (Self::SIZE - 1) as f32;
            *entry = f(input.lerp(t));
        }

        Self { input, table }
    }

    /// Looks up `x`, interpolating linearly between samples.
    ///
    /// Inputs outside the sampled range clamp to the first or last entry.
    #[inline]
    pub fn lookup(&self, x: f32) -> f32 {
        let t = ((x - self.input.min) / self.input.width()).clamp(0.0, 1.0);

        let scaled = t * (Self::SIZE - 1) as f32;
        let index_low = (scaled as usize).min(Self::SIZE - 2);
        let fraction = scaled - index_low as f32;

        let (Some(&low), Some(&high)) = (self.table.get(index_low), self.table.get(index_low + 1))
        else {
            return f32::NAN;
        };

        low + fraction * (high - low)
    }

    /// The sampled input range.
    pub fn input(&self) -> Range<f32> {
        self.input
    }

    /// The raw samples.
    pub fn table(&self) -> &[f32; 256] {
        &self.table
    }

    /// Whether the samples never change direction.
    pub fn is_monotonic(&self) -> bool {
        let rising = self.table.windows(2).all(|w| matches!(w, [a, b] if b >= a));
        let falling = self.table.windows(2).all(|w| matches!(w, [a, b] if b <= a));
        rising || falling
    }

    /// Smallest sample.
    pub fn min_value(&self) -> f32 {
        self.table.iter().copied().fold(f32::INFINITY, f32::min)
    }

    /// Largest sample.
    pub fn max_value(&self) -> f32 {
        self.table.iter().copied().fold(f32::NEG_INFINITY, f32::max)
    }
}

#[derive(Serialize, Deserialize)]
struct LutRepr {
    input: Range<f32>,
    table: Vec<f32>,
}

impl Serialize for MappingLut {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        LutRepr {
            input: self.input,
            table: self.table.to_vec(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MappingLut {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let repr = LutRepr::deserialize(deserializer)?;
        let table = <[f32; 256]>::try_from(repr.table.as_slice()).map_err(|err| {
            serde::de::Error::custom(format!(
                "Expected 256 entries in MappingLut, got {} ({err})",
                repr.table.len()
            ))
        })?;
        Ok(MappingLut {
            input: repr.input,
            table,
        })
    }
}
