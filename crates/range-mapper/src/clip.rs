//! Boundary clipping policies.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MapError;

/// Which ends of the input range force a clamped output.
///
/// The check order is fixed: `x <= in_min` is tested before `x >= in_max`,
/// and a value exactly on a boundary takes the clamped output rather than
/// the formula value.
///
/// Serialized (and parsed) as the tokens `"minmax"`, `"min"`, `"max"` and
/// `"none"`.
///
/// # Example
///
/// ```
/// use range_mapper::ClipMode;
///
/// let clip: ClipMode = "min".parse()?;
/// assert_eq!(clip, ClipMode::MinOnly);
/// assert_eq!(clip.clamp(-1.0, 0.0, 1.0, 10.0, 20.0), Some(10.0));
/// assert_eq!(clip.clamp(2.0, 0.0, 1.0, 10.0, 20.0), None);
/// # Ok::<(), range_mapper::MapError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ClipMode {
    /// Clamp at both ends.
    #[default]
    #[serde(rename = "minmax")]
    Both,
    /// Clamp only at the lower end.
    #[serde(rename = "min")]
    MinOnly,
    /// Clamp only at the upper end.
    #[serde(rename = "max")]
    MaxOnly,
    /// Never clamp; the formula extrapolates beyond the range.
    #[serde(rename = "none")]
    None,
}

impl ClipMode {
    /// All policies, in declaration order.
    pub const ALL: [ClipMode; 4] = [
        ClipMode::Both,
        ClipMode::MinOnly,
        ClipMode::MaxOnly,
        ClipMode::None,
    ];

    /// Whether `x <= in_min` is clamped.
    #[inline]
    pub fn clips_min(self) -> bool {
        matches!(self, ClipMode::Both | ClipMode::MinOnly)
    }

    /// Whether `x >= in_max` is clamped.
    #[inline]
    pub fn clips_max(self) -> bool {
        matches!(self, ClipMode::Both | ClipMode::MaxOnly)
    }

    /// Returns the clamped output if `x` lies on or past a clipped boundary,
    /// or `None` if the caller should evaluate its formula.
    #[inline]
    pub fn clamp<T: PartialOrd + Copy>(
        self,
        x: T,
        in_min: T,
        in_max: T,
        out_min: T,
        out_max: T,
    ) -> Option<T> {
        if self.clips_min() && x <= in_min {
            return Some(out_min);
        }
        if self.clips_max() && x >= in_max {
            return Some(out_max);
        }
        None
    }

    /// The serialized token for this policy.
    pub fn as_str(self) -> &'static str {
        match self {
            ClipMode::Both => "minmax",
            ClipMode::MinOnly => "min",
            ClipMode::MaxOnly => "max",
            ClipMode::None => "none",
        }
    }
}

impl fmt::Display for ClipMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClipMode {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minmax" => Ok(ClipMode::Both),
            "min" => Ok(ClipMode::MinOnly),
            "max" => Ok(ClipMode::MaxOnly),
            "none" => Ok(ClipMode::None),
            other => Err(MapError::UnknownClipMode(other.to_string())),
        }
    }
}
