//! Curve configuration value object.

use num_traits::Float;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clip::ClipMode;
use crate::curve::{DEFAULT_CURVE, constant, is_degenerate_curve};
use crate::error::{MapError, MapResult, widen};

/// Steepness and clipping policy for the curved mapping family.
///
/// Defaults to a curve of `-4` clipped at both ends.
///
/// # Example
///
/// ```
/// use range_mapper::{ClipMode, CurveConfig};
///
/// let config = CurveConfig::<f32>::default().with_clip(ClipMode::MinOnly);
/// assert_eq!(config.curve, -4.0);
/// assert_eq!(config.clip, ClipMode::MinOnly);
///
/// let parsed: CurveConfig<f32> = serde_json::from_str(r#"{"curve": 2.0}"#)?;
/// assert_eq!(parsed.clip, ClipMode::Both);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveConfig<T: Float = f32> {
    /// Signed steepness; negative rises early, positive rises late.
    pub curve: T,
    /// Which range boundaries clamp.
    pub clip: ClipMode,
}

impl<T: Float> Default for CurveConfig<T> {
    fn default() -> Self {
        Self {
            curve: constant(DEFAULT_CURVE),
            clip: ClipMode::Both,
        }
    }
}

impl<T: Float> CurveConfig<T> {
    /// Creates a config from a curve and a clip policy.
    pub fn new(curve: T, clip: ClipMode) -> Self {
        Self { curve, clip }
    }

    /// A config whose curve maps linearly.
    pub fn linear(clip: ClipMode) -> Self {
        Self {
            curve: T::zero(),
            clip,
        }
    }

    /// Replaces the curve.
    pub fn with_curve(mut self, curve: T) -> Self {
        self.curve = curve;
        self
    }

    /// Replaces the clip policy.
    pub fn with_clip(mut self, clip: ClipMode) -> Self {
        self.clip = clip;
        self
    }

    /// Whether this config falls back to linear mapping.
    pub fn is_linear(&self) -> bool {
        is_degenerate_curve(self.curve)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidConfiguration`] if the curve is NaN or
    /// infinite.
    pub fn validate(&self) -> MapResult<()> {
        if !self.curve.is_finite() {
            return Err(MapError::InvalidConfiguration(format!(
                "curve must be finite, got {}",
                widen(self.curve)
            )));
        }
        debug!(
            curve = widen(self.curve),
            clip = %self.clip,
            linear = self.is_linear(),
            "Curve configuration validated"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::capture_events;
    use approx::assert_relative_eq;
    use tracing::Level;

    #[test]
    fn test_default_config() {
        let config = CurveConfig::<f64>::default();
        assert_relative_eq!(config.curve, -4.0);
        assert_eq!(config.clip, ClipMode::Both);
        assert!(!config.is_linear());
    }

    #[test]
    fn test_builders() {
        let config = CurveConfig::<f32>::default()
            .with_curve(1.5)
            .with_clip(ClipMode::None);
        assert_eq!(config, CurveConfig::new(1.5, ClipMode::None));
    }

    #[test]
    fn test_linear_config() {
        let config = CurveConfig::<f64>::linear(ClipMode::MaxOnly);
        assert!(config.is_linear());
        assert_eq!(config.clip, ClipMode::MaxOnly);
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        for curve in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let result = CurveConfig::new(curve, ClipMode::Both).validate();
            match result {
                Err(MapError::InvalidConfiguration(msg)) => {
                    assert!(msg.contains("curve must be finite"));
                }
                other => panic!("Expected InvalidConfiguration, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_validate_accepts_finite() -> MapResult<()> {
        CurveConfig::<f64>::default().validate()?;
        CurveConfig::new(0.0_f64, ClipMode::None).validate()?;
        Ok(())
    }

    #[test]
    fn test_validate_logs_at_debug() -> MapResult<()> {
        let (capture, _guard) = capture_events();
        CurveConfig::new(2.0_f64, ClipMode::MaxOnly).validate()?;
        assert!(capture.contains(Level::DEBUG, "Curve configuration validated"));
        assert!(capture.contains(Level::DEBUG, "clip=max"));
        Ok(())
    }

    #[test]
    fn test_serde_roundtrip_with_defaults() -> Result<(), serde_json::Error> {
        let config: CurveConfig<f64> = serde_json::from_str(r#"{"clip": "none"}"#)?;
        assert_relative_eq!(config.curve, -4.0);
        assert_eq!(config.clip, ClipMode::None);

        let json = serde_json::to_string(&CurveConfig::new(2.0_f64, ClipMode::MinOnly))?;
        assert_eq!(json, r#"{"curve":2.0,"clip":"min"}"#);
        Ok(())
    }
}
