//! Continuous scaling relative to a reference device
//!
//! Sizes designed for the reference device (375x812) are scaled linearly
//! to the current screen and snapped to the physical pixel grid. Nothing
//! here clamps; accessibility floors live in the token modules.

use app_platform::{ScreenMetrics, BASELINE_HEIGHT, BASELINE_WIDTH};
use serde::{Deserialize, Serialize};

/// Default damping factor for [`ScaleEngine::moderate_scale`]
pub const DEFAULT_MODERATE_FACTOR: f32 = 0.5;

/// Dimensions of the device designs are drawn for
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleReference {
    /// Reference width in logical pixels
    pub base_width: f32,
    /// Reference height in logical pixels
    pub base_height: f32,
}

impl Default for ScaleReference {
    fn default() -> Self {
        Self {
            base_width: BASELINE_WIDTH,
            base_height: BASELINE_HEIGHT,
        }
    }
}

impl ScaleReference {
    /// Create a reference
    pub fn new(base_width: f32, base_height: f32) -> Self {
        Self { base_width, base_height }
    }

    /// Both dimensions finite and positive
    pub fn is_valid(&self) -> bool {
        [self.base_width, self.base_height]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0)
    }
}

/// Linear scaling primitives bound to one metrics snapshot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleEngine {
    metrics: ScreenMetrics,
    reference: ScaleReference,
}

impl ScaleEngine {
    /// Bind to `metrics`
    ///
    /// Invalid metrics or reference dimensions are replaced by the baseline
    /// so every method stays total.
    pub fn new(metrics: &ScreenMetrics, reference: ScaleReference) -> Self {
        let reference = if reference.is_valid() {
            reference
        } else {
            ScaleReference::default()
        };

        Self {
            metrics: metrics.sanitized(),
            reference,
        }
    }

    /// The (sanitized) snapshot in use
    pub fn metrics(&self) -> &ScreenMetrics {
        &self.metrics
    }

    /// The reference device
    pub fn reference(&self) -> ScaleReference {
        self.reference
    }

    /// Current width over reference width
    pub fn width_ratio(&self) -> f32 {
        self.metrics.width / self.reference.base_width
    }

    /// Current height over reference height
    pub fn height_ratio(&self) -> f32 {
        self.metrics.height / self.reference.base_height
    }

    /// Snap to the nearest physical pixel
    pub fn round_to_pixel(&self, value: f32) -> f32 {
        let ratio = self.metrics.pixel_ratio;
        (value * ratio).round() / ratio
    }

    /// Scale by the width ratio
    pub fn scale(&self, size: f32) -> f32 {
        self.round_to_pixel(size * self.width_ratio())
    }

    /// Scale by the height ratio
    pub fn vertical_scale(&self, size: f32) -> f32 {
        self.round_to_pixel(size * self.height_ratio())
    }

    /// Width scaling damped toward the original size
    ///
    /// `factor` 0 keeps `size`, 1 is the full [`scale`](Self::scale). Values
    /// outside `[0, 1]` are clamped; a non-finite factor uses
    /// [`DEFAULT_MODERATE_FACTOR`].
    pub fn moderate_scale(&self, size: f32, factor: f32) -> f32 {
        let factor = if factor.is_finite() {
            factor.clamp(0.0, 1.0)
        } else {
            DEFAULT_MODERATE_FACTOR
        };
        size + (self.scale(size) - size) * factor
    }

    /// [`moderate_scale`](Self::moderate_scale) with the default factor
    pub fn moderate_scale_default(&self, size: f32) -> f32 {
        self.moderate_scale(size, DEFAULT_MODERATE_FACTOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_platform::Platform;

    fn engine(width: f32, height: f32, pixel_ratio: f32) -> ScaleEngine {
        ScaleEngine::new(
            &ScreenMetrics::new(width, height, pixel_ratio, Platform::Ios),
            ScaleReference::default(),
        )
    }

    // ==========================================================================
    // Linear Scale Tests
    // ==========================================================================

    #[test]
    fn test_identity_at_reference_device() {
        let scale = engine(375.0, 812.0, 2.0);
        for size in [1.0, 12.0, 16.0, 17.5, 44.0, 320.0] {
            assert_eq!(scale.scale(size), size);
            assert_eq!(scale.vertical_scale(size), size);
            assert_eq!(scale.moderate_scale(size, 0.7), size);
        }
    }

    #[test]
    fn test_scale_wider_device() {
        let scale = engine(750.0, 1624.0, 2.0);
        assert_eq!(scale.width_ratio(), 2.0);
        assert_eq!(scale.scale(16.0), 32.0);
        assert_eq!(scale.vertical_scale(10.0), 20.0);
    }

    #[test]
    fn test_round_to_physical_pixel() {
        let scale = engine(390.0, 844.0, 3.0);
        // 16 * 390 / 375 = 16.64 -> 49.92 device px -> 50 / 3
        assert!((scale.scale(16.0) - 50.0 / 3.0).abs() < 1e-4);

        let one_x = engine(390.0, 844.0, 1.0);
        assert_eq!(one_x.scale(16.0), 17.0);
    }

    // ==========================================================================
    // Moderate Scale Tests
    // ==========================================================================

    #[test]
    fn test_moderate_scale_factors() {
        let scale = engine(750.0, 1624.0, 2.0);
        assert_eq!(scale.moderate_scale(16.0, 0.0), 16.0);
        assert_eq!(scale.moderate_scale(16.0, 1.0), 32.0);
        assert_eq!(scale.moderate_scale(16.0, 0.5), 24.0);
        assert_eq!(scale.moderate_scale_default(16.0), 24.0);
    }

    #[test]
    fn test_moderate_scale_clamps_factor() {
        let scale = engine(750.0, 1624.0, 2.0);
        assert_eq!(scale.moderate_scale(16.0, 3.0), 32.0);
        assert_eq!(scale.moderate_scale(16.0, -1.0), 16.0);
        assert_eq!(scale.moderate_scale(16.0, f32::NAN), 24.0);
    }

    #[test]
    fn test_scale_does_not_clamp() {
        let scale = engine(320.0, 568.0, 2.0);
        assert!(scale.scale(12.0) < 12.0);
    }

    // ==========================================================================
    // Degenerate Input Tests
    // ==========================================================================

    #[test]
    fn test_invalid_metrics_use_baseline() {
        let scale = engine(f32::NAN, 0.0, -2.0);
        assert_eq!(scale.metrics().width, 375.0);
        assert_eq!(scale.metrics().pixel_ratio, 2.0);
        assert_eq!(scale.scale(16.0), 16.0);
    }

    #[test]
    fn test_invalid_reference_uses_default() {
        let scale = ScaleEngine::new(
            &ScreenMetrics::new(375.0, 812.0, 2.0, Platform::Android),
            ScaleReference::new(0.0, 812.0),
        );
        assert_eq!(scale.reference(), ScaleReference::default());
    }
}
