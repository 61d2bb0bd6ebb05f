//! Screen metric snapshots
//!
//! A [`ScreenMetrics`] value is what the host reports about the current
//! display: logical size, pixel density, platform and safe-area insets.
//! Snapshots are immutable; a rotation or resize produces a new one.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reference width of the baseline device (logical pixels)
pub const BASELINE_WIDTH: f32 = 375.0;
/// Reference height of the baseline device (logical pixels)
pub const BASELINE_HEIGHT: f32 = 812.0;
/// Pixel ratio of the baseline device
pub const BASELINE_PIXEL_RATIO: f32 = 2.0;

/// Errors reported when validating host-supplied metrics
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetricsError {
    /// Width or height is NaN or infinite
    #[error("{dimension} is not finite: {value}")]
    NonFiniteDimension {
        /// Which dimension was rejected
        dimension: &'static str,
        /// The rejected value
        value: f32,
    },

    /// Width or height is zero or negative
    #[error("{dimension} must be positive, got {value}")]
    NonPositiveDimension {
        /// Which dimension was rejected
        dimension: &'static str,
        /// The rejected value
        value: f32,
    },

    /// Pixel ratio is not a finite positive number
    #[error("Invalid pixel ratio: {0}")]
    InvalidPixelRatio(f32),
}

/// Result type for metric validation
pub type Result<T> = std::result::Result<T, MetricsError>;

// =============================================================================
// Platform
// =============================================================================

/// Host platform, used for platform-conditional accessibility floors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Apple iOS / iPadOS
    Ios,
    /// Android
    Android,
    /// Anything else (web, desktop, previews)
    #[default]
    Other,
}

impl Platform {
    /// Platform of the compile target
    pub fn detect() -> Self {
        if cfg!(target_os = "ios") {
            Self::Ios
        } else if cfg!(target_os = "android") {
            Self::Android
        } else {
            Self::Other
        }
    }

    /// Lowercase identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Android => "android",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Safe Area
// =============================================================================

/// Safe-area insets in logical pixels (notches, home indicator, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SafeAreaInsets {
    /// Top inset
    pub top: f32,
    /// Bottom inset
    pub bottom: f32,
    /// Left inset
    pub left: f32,
    /// Right inset
    pub right: f32,
}

impl SafeAreaInsets {
    /// Create insets from explicit edges
    pub fn new(top: f32, bottom: f32, left: f32, right: f32) -> Self {
        Self { top, bottom, left, right }
    }

    /// Sum of the left and right insets
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Sum of the top and bottom insets
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Replace negative or non-finite edges with zero
    pub fn sanitized(&self) -> Self {
        fn edge(v: f32) -> f32 {
            if v.is_finite() && v > 0.0 {
                v
            } else {
                0.0
            }
        }

        Self {
            top: edge(self.top),
            bottom: edge(self.bottom),
            left: edge(self.left),
            right: edge(self.right),
        }
    }
}

// =============================================================================
// Screen Metrics
// =============================================================================

/// Screen orientation derived from the snapshot's aspect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Height is greater than or equal to width
    Portrait,
    /// Width is greater than height
    Landscape,
}

/// Immutable snapshot of the host display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenMetrics {
    /// Logical width in pixels
    pub width: f32,
    /// Logical height in pixels
    pub height: f32,
    /// Physical pixels per logical pixel
    pub pixel_ratio: f32,
    /// Host platform
    pub platform: Platform,
    /// Safe-area insets
    #[serde(default)]
    pub insets: SafeAreaInsets,
}

impl Default for ScreenMetrics {
    fn default() -> Self {
        Self::baseline()
    }
}

impl ScreenMetrics {
    /// Create a snapshot with zero insets
    pub fn new(width: f32, height: f32, pixel_ratio: f32, platform: Platform) -> Self {
        Self {
            width,
            height,
            pixel_ratio,
            platform,
            insets: SafeAreaInsets::default(),
        }
    }

    /// Built-in fallback used when the host has never reported valid metrics
    pub fn baseline() -> Self {
        Self::new(BASELINE_WIDTH, BASELINE_HEIGHT, BASELINE_PIXEL_RATIO, Platform::Other)
    }

    /// Set the safe-area insets
    pub fn with_insets(mut self, insets: SafeAreaInsets) -> Self {
        self.insets = insets;
        self
    }

    /// Check that the snapshot can be used for token resolution
    pub fn validate(&self) -> Result<()> {
        for (dimension, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() {
                return Err(MetricsError::NonFiniteDimension { dimension, value });
            }
            if value <= 0.0 {
                return Err(MetricsError::NonPositiveDimension { dimension, value });
            }
        }

        if !self.pixel_ratio.is_finite() || self.pixel_ratio <= 0.0 {
            return Err(MetricsError::InvalidPixelRatio(self.pixel_ratio));
        }

        Ok(())
    }

    /// Whether [`validate`](Self::validate) passes
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Copy with every invalid field replaced by the baseline's
    ///
    /// Dimensions are replaced as a pair so the aspect ratio stays coherent.
    pub fn sanitized(&self) -> Self {
        let baseline = Self::baseline();
        let dimension_ok = |v: f32| v.is_finite() && v > 0.0;

        let (width, height) = if dimension_ok(self.width) && dimension_ok(self.height) {
            (self.width, self.height)
        } else {
            (baseline.width, baseline.height)
        };

        let pixel_ratio = if dimension_ok(self.pixel_ratio) {
            self.pixel_ratio
        } else {
            baseline.pixel_ratio
        };

        Self {
            width,
            height,
            pixel_ratio,
            platform: self.platform,
            insets: self.insets.sanitized(),
        }
    }

    /// Orientation of the display
    pub fn orientation(&self) -> Orientation {
        if self.width > self.height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    /// Whether width exceeds height
    pub fn is_landscape(&self) -> bool {
        self.orientation() == Orientation::Landscape
    }

    /// The smaller of width and height
    pub fn shortest_side(&self) -> f32 {
        self.width.min(self.height)
    }

    /// Width minus left and right insets, never negative
    pub fn usable_width(&self) -> f32 {
        (self.width - self.insets.sanitized().horizontal()).max(0.0)
    }

    /// Height minus top and bottom insets, never negative
    pub fn usable_height(&self) -> f32 {
        (self.height - self.insets.sanitized().vertical()).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Validation Tests
    // ==========================================================================

    #[test]
    fn test_baseline_is_valid() {
        let baseline = ScreenMetrics::baseline();
        assert_eq!(baseline.width, 375.0);
        assert_eq!(baseline.height, 812.0);
        assert_eq!(baseline.pixel_ratio, 2.0);
        assert_eq!(baseline.platform, Platform::Other);
        assert!(baseline.is_valid());
    }

    #[test]
    fn test_validate_rejects_bad_dimensions() {
        let nan = ScreenMetrics::new(f32::NAN, 800.0, 2.0, Platform::Ios);
        assert!(matches!(
            nan.validate(),
            Err(MetricsError::NonFiniteDimension { dimension: "width", .. })
        ));

        let zero = ScreenMetrics::new(390.0, 0.0, 2.0, Platform::Ios);
        assert!(matches!(
            zero.validate(),
            Err(MetricsError::NonPositiveDimension { dimension: "height", .. })
        ));

        let negative = ScreenMetrics::new(-1.0, 800.0, 2.0, Platform::Android);
        assert!(!negative.is_valid());
    }

    #[test]
    fn test_validate_rejects_bad_pixel_ratio() {
        let metrics = ScreenMetrics::new(390.0, 844.0, 0.0, Platform::Ios);
        assert_eq!(metrics.validate(), Err(MetricsError::InvalidPixelRatio(0.0)));
    }

    #[test]
    fn test_sanitized_replaces_invalid_fields() {
        let metrics = ScreenMetrics::new(f32::INFINITY, 844.0, f32::NAN, Platform::Android)
            .with_insets(SafeAreaInsets::new(-4.0, 34.0, f32::NAN, 0.0));
        let clean = metrics.sanitized();

        assert_eq!(clean.width, BASELINE_WIDTH);
        assert_eq!(clean.height, BASELINE_HEIGHT);
        assert_eq!(clean.pixel_ratio, BASELINE_PIXEL_RATIO);
        assert_eq!(clean.platform, Platform::Android);
        assert_eq!(clean.insets, SafeAreaInsets::new(0.0, 34.0, 0.0, 0.0));
        assert!(clean.is_valid());
    }

    // ==========================================================================
    // Geometry Tests
    // ==========================================================================

    #[test]
    fn test_orientation() {
        let portrait = ScreenMetrics::new(390.0, 844.0, 3.0, Platform::Ios);
        assert_eq!(portrait.orientation(), Orientation::Portrait);
        assert!(!portrait.is_landscape());

        let landscape = ScreenMetrics::new(844.0, 390.0, 3.0, Platform::Ios);
        assert!(landscape.is_landscape());
        assert_eq!(landscape.shortest_side(), 390.0);
    }

    #[test]
    fn test_usable_dimensions() {
        let metrics = ScreenMetrics::new(390.0, 844.0, 3.0, Platform::Ios)
            .with_insets(SafeAreaInsets::new(47.0, 34.0, 0.0, 0.0));
        assert_eq!(metrics.usable_width(), 390.0);
        assert_eq!(metrics.usable_height(), 763.0);

        let squeezed = ScreenMetrics::new(10.0, 10.0, 1.0, Platform::Other)
            .with_insets(SafeAreaInsets::new(0.0, 0.0, 20.0, 20.0));
        assert_eq!(squeezed.usable_width(), 0.0);
    }

    // ==========================================================================
    // Serialization Tests
    // ==========================================================================

    #[test]
    fn test_platform_serialization() {
        let json = serde_json::to_string(&Platform::Android).unwrap();
        assert_eq!(json, "\"android\"");
        assert_eq!(Platform::Ios.to_string(), "ios");
    }

    #[test]
    fn test_platform_detect_matches_target() {
        let detected = Platform::detect();

        #[cfg(target_os = "ios")]
        assert_eq!(detected, Platform::Ios);
        #[cfg(target_os = "android")]
        assert_eq!(detected, Platform::Android);
        #[cfg(not(any(target_os = "ios", target_os = "android")))]
        assert_eq!(detected, Platform::Other);
    }

    #[test]
    fn test_metrics_from_host_json() {
        let json = r#"{"width":414,"height":896,"pixelRatio":3,"platform":"ios"}"#;
        let metrics: ScreenMetrics = serde_json::from_str(json).unwrap();
        assert_eq!(metrics.width, 414.0);
        assert_eq!(metrics.pixel_ratio, 3.0);
        assert_eq!(metrics.platform, Platform::Ios);
        assert_eq!(metrics.insets, SafeAreaInsets::default());
    }
}
