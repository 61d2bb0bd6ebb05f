//! Spacing, radius and component sizing
//!
//! Spacing, radius and heights are per-bucket multipliers over a canonical
//! base with a hard floor, snapped to the pixel grid. The semantic presets
//! are plain table lookups: those values are designed per bucket rather
//! than derived.

use crate::breakpoints::BucketName;
use crate::grid;
use crate::responsive::ResponsiveSpec;
use crate::scale::ScaleEngine;

// =============================================================================
// Multipliers and Floors
// =============================================================================

/// Padding/margin multiplier per bucket
pub const SPACING_MULTIPLIER: ResponsiveSpec<f32> = ResponsiveSpec {
    xs: Some(0.75),
    sm: Some(0.875),
    xl: Some(1.1),
    xxl: Some(1.25),
    xxxl: Some(1.5),
    ..ResponsiveSpec::uniform(1.0)
};

/// Smallest non-zero padding/margin per bucket
pub const SPACING_FLOOR: ResponsiveSpec<f32> = ResponsiveSpec {
    xs: Some(6.0),
    lg: Some(10.0),
    xl: Some(10.0),
    xxl: Some(12.0),
    xxxl: Some(12.0),
    ..ResponsiveSpec::uniform(8.0)
};

/// Border radius multiplier per bucket
pub const RADIUS_MULTIPLIER: ResponsiveSpec<f32> = ResponsiveSpec {
    xs: Some(0.8),
    sm: Some(0.9),
    xl: Some(1.1),
    xxl: Some(1.2),
    xxxl: Some(1.25),
    ..ResponsiveSpec::uniform(1.0)
};

/// Component height multiplier per bucket
pub const HEIGHT_MULTIPLIER: ResponsiveSpec<f32> = ResponsiveSpec {
    xs: Some(0.9),
    sm: Some(0.95),
    xl: Some(1.05),
    xxl: Some(1.1),
    xxxl: Some(1.15),
    ..ResponsiveSpec::uniform(1.0)
};

// =============================================================================
// Presets
// =============================================================================

/// Screen edge padding
pub const CONTENT_PADDING: ResponsiveSpec<f32> = ResponsiveSpec {
    xs: Some(12.0),
    xxl: Some(24.0),
    xxxl: Some(32.0),
    ..ResponsiveSpec::uniform(16.0)
};

/// Inner card padding
pub const CARD_PADDING: ResponsiveSpec<f32> = ResponsiveSpec {
    xs: Some(12.0),
    xl: Some(20.0),
    xxl: Some(24.0),
    xxxl: Some(24.0),
    ..ResponsiveSpec::uniform(16.0)
};

/// Row height in lists
pub const LIST_ITEM_HEIGHT: ResponsiveSpec<f32> = ResponsiveSpec {
    xs: Some(48.0),
    xxl: Some(64.0),
    xxxl: Some(72.0),
    ..ResponsiveSpec::uniform(56.0)
};

/// Bottom tab bar height (without safe-area inset)
pub const TAB_BAR_HEIGHT: ResponsiveSpec<f32> = ResponsiveSpec {
    xs: Some(56.0),
    xxl: Some(64.0),
    xxxl: Some(70.0),
    ..ResponsiveSpec::uniform(60.0)
};

/// Navigation header height (without safe-area inset)
pub const HEADER_HEIGHT: ResponsiveSpec<f32> = ResponsiveSpec {
    xs: Some(52.0),
    xxl: Some(64.0),
    xxxl: Some(72.0),
    ..ResponsiveSpec::uniform(56.0)
};

/// Bottom-sheet / modal height
pub const MODAL_HEIGHT: ResponsiveSpec<f32> = ResponsiveSpec {
    xs: Some(420.0),
    sm: Some(460.0),
    xxl: Some(640.0),
    xxxl: Some(720.0),
    ..ResponsiveSpec::uniform(480.0)
};

/// Accessibility floor for component heights
pub const MIN_COMPONENT_HEIGHT: f32 = 40.0;

// =============================================================================
// Layout Metrics
// =============================================================================

/// Layout tokens for one snapshot and bucket
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetricsProvider {
    scale: ScaleEngine,
    bucket: BucketName,
    min_component_height: f32,
}

impl LayoutMetricsProvider {
    /// Create a provider with the default 40px component height floor
    pub fn new(scale: ScaleEngine, bucket: BucketName) -> Self {
        Self {
            scale,
            bucket,
            min_component_height: MIN_COMPONENT_HEIGHT,
        }
    }

    /// Raise the component height floor
    ///
    /// Values below [`MIN_COMPONENT_HEIGHT`] (or non-finite) are ignored.
    pub fn with_min_component_height(mut self, height: f32) -> Self {
        if height.is_finite() && height >= MIN_COMPONENT_HEIGHT {
            self.min_component_height = height;
        }
        self
    }

    /// Same snapshot, different bucket
    pub fn for_bucket(mut self, bucket: BucketName) -> Self {
        self.bucket = bucket;
        self
    }

    /// Bucket tokens are resolved for
    pub fn bucket(&self) -> BucketName {
        self.bucket
    }

    fn spacing(&self, base: f32) -> f32 {
        // Zero spacing stays zero
        if !base.is_finite() || base <= 0.0 {
            return 0.0;
        }

        let value = self.scale.round_to_pixel(base * SPACING_MULTIPLIER.resolve(self.bucket));
        value.max(*SPACING_FLOOR.resolve(self.bucket))
    }

    /// Padding for a canonical base
    pub fn padding(&self, base: f32) -> f32 {
        self.spacing(base)
    }

    /// Margin for a canonical base
    pub fn margin(&self, base: f32) -> f32 {
        self.spacing(base)
    }

    /// Border radius for a canonical base, never negative
    pub fn border_radius(&self, base: f32) -> f32 {
        if !base.is_finite() || base <= 0.0 {
            return 0.0;
        }
        self.scale
            .round_to_pixel(base * RADIUS_MULTIPLIER.resolve(self.bucket))
            .max(0.0)
    }

    /// Component height for a canonical base, never below the floor
    pub fn component_height(&self, base: f32) -> f32 {
        self.scale
            .round_to_pixel(base * HEIGHT_MULTIPLIER.resolve(self.bucket))
            .max(self.min_component_height)
    }

    /// Screen edge padding
    pub fn content_padding(&self) -> f32 {
        *CONTENT_PADDING.resolve(self.bucket)
    }

    /// Inner card padding
    pub fn card_padding(&self) -> f32 {
        *CARD_PADDING.resolve(self.bucket)
    }

    /// List row height
    pub fn list_item_height(&self) -> f32 {
        *LIST_ITEM_HEIGHT.resolve(self.bucket)
    }

    /// Tab bar height
    pub fn tab_bar_height(&self) -> f32 {
        *TAB_BAR_HEIGHT.resolve(self.bucket)
    }

    /// Header height
    pub fn header_height(&self) -> f32 {
        *HEADER_HEIGHT.resolve(self.bucket)
    }

    /// Modal height
    pub fn modal_height(&self) -> f32 {
        *MODAL_HEIGHT.resolve(self.bucket)
    }

    /// Usable width inside the safe area and content padding
    pub fn container_width(&self) -> f32 {
        (self.scale.metrics().usable_width() - 2.0 * self.content_padding()).max(0.0)
    }

    /// Width of one card when the container holds `columns` of them
    pub fn card_width(&self, columns: u32, gutter: f32) -> f32 {
        grid::column_width(columns, gutter, self.container_width())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::ScaleReference;
    use crate::tokens::{radius, spacing};
    use app_platform::{Platform, SafeAreaInsets, ScreenMetrics};

    fn layout(width: f32, bucket: BucketName) -> LayoutMetricsProvider {
        let metrics = ScreenMetrics::new(width, 812.0, 2.0, Platform::Ios);
        LayoutMetricsProvider::new(ScaleEngine::new(&metrics, ScaleReference::default()), bucket)
    }

    // ==========================================================================
    // Spacing Tests
    // ==========================================================================

    #[test]
    fn test_padding_multiplier() {
        assert_eq!(layout(414.0, BucketName::Md).padding(spacing::SPACE_LG), 16.0);
        assert_eq!(layout(375.0, BucketName::Sm).padding(spacing::SPACE_LG), 14.0);
        assert_eq!(layout(1024.0, BucketName::Xxxl).padding(spacing::SPACE_LG), 24.0);
    }

    #[test]
    fn test_padding_floor() {
        assert_eq!(layout(320.0, BucketName::Xs).padding(spacing::SPACE_XS), 6.0);
        assert_eq!(layout(800.0, BucketName::Xxl).margin(spacing::SPACE_XS), 12.0);
    }

    #[test]
    fn test_zero_spacing_stays_zero() {
        let metrics = layout(375.0, BucketName::Sm);
        assert_eq!(metrics.padding(0.0), 0.0);
        assert_eq!(metrics.margin(-8.0), 0.0);
        assert_eq!(metrics.padding(f32::NAN), 0.0);
    }

    #[test]
    fn test_spacing_floor_for_every_bucket() {
        for bucket in BucketName::ALL {
            let metrics = layout(375.0, bucket);
            let floor = *SPACING_FLOOR.resolve(bucket);
            assert!((6.0..=12.0).contains(&floor));
            assert!(metrics.padding(1.0) >= floor);
            assert!(metrics.margin(1.0) >= floor);
        }
    }

    // ==========================================================================
    // Radius and Height Tests
    // ==========================================================================

    #[test]
    fn test_border_radius() {
        assert_eq!(layout(320.0, BucketName::Xs).border_radius(radius::LG), 9.5);
        assert_eq!(layout(414.0, BucketName::Md).border_radius(radius::LG), 12.0);
        assert_eq!(layout(414.0, BucketName::Md).border_radius(radius::NONE), 0.0);
        assert_eq!(layout(414.0, BucketName::Md).border_radius(-3.0), 0.0);
    }

    #[test]
    fn test_component_height_floor() {
        for bucket in BucketName::ALL {
            let metrics = layout(375.0, bucket);
            for base in [0.0, 20.0, 36.0, 44.0, 56.0, f32::NAN] {
                assert!(metrics.component_height(base) >= 40.0);
            }
        }
        assert_eq!(layout(800.0, BucketName::Xxl).component_height(50.0), 55.0);
    }

    #[test]
    fn test_custom_component_height_floor() {
        let metrics = layout(320.0, BucketName::Xs).with_min_component_height(48.0);
        assert_eq!(metrics.component_height(44.0), 48.0);

        let ignored = layout(320.0, BucketName::Xs).with_min_component_height(f32::NAN);
        assert_eq!(ignored.component_height(10.0), 40.0);
    }

    #[test]
    fn test_component_height_floor_cannot_be_lowered() {
        for height in [0.0, 10.0, 39.5, -40.0] {
            let metrics = layout(320.0, BucketName::Xs).with_min_component_height(height);
            assert_eq!(metrics.component_height(10.0), 40.0);
        }
    }

    // ==========================================================================
    // Preset Tests
    // ==========================================================================

    #[test]
    fn test_presets_are_table_lookups() {
        let phone = layout(320.0, BucketName::Xs);
        assert_eq!(phone.content_padding(), 12.0);
        assert_eq!(phone.card_padding(), 12.0);
        assert_eq!(phone.list_item_height(), 48.0);
        assert_eq!(phone.tab_bar_height(), 56.0);
        assert_eq!(phone.header_height(), 52.0);
        assert_eq!(phone.modal_height(), 420.0);

        let tablet = phone.for_bucket(BucketName::Xxxl);
        assert_eq!(tablet.content_padding(), 32.0);
        assert_eq!(tablet.modal_height(), 720.0);
        assert_eq!(tablet.bucket(), BucketName::Xxxl);
    }

    #[test]
    fn test_presets_defined_for_every_bucket() {
        for bucket in BucketName::ALL {
            let metrics = layout(375.0, bucket);
            assert!(metrics.content_padding() > 0.0);
            assert!(metrics.card_padding() > 0.0);
            assert!(metrics.list_item_height() >= MIN_COMPONENT_HEIGHT);
            assert!(metrics.tab_bar_height() >= MIN_COMPONENT_HEIGHT);
            assert!(metrics.header_height() >= MIN_COMPONENT_HEIGHT);
            assert!(metrics.modal_height() > 0.0);
        }
    }

    // ==========================================================================
    // Container Tests
    // ==========================================================================

    #[test]
    fn test_container_and_card_width() {
        let metrics = layout(375.0, BucketName::Sm);
        assert_eq!(metrics.container_width(), 343.0);
        assert_eq!(metrics.card_width(2, 16.0), 163.5);
        assert_eq!(metrics.card_width(1, 16.0), 343.0);
    }

    #[test]
    fn test_container_respects_safe_area() {
        let landscape = ScreenMetrics::new(844.0, 390.0, 3.0, Platform::Ios)
            .with_insets(SafeAreaInsets::new(0.0, 21.0, 47.0, 47.0));
        let scale = ScaleEngine::new(&landscape, ScaleReference::default());
        let metrics = LayoutMetricsProvider::new(scale, BucketName::Xxl);

        assert_eq!(metrics.container_width(), 844.0 - 94.0 - 48.0);
    }
}
