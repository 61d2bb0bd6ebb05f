//! Touch target sizing
//!
//! Interactive elements never resolve below the platform minimum: 44pt on
//! iOS (Human Interface Guidelines) and 48dp on Android (Material).

use app_platform::Platform;
use serde::{Deserialize, Serialize};

use crate::breakpoints::BucketName;
use crate::responsive::ResponsiveSpec;
use crate::scale::{ScaleEngine, DEFAULT_MODERATE_FACTOR};
use crate::tokens::hit_target;

/// Touch size multiplier per bucket
pub const TOUCH_MULTIPLIER: ResponsiveSpec<f32> = ResponsiveSpec {
    xs: Some(0.9),
    sm: Some(0.95),
    xl: Some(1.05),
    xxl: Some(1.1),
    xxxl: Some(1.1),
    ..ResponsiveSpec::uniform(1.0)
};

// Every entry is at least the largest platform minimum.
const SMALL_BUTTON: ResponsiveSpec<f32> = ResponsiveSpec {
    xxl: Some(52.0),
    xxxl: Some(52.0),
    ..ResponsiveSpec::uniform(48.0)
};

const MEDIUM_BUTTON: ResponsiveSpec<f32> = ResponsiveSpec {
    xs: Some(48.0),
    xxl: Some(56.0),
    xxxl: Some(60.0),
    ..ResponsiveSpec::uniform(52.0)
};

const LARGE_BUTTON: ResponsiveSpec<f32> = ResponsiveSpec {
    xs: Some(52.0),
    xxl: Some(64.0),
    xxxl: Some(68.0),
    ..ResponsiveSpec::uniform(56.0)
};

/// Minimum touch target edge for `platform`
pub fn min_touch_size(platform: Platform) -> f32 {
    match platform {
        Platform::Ios => hit_target::IOS,
        Platform::Android => hit_target::ANDROID,
        Platform::Other => hit_target::DEFAULT,
    }
}

/// Button size variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Compact button
    Small,
    /// Standard button
    #[default]
    Medium,
    /// Prominent call to action
    Large,
}

impl ButtonVariant {
    /// All variants, smallest first
    pub const ALL: [ButtonVariant; 3] = [Self::Small, Self::Medium, Self::Large];
}

/// Height table for a button variant
pub fn button_size(variant: ButtonVariant) -> &'static ResponsiveSpec<f32> {
    match variant {
        ButtonVariant::Small => &SMALL_BUTTON,
        ButtonVariant::Medium => &MEDIUM_BUTTON,
        ButtonVariant::Large => &LARGE_BUTTON,
    }
}

/// Touch sizing bound to one metrics snapshot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchTargetGuard {
    scale: ScaleEngine,
}

impl TouchTargetGuard {
    /// Create a guard
    pub fn new(scale: ScaleEngine) -> Self {
        Self { scale }
    }

    /// Touch target edge for a canonical `base`, never below the platform minimum
    pub fn touch_size(&self, base: f32, platform: Platform, bucket: BucketName) -> f32 {
        let sized = base * TOUCH_MULTIPLIER.resolve(bucket);
        self.scale
            .moderate_scale(sized, DEFAULT_MODERATE_FACTOR)
            .max(min_touch_size(platform))
    }

    /// Touch target for the snapshot's own platform
    pub fn touch_size_for(&self, base: f32, bucket: BucketName) -> f32 {
        self.touch_size(base, self.scale.metrics().platform, bucket)
    }

    /// Button height for `variant`
    pub fn button_height(&self, variant: ButtonVariant, bucket: BucketName) -> f32 {
        button_size(variant)
            .resolve(bucket)
            .max(min_touch_size(self.scale.metrics().platform))
    }

    /// Extra touchable area on each side of a `visual_size` element
    pub fn hit_slop(&self, visual_size: f32, platform: Platform) -> f32 {
        let visual = if visual_size.is_finite() {
            visual_size.max(0.0)
        } else {
            0.0
        };
        ((min_touch_size(platform) - visual) / 2.0).max(0.0)
    }
}
