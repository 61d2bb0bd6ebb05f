//! Responsive typography
//!
//! Font sizes are derived from a canonical base size, a per-bucket
//! multiplier and a damped width scale, and never drop below the
//! accessibility floor (12px by default).
//!
//! Always scale from the canonical base in [`font_size`]. Feeding an
//! already-scaled size back in applies the multiplier twice.

use serde::{Deserialize, Serialize};

use crate::breakpoints::BucketName;
use crate::config::TypographyConfig;
use crate::responsive::ResponsiveSpec;
use crate::scale::ScaleEngine;
use crate::tokens::{font_weight, line_height};

// =============================================================================
// Font Size Scale
// =============================================================================

/// Canonical font sizes in pixels on the reference device
pub mod font_size {
    /// Extra small (13px)
    pub const XS: f32 = 13.0;
    /// Small (14px)
    pub const SM: f32 = 14.0;
    /// Medium (15px)
    pub const MD: f32 = 15.0;
    /// Large (16px)
    pub const LG: f32 = 16.0;
    /// Extra large (17px)
    pub const XL: f32 = 17.0;
    /// 2x large (18px)
    pub const XXL: f32 = 18.0;

    /// Title sizes
    pub mod title {
        /// Small title (17px)
        pub const SM: f32 = 17.0;
        /// Base title (20px)
        pub const BASE: f32 = 20.0;
        /// Large title (22px)
        pub const LG: f32 = 22.0;
        /// Extra large title (28px)
        pub const XL: f32 = 28.0;
        /// 2x large title (34px)
        pub const XXL: f32 = 34.0;
    }

    /// Post text sizes
    pub mod post {
        /// Normal post text (16px)
        pub const NORMAL: f32 = 16.0;
        /// Large post text (20px)
        pub const LARGE: f32 = 20.0;
    }

    /// Button text sizes
    pub mod button {
        /// Normal button (14px)
        pub const NORMAL: f32 = 14.0;
        /// Large button (18px)
        pub const LARGE: f32 = 18.0;
    }

    /// Monospace text size (14px)
    pub const MONO: f32 = 14.0;
}

/// Font size multiplier per bucket
pub const FONT_MULTIPLIER: ResponsiveSpec<f32> = ResponsiveSpec {
    xs: Some(0.8),
    sm: Some(0.9),
    lg: Some(1.05),
    xl: Some(1.1),
    xxl: Some(1.15),
    xxxl: Some(1.2),
    ..ResponsiveSpec::uniform(1.0)
};

/// Line height ratio adjustment per bucket (tighter on phones)
pub const LINE_HEIGHT_ADJUST: ResponsiveSpec<f32> = ResponsiveSpec {
    xs: Some(0.95),
    sm: Some(0.97),
    xxl: Some(1.05),
    xxxl: Some(1.08),
    ..ResponsiveSpec::uniform(1.0)
};

/// Accessibility floor for any resolved font size
pub const MIN_FONT_SIZE: f32 = 12.0;

/// Smallest accepted user font scale
pub const MIN_USER_SCALE: f32 = 0.8;
/// Largest accepted user font scale
pub const MAX_USER_SCALE: f32 = 1.4;

// =============================================================================
// Typography Scaler
// =============================================================================

/// Font size and line height resolution for one metrics snapshot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypographyScaler {
    scale: ScaleEngine,
    config: TypographyConfig,
    user_scale: f32,
}

impl TypographyScaler {
    /// Create a scaler with a user font scale of 1.0
    pub fn new(scale: ScaleEngine, config: TypographyConfig) -> Self {
        Self {
            scale,
            config,
            user_scale: 1.0,
        }
    }

    /// Apply the user's accessibility font scale (clamped to 0.8..=1.4)
    pub fn with_user_scale(mut self, user_scale: f32) -> Self {
        self.user_scale = if user_scale.is_finite() {
            user_scale.clamp(MIN_USER_SCALE, MAX_USER_SCALE)
        } else {
            1.0
        };
        self
    }

    /// Current user font scale
    pub fn user_scale(&self) -> f32 {
        self.user_scale
    }

    /// Resolved font size for a canonical `base` size
    ///
    /// Never below the configured floor, and never below
    /// [`MIN_FONT_SIZE`] whatever the configuration says.
    pub fn font_size(&self, base: f32, bucket: BucketName) -> f32 {
        let sized = base * FONT_MULTIPLIER.resolve(bucket);
        let scaled = self.scale.moderate_scale(sized, self.config.moderate_factor) * self.user_scale;
        // f32::max ignores NaN
        scaled.max(self.config.min_font_size).max(MIN_FONT_SIZE)
    }

    /// Line height in whole pixels for an already resolved font size
    ///
    /// A non-finite or non-positive `ratio` uses the configured default.
    pub fn line_height(&self, font_size: f32, bucket: BucketName, ratio: f32) -> f32 {
        if !font_size.is_finite() || font_size <= 0.0 {
            return 0.0;
        }

        let ratio = if ratio.is_finite() && ratio > 0.0 {
            ratio
        } else {
            self.config.line_height_ratio
        };

        (font_size * ratio * LINE_HEIGHT_ADJUST.resolve(bucket)).round()
    }

    /// [`line_height`](Self::line_height) with the configured ratio (1.4)
    pub fn line_height_default(&self, font_size: f32, bucket: BucketName) -> f32 {
        self.line_height(font_size, bucket, self.config.line_height_ratio)
    }

    /// Fully resolved text style for a variant
    pub fn style(&self, variant: TypographyVariant, bucket: BucketName) -> TextStyle {
        let size = self.font_size(variant.base_size(), bucket);
        let style = TextStyle {
            font_size: size,
            font_weight: variant.weight(),
            line_height: self.line_height(size, bucket, variant.line_height_ratio()),
            letter_spacing: 0.0,
            font_family: None,
        };

        match variant {
            TypographyVariant::Mono => style.with_font_family("monospace"),
            _ => style,
        }
    }
}

// =============================================================================
// Typography Style
// =============================================================================

/// A resolved text style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub font_size: f32,
    /// Font weight (400, 600, 700)
    pub font_weight: u16,
    /// Line height in pixels
    pub line_height: f32,
    /// Letter spacing in em
    pub letter_spacing: f32,
    /// Font family override (None = system default)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

impl TextStyle {
    /// Set letter spacing
    pub fn with_letter_spacing(mut self, ls: f32) -> Self {
        self.letter_spacing = ls;
        self
    }

    /// Set font family
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }
}

// =============================================================================
// Typography Variants
// =============================================================================

/// Typography variant identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TypographyVariant {
    /// Extra small
    Xs,
    /// Small
    Sm,
    /// Medium (base)
    #[default]
    Md,
    /// Large
    Lg,
    /// Extra large
    Xl,
    /// 2x large
    Xxl,
    /// Small title
    TitleSm,
    /// Title (default)
    Title,
    /// Large title
    TitleLg,
    /// Extra large title
    TitleXl,
    /// 2x large title
    Title2xl,
    /// Post text
    PostText,
    /// Large post text
    PostTextLg,
    /// Button text
    Button,
    /// Large button text
    ButtonLg,
    /// Monospace text
    Mono,
}

impl TypographyVariant {
    /// Every variant
    pub const ALL: [TypographyVariant; 16] = [
        Self::Xs,
        Self::Sm,
        Self::Md,
        Self::Lg,
        Self::Xl,
        Self::Xxl,
        Self::TitleSm,
        Self::Title,
        Self::TitleLg,
        Self::TitleXl,
        Self::Title2xl,
        Self::PostText,
        Self::PostTextLg,
        Self::Button,
        Self::ButtonLg,
        Self::Mono,
    ];

    /// Canonical (unscaled) font size
    pub fn base_size(&self) -> f32 {
        match self {
            Self::Xs => font_size::XS,
            Self::Sm => font_size::SM,
            Self::Md => font_size::MD,
            Self::Lg => font_size::LG,
            Self::Xl => font_size::XL,
            Self::Xxl => font_size::XXL,
            Self::TitleSm => font_size::title::SM,
            Self::Title => font_size::title::BASE,
            Self::TitleLg => font_size::title::LG,
            Self::TitleXl => font_size::title::XL,
            Self::Title2xl => font_size::title::XXL,
            Self::PostText => font_size::post::NORMAL,
            Self::PostTextLg => font_size::post::LARGE,
            Self::Button => font_size::button::NORMAL,
            Self::ButtonLg => font_size::button::LARGE,
            Self::Mono => font_size::MONO,
        }
    }

    /// Font weight
    pub fn weight(&self) -> u16 {
        match self {
            Self::TitleSm | Self::Title | Self::TitleLg => font_weight::SEMI_BOLD,
            Self::TitleXl | Self::Title2xl => font_weight::BOLD,
            Self::Button | Self::ButtonLg => font_weight::SEMI_BOLD,
            _ => font_weight::NORMAL,
        }
    }

    /// Line height ratio (titles are set tight)
    pub fn line_height_ratio(&self) -> f32 {
        match self {
            Self::TitleSm | Self::Title | Self::TitleLg | Self::TitleXl | Self::Title2xl => {
                line_height::TIGHT
            }
            _ => line_height::DEFAULT,
        }
    }
}
