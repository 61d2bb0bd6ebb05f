//! Canonical design token bases
//!
//! These are the unscaled values designs are drawn with on the reference
//! device. Responsive modules always scale from these bases, never from a
//! value that was already scaled.

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale in pixels
/// Based on a 4px base unit with t-shirt sizes
pub mod spacing {
    /// 4px - Extra small
    pub const SPACE_XS: f32 = 4.0;
    /// 8px - Small
    pub const SPACE_SM: f32 = 8.0;
    /// 12px - Medium
    pub const SPACE_MD: f32 = 12.0;
    /// 16px - Large
    pub const SPACE_LG: f32 = 16.0;
    /// 20px - Extra large
    pub const SPACE_XL: f32 = 20.0;
    /// 24px - 2x large
    pub const SPACE_2XL: f32 = 24.0;
    /// 32px - 3x large
    pub const SPACE_3XL: f32 = 32.0;
}

// =============================================================================
// Sizing Tokens
// =============================================================================

/// Size tokens for component dimensions
pub mod sizing {
    /// Input field heights
    pub mod input {
        /// Small input height (36px)
        pub const SM_HEIGHT: f32 = 36.0;
        /// Medium input height (44px)
        pub const MD_HEIGHT: f32 = 44.0;
        /// Large input height (52px)
        pub const LG_HEIGHT: f32 = 52.0;
    }
}

// =============================================================================
// Border Radius Tokens
// =============================================================================

/// Border radius tokens
pub mod radius {
    /// No radius (0px)
    pub const NONE: f32 = 0.0;
    /// Small radius (4px)
    pub const SM: f32 = 4.0;
    /// Medium radius (8px)
    pub const MD: f32 = 8.0;
    /// Large radius (12px)
    pub const LG: f32 = 12.0;
    /// Extra large radius (16px)
    pub const XL: f32 = 16.0;
    /// 2x large radius (24px)
    pub const XXL: f32 = 24.0;
}

// =============================================================================
// Hit Target
// =============================================================================

/// Minimum touch target sizes (for accessibility)
pub mod hit_target {
    /// iOS Human Interface Guidelines minimum (44pt)
    pub const IOS: f32 = 44.0;
    /// Material Design minimum (48dp)
    pub const ANDROID: f32 = 48.0;
    /// Fallback for other platforms
    pub const DEFAULT: f32 = IOS;
}

// =============================================================================
// Typography Tokens
// =============================================================================

/// Line height multipliers
pub mod line_height {
    /// Tight (1.25)
    pub const TIGHT: f32 = 1.25;
    /// Body text default (1.4)
    pub const DEFAULT: f32 = 1.4;
}

/// Font weight values
pub mod font_weight {
    /// Normal/Regular (400)
    pub const NORMAL: u16 = 400;
    /// Semi-bold (600)
    pub const SEMI_BOLD: u16 = 600;
    /// Bold (700)
    pub const BOLD: u16 = 700;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_scale() {
        assert!(spacing::SPACE_XS < spacing::SPACE_SM);
        assert!(spacing::SPACE_SM < spacing::SPACE_MD);
        assert!(spacing::SPACE_MD < spacing::SPACE_LG);
        assert!(spacing::SPACE_LG < spacing::SPACE_XL);
        assert!(spacing::SPACE_XL < spacing::SPACE_2XL);
        assert!(spacing::SPACE_2XL < spacing::SPACE_3XL);
    }

    #[test]
    fn test_radius_scale() {
        assert_eq!(radius::NONE, 0.0);
        assert!(radius::SM < radius::MD);
        assert!(radius::MD < radius::LG);
        assert!(radius::LG < radius::XL);
        assert!(radius::XL < radius::XXL);
    }

    #[test]
    fn test_hit_targets() {
        assert_eq!(hit_target::IOS, 44.0);
        assert_eq!(hit_target::ANDROID, 48.0);
        assert!(hit_target::DEFAULT >= hit_target::IOS);
    }

    #[test]
    fn test_input_heights_meet_touch_minimum() {
        assert!(sizing::input::MD_HEIGHT >= hit_target::IOS);
        assert!(sizing::input::SM_HEIGHT < sizing::input::MD_HEIGHT);
        assert!(sizing::input::MD_HEIGHT < sizing::input::LG_HEIGHT);
    }

    #[test]
    fn test_line_heights() {
        assert!(line_height::TIGHT < line_height::DEFAULT);
        assert!(line_height::TIGHT > 1.0);
    }
}
