//! Engine configuration
//!
//! Defaults reproduce the built-in design system. A JSON document may
//! override any subset of fields:
//!
//! ```rust
//! use app_ui::config::EngineConfig;
//!
//! let config = EngineConfig::from_json(r#"{ "typography": { "minFontSize": 14 } }"#).unwrap();
//! assert_eq!(config.typography.min_font_size, 14.0);
//! assert_eq!(config.reference.base_width, 375.0);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::breakpoints::{BreakpointTable, BucketName};
use crate::layout::MIN_COMPONENT_HEIGHT;
use crate::scale::ScaleReference;
use crate::typography::MIN_FONT_SIZE;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Malformed JSON document
    #[error("Failed to parse engine config: {0}")]
    Json(#[from] serde_json::Error),

    /// Breakpoint table has no entries
    #[error("Breakpoint table is empty")]
    EmptyBreakpoints,

    /// Breakpoint thresholds or names are not strictly increasing
    #[error(
        "Breakpoints out of order: {next} ({next_width}px) follows {previous} ({previous_width}px)"
    )]
    UnorderedBreakpoints {
        /// Earlier entry
        previous: BucketName,
        /// Earlier entry's threshold
        previous_width: f32,
        /// Offending entry
        next: BucketName,
        /// Offending entry's threshold
        next_width: f32,
    },

    /// Reference dimensions are not finite and positive
    #[error("Invalid scale reference {width}x{height}")]
    InvalidReference {
        /// Reference width
        width: f32,
        /// Reference height
        height: f32,
    },

    /// A numeric field is out of range
    #[error("Invalid value for {field}: {value}")]
    InvalidValue {
        /// Field name as it appears in the JSON document
        field: &'static str,
        /// Rejected value
        value: f32,
    },
}

/// Result type for configuration loading
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Typography constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypographyConfig {
    /// Accessibility floor for any resolved font size
    pub min_font_size: f32,
    /// Damping factor applied when scaling font sizes
    pub moderate_factor: f32,
    /// Default line height ratio
    pub line_height_ratio: f32,
}

impl Default for TypographyConfig {
    fn default() -> Self {
        Self {
            min_font_size: MIN_FONT_SIZE,
            moderate_factor: 0.3,
            line_height_ratio: 1.4,
        }
    }
}

/// Everything the token engine needs besides the live metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Reference device for linear scaling
    pub reference: ScaleReference,
    /// Width thresholds
    pub breakpoints: BreakpointTable,
    /// Typography constants
    pub typography: TypographyConfig,
    /// Floor for component heights
    pub min_component_height: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reference: ScaleReference::default(),
            breakpoints: BreakpointTable::standard(),
            typography: TypographyConfig::default(),
            min_component_height: MIN_COMPONENT_HEIGHT,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON document; missing fields use defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every numeric field
    ///
    /// Floors may be raised above the accessibility minimums (12px text,
    /// 40px components) but never lowered. The breakpoint table is
    /// validated when it is built.
    pub fn validate(&self) -> Result<()> {
        if !self.reference.is_valid() {
            return Err(ConfigError::InvalidReference {
                width: self.reference.base_width,
                height: self.reference.base_height,
            });
        }

        let typography = &self.typography;
        check_at_least("typography.minFontSize", typography.min_font_size, MIN_FONT_SIZE)?;
        check_at_least("minComponentHeight", self.min_component_height, MIN_COMPONENT_HEIGHT)?;

        if !(0.0..=1.0).contains(&typography.moderate_factor) {
            return Err(ConfigError::InvalidValue {
                field: "typography.moderateFactor",
                value: typography.moderate_factor,
            });
        }

        if !typography.line_height_ratio.is_finite() || typography.line_height_ratio <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "typography.lineHeightRatio",
                value: typography.line_height_ratio,
            });
        }

        Ok(())
    }

    /// Set the reference device
    pub fn with_reference(mut self, reference: ScaleReference) -> Self {
        self.reference = reference;
        self
    }

    /// Set the breakpoint table
    pub fn with_breakpoints(mut self, breakpoints: BreakpointTable) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    /// Set the font size floor
    pub fn with_min_font_size(mut self, size: f32) -> Self {
        self.typography.min_font_size = size;
        self
    }

    /// Set the component height floor
    pub fn with_min_component_height(mut self, height: f32) -> Self {
        self.min_component_height = height;
        self
    }
}

fn check_at_least(field: &'static str, value: f32, minimum: f32) -> Result<()> {
    if value.is_finite() && value >= minimum {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoints::Breakpoint;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.typography.min_font_size, 12.0);
        assert_eq!(config.typography.moderate_factor, 0.3);
        assert_eq!(config.typography.line_height_ratio, 1.4);
        assert_eq!(config.min_component_height, 40.0);
    }

    #[test]
    fn test_from_json_partial_document() {
        let config = EngineConfig::from_json(
            r#"{
                "reference": { "baseWidth": 390, "baseHeight": 844 },
                "minComponentHeight": 44
            }"#,
        )
        .unwrap();

        assert_eq!(config.reference, ScaleReference::new(390.0, 844.0));
        assert_eq!(config.min_component_height, 44.0);
        assert_eq!(config.breakpoints, BreakpointTable::standard());
        assert_eq!(config.typography, TypographyConfig::default());
    }

    #[test]
    fn test_from_json_custom_breakpoints() {
        let config = EngineConfig::from_json(
            r#"{ "breakpoints": [
                { "name": "xs", "minWidth": 0 },
                { "name": "md", "minWidth": 400 },
                { "name": "xxl", "minWidth": 900 }
            ] }"#,
        )
        .unwrap();

        assert_eq!(config.breakpoints.classify(500.0), BucketName::Md);
        assert_eq!(config.breakpoints.classify(900.0), BucketName::Xxl);
    }

    #[test]
    fn test_from_json_rejects_bad_breakpoints() {
        let result = EngineConfig::from_json(
            r#"{ "breakpoints": [
                { "name": "xs", "minWidth": 500 },
                { "name": "sm", "minWidth": 100 }
            ] }"#,
        );
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(matches!(EngineConfig::from_json("{ not json"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_validate_reference() {
        let config = EngineConfig::default().with_reference(ScaleReference::new(-375.0, 812.0));
        assert!(matches!(config.validate(), Err(ConfigError::InvalidReference { .. })));
    }

    #[test]
    fn test_validate_numeric_fields() {
        let config = EngineConfig::default().with_min_font_size(f32::NAN);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "typography.minFontSize", .. })
        ));

        let mut config = EngineConfig::default();
        config.typography.moderate_factor = 1.5;
        assert!(config.validate().is_err());

        let config = EngineConfig::default().with_min_component_height(-1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_floors_cannot_be_lowered() {
        let result = EngineConfig::from_json(
            r#"{ "typography": { "minFontSize": 0 }, "minComponentHeight": 0 }"#,
        );
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { field: "typography.minFontSize", .. })
        ));

        let config = EngineConfig::default().with_min_font_size(11.5);
        assert!(config.validate().is_err());

        let config = EngineConfig::default().with_min_component_height(39.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "minComponentHeight", value }) if value == 39.0
        ));
    }

    #[test]
    fn test_floors_can_be_raised() {
        let config = EngineConfig::from_json(
            r#"{ "typography": { "minFontSize": 16 }, "minComponentHeight": 48 }"#,
        )
        .unwrap();
        assert_eq!(config.typography.min_font_size, 16.0);
        assert_eq!(config.min_component_height, 48.0);
    }

    #[test]
    fn test_json_round_trip() {
        let config = EngineConfig::default()
            .with_breakpoints(
                BreakpointTable::new(vec![
                    Breakpoint::new(BucketName::Xs, 0.0),
                    Breakpoint::new(BucketName::Xl, 600.0),
                ])
                .unwrap(),
            )
            .with_min_font_size(13.0);

        let json = config.to_json().unwrap();
        assert_eq!(EngineConfig::from_json(&json).unwrap(), config);
    }
}
