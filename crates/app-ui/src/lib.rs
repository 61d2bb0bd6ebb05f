//! Responsive design tokens
//!
//! This crate turns canonical design values (drawn for a 375x812 reference
//! phone) into concrete logical-pixel values for the current screen.
//!
//! # Pipeline
//!
//! 1. [`breakpoints`] classifies the screen width into a [`BucketName`]
//!    (`xs` through `xxxl`).
//! 2. [`scale`] scales lengths linearly against the reference device and
//!    snaps them to the physical pixel grid.
//! 3. [`typography`], [`layout`], [`touch`] and [`grid`] combine the bucket
//!    and scale with per-bucket [`ResponsiveSpec`] tables and enforce the
//!    accessibility floors (12px text, 44/48 touch targets, 40px
//!    components).
//! 4. [`engine`] bundles everything for one snapshot and keeps it in sync
//!    with an [`app_platform::ScreenMetricsProvider`].
//!
//! Resolution never fails; degenerate input resolves to a safe value. Only
//! loading an [`EngineConfig`] returns a `Result`.
//!
//! # Example
//!
//! ```rust
//! use app_platform::{Platform, ScreenMetrics};
//! use app_ui::{BucketName, EngineConfig, Responsive};
//! use app_ui::tokens::spacing;
//!
//! let metrics = ScreenMetrics::new(320.0, 568.0, 2.0, Platform::Android);
//! let tokens = Responsive::new(&metrics, &EngineConfig::default());
//!
//! assert_eq!(tokens.bucket(), BucketName::Xs);
//! assert!(tokens.font_size(16.0) >= 12.0);
//! assert!(tokens.touch_size(40.0) >= 48.0);
//! assert!(tokens.padding(spacing::SPACE_LG) > 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod breakpoints;
pub mod config;
pub mod engine;
pub mod grid;
pub mod layout;
pub mod responsive;
pub mod scale;
pub mod tokens;
pub mod touch;
pub mod typography;

// Re-export commonly used types
pub use breakpoints::{
    classify, Breakpoint, BreakpointTable, BucketName, ParseBucketError, DEFAULT_BREAKPOINTS,
};

pub use config::{ConfigError, EngineConfig, TypographyConfig};

pub use engine::{Responsive, ResponsiveEngine};

pub use grid::{column_width, optimal_column_count, responsive_columns, GridLayout};

pub use layout::LayoutMetricsProvider;

pub use responsive::{resolve, DesignToken, ResponsiveSpec};

pub use scale::{ScaleEngine, ScaleReference};

pub use tokens::{hit_target, radius, sizing, spacing};

pub use touch::{button_size, min_touch_size, ButtonVariant, TouchTargetGuard};

pub use typography::{font_size, TextStyle, TypographyScaler, TypographyVariant};
