//! Responsive design tokens for mobile screens
//!
//! Facade over the workspace crates:
//!
//! - [`platform`] - screen metrics snapshots and the change-notifying provider
//! - [`ui`] - breakpoints, scaling and the token resolvers
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use responsive_tokens::prelude::*;
//!
//! let provider = Arc::new(ScreenMetricsProvider::fixed(ScreenMetrics::new(
//!     414.0,
//!     896.0,
//!     3.0,
//!     Platform::Ios,
//! )));
//! let engine = ResponsiveEngine::new(EngineConfig::default(), provider);
//!
//! let tokens = engine.context();
//! assert_eq!(tokens.bucket(), BucketName::Md);
//! assert_eq!(tokens.columns(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use app_platform as platform;
pub use app_ui as ui;

/// Types most callers need
pub mod prelude {
    pub use app_platform::{
        MetricsSource, Orientation, Platform, SafeAreaInsets, ScreenMetrics,
        ScreenMetricsProvider, Subscription,
    };
    pub use app_ui::{
        BucketName, ButtonVariant, DesignToken, EngineConfig, Responsive, ResponsiveEngine,
        ResponsiveSpec, TypographyVariant,
    };
}
