//! Platform layer for the responsive token engine
//!
//! This crate is the boundary with the host environment. It defines the
//! [`ScreenMetrics`] snapshot the host reports and the
//! [`ScreenMetricsProvider`] that keeps the latest valid snapshot and
//! notifies listeners on rotation or resize.
//!
//! # Modules
//!
//! - [`metrics`] - Screen metric snapshots, platform and safe-area insets
//! - [`provider`] - Live metrics provider, host binding and subscriptions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod metrics;
pub mod provider;

pub use metrics::{
    MetricsError, Orientation, Platform, SafeAreaInsets, ScreenMetrics, BASELINE_HEIGHT,
    BASELINE_PIXEL_RATIO, BASELINE_WIDTH,
};
pub use provider::{MetricsSource, ScreenMetricsProvider, Subscription};
