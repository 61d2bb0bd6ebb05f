//! Resolved token context
//!
//! [`Responsive`] binds every resolver to one metrics snapshot and bucket.
//! [`ResponsiveEngine`] keeps one memoized context per provider snapshot and
//! rebuilds it when the provider reports a change.

use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

use app_platform::{ScreenMetrics, ScreenMetricsProvider, Subscription};

use crate::breakpoints::BucketName;
use crate::config::EngineConfig;
use crate::grid::{self, GridLayout};
use crate::layout::LayoutMetricsProvider;
use crate::responsive::{DesignToken, ResponsiveSpec};
use crate::scale::ScaleEngine;
use crate::touch::{ButtonVariant, TouchTargetGuard};
use crate::typography::{TextStyle, TypographyScaler, TypographyVariant};

// =============================================================================
// Responsive Context
// =============================================================================

/// All token resolvers for one metrics snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct Responsive {
    bucket: BucketName,
    scale: ScaleEngine,
    typography: TypographyScaler,
    layout: LayoutMetricsProvider,
    touch: TouchTargetGuard,
}

impl Responsive {
    /// Classify `metrics` once and build the resolvers
    pub fn new(metrics: &ScreenMetrics, config: &EngineConfig) -> Self {
        let scale = ScaleEngine::new(metrics, config.reference);
        let bucket = config.breakpoints.classify(scale.metrics().width);

        Self {
            bucket,
            scale,
            typography: TypographyScaler::new(scale, config.typography),
            layout: LayoutMetricsProvider::new(scale, bucket)
                .with_min_component_height(config.min_component_height),
            touch: TouchTargetGuard::new(scale),
        }
    }

    /// Apply the user's accessibility font scale
    pub fn with_user_scale(mut self, user_scale: f32) -> Self {
        self.typography = self.typography.with_user_scale(user_scale);
        self
    }

    /// Device bucket
    pub fn bucket(&self) -> BucketName {
        self.bucket
    }

    /// Snapshot the context was built from (sanitized)
    pub fn metrics(&self) -> &ScreenMetrics {
        self.scale.metrics()
    }

    /// Linear scaling primitives
    pub fn scale(&self) -> &ScaleEngine {
        &self.scale
    }

    /// Typography resolver
    pub fn typography(&self) -> &TypographyScaler {
        &self.typography
    }

    /// Spacing and sizing resolver
    pub fn layout(&self) -> &LayoutMetricsProvider {
        &self.layout
    }

    /// Touch target resolver
    pub fn touch(&self) -> &TouchTargetGuard {
        &self.touch
    }

    /// Bucket-columned grid inside the content container
    pub fn grid(&self, gutter: f32) -> GridLayout {
        grid::layout(self.layout.container_width(), self.bucket, gutter)
    }

    /// Resolve a per-bucket table for this context
    pub fn resolve<T: Clone>(&self, spec: &ResponsiveSpec<T>) -> DesignToken<T> {
        spec.token(self.bucket)
    }

    // -------------------------------------------------------------------------
    // Shortcuts
    // -------------------------------------------------------------------------

    /// Font size for a canonical base
    pub fn font_size(&self, base: f32) -> f32 {
        self.typography.font_size(base, self.bucket)
    }

    /// Line height with the default ratio
    pub fn line_height(&self, font_size: f32) -> f32 {
        self.typography.line_height_default(font_size, self.bucket)
    }

    /// Text style for a variant
    pub fn text_style(&self, variant: TypographyVariant) -> TextStyle {
        self.typography.style(variant, self.bucket)
    }

    /// Padding for a canonical base
    pub fn padding(&self, base: f32) -> f32 {
        self.layout.padding(base)
    }

    /// Margin for a canonical base
    pub fn margin(&self, base: f32) -> f32 {
        self.layout.margin(base)
    }

    /// Border radius for a canonical base
    pub fn border_radius(&self, base: f32) -> f32 {
        self.layout.border_radius(base)
    }

    /// Component height for a canonical base
    pub fn component_height(&self, base: f32) -> f32 {
        self.layout.component_height(base)
    }

    /// Touch target on the snapshot's platform
    pub fn touch_size(&self, base: f32) -> f32 {
        self.touch.touch_size_for(base, self.bucket)
    }

    /// Button height for a variant
    pub fn button_height(&self, variant: ButtonVariant) -> f32 {
        self.touch.button_height(variant, self.bucket)
    }

    /// Column count for this bucket
    pub fn columns(&self) -> u32 {
        grid::responsive_columns(self.bucket)
    }
}

// =============================================================================
// Responsive Engine
// =============================================================================

type Memo = Option<(ScreenMetrics, Arc<Responsive>)>;

/// Memoizing front end over a [`ScreenMetricsProvider`]
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use app_platform::{Platform, ScreenMetrics, ScreenMetricsProvider};
/// use app_ui::{BucketName, EngineConfig, ResponsiveEngine};
///
/// let provider = Arc::new(ScreenMetricsProvider::fixed(
///     ScreenMetrics::new(320.0, 568.0, 2.0, Platform::Ios),
/// ));
/// let engine = ResponsiveEngine::new(EngineConfig::default(), provider.clone());
/// assert_eq!(engine.bucket(), BucketName::Xs);
///
/// provider.handle_change(ScreenMetrics::new(568.0, 320.0, 2.0, Platform::Ios));
/// assert_eq!(engine.bucket(), BucketName::Xl);
/// ```
pub struct ResponsiveEngine {
    config: EngineConfig,
    provider: Arc<ScreenMetricsProvider>,
    memo: Arc<RwLock<Memo>>,
    last_bucket: Mutex<Option<BucketName>>,
    _subscription: Subscription,
}

impl ResponsiveEngine {
    /// Create an engine that follows `provider`
    pub fn new(config: EngineConfig, provider: Arc<ScreenMetricsProvider>) -> Self {
        let memo: Arc<RwLock<Memo>> = Arc::new(RwLock::new(None));

        let invalidate = Arc::downgrade(&memo);
        let subscription = provider.subscribe(move |_| {
            if let Some(memo) = invalidate.upgrade() {
                memo.write().take();
            }
        });

        Self {
            config,
            provider,
            memo,
            last_bucket: Mutex::new(None),
            _subscription: subscription,
        }
    }

    /// Context for the provider's current snapshot
    pub fn context(&self) -> Arc<Responsive> {
        let metrics = self.provider.current();

        if let Some((key, context)) = self.memo.read().as_ref() {
            if *key == metrics {
                return Arc::clone(context);
            }
        }

        let context = Arc::new(Responsive::new(&metrics, &self.config));
        *self.memo.write() = Some((metrics, Arc::clone(&context)));
        self.note_bucket(context.bucket());
        context
    }

    /// Bucket for the provider's current snapshot
    pub fn bucket(&self) -> BucketName {
        self.context().bucket()
    }

    /// Metrics source
    pub fn provider(&self) -> &Arc<ScreenMetricsProvider> {
        &self.provider
    }

    /// Configuration in use
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn note_bucket(&self, bucket: BucketName) {
        let mut last = self.last_bucket.lock();
        match *last {
            Some(previous) if previous != bucket => {
                tracing::debug!("Device bucket changed: {} -> {}", previous, bucket);
            }
            None => tracing::debug!("Device bucket: {}", bucket),
            _ => {}
        }
        *last = Some(bucket);
    }
}

impl std::fmt::Debug for ResponsiveEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponsiveEngine")
            .field("config", &self.config)
            .field("last_bucket", &*self.last_bucket.lock())
            .finish_non_exhaustive()
    }
}
