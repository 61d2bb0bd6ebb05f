//! Per-bucket value tables
//!
//! A [`ResponsiveSpec`] is a mandatory default plus optional per-bucket
//! overrides. Every bucket-aware token in this crate is a spec looked up
//! through [`resolve`]; a missing override is the normal case and falls back
//! to the default.

use serde::{Deserialize, Serialize};

use crate::breakpoints::BucketName;

/// Default value with optional per-bucket overrides
///
/// Serializes as `{"default": .., "sm": .., ...}` with absent overrides
/// omitted. Fixed tables are plain `const` items:
///
/// ```rust
/// use app_ui::{BucketName, ResponsiveSpec};
///
/// const GAP: ResponsiveSpec<f32> = ResponsiveSpec {
///     xs: Some(8.0),
///     ..ResponsiveSpec::uniform(12.0)
/// };
///
/// assert_eq!(*GAP.resolve(BucketName::Xs), 8.0);
/// assert_eq!(*GAP.resolve(BucketName::Xxl), 12.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponsiveSpec<T> {
    /// Value used when the bucket has no override
    pub default: T,
    /// Override for `xs`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xs: Option<T>,
    /// Override for `sm`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sm: Option<T>,
    /// Override for `md`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md: Option<T>,
    /// Override for `lg`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lg: Option<T>,
    /// Override for `xl`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xl: Option<T>,
    /// Override for `xxl`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xxl: Option<T>,
    /// Override for `xxxl`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xxxl: Option<T>,
}

impl<T> ResponsiveSpec<T> {
    /// A spec with no overrides
    pub const fn uniform(default: T) -> Self {
        Self {
            default,
            xs: None,
            sm: None,
            md: None,
            lg: None,
            xl: None,
            xxl: None,
            xxxl: None,
        }
    }

    /// Set the override for `bucket`
    pub fn with(mut self, bucket: BucketName, value: T) -> Self {
        *self.slot_mut(bucket) = Some(value);
        self
    }

    /// Override for `bucket`, if any
    pub fn get(&self, bucket: BucketName) -> Option<&T> {
        match bucket {
            BucketName::Xs => self.xs.as_ref(),
            BucketName::Sm => self.sm.as_ref(),
            BucketName::Md => self.md.as_ref(),
            BucketName::Lg => self.lg.as_ref(),
            BucketName::Xl => self.xl.as_ref(),
            BucketName::Xxl => self.xxl.as_ref(),
            BucketName::Xxxl => self.xxxl.as_ref(),
        }
    }

    fn slot_mut(&mut self, bucket: BucketName) -> &mut Option<T> {
        match bucket {
            BucketName::Xs => &mut self.xs,
            BucketName::Sm => &mut self.sm,
            BucketName::Md => &mut self.md,
            BucketName::Lg => &mut self.lg,
            BucketName::Xl => &mut self.xl,
            BucketName::Xxl => &mut self.xxl,
            BucketName::Xxxl => &mut self.xxxl,
        }
    }

    /// Override for `bucket`, else the default
    pub fn resolve(&self, bucket: BucketName) -> &T {
        self.get(bucket).unwrap_or(&self.default)
    }

    /// Mobile-first lookup
    ///
    /// Uses the override of `bucket` or of the nearest smaller bucket that
    /// has one, and only then the default.
    pub fn resolve_cascading(&self, bucket: BucketName) -> &T {
        BucketName::ALL[..=bucket.index()]
            .iter()
            .rev()
            .find_map(|b| self.get(*b))
            .unwrap_or(&self.default)
    }

    /// Buckets that carry an override, smallest first
    pub fn overrides(&self) -> impl Iterator<Item = (BucketName, &T)> + '_ {
        BucketName::ALL
            .into_iter()
            .filter_map(move |bucket| self.get(bucket).map(|value| (bucket, value)))
    }

    /// Apply `f` to the default and every override
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> ResponsiveSpec<U> {
        ResponsiveSpec {
            default: f(&self.default),
            xs: self.xs.as_ref().map(&f),
            sm: self.sm.as_ref().map(&f),
            md: self.md.as_ref().map(&f),
            lg: self.lg.as_ref().map(&f),
            xl: self.xl.as_ref().map(&f),
            xxl: self.xxl.as_ref().map(&f),
            xxxl: self.xxxl.as_ref().map(&f),
        }
    }
}

impl<T: Clone> ResponsiveSpec<T> {
    /// Resolved value tagged with its bucket
    pub fn token(&self, bucket: BucketName) -> DesignToken<T> {
        DesignToken {
            value: self.resolve(bucket).clone(),
            bucket,
        }
    }
}

impl<T: Default> Default for ResponsiveSpec<T> {
    fn default() -> Self {
        Self::uniform(T::default())
    }
}

/// Pick the value for `bucket`, falling back to the table default
pub fn resolve<T: Clone>(spec: &ResponsiveSpec<T>, bucket: BucketName) -> T {
    spec.resolve(bucket).clone()
}

/// A resolved value and the bucket it was resolved for
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignToken<T> {
    /// Resolved value
    pub value: T,
    /// Bucket used for resolution
    pub bucket: BucketName,
}
