//! Device classification into breakpoint buckets
//!
//! Widths map onto an ordered set of buckets through a table of inclusive
//! lower bounds. Classification is total: bad widths land in the smallest
//! bucket instead of failing.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::config::ConfigError;

// =============================================================================
// Bucket Names
// =============================================================================

/// Ordered device-size bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BucketName {
    /// Small phones (< 375px)
    Xs,
    /// Standard phones (>= 375px)
    Sm,
    /// Large phones (>= 414px)
    Md,
    /// Max-size phones (>= 428px)
    Lg,
    /// Phablets and small foldables (>= 480px)
    Xl,
    /// Tablets (>= 768px)
    Xxl,
    /// Large tablets and desktops (>= 1024px)
    Xxxl,
}

impl BucketName {
    /// Every bucket, smallest first
    pub const ALL: [BucketName; 7] = [
        BucketName::Xs,
        BucketName::Sm,
        BucketName::Md,
        BucketName::Lg,
        BucketName::Xl,
        BucketName::Xxl,
        BucketName::Xxxl,
    ];

    /// Lowercase name, e.g. `"xxl"`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "xxl",
            Self::Xxxl => "xxxl",
        }
    }

    /// Position in [`BucketName::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Bucket for `width` under the default breakpoint table
    pub fn for_width(width: f32) -> Self {
        classify_entries(width, &DEFAULT_BREAKPOINTS)
    }

    /// Whether this is a phone-sized bucket (`xs`/`sm`)
    pub fn is_compact(&self) -> bool {
        *self <= Self::Sm
    }

    /// Whether this is a tablet-or-larger bucket (`xxl`/`xxxl`)
    pub fn is_wide(&self) -> bool {
        *self >= Self::Xxl
    }
}

impl std::fmt::Display for BucketName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown bucket name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown bucket name: {0}")]
pub struct ParseBucketError(pub String);

impl FromStr for BucketName {
    type Err = ParseBucketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|bucket| bucket.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseBucketError(s.to_string()))
    }
}

// =============================================================================
// Breakpoint Table
// =============================================================================

/// A named inclusive lower width bound
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakpoint {
    /// Bucket that starts at this width
    pub name: BucketName,
    /// Smallest width (inclusive) belonging to the bucket
    pub min_width: f32,
}

impl Breakpoint {
    /// Create a breakpoint
    pub const fn new(name: BucketName, min_width: f32) -> Self {
        Self { name, min_width }
    }
}

/// Default thresholds
pub const DEFAULT_BREAKPOINTS: [Breakpoint; 7] = [
    Breakpoint::new(BucketName::Xs, 0.0),
    Breakpoint::new(BucketName::Sm, 375.0),
    Breakpoint::new(BucketName::Md, 414.0),
    Breakpoint::new(BucketName::Lg, 428.0),
    Breakpoint::new(BucketName::Xl, 480.0),
    Breakpoint::new(BucketName::Xxl, 768.0),
    Breakpoint::new(BucketName::Xxxl, 1024.0),
];

/// Ordered, strictly increasing breakpoint thresholds
///
/// Tables are validated on construction and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Breakpoint>", into = "Vec<Breakpoint>")]
pub struct BreakpointTable {
    entries: Vec<Breakpoint>,
}

impl BreakpointTable {
    /// Validate and build a table
    ///
    /// Thresholds must be finite, non-negative and strictly increasing, and
    /// bucket names must appear in ascending order.
    pub fn new(entries: Vec<Breakpoint>) -> Result<Self, ConfigError> {
        if entries.is_empty() {
            return Err(ConfigError::EmptyBreakpoints);
        }

        for bp in &entries {
            if !bp.min_width.is_finite() || bp.min_width < 0.0 {
                return Err(ConfigError::InvalidValue {
                    field: "breakpoints.minWidth",
                    value: bp.min_width,
                });
            }
        }

        for pair in entries.windows(2) {
            let (previous, next) = (pair[0], pair[1]);
            if next.min_width <= previous.min_width || next.name <= previous.name {
                return Err(ConfigError::UnorderedBreakpoints {
                    previous: previous.name,
                    previous_width: previous.min_width,
                    next: next.name,
                    next_width: next.min_width,
                });
            }
        }

        Ok(Self { entries })
    }

    /// The default `xs(0) .. xxxl(1024)` table
    pub fn standard() -> Self {
        Self { entries: DEFAULT_BREAKPOINTS.to_vec() }
    }

    /// Thresholds, smallest first
    pub fn entries(&self) -> &[Breakpoint] {
        &self.entries
    }

    /// Threshold where `bucket` starts, if the table defines it
    pub fn min_width(&self, bucket: BucketName) -> Option<f32> {
        self.entries
            .iter()
            .find(|bp| bp.name == bucket)
            .map(|bp| bp.min_width)
    }

    /// Classify `width` against this table
    pub fn classify(&self, width: f32) -> BucketName {
        classify_entries(width, &self.entries)
    }
}

impl Default for BreakpointTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<Breakpoint>> for BreakpointTable {
    type Error = ConfigError;

    fn try_from(entries: Vec<Breakpoint>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<BreakpointTable> for Vec<Breakpoint> {
    fn from(table: BreakpointTable) -> Self {
        table.entries
    }
}

/// Classify a width into the largest bucket whose threshold it reaches
///
/// Non-finite or non-positive widths classify as `xs`, as does any width
/// below the table's first threshold.
pub fn classify(width: f32, table: &BreakpointTable) -> BucketName {
    table.classify(width)
}

fn classify_entries(width: f32, entries: &[Breakpoint]) -> BucketName {
    if !width.is_finite() || width <= 0.0 {
        return BucketName::Xs;
    }

    entries
        .iter()
        .rev()
        .find(|bp| bp.min_width <= width)
        .map_or(BucketName::Xs, |bp| bp.name)
}
