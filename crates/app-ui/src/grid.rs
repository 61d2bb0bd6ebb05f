//! Column grid helpers

use serde::{Deserialize, Serialize};

use crate::breakpoints::BucketName;
use crate::responsive::ResponsiveSpec;

/// Columns per bucket for content grids
pub const RESPONSIVE_COLUMNS: ResponsiveSpec<u32> = ResponsiveSpec {
    xs: Some(1),
    sm: Some(1),
    md: Some(2),
    lg: Some(2),
    xl: Some(3),
    xxl: Some(4),
    xxxl: Some(5),
    ..ResponsiveSpec::uniform(1)
};

fn non_negative(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Width of one column when `container` holds `columns` separated by `gutter`
///
/// Zero columns are treated as one; negative or non-finite lengths as zero.
pub fn column_width(columns: u32, gutter: f32, container: f32) -> f32 {
    let columns = columns.max(1) as f32;
    let gutter = non_negative(gutter);
    let container = non_negative(container);

    ((container - gutter * (columns - 1.0)) / columns).max(0.0)
}

/// Column count for `bucket`
pub fn responsive_columns(bucket: BucketName) -> u32 {
    *RESPONSIVE_COLUMNS.resolve(bucket)
}

/// Most columns of at least `item_width` that fit in `container`
///
/// Always at least 1.
pub fn optimal_column_count(item_width: f32, container: f32, spacing: f32) -> u32 {
    let spacing = non_negative(spacing);
    let container = non_negative(container);
    if !item_width.is_finite() || item_width <= 0.0 {
        return 1;
    }

    let count = (container / (item_width + spacing)).floor();
    if count >= 1.0 {
        count as u32
    } else {
        1
    }
}

/// Grid for `container` using the column count of `bucket`
pub fn layout(container: f32, bucket: BucketName, gutter: f32) -> GridLayout {
    GridLayout::for_bucket(container, bucket, gutter)
}

/// Resolved grid for one container width
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridLayout {
    /// Column count
    pub columns: u32,
    /// Width of each column
    pub column_width: f32,
    /// Space between columns
    pub gutter: f32,
}

impl GridLayout {
    /// Lay out `container` with the column count for `bucket`
    pub fn for_bucket(container: f32, bucket: BucketName, gutter: f32) -> Self {
        let columns = responsive_columns(bucket);
        Self {
            columns,
            column_width: column_width(columns, gutter, container),
            gutter: non_negative(gutter),
        }
    }

    /// Lay out `container` with as many `item_width` columns as fit
    pub fn fitting(container: f32, item_width: f32, gutter: f32) -> Self {
        let columns = optimal_column_count(item_width, container, gutter);
        Self {
            columns,
            column_width: column_width(columns, gutter, container),
            gutter: non_negative(gutter),
        }
    }

    /// Total width used by the columns and gutters
    pub fn total_width(&self) -> f32 {
        self.column_width * self.columns as f32 + self.gutter * self.columns.saturating_sub(1) as f32
    }
}
