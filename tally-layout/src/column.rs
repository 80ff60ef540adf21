//! Placement of grouped columns.
//!
//! Every category occupies one unit of the X axis. When several column series
//! share the axis, the unit is split into equal slices ordered by the series'
//! position, each slice centered on its own part of the unit. Columns grow from
//! the pivot value of their series towards their data value.

use tally_common::types::Rect;
use tally_scales::linear::ScaleTransform;

use crate::config::SeriesStyleConfig;

/// Side of the pivot a column's data value lies on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaselineSide {
    /// Value greater than the pivot; the column's top edge is the value
    AbovePivot,
    /// Value at or below the pivot; the column's top edge is the pivot
    BelowPivot,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnPlacement {
    pub rect: Rect,
    pub side: BaselineSide,
}

/// Slot of a series among the column series sharing the X axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupSlot {
    pub position: usize,
    pub count: usize,
}

/// Per-pass geometry of one column series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnGeometry {
    x_scale: ScaleTransform,
    y_scale: ScaleTransform,
    pivot: f64,
    pivot_pixel: f32,
    unit_width: f32,
    half_width: f32,
    group_offset: f32,
}

impl ColumnGeometry {
    pub fn new(
        x_scale: ScaleTransform,
        y_scale: ScaleTransform,
        style: &SeriesStyleConfig,
        slot: Option<GroupSlot>,
    ) -> Self {
        let mut unit_width = x_scale.to_pixel(1.0) - x_scale.to_pixel(0.0);
        let mut half_width = unit_width / 2.0;
        let pivot_pixel = y_scale.to_pixel(style.pivot);
        let mut group_offset = 0.0;

        if let Some(GroupSlot { position, count }) = slot {
            if !style.ignore_group_position && count > 1 {
                unit_width /= count as f32;
                half_width = unit_width / 2.0;
                group_offset = (position as f32 - count as f32 / 2.0) * unit_width + half_width;
            }
        }

        // Clamped after the group split, so each slice is clamped on its own
        if unit_width > style.max_width {
            unit_width = style.max_width;
            half_width = unit_width / 2.0;
        }

        Self {
            x_scale,
            y_scale,
            pivot: style.pivot,
            pivot_pixel,
            unit_width,
            half_width,
            group_offset,
        }
    }

    pub fn unit_width(&self) -> f32 {
        self.unit_width
    }

    pub fn half_width(&self) -> f32 {
        self.half_width
    }

    pub fn group_offset(&self) -> f32 {
        self.group_offset
    }

    pub fn pivot_pixel(&self) -> f32 {
        self.pivot_pixel
    }

    fn left(&self, x: f64) -> f32 {
        self.x_scale.to_pixel(x) - self.half_width + self.group_offset
    }

    /// Final rectangle of the column for the data point `(x, y)`
    pub fn place(&self, x: f64, y: f64) -> ColumnPlacement {
        let y_pixel = self.y_scale.to_pixel(y);
        let bar_length = (y_pixel - self.pivot_pixel).abs();

        let (top, side) = if y > self.pivot {
            (y_pixel, BaselineSide::AbovePivot)
        } else {
            (y_pixel - bar_length, BaselineSide::BelowPivot)
        };

        ColumnPlacement {
            rect: Rect::new(self.left(x), top, self.unit_width, bar_length),
            side,
        }
    }

    /// Zero-height rectangle on the pivot, the state a new column grows from
    pub fn initial_rect(&self, x: f64) -> Rect {
        Rect::new(self.left(x), self.pivot_pixel, self.unit_width, 0.0)
    }
}
