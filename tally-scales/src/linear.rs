use tally_common::{canvas::DrawMargin, types::AxisOrientation};

use crate::{error::TallyScaleError, range::ValueRange};

/// Linear map from a data [`ValueRange`] onto one pixel extent of the draw margin.
///
/// The X orientation maps `range.min` to `origin` and grows to the right. The Y
/// orientation is inverted: `range.min` lands on `origin + size` and larger
/// values move towards `origin`, matching top-down pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleTransform {
    origin: f32,
    size: f32,
    orientation: AxisOrientation,
    range: ValueRange,
}

impl ScaleTransform {
    /// Builds a transform for one axis of the rectangle at `origin` with `size`.
    ///
    /// Fails with [`TallyScaleError::DegenerateRange`] when `range.min == range.max`,
    /// and with the errors of [`ValueRange::validate`] for inverted or
    /// non-finite ranges.
    pub fn try_new(
        origin: [f32; 2],
        size: [f32; 2],
        orientation: AxisOrientation,
        range: ValueRange,
    ) -> Result<Self, TallyScaleError> {
        range.ensure_span()?;
        let (origin, size) = match orientation {
            AxisOrientation::X => (origin[0], size[0]),
            AxisOrientation::Y => (origin[1], size[1]),
        };
        Ok(Self {
            origin,
            size,
            orientation,
            range,
        })
    }

    pub fn from_draw_margin(
        margin: &DrawMargin,
        orientation: AxisOrientation,
        range: ValueRange,
    ) -> Result<Self, TallyScaleError> {
        Self::try_new(margin.origin, margin.size, orientation, range)
    }

    pub fn orientation(&self) -> AxisOrientation {
        self.orientation
    }

    pub fn range(&self) -> ValueRange {
        self.range
    }

    /// Maps a data value to a pixel coordinate
    pub fn to_pixel(&self, value: f64) -> f32 {
        let fraction = (value - self.range.min) / self.range.span();
        let offset = fraction * self.size as f64;
        match self.orientation {
            AxisOrientation::X => (self.origin as f64 + offset) as f32,
            AxisOrientation::Y => (self.origin as f64 + self.size as f64 - offset) as f32,
        }
    }

    /// Maps a pixel coordinate back to a data value
    pub fn to_data(&self, pixel: f32) -> f64 {
        if self.size == 0.0 {
            return self.range.min;
        }
        let offset = match self.orientation {
            AxisOrientation::X => pixel as f64 - self.origin as f64,
            AxisOrientation::Y => self.origin as f64 + self.size as f64 - pixel as f64,
        };
        self.range.min + offset / self.size as f64 * self.range.span()
    }
}
