use serde::{Deserialize, Serialize};
use tally_common::types::AxisOrientation;

use crate::{error::TallyScaleError, range::ValueRange};

/// Pixel unit the separation targets are expressed in
const SEPARATION_UNIT: f64 = 3.0;

/// Target pixels per separation, in [`SEPARATION_UNIT`]s, on the horizontal axis
const X_SEPARATION_UNITS: f64 = 20.0;

/// Target pixels per separation, in [`SEPARATION_UNIT`]s, on the vertical axis.
/// Lower than the horizontal target so value axes get denser labels.
const Y_SEPARATION_UNITS: f64 = 12.0;

/// A "nice" axis increment
///
/// `value` is always `magnitude` times one of 1, 2, 5 or 10.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub magnitude: f64,
}

/// Number of separations an axis of `pixel_dimension` pixels should be divided into.
///
/// Halfway cases round to even. Never returns less than one.
pub fn separations(pixel_dimension: f32, orientation: AxisOrientation) -> f64 {
    let units = match orientation {
        AxisOrientation::X => X_SEPARATION_UNITS,
        AxisOrientation::Y => Y_SEPARATION_UNITS,
    };
    let separations = (pixel_dimension as f64 / (units * SEPARATION_UNIT)).round_ties_even();
    f64::max(separations, 1.0)
}

/// Smallest increment in `{1, 2, 5, 10} x 10^k` that is not smaller than `minimum`
pub fn nice_increment(minimum: f64) -> Result<AxisTick, TallyScaleError> {
    if !minimum.is_finite() {
        return Err(TallyScaleError::NonFiniteValue(minimum));
    }
    if minimum <= 0.0 {
        return Err(TallyScaleError::NonPositiveIncrement(minimum));
    }

    let magnitude = 10f64.powf(minimum.log10().floor());
    let residual = minimum / magnitude;

    let value = if residual > 5.0 {
        10.0 * magnitude
    } else if residual > 2.0 {
        5.0 * magnitude
    } else if residual > 1.0 {
        2.0 * magnitude
    } else {
        magnitude
    };

    Ok(AxisTick { value, magnitude })
}

/// Selects the tick increment for an axis spanning `pixel_dimension` pixels
pub fn select_tick_for_dimension(
    pixel_dimension: f32,
    orientation: AxisOrientation,
    range: &ValueRange,
) -> Result<AxisTick, TallyScaleError> {
    range.ensure_span()?;
    let minimum = range.span() / separations(pixel_dimension, orientation);
    nice_increment(minimum)
}

/// Selects the tick increment for an axis of a control of `control_size` pixels.
///
/// The vertical axis is measured along the control height, the horizontal one
/// along its width.
pub fn select_tick(
    orientation: AxisOrientation,
    control_size: [f32; 2],
    range: &ValueRange,
) -> Result<AxisTick, TallyScaleError> {
    let dimension = match orientation {
        AxisOrientation::X => control_size[0],
        AxisOrientation::Y => control_size[1],
    };
    select_tick_for_dimension(dimension, orientation, range)
}
