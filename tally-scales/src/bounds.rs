use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

use crate::{range::ValueRange, ticks::AxisTick};

/// Padding added on each side of a categorical range, so the first and last
/// categories get a full slot.
pub const CATEGORICAL_PADDING: f64 = 0.5;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    VariantNames,
    EnumString,
    Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AxisKind {
    /// Axis of discrete slots, one unit wide each
    Categorical,
    /// Continuous value axis
    Value,
}

/// Value ranges of both axes of a Cartesian series
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartesianBounds {
    pub x: ValueRange,
    pub y: ValueRange,
}

/// Expands a raw data range into the range that should be rendered.
///
/// Categorical ranges grow by half a unit on each side, value ranges by one
/// tick increment.
pub fn pad(raw: &ValueRange, kind: AxisKind, tick: &AxisTick) -> ValueRange {
    let padding = match kind {
        AxisKind::Categorical => CATEGORICAL_PADDING,
        AxisKind::Value => tick.value,
    };
    ValueRange {
        min: raw.min - padding,
        max: raw.max + padding,
    }
}
