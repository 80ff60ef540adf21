use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

use crate::{
    error::TallyLayoutError,
    point::{ChartPoint, HoverArea},
};

/// Where a tooltip sits relative to the hover areas it describes
#[derive(
    Debug,
    Default,
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
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TooltipPosition {
    Hidden,
    #[default]
    Top,
    Bottom,
    Left,
    Right,
    Center,
}

impl TooltipPosition {
    pub fn parse(name: &str) -> Result<Self, TallyLayoutError> {
        Self::from_str(name).map_err(|_| TallyLayoutError::UnsupportedAnchor(name.to_string()))
    }
}

/// Top-left corner of a tooltip of `tooltip_size` anchored on the extremes of
/// `hover_areas`. The far edges are the largest `y + height` and `x + width`.
///
/// Returns `Ok(None)` when there are no hover areas, whatever the position.
/// A [`TooltipPosition::Hidden`] tooltip has no anchor and is an error.
pub fn tooltip_location<'a>(
    hover_areas: impl IntoIterator<Item = &'a HoverArea>,
    position: TooltipPosition,
    tooltip_size: [f32; 2],
) -> Result<Option<[f32; 2]>, TallyLayoutError> {
    let mut count = 0usize;
    let (mut most_top, mut most_bottom) = (f32::MAX, f32::MIN);
    let (mut most_left, mut most_right) = (f32::MAX, f32::MIN);
    for area in hover_areas {
        most_top = most_top.min(area.y);
        most_bottom = most_bottom.max(area.y + area.height);
        most_left = most_left.min(area.x);
        most_right = most_right.max(area.x + area.width);
        count += 1;
    }
    if count == 0 {
        return Ok(None);
    }

    let [width, height] = tooltip_size;
    let center_x = (most_right + most_left) / 2.0 - width * 0.5;
    let center_y = (most_top + most_bottom) / 2.0 - height * 0.5;

    let location = match position {
        TooltipPosition::Top => [center_x, most_top - height],
        TooltipPosition::Bottom => [center_x, most_bottom],
        TooltipPosition::Left => [most_left - width, center_y],
        TooltipPosition::Right => [most_right, center_y],
        TooltipPosition::Center => [center_x, center_y],
        TooltipPosition::Hidden => {
            return Err(TallyLayoutError::UnsupportedAnchor(position.to_string()));
        }
    };
    Ok(Some(location))
}

/// [`tooltip_location`] over the hover areas of already measured points.
/// Points without a shape yet are skipped.
pub fn points_tooltip_location<'a, S: 'a>(
    points: impl IntoIterator<Item = &'a ChartPoint<S>>,
    position: TooltipPosition,
    tooltip_size: [f32; 2],
) -> Result<Option<[f32; 2]>, TallyLayoutError> {
    tooltip_location(
        points.into_iter().filter_map(ChartPoint::hover_area),
        position,
        tooltip_size,
    )
}
