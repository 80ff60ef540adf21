use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use strum::{Display, EnumString, VariantNames};

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    VariantNames,
    EnumString,
    Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AxisOrientation {
    /// Horizontal, categorical axis
    #[default]
    X,
    /// Vertical, value axis. Pixel coordinates grow downwards.
    Y,
}

/// Axis-aligned rectangle in pixel space
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> [f32; 2] {
        [self.x + self.width / 2.0, self.y + self.height / 2.0]
    }

    /// Smallest rectangle containing both `self` and `other`
    pub fn union(&self, other: &Rect) -> Rect {
        let left = f32::min(self.x, other.x);
        let top = f32::min(self.y, other.y);
        let right = f32::max(self.right(), other.right());
        let bottom = f32::max(self.bottom(), other.bottom());
        Rect::new(left, top, right - left, bottom - top)
    }

    pub fn contains(&self, point: [f32; 2]) -> bool {
        point[0] >= self.x
            && point[0] <= self.right()
            && point[1] >= self.y
            && point[1] <= self.bottom()
    }
}

impl Hash for Rect {
    fn hash<H: Hasher>(&self, state: &mut H) {
        [self.x, self.y, self.width, self.height]
            .iter()
            .for_each(|v| OrderedFloat::from(*v).hash(state));
    }
}
