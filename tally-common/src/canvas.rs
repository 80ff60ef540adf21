use serde::{Deserialize, Serialize};

use crate::types::AxisOrientation;

/// Origin and size, in pixels, of the rectangle series are plotted into.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawMargin {
    pub origin: [f32; 2],
    pub size: [f32; 2],
}

impl DrawMargin {
    pub fn new(origin: [f32; 2], size: [f32; 2]) -> Self {
        Self { origin, size }
    }

    pub fn width(&self) -> f32 {
        self.size[0]
    }

    pub fn height(&self) -> f32 {
        self.size[1]
    }

    /// Extent along the given axis: width for X, height for Y.
    pub fn extent(&self, orientation: AxisOrientation) -> f32 {
        match orientation {
            AxisOrientation::X => self.size[0],
            AxisOrientation::Y => self.size[1],
        }
    }
}
