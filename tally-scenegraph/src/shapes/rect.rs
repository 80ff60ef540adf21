use crate::animation::{AnimatedProperty, ShapeProperty};

use super::{HighlightableGeometry, SizedGeometry};

/// Axis aligned rectangle, the shape of a column
#[derive(Debug, Clone, PartialEq)]
pub struct RectShape {
    pub x: AnimatedProperty,
    pub y: AnimatedProperty,
    pub width: AnimatedProperty,
    pub height: AnimatedProperty,
    pub corner_radius: f32,
    pub highlighted: bool,
}

impl Default for RectShape {
    fn default() -> Self {
        Self {
            x: AnimatedProperty::new(0.0),
            y: AnimatedProperty::new(0.0),
            width: AnimatedProperty::new(0.0),
            height: AnimatedProperty::new(0.0),
            corner_radius: 0.0,
            highlighted: false,
        }
    }
}

impl SizedGeometry for RectShape {
    fn property(&self, property: ShapeProperty) -> &AnimatedProperty {
        match property {
            ShapeProperty::X => &self.x,
            ShapeProperty::Y => &self.y,
            ShapeProperty::Width => &self.width,
            ShapeProperty::Height => &self.height,
        }
    }

    fn property_mut(&mut self, property: ShapeProperty) -> &mut AnimatedProperty {
        match property {
            ShapeProperty::X => &mut self.x,
            ShapeProperty::Y => &mut self.y,
            ShapeProperty::Width => &mut self.width,
            ShapeProperty::Height => &mut self.height,
        }
    }
}

impl HighlightableGeometry for RectShape {
    fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }
}
