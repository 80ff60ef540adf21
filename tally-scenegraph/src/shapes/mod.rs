pub mod rect;

use tally_common::types::Rect;

use crate::animation::{AnimatedProperty, Animation, PropertyTransition, ShapeProperty};

/// A shape with a position and a size whose properties can transition.
///
/// Implementors only expose storage for their animated properties; accessors
/// and transition bookkeeping are provided on top of it.
pub trait SizedGeometry {
    fn property(&self, property: ShapeProperty) -> &AnimatedProperty;

    fn property_mut(&mut self, property: ShapeProperty) -> &mut AnimatedProperty;

    fn x(&self) -> f32 {
        self.property(ShapeProperty::X).get()
    }

    fn set_x(&mut self, value: f32) {
        self.property_mut(ShapeProperty::X).set(value)
    }

    fn y(&self) -> f32 {
        self.property(ShapeProperty::Y).get()
    }

    fn set_y(&mut self, value: f32) {
        self.property_mut(ShapeProperty::Y).set(value)
    }

    fn width(&self) -> f32 {
        self.property(ShapeProperty::Width).get()
    }

    fn set_width(&mut self, value: f32) {
        self.property_mut(ShapeProperty::Width).set(value)
    }

    fn height(&self) -> f32 {
        self.property(ShapeProperty::Height).get()
    }

    fn set_height(&mut self, value: f32) {
        self.property_mut(ShapeProperty::Height).set(value)
    }

    fn rect(&self) -> Rect {
        Rect::new(self.x(), self.y(), self.width(), self.height())
    }

    fn set_rect(&mut self, rect: Rect) {
        self.set_x(rect.x);
        self.set_y(rect.y);
        self.set_width(rect.width);
        self.set_height(rect.height);
    }

    /// Registers `animation` (or removes any with `None`) for `properties`
    fn set_property_transition(
        &mut self,
        animation: Option<Animation>,
        properties: &[ShapeProperty],
    ) {
        for property in properties {
            self.property_mut(*property).set_animation(animation);
        }
    }

    /// Commits the current values of `properties` as their start state
    fn complete_transition(&mut self, properties: &[ShapeProperty]) {
        for property in properties {
            self.property_mut(*property).complete();
        }
    }

    /// Pending transitions, in `X`, `Y`, `Width`, `Height` order
    fn pending_transitions(&self) -> Vec<(ShapeProperty, PropertyTransition)> {
        [
            ShapeProperty::X,
            ShapeProperty::Y,
            ShapeProperty::Width,
            ShapeProperty::Height,
        ]
        .into_iter()
        .filter_map(|p| self.property(p).transition().map(|t| (p, t)))
        .collect()
    }
}

/// A shape that can be drawn with the highlight paints of its series
pub trait HighlightableGeometry {
    fn is_highlighted(&self) -> bool;

    fn set_highlighted(&mut self, highlighted: bool);
}
