use tally_scenegraph::{
    animation::{Animation, ShapeProperty},
    easing::EasingFunction,
    shapes::SizedGeometry,
};

pub const HORIZONTAL_PROPERTIES: [ShapeProperty; 2] = [ShapeProperty::X, ShapeProperty::Width];

pub const VERTICAL_PROPERTIES: [ShapeProperty; 2] = [ShapeProperty::Y, ShapeProperty::Height];

/// Duration of the vertical transitions relative to the chart's animation
pub const VERTICAL_DURATION_FACTOR: f64 = 1.5;

/// Registers the default column transitions on a freshly created shape.
///
/// `X` and `Width` follow the chart's animation. `Y` and `Height` bounce in
/// over one and a half times its duration. Every group is completed right away
/// so the shape's initial state is what the first transition starts from.
pub fn configure<S: SizedGeometry + ?Sized>(shape: &mut S, animation: &Animation) {
    shape.set_property_transition(Some(*animation), &HORIZONTAL_PROPERTIES);
    shape.complete_transition(&HORIZONTAL_PROPERTIES);

    let vertical = animation.derived(EasingFunction::BounceOut, VERTICAL_DURATION_FACTOR);
    shape.set_property_transition(Some(vertical), &VERTICAL_PROPERTIES);
    shape.complete_transition(&VERTICAL_PROPERTIES);
}

/// Hook replacing the default transitions of newly created column shapes
pub trait TransitionSetter<S: ?Sized> {
    fn set_transitions(&self, shape: &mut S, animation: &Animation);
}

impl<S: ?Sized, F> TransitionSetter<S> for F
where
    F: Fn(&mut S, &Animation),
{
    fn set_transitions(&self, shape: &mut S, animation: &Animation) {
        self(shape, animation)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultColumnTransitions;

impl<S: SizedGeometry + ?Sized> TransitionSetter<S> for DefaultColumnTransitions {
    fn set_transitions(&self, shape: &mut S, animation: &Animation) {
        configure(shape, animation)
    }
}
