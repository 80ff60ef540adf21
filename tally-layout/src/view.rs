use std::time::Duration;

use tally_common::canvas::DrawMargin;
use tally_scenegraph::{animation::Animation, easing::EasingFunction};

/// Chart control as seen by a series during a layout pass
pub trait ChartView {
    /// Rectangle series are plotted into for the current frame
    fn draw_margin(&self) -> DrawMargin;

    fn easing_function(&self) -> EasingFunction;

    fn animations_speed(&self) -> Duration;

    fn animation_repeat_times(&self) -> u32 {
        1
    }

    /// Animation seeding the transitions of newly created shapes
    fn animation(&self) -> Animation {
        Animation::new(
            self.easing_function(),
            self.animations_speed(),
            self.animation_repeat_times(),
        )
    }
}

/// Plain [`ChartView`] holding the current frame's values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartViewState {
    pub draw_margin: DrawMargin,
    pub animation: Animation,
}

impl ChartViewState {
    pub fn new(draw_margin: DrawMargin) -> Self {
        Self {
            draw_margin,
            animation: Animation::default(),
        }
    }

    pub fn with_animation(mut self, animation: Animation) -> Self {
        self.animation = animation;
        self
    }
}

impl ChartView for ChartViewState {
    fn draw_margin(&self) -> DrawMargin {
        self.draw_margin
    }

    fn easing_function(&self) -> EasingFunction {
        self.animation.easing
    }

    fn animations_speed(&self) -> Duration {
        self.animation.duration
    }

    fn animation_repeat_times(&self) -> u32 {
        self.animation.repeat_times
    }
}
