use tally_common::types::AxisOrientation;
use tally_scales::{
    error::TallyScaleError,
    range::ValueRange,
    ticks::{select_tick, AxisTick},
};

/// Axis as seen by a series during a layout pass
pub trait Axis {
    fn orientation(&self) -> AxisOrientation;

    /// Range of data values currently shown by the axis
    fn data_bounds(&self) -> ValueRange;

    /// Tick increment for `bounds` on a control of `control_size` pixels
    fn get_tick(
        &self,
        control_size: [f32; 2],
        bounds: &ValueRange,
    ) -> Result<AxisTick, TallyScaleError> {
        select_tick(self.orientation(), control_size, bounds)
    }

    /// Tick increment for the axis' own data bounds
    fn tick(&self, control_size: [f32; 2]) -> Result<AxisTick, TallyScaleError> {
        self.get_tick(control_size, &self.data_bounds())
    }
}

/// Axis for Cartesian coordinates
#[derive(Clone, Debug, PartialEq)]
pub struct CartesianAxis {
    pub orientation: AxisOrientation,
    pub data_bounds: ValueRange,
    pub title: Option<String>,
}

impl CartesianAxis {
    pub fn new(orientation: AxisOrientation) -> Self {
        Self {
            orientation,
            data_bounds: ValueRange { min: 0.0, max: 1.0 },
            title: None,
        }
    }

    pub fn x() -> Self {
        Self::new(AxisOrientation::X)
    }

    pub fn y() -> Self {
        Self::new(AxisOrientation::Y)
    }

    pub fn with_data_bounds(mut self, data_bounds: ValueRange) -> Self {
        self.data_bounds = data_bounds;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl Axis for CartesianAxis {
    fn orientation(&self) -> AxisOrientation {
        self.orientation
    }

    fn data_bounds(&self) -> ValueRange {
        self.data_bounds
    }
}
