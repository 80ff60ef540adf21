use std::{cell::RefCell, rc::Rc};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};
use tally_scales::{
    bounds::{pad, AxisKind, CartesianBounds},
    linear::ScaleTransform,
    range::ValueRange,
};
use tally_scenegraph::{
    animation::Animation,
    bucket::{DrawBucket, ShapeKey, SharedShape},
    paint::{Paint, PaintSink},
    shapes::{HighlightableGeometry, SizedGeometry},
};
use tracing::{debug, trace};

use crate::{
    axis::Axis,
    column::{ColumnGeometry, ColumnPlacement, GroupSlot},
    config::SeriesStyleConfig,
    context::{SeriesContext, SeriesId},
    error::TallyLayoutError,
    point::ChartPoint,
    transitions::{DefaultColumnTransitions, TransitionSetter},
    view::ChartView,
};

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
pub enum SeriesType {
    Column,
}

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
pub enum SeriesDirection {
    Vertical,
    Horizontal,
}

/// Raw, unpadded data bounds of a series' points
pub trait BoundsStrategy<S> {
    fn data_bounds(&self, points: &[ChartPoint<S>]) -> CartesianBounds;
}

impl<S, F> BoundsStrategy<S> for F
where
    F: Fn(&[ChartPoint<S>]) -> CartesianBounds,
{
    fn data_bounds(&self, points: &[ChartPoint<S>]) -> CartesianBounds {
        self(points)
    }
}

/// Extent of the finite point coordinates; `{0, 0}` on both axes without points
#[derive(Debug, Clone, Copy, Default)]
pub struct DataExtentBounds;

impl<S> BoundsStrategy<S> for DataExtentBounds {
    fn data_bounds(&self, points: &[ChartPoint<S>]) -> CartesianBounds {
        CartesianBounds {
            x: ValueRange::from_values(points.iter().map(|p| p.x)).unwrap_or_default(),
            y: ValueRange::from_values(points.iter().map(|p| p.y)).unwrap_or_default(),
        }
    }
}

/// A series laid out on a pair of Cartesian axes
pub trait CartesianSeries {
    type Shape;

    /// What a layout pass reports for each point
    type Placement;

    fn id(&self) -> SeriesId;

    fn series_type(&self) -> SeriesType;

    fn direction(&self) -> SeriesDirection;

    /// Runs a layout pass: positions every point's shape, registers paints with
    /// `sink` and adds the shapes to `draw_bucket`.
    ///
    /// Shapes are created on the first pass of a point and updated in place by
    /// later ones. Returns the placement of every point, in point order.
    fn measure(
        &mut self,
        view: &dyn ChartView,
        sink: &mut dyn PaintSink,
        x_axis: &dyn Axis,
        y_axis: &dyn Axis,
        context: &dyn SeriesContext,
        draw_bucket: &mut DrawBucket<Self::Shape>,
    ) -> Result<Vec<Self::Placement>, TallyLayoutError>;

    /// Padded bounds the axes need to show every point of the series
    fn get_bounds(
        &self,
        control_size: [f32; 2],
        x_axis: &dyn Axis,
        y_axis: &dyn Axis,
        context: &dyn SeriesContext,
    ) -> Result<CartesianBounds, TallyLayoutError>;

    fn get_stack_group(&self) -> usize {
        0
    }
}

/// Series drawing one column per point, grouped with the other column series
/// that share its category slots.
pub struct ColumnSeries<S> {
    id: SeriesId,
    points: Vec<ChartPoint<S>>,
    style: SeriesStyleConfig,
    fill: Option<Paint>,
    stroke: Option<Paint>,
    highlight_fill: Option<Paint>,
    highlight_stroke: Option<Paint>,
    transitions_setter: Option<Rc<dyn TransitionSetter<S>>>,
    bounds_strategy: Rc<dyn BoundsStrategy<S>>,
    on_point_measured: Option<Rc<dyn Fn(&ChartPoint<S>)>>,
}

impl<S> ColumnSeries<S>
where
    S: SizedGeometry + HighlightableGeometry + Default + 'static,
{
    pub fn new(id: SeriesId) -> Self {
        Self {
            id,
            points: Vec::new(),
            style: SeriesStyleConfig::default(),
            fill: None,
            stroke: None,
            highlight_fill: None,
            highlight_stroke: None,
            transitions_setter: None,
            bounds_strategy: Rc::new(DataExtentBounds),
            on_point_measured: None,
        }
    }

    pub fn with_points(mut self, points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        self.points = points.into_iter().map(ChartPoint::from).collect();
        self
    }

    pub fn with_style(mut self, style: SeriesStyleConfig) -> Self {
        self.style = style;
        self
    }

    pub fn with_fill(mut self, fill: Paint) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_stroke(mut self, stroke: Paint) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn with_highlight_fill(mut self, paint: Paint) -> Self {
        self.highlight_fill = Some(paint);
        self
    }

    pub fn with_highlight_stroke(mut self, paint: Paint) -> Self {
        self.highlight_stroke = Some(paint);
        self
    }

    /// Replaces the transitions registered on newly created shapes
    pub fn with_transitions(mut self, setter: impl TransitionSetter<S> + 'static) -> Self {
        self.transitions_setter = Some(Rc::new(setter));
        self
    }

    pub fn with_bounds_strategy(mut self, strategy: impl BoundsStrategy<S> + 'static) -> Self {
        self.bounds_strategy = Rc::new(strategy);
        self
    }

    /// Callback invoked with every point once its shape and hover area are placed
    pub fn on_point_measured(mut self, callback: impl Fn(&ChartPoint<S>) + 'static) -> Self {
        self.on_point_measured = Some(Rc::new(callback));
        self
    }

    pub fn style(&self) -> &SeriesStyleConfig {
        &self.style
    }

    pub fn fill(&self) -> Option<&Paint> {
        self.fill.as_ref()
    }

    pub fn stroke(&self) -> Option<&Paint> {
        self.stroke.as_ref()
    }

    pub fn highlight_fill(&self) -> Option<&Paint> {
        self.highlight_fill.as_ref()
    }

    pub fn highlight_stroke(&self) -> Option<&Paint> {
        self.highlight_stroke.as_ref()
    }

    /// Width of the column outlines: the stroke paint's, else the configured one
    pub fn stroke_width(&self) -> f32 {
        self.stroke
            .map(|stroke| stroke.stroke_width)
            .unwrap_or(self.style.stroke_width)
    }

    pub fn points(&self) -> &[ChartPoint<S>] {
        &self.points
    }

    pub fn points_mut(&mut self) -> &mut [ChartPoint<S>] {
        &mut self.points
    }

    pub fn push_point(&mut self, x: f64, y: f64) {
        self.points.push(ChartPoint::new(x, y));
    }

    /// Removes every point, dropping their shapes
    pub fn clear_points(&mut self) {
        self.points.clear();
    }
}

impl<S> CartesianSeries for ColumnSeries<S>
where
    S: SizedGeometry + HighlightableGeometry + Default + 'static,
{
    type Shape = S;
    type Placement = ColumnPlacement;

    fn id(&self) -> SeriesId {
        self.id
    }

    fn series_type(&self) -> SeriesType {
        SeriesType::Column
    }

    fn direction(&self) -> SeriesDirection {
        SeriesDirection::Vertical
    }

    #[tracing::instrument(skip_all, fields(series = self.id.0, points = self.points.len()))]
    fn measure(
        &mut self,
        view: &dyn ChartView,
        sink: &mut dyn PaintSink,
        x_axis: &dyn Axis,
        y_axis: &dyn Axis,
        context: &dyn SeriesContext,
        draw_bucket: &mut DrawBucket<S>,
    ) -> Result<Vec<ColumnPlacement>, TallyLayoutError> {
        let margin = view.draw_margin();
        let x_scale =
            ScaleTransform::from_draw_margin(&margin, x_axis.orientation(), x_axis.data_bounds())?;
        let y_scale =
            ScaleTransform::from_draw_margin(&margin, y_axis.orientation(), y_axis.data_bounds())?;

        let slot = context.column_position(self.id).map(|position| GroupSlot {
            position,
            count: context.column_series_count(),
        });
        let geometry = ColumnGeometry::new(x_scale, y_scale, &self.style, slot);
        let animation = view.animation();

        let paints: Vec<Paint> = [self.fill, self.stroke].into_iter().flatten().collect();
        for paint in &paints {
            sink.add_paint_task(paint);
        }

        let setter = self.transitions_setter.as_deref();
        let mut placements = Vec::with_capacity(self.points.len());
        for (i, point) in self.points.iter_mut().enumerate() {
            let placement = geometry.place(point.x, point.y);

            let x = point.x;
            let mut is_new = false;
            let (shape, hover_area) = point.created_or_insert_with(|| {
                is_new = true;
                new_column_shape(&geometry, x, setter, &animation)
            });
            hover_area.set_dimensions(placement.rect);
            let shape = Rc::clone(shape);

            if is_new {
                let key = ShapeKey::of(&shape);
                for paint in &paints {
                    sink.add_geometry_to_paint(paint, key);
                }
                trace!(point = i, ?key, "created column shape");
            }

            shape.borrow_mut().set_rect(placement.rect);
            draw_bucket.insert(&shape);

            if let Some(callback) = &self.on_point_measured {
                callback(&*point);
            }
            placements.push(placement);
        }

        for paint in [self.highlight_fill, self.highlight_stroke].into_iter().flatten() {
            sink.add_paint_task(&paint);
        }

        Ok(placements)
    }

    fn get_bounds(
        &self,
        control_size: [f32; 2],
        _x_axis: &dyn Axis,
        y_axis: &dyn Axis,
        _context: &dyn SeriesContext,
    ) -> Result<CartesianBounds, TallyLayoutError> {
        let raw = self.bounds_strategy.data_bounds(&self.points);

        let y = if raw.y.is_degenerate() {
            let widened = raw.y.widened_if_degenerate();
            debug!(
                series = self.id.0,
                value = raw.y.min,
                min = widened.min,
                max = widened.max,
                "widening degenerate value range"
            );
            widened
        } else {
            raw.y
        };

        let tick = y_axis.get_tick(control_size, &y)?;
        Ok(CartesianBounds {
            x: pad(&raw.x, AxisKind::Categorical, &tick),
            y: pad(&y, AxisKind::Value, &tick),
        })
    }
}

fn new_column_shape<S>(
    geometry: &ColumnGeometry,
    x: f64,
    setter: Option<&dyn TransitionSetter<S>>,
    animation: &Animation,
) -> SharedShape<S>
where
    S: SizedGeometry + Default,
{
    let mut shape = S::default();
    shape.set_rect(geometry.initial_rect(x));
    match setter {
        Some(setter) => setter.set_transitions(&mut shape, animation),
        None => DefaultColumnTransitions.set_transitions(&mut shape, animation),
    }
    Rc::new(RefCell::new(shape))
}
