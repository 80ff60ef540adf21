use tally_common::types::Rect;
use tally_scenegraph::bucket::SharedShape;

/// Pixel rectangle used for hit testing and tooltip placement
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct HoverArea {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl HoverArea {
    pub fn set_dimensions(&mut self, rect: Rect) {
        self.x = rect.x;
        self.y = rect.y;
        self.width = rect.width;
        self.height = rect.height;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn contains(&self, point: [f32; 2]) -> bool {
        self.rect().contains(point)
    }
}

impl From<Rect> for HoverArea {
    fn from(rect: Rect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }
}

/// Shape of a point together with its hover area
#[derive(Debug)]
pub struct PointShape<S> {
    pub shape: SharedShape<S>,
    pub hover_area: HoverArea,
}

/// Visual state of a point. The shape and hover area are created by the first
/// layout pass and then updated in place by every later one.
#[derive(Debug)]
pub enum PointVisual<'a, S> {
    Uncreated,
    Created(&'a PointShape<S>),
}

/// One plotted datum of a series
#[derive(Debug)]
pub struct ChartPoint<S> {
    pub x: f64,
    pub y: f64,
    created: Option<PointShape<S>>,
}

impl<S> ChartPoint<S> {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            created: None,
        }
    }

    pub fn visual(&self) -> PointVisual<'_, S> {
        match &self.created {
            Some(created) => PointVisual::Created(created),
            None => PointVisual::Uncreated,
        }
    }

    pub fn is_created(&self) -> bool {
        self.created.is_some()
    }

    pub fn shape(&self) -> Option<&SharedShape<S>> {
        self.created.as_ref().map(|created| &created.shape)
    }

    pub fn hover_area(&self) -> Option<&HoverArea> {
        self.created.as_ref().map(|created| &created.hover_area)
    }

    /// Shape and hover area of the point, creating them with `create` on first use
    pub fn created_or_insert_with(
        &mut self,
        create: impl FnOnce() -> SharedShape<S>,
    ) -> (&SharedShape<S>, &mut HoverArea) {
        let created = self.created.get_or_insert_with(|| PointShape {
            shape: create(),
            hover_area: HoverArea::default(),
        });
        (&created.shape, &mut created.hover_area)
    }
}

impl<S> From<(f64, f64)> for ChartPoint<S> {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    #[test]
    fn test_create_runs_once() {
        let mut point: ChartPoint<u32> = ChartPoint::new(1.0, 2.0);
        assert!(matches!(point.visual(), PointVisual::Uncreated));
        assert!(point.shape().is_none());
        assert!(point.hover_area().is_none());

        let mut calls = 0;
        let (shape, hover_area) = point.created_or_insert_with(|| {
            calls += 1;
            Rc::new(RefCell::new(5))
        });
        let first = Rc::clone(shape);
        hover_area.set_dimensions(Rect::new(1.0, 2.0, 3.0, 4.0));

        let (shape, _) = point.created_or_insert_with(|| {
            calls += 1;
            Rc::new(RefCell::new(6))
        });
        assert!(Rc::ptr_eq(&first, shape));
        assert!(matches!(
            point.visual(),
            PointVisual::Created(created) if Rc::ptr_eq(&created.shape, &first)
        ));
        assert_eq!(calls, 1);
        assert_eq!(
            point.hover_area().map(|h| h.rect()),
            Some(Rect::new(1.0, 2.0, 3.0, 4.0))
        );
    }
}
