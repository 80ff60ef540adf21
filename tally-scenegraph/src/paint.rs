use indexmap::{IndexMap, IndexSet};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use strum::VariantNames;

use crate::bucket::ShapeKey;

#[derive(
    Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize, VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaintStyle {
    #[default]
    Fill,
    Stroke,
}

/// Paint resource a paint backend draws shapes with
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Paint {
    pub style: PaintStyle,
    pub color: [f32; 4],
    #[serde(default)]
    pub stroke_width: f32,
    #[serde(default)]
    pub zindex: i32,
}

impl Paint {
    pub fn fill(color: [f32; 4]) -> Self {
        Self {
            style: PaintStyle::Fill,
            color,
            stroke_width: 0.0,
            zindex: 0,
        }
    }

    pub fn stroke(color: [f32; 4], stroke_width: f32) -> Self {
        Self {
            style: PaintStyle::Stroke,
            color,
            stroke_width,
            zindex: 0,
        }
    }

    pub fn with_zindex(mut self, zindex: i32) -> Self {
        self.zindex = zindex;
        self
    }

    fn float_key(&self) -> [OrderedFloat<f32>; 5] {
        [
            OrderedFloat(self.color[0]),
            OrderedFloat(self.color[1]),
            OrderedFloat(self.color[2]),
            OrderedFloat(self.color[3]),
            OrderedFloat(self.stroke_width),
        ]
    }
}

impl PartialEq for Paint {
    fn eq(&self, other: &Self) -> bool {
        self.style == other.style
            && self.zindex == other.zindex
            && self.float_key() == other.float_key()
    }
}

impl Eq for Paint {}

impl Hash for Paint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.style.hash(state);
        self.zindex.hash(state);
        self.float_key().hash(state);
    }
}

/// Receiver of paint registrations from a layout pass.
///
/// Both operations must be idempotent: a layout pass registers the same paints
/// every time it runs.
pub trait PaintSink {
    fn add_paint_task(&mut self, paint: &Paint);

    fn add_geometry_to_paint(&mut self, paint: &Paint, shape: ShapeKey);
}

/// In-memory [`PaintSink`] keeping paints and their shapes in registration order
#[derive(Debug, Default, Clone)]
pub struct PaintTasks {
    tasks: IndexMap<Paint, IndexSet<ShapeKey>>,
}

impl PaintTasks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paints(&self) -> impl Iterator<Item = &Paint> + '_ {
        self.tasks.keys()
    }

    pub fn contains(&self, paint: &Paint) -> bool {
        self.tasks.contains_key(paint)
    }

    /// Shapes drawn with `paint`, `None` when the paint was never registered
    pub fn geometries(&self, paint: &Paint) -> Option<&IndexSet<ShapeKey>> {
        self.tasks.get(paint)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl PaintSink for PaintTasks {
    fn add_paint_task(&mut self, paint: &Paint) {
        self.tasks.entry(*paint).or_default();
    }

    fn add_geometry_to_paint(&mut self, paint: &Paint, shape: ShapeKey) {
        self.tasks.entry(*paint).or_default().insert(shape);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bucket::SharedShape;
    use std::{cell::RefCell, rc::Rc};

    #[test]
    fn test_registration_is_idempotent() {
        let fill = Paint::fill([0.2, 0.4, 0.6, 1.0]);
        let shape: SharedShape<()> = Rc::new(RefCell::new(()));

        let mut tasks = PaintTasks::new();
        tasks.add_paint_task(&fill);
        tasks.add_paint_task(&fill);
        tasks.add_geometry_to_paint(&fill, ShapeKey::of(&shape));
        tasks.add_geometry_to_paint(&fill, ShapeKey::of(&shape));

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks.geometries(&fill).map(|g| g.len()), Some(1));
    }

    #[test]
    fn test_fill_and_stroke_are_distinct() {
        let color = [0.0, 0.0, 0.0, 1.0];
        let mut tasks = PaintTasks::new();
        tasks.add_paint_task(&Paint::fill(color));
        tasks.add_paint_task(&Paint::stroke(color, 0.0));
        assert_eq!(tasks.len(), 2);
    }
}
