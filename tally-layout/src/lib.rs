pub mod axis;
pub mod column;
pub mod config;
pub mod context;
pub mod error;
pub mod point;
pub mod series;
pub mod tooltip;
pub mod transitions;
pub mod view;

// Re-export the types hosts need for a layout pass
pub use crate::series::{CartesianSeries, ColumnSeries};
pub use tally_scenegraph::{
    bucket::DrawBucket,
    paint::{Paint, PaintSink, PaintTasks},
    shapes::rect::RectShape,
};
