pub mod animation;
pub mod bucket;
pub mod easing;
pub mod paint;
pub mod shapes;
