pub mod bounds;
pub mod error;
pub mod linear;
pub mod range;
pub mod ticks;
