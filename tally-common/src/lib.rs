pub mod canvas;
pub mod types;
