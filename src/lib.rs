//! Raster planner built on the `raster` geometry primitives: brush strokes,
//! dirty region tracking and the ini backed settings of the demo binary.

pub mod config;
pub mod invalidation;
pub mod logging;
pub mod stroke;
