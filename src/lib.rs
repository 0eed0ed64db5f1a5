//! Simulation of a grid of energy-emitting cells.
//!
//! Each step increments every cell's energy; cells past the flash threshold
//! flash, boosting their Moore neighbors and cascading to a fixpoint, then
//! reset to zero. The engine tracks total flashes and detects novas — steps
//! in which the whole grid flashes at once.

pub mod app;
pub mod config;
pub mod error;
pub mod render;
pub mod simulation;
