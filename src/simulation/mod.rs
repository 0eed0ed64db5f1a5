mod engine;
mod grid;

pub use engine::{
    count_flashing, first_nova, increment_and_propagate, is_nova, reset, simulate,
    SimulationResult,
};
pub use grid::Grid;
