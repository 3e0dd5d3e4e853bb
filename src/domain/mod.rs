mod cell;
mod engine;
mod error;
mod grid;

pub use cell::Cell;
pub use engine::{DEFAULT_PROBABILITY, LifeEngine};
pub use error::LifeError;
pub use grid::Grid;
