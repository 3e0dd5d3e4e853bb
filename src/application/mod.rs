mod board;
mod settings;
mod simulation;

pub use board::{Board, cell_at};
pub use settings::{Args, MAX_INTERVAL_MS, MIN_INTERVAL_MS, Settings};
pub use simulation::Simulation;
