// Domain layer - the Life engine
pub mod domain;

// Application layer - ticking, board geometry, settings
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, LifeEngine, LifeError};
pub use application::{Board, Settings, Simulation};
pub use ui::Button;
