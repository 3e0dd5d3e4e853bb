use thiserror::Error;

/// Errors reported by the engine and the layers that configure it.
///
/// None of these leave the engine in a damaged state; the grid is untouched
/// whenever an operation fails.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LifeError {
    #[error("grid dimensions must be positive, got {rows} rows x {cols} cols")]
    InvalidDimension { rows: usize, cols: usize },

    #[error("cell ({x}, {y}) is outside the {cols}x{rows} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        cols: usize,
        rows: usize,
    },

    #[error("{name} out of range: {value}")]
    InvalidArgument { name: &'static str, value: f64 },
}
