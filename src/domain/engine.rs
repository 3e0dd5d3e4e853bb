//! The simulation core: one bounded generation plus the operations a
//! presentation layer drives it with.

use rand::Rng;
use tracing::{debug, trace};

use super::{Cell, Grid, LifeError};

/// Chance of a cell starting alive when randomizing without an explicit value.
pub const DEFAULT_PROBABILITY: f64 = 0.5;

/// LifeEngine owns a single generation and advances it under B3/S23.
///
/// Not internally synchronized. A multi-threaded host must serialize calls,
/// e.g. by keeping the engine on one owning thread.
#[derive(Clone, Debug)]
pub struct LifeEngine {
    grid: Grid,
}

impl LifeEngine {
    /// Create an engine with an all-dead grid of `rows` x `cols`.
    pub fn new(rows: usize, cols: usize) -> Result<Self, LifeError> {
        if rows == 0 || cols == 0 {
            return Err(LifeError::InvalidDimension { rows, cols });
        }
        debug!(rows, cols, "created life engine");
        Ok(Self {
            grid: Grid::new(cols, rows),
        })
    }

    pub const fn rows(&self) -> usize {
        self.grid.dimensions().1
    }

    pub const fn cols(&self) -> usize {
        self.grid.dimensions().0
    }

    /// Read-only view of the current generation
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), LifeError> {
        if self.grid.contains(x, y) {
            Ok(())
        } else {
            Err(LifeError::OutOfBounds {
                x,
                y,
                cols: self.cols(),
                rows: self.rows(),
            })
        }
    }

    pub fn is_alive(&self, x: usize, y: usize) -> Result<bool, LifeError> {
        self.check_bounds(x, y)?;
        Ok(self.grid.get(x, y).is_some_and(Cell::is_alive))
    }

    /// Flip the cell at (x, y). Nothing else in the grid changes.
    pub fn toggle_cell(&mut self, x: usize, y: usize) -> Result<(), LifeError> {
        self.check_bounds(x, y)?;
        let cell = self.grid.get(x, y).unwrap_or_default();
        self.grid.set(x, y, cell.toggle());
        Ok(())
    }

    /// Refill the grid, each cell alive with `probability`, using the thread RNG.
    pub fn randomize(&mut self, probability: f64) -> Result<(), LifeError> {
        self.randomize_with(&mut rand::rng(), probability)
    }

    /// Same as [`randomize`](Self::randomize) with a caller-supplied source,
    /// which makes the result reproducible when the source is seeded.
    pub fn randomize_with<R: Rng>(
        &mut self,
        rng: &mut R,
        probability: f64,
    ) -> Result<(), LifeError> {
        // NaN fails `contains` as well
        if !(0.0..=1.0).contains(&probability) {
            return Err(LifeError::InvalidArgument {
                name: "probability",
                value: probability,
            });
        }
        self.grid
            .fill_with(|_, _| Cell::from(rng.random_bool(probability)));
        debug!(probability, population = self.grid.population(), "randomized grid");
        Ok(())
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.grid.clear();
        debug!("cleared grid");
    }

    /// Advance one generation and return it for rendering.
    pub fn step(&mut self) -> &Grid {
        self.grid = self.grid.evolve();
        trace!(population = self.grid.population(), "stepped");
        &self.grid
    }

    /// Alive coordinates as (x, y), row-major
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.grid.live_cells()
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn engine_with(rows: usize, cols: usize, alive: &[(usize, usize)]) -> LifeEngine {
        let mut engine = LifeEngine::new(rows, cols).unwrap();
        for &(x, y) in alive {
            engine.toggle_cell(x, y).unwrap();
        }
        engine
    }

    fn live(engine: &LifeEngine) -> Vec<(usize, usize)> {
        engine.live_cells().collect()
    }

    #[test]
    fn test_new_engine_is_empty() {
        for (rows, cols) in [(1, 1), (30, 40), (7, 3)] {
            let engine = LifeEngine::new(rows, cols).unwrap();
            assert_eq!((engine.rows(), engine.cols()), (rows, cols));
            assert_eq!(engine.live_cells().count(), 0);
        }
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert_eq!(
            LifeEngine::new(0, 5).unwrap_err(),
            LifeError::InvalidDimension { rows: 0, cols: 5 }
        );
        assert!(matches!(
            LifeEngine::new(5, 0),
            Err(LifeError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_toggle_twice_restores_cell() {
        let mut engine = engine_with(4, 6, &[(1, 1)]);
        let before = engine.grid().clone();
        for (x, y) in [(0, 0), (1, 1), (5, 3)] {
            engine.toggle_cell(x, y).unwrap();
            assert_ne!(engine.grid(), &before);
            engine.toggle_cell(x, y).unwrap();
            assert_eq!(engine.grid(), &before);
        }
    }

    #[test]
    fn test_toggle_touches_one_cell() {
        let engine = engine_with(3, 3, &[(2, 1)]);
        assert_eq!(live(&engine), vec![(2, 1)]);
        assert!(engine.is_alive(2, 1).unwrap());
        assert!(!engine.is_alive(1, 2).unwrap());
    }

    #[test]
    fn test_toggle_out_of_bounds_leaves_grid() {
        let mut engine = engine_with(30, 40, &[(3, 3)]);
        let before = engine.grid().clone();

        // x == cols and y == rows are outside the half-open grid
        for (x, y) in [(40, 0), (0, 30), (40, 30), (usize::MAX, 2)] {
            assert_eq!(
                engine.toggle_cell(x, y),
                Err(LifeError::OutOfBounds { x, y, cols: 40, rows: 30 })
            );
        }
        assert_eq!(engine.grid(), &before);
        assert!(engine.is_alive(40, 0).is_err());
    }

    #[test]
    fn test_engine_usable_after_error() {
        let mut engine = engine_with(3, 3, &[]);
        assert!(engine.toggle_cell(3, 3).is_err());
        assert!(engine.randomize(-0.1).is_err());
        engine.toggle_cell(1, 1).unwrap();
        assert_eq!(live(&engine), vec![(1, 1)]);
    }

    #[test]
    fn test_clear_empties_grid() {
        let mut engine = engine_with(5, 5, &[(0, 0), (4, 4), (2, 3)]);
        engine.clear();
        assert_eq!(engine.live_cells().count(), 0);

        engine.randomize(1.0).unwrap();
        engine.clear();
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn test_randomize_extremes() {
        let mut engine = engine_with(6, 9, &[(1, 1)]);
        engine.randomize(0.0).unwrap();
        assert_eq!(engine.population(), 0);

        engine.randomize(1.0).unwrap();
        assert_eq!(engine.population(), 6 * 9);
    }

    #[test]
    fn test_randomize_rejects_bad_probability() {
        let mut engine = engine_with(4, 4, &[(0, 0), (3, 3)]);
        let before = engine.grid().clone();
        for p in [-0.01, 1.01, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                engine.randomize(p),
                Err(LifeError::InvalidArgument { name: "probability", .. })
            ));
        }
        assert_eq!(engine.grid(), &before);
    }

    #[test]
    fn test_seeded_randomize_is_reproducible() {
        let mut a = LifeEngine::new(30, 40).unwrap();
        let mut b = LifeEngine::new(30, 40).unwrap();
        a.randomize_with(&mut StdRng::seed_from_u64(7), DEFAULT_PROBABILITY).unwrap();
        b.randomize_with(&mut StdRng::seed_from_u64(7), DEFAULT_PROBABILITY).unwrap();
        assert_eq!(a.grid(), b.grid());

        // 1200 fair draws land nowhere near the extremes
        let population = a.population();
        assert!(population > 400 && population < 800, "population {population}");
    }

    #[test]
    fn test_step_on_empty_grid_stays_empty() {
        let mut engine = engine_with(10, 10, &[]);
        for _ in 0..3 {
            assert_eq!(engine.step().population(), 0);
        }
    }

    #[test]
    fn test_block_is_still_life() {
        let block = [(4, 4), (5, 4), (4, 5), (5, 5)];
        let mut engine = engine_with(10, 10, &block);
        engine.step();
        assert_eq!(live(&engine), block.to_vec());
    }

    #[test]
    fn test_blinker_oscillates() {
        let horizontal = vec![(3, 4), (4, 4), (5, 4)];
        let vertical = vec![(4, 3), (4, 4), (4, 5)];
        let mut engine = engine_with(9, 9, &horizontal);

        engine.step();
        assert_eq!(live(&engine), vertical);
        engine.step();
        assert_eq!(live(&engine), horizontal);
    }

    #[test]
    fn test_blinker_detects_sequential_sweep() {
        // A row-major in-place sweep would see (4, 3) already born when it
        // reaches (3, 4) and (5, 4), and would fail to kill them.
        let mut engine = engine_with(9, 9, &[(3, 4), (4, 4), (5, 4)]);
        let next = engine.step();
        assert_eq!(next.get(3, 4), Some(Cell::Dead));
        assert_eq!(next.get(5, 4), Some(Cell::Dead));
        assert_eq!(next.get(4, 3), Some(Cell::Alive));
        assert_eq!(next.get(4, 5), Some(Cell::Alive));
        assert_eq!(next.population(), 3);
    }

    #[test]
    fn test_lone_corner_cell_dies() {
        for (rows, cols) in [(1, 1), (2, 2), (30, 40)] {
            let mut engine = engine_with(rows, cols, &[(0, 0)]);
            engine.step();
            assert_eq!(engine.population(), 0);
        }
    }

    #[test]
    fn test_edge_blinker_does_not_wrap() {
        // On a torus (4, 1) would also be born from the left column.
        let mut engine = engine_with(5, 5, &[(0, 0), (0, 1), (0, 2)]);
        engine.step();
        assert_eq!(live(&engine), vec![(0, 1), (1, 1)]);
    }

    #[test]
    fn test_step_returns_current_grid() {
        let mut engine = engine_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let returned = engine.step().clone();
        assert_eq!(&returned, engine.grid());
    }
}
