use super::Cell;

/// Grid holds one generation of a bounded cellular automaton.
/// Edges are hard: cells past the border never count as neighbors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Get grid dimensions as (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.contains(x, y).then(|| self.cells[self.get_index(x, y)])
    }

    /// Set cell at position. Out-of-range writes are ignored.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if self.contains(x, y) {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Count live neighbors among the up to 8 adjacent in-bounds cells
    fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        let x_range = x.saturating_sub(1)..=(x + 1).min(self.width - 1);
        let y_range = y.saturating_sub(1)..=(y + 1).min(self.height - 1);

        y_range
            .flat_map(|ny| x_range.clone().map(move |nx| (nx, ny)))
            .filter(|&(nx, ny)| (nx, ny) != (x, y))
            .filter(|&(nx, ny)| self.cells[self.get_index(nx, ny)].is_alive())
            .count() as u8
    }

    /// Pure functional evolution - returns the next generation.
    /// Every cell reads `self` only, so updates are simultaneous.
    pub fn evolve(&self) -> Self {
        let cells = self
            .iter_cells()
            .map(|(x, y, current)| current.evolve(self.count_live_neighbors(x, y)))
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Set every cell to dead
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Overwrite every cell, row-major, from `f(x, y)`
    pub fn fill_with(&mut self, mut f: impl FnMut(usize, usize) -> Cell) {
        let width = self.width;
        self.cells
            .iter_mut()
            .enumerate()
            .for_each(|(idx, cell)| *cell = f(idx % width, idx / width));
    }

    /// Iterate over all cells with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (idx % width, idx / width, cell))
    }

    /// Positions of live cells, row-major
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x, y))
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }
}
