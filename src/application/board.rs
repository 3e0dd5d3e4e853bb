/// Board places the grid on screen: where its top-left corner sits and how
/// many pixels each cell spans.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Board {
    pub origin_x: f32,
    pub origin_y: f32,
    pub cell_size: f32,
}

impl Board {
    pub const fn new(origin_x: f32, origin_y: f32, cell_size: f32) -> Self {
        Self {
            origin_x,
            origin_y,
            cell_size,
        }
    }

    /// Convert a pointer position to a cell, see [`cell_at`]
    pub fn screen_to_cell(&self, screen_x: f32, screen_y: f32) -> Option<(usize, usize)> {
        cell_at(
            (screen_x, screen_y),
            (self.origin_x, self.origin_y),
            self.cell_size,
        )
    }

    /// Top-left screen position of a cell
    pub fn cell_to_screen(&self, x: usize, y: usize) -> (f32, f32) {
        (
            self.origin_x + x as f32 * self.cell_size,
            self.origin_y + y as f32 * self.cell_size,
        )
    }

    /// Whether a screen point lies inside a `cols` x `rows` board
    pub fn contains(&self, screen_x: f32, screen_y: f32, cols: usize, rows: usize) -> bool {
        self.screen_to_cell(screen_x, screen_y)
            .is_some_and(|(x, y)| x < cols && y < rows)
    }
}

/// Quantize a pointer position to grid coordinates.
///
/// Returns `None` above or left of the origin. Points past the far edges map
/// to coordinates the engine will reject as out of bounds.
pub fn cell_at(pointer: (f32, f32), origin: (f32, f32), cell_size: f32) -> Option<(usize, usize)> {
    let offset_x = pointer.0 - origin.0;
    let offset_y = pointer.1 - origin.1;
    if !(cell_size > 0.0) || offset_x < 0.0 || offset_y < 0.0 {
        return None;
    }
    let x = (offset_x / cell_size).floor();
    let y = (offset_y / cell_size).floor();
    (x.is_finite() && y.is_finite()).then(|| (x as usize, y as usize))
}
